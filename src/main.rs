//  ____           ____
// |  _ \__      _/ ___| ___ _ __
// | |_) \ \ /\ / / |  _ / _ \ '_ \
// |  __/ \ V  V /| |_| |  __/ | | |
// |_|     \_/\_/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Generate a random password from the command line.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::{info, LevelFilter};

use pwgen::commands::password_gen::{self, GenArgs};
use pwgen::configtool;

#[derive(Debug, Parser)]
#[command(name = "pwgen", version)]
#[command(about = "Generate a random password with advanced features")]
#[command(long_about = "This tool generates a random password with advanced options including:
- Length specification
- Inclusion of symbols, numbers, and exclusion of similar characters
- Minimum and maximum length constraints
- Verbose output and configuration file support")]
#[command(allow_negative_numbers = true)]
struct Cli {
    #[command(flatten)]
    options: GenArgs,

    /// Path to a configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> Result<()> {
    let config_path = configtool::locate_config(cli.config.as_deref());
    let config = configtool::load_config(config_path.as_deref())
        .context("failed to load configuration")?;

    let verbose = cli.verbose || config.verbose.unwrap_or(false);
    let mut builder = Builder::new();
    builder.filter_level(if verbose { LevelFilter::Info } else { LevelFilter::Warn });
    builder.parse_default_env();
    builder.init();

    match &config_path {
        Some(path) => info!("Config file: {}", path.display()),
        None => info!("Config file: none"),
    }

    let options = cli.options.resolve(&config);
    password_gen::generate_random(&options)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["pwgen", "-l", "20", "-s", "--numbers=false", "-x", "-v"]);
        assert_eq!(cli.options.length, Some(20));
        assert_eq!(cli.options.symbols, Some(true));
        assert_eq!(cli.options.numbers, Some(false));
        assert_eq!(cli.options.exclude_similar, Some(true));
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_unset_flags_are_none() {
        let cli = Cli::parse_from(["pwgen", "--min-length", "4", "--max-length", "16"]);
        assert_eq!(cli.options.length, None);
        assert_eq!(cli.options.symbols, None);
        assert_eq!(cli.options.min_length, Some(4));
        assert_eq!(cli.options.max_length, Some(16));
    }

    #[test]
    fn test_cli_negative_length_reaches_core() {
        let cli = Cli::parse_from(["pwgen", "--length", "-3"]);
        assert_eq!(cli.options.length, Some(-3));
    }
}
