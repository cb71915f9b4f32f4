use anyhow::{Context, Result};
use clap::Args;
use log::info;

use crate::configtool::ConfigFile;
use crate::passgen::{self, PasswordOptions};

#[derive(Debug, Default, Args)]
pub struct GenArgs {
    /// Length of the password [default: 12]
    #[arg(short, long)]
    pub length: Option<i64>,

    /// Include symbols in the password [default: false]
    #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub symbols: Option<bool>,

    /// Include numbers in the password [default: true]
    #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub numbers: Option<bool>,

    /// Exclude similar characters (like 1, l, I, 0, O) [default: false]
    #[arg(short = 'x', long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub exclude_similar: Option<bool>,

    /// Minimum length of the password [default: 8]
    #[arg(long)]
    pub min_length: Option<i64>,

    /// Maximum length of the password [default: 128]
    #[arg(long)]
    pub max_length: Option<i64>,
}

impl GenArgs {
    /// Flags given on the command line win over the config file, which wins
    /// over the built-in defaults.
    pub fn resolve(&self, config: &ConfigFile) -> PasswordOptions {
        let defaults = PasswordOptions::default();
        PasswordOptions {
            length: self.length.or(config.length).unwrap_or(defaults.length),
            include_digits: self.numbers.or(config.numbers).unwrap_or(defaults.include_digits),
            include_symbols: self.symbols.or(config.symbols).unwrap_or(defaults.include_symbols),
            exclude_similar: self
                .exclude_similar
                .or(config.exclude_similar)
                .unwrap_or(defaults.exclude_similar),
            min_length: self.min_length.or(config.min_length).unwrap_or(defaults.min_length),
            max_length: self.max_length.or(config.max_length).unwrap_or(defaults.max_length),
        }
    }
}

pub fn generate_random(options: &PasswordOptions) -> Result<String> {
    info!("Generating password with the following options:");
    info!("Length: {}", options.length);
    info!("Include Symbols: {}", options.include_symbols);
    info!("Include Numbers: {}", options.include_digits);
    info!("Exclude Similar Characters: {}", options.exclude_similar);
    info!("Min Length: {}, Max Length: {}", options.min_length, options.max_length);

    let password = passgen::generate_password(options)
        .context("error generating password")?;
    println!("Generated password: {}", password);
    Ok(password)
}
