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
// Random password generator library.

pub mod commands;
pub mod configtool;
pub mod error;
pub mod passgen;

pub use error::{ConfigError, PassGenError};
pub use passgen::{generate, generate_password, PasswordOptions};
