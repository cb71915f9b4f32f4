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
// Error types

use thiserror::Error;

/// Failures of a single password generation.
#[derive(Debug, Error)]
pub enum PassGenError {
    #[error("password length must be greater than zero (got {0})")]
    InvalidLength(i64),

    #[error("password length must be between {min} and {max} (got {length})")]
    OutOfRange { length: i64, min: i64, max: i64 },

    #[error("character set for password is empty")]
    EmptyAlphabet,

    #[error("password length {0} is too large to allocate")]
    TooLong(i64),

    #[error("random source failure: {0}")]
    RandomSource(#[from] rand::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config directory error: {0}")]
    ConfigDir(String),
}
