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
// Password generator

use std::collections::HashSet;
use log::debug;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::PassGenError;

pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>/?";
pub const SIMILAR_CHARS: &str = "lI1oO0";

pub const DEFAULT_LENGTH: i64 = 12;
pub const DEFAULT_MIN_LENGTH: i64 = 8;
pub const DEFAULT_MAX_LENGTH: i64 = 128;

/// 字符类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letters,
    Digits,
    Symbols,
    SimilarChars,
}

impl CharClass {
    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Letters => LETTERS,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
            CharClass::SimilarChars => SIMILAR_CHARS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }
}

/// 密码生成选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: i64,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
    pub min_length: i64,
    pub max_length: i64,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_digits: true,
            include_symbols: false,
            exclude_similar: false,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl PasswordOptions {
    /// Checks the length against zero first, then against the bounds.
    pub fn validate(&self) -> Result<(), PassGenError> {
        if self.length <= 0 {
            return Err(PassGenError::InvalidLength(self.length));
        }
        if self.length < self.min_length || self.length > self.max_length {
            return Err(PassGenError::OutOfRange {
                length: self.length,
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }

    pub fn alphabet(&self) -> Vec<char> {
        effective_alphabet(self.include_digits, self.include_symbols, self.exclude_similar)
    }
}

/// Letters, then digits, then symbols, with duplicates and (optionally)
/// similar-looking characters removed. Order of first occurrence is kept.
pub fn effective_alphabet(include_digits: bool, include_symbols: bool, exclude_similar: bool) -> Vec<char> {
    let mut classes = vec![CharClass::Letters];
    if include_digits {
        classes.push(CharClass::Digits);
    }
    if include_symbols {
        classes.push(CharClass::Symbols);
    }

    let mut seen = HashSet::new();
    classes
        .into_iter()
        .flat_map(|class| class.chars().chars())
        .filter(|&c| !(exclude_similar && CharClass::SimilarChars.contains(c)))
        .filter(|&c| seen.insert(c))
        .collect()
}

/// 使用系统随机源生成密码
pub fn generate_password(options: &PasswordOptions) -> Result<String, PassGenError> {
    generate_password_with(options, &mut OsRng)
}

/// Same as [`generate_password`] but draws bytes from `rng`.
///
/// Each byte `b` selects `alphabet[b % alphabet.len()]`. When the alphabet
/// size does not divide 256 the lower indices are slightly favoured.
pub fn generate_password_with<R>(options: &PasswordOptions, rng: &mut R) -> Result<String, PassGenError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    options.validate()?;

    let alphabet = options.alphabet();
    if alphabet.is_empty() {
        return Err(PassGenError::EmptyAlphabet);
    }
    debug!("effective alphabet has {} characters", alphabet.len());

    let length = usize::try_from(options.length)
        .map_err(|_| PassGenError::TooLong(options.length))?;
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(length)
        .map_err(|_| PassGenError::TooLong(options.length))?;
    bytes.resize(length, 0u8);
    rng.try_fill_bytes(&mut bytes)?;

    // every alphabet character is ASCII, one byte each
    let mut password = String::new();
    password
        .try_reserve_exact(length)
        .map_err(|_| PassGenError::TooLong(options.length))?;
    password.extend(bytes.iter().map(|&b| alphabet[b as usize % alphabet.len()]));
    Ok(password)
}

pub fn generate(
    length: i64,
    include_symbols: bool,
    include_digits: bool,
    exclude_similar: bool,
    min_length: i64,
    max_length: i64,
) -> Result<String, PassGenError> {
    let options = PasswordOptions {
        length,
        include_digits,
        include_symbols,
        exclude_similar,
        min_length,
        max_length,
    };
    generate_password(&options)
}
