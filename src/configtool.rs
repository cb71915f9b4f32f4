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
// Config Tools

use std::{fs, path::{Path, PathBuf}};
use dirs::config_dir;
use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// 配置文件内容，所有字段均可省略
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub length: Option<i64>,
    pub symbols: Option<bool>,
    pub numbers: Option<bool>,
    pub exclude_similar: Option<bool>,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub verbose: Option<bool>,
}

impl ConfigFile {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let config_data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&config_data)?)
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("pwgen")),
        None => Err(ConfigError::ConfigDir("Could not determine configuration directory".to_string())),
    }
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// The file to read, if any. An explicit path is returned as-is so a missing
/// file surfaces as an error; the default location only counts when present.
pub fn locate_config(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().ok().filter(|path| path.is_file()),
    }
}

/// Reads `path`, or returns an empty config when there is none.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    match path {
        Some(path) => ConfigFile::from_path(path),
        None => Ok(ConfigFile::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_valid() {
        let config: ConfigFile = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_no_path_gives_empty_config() {
        assert_eq!(load_config(None).unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_explicit_path_is_kept_even_if_missing() {
        let path = Path::new("/nonexistent/pwgen.json");
        assert_eq!(locate_config(Some(path)), Some(path.to_path_buf()));
    }
}
