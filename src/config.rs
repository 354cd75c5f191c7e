use crate::domain::Language;
use crate::error::{Result, VersError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const LOCAL_CONFIG: &str = "./vers.toml";
const CONFIG_DIR_NAME: &str = "git-vers";
const CONFIG_FILE_NAME: &str = "vers.toml";

/// Represents the complete configuration for git-vers.
///
/// Only holds defaults for CLI flags; the command line always wins.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Values used when the matching CLI flag is not given
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Defaults {
    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub omit_commit_hash: bool,

    #[serde(default)]
    pub pre_release: bool,

    #[serde(default)]
    pub tag_pattern: Option<String>,

    /// Release version "X.Y.Z" overriding the computed one
    #[serde(default)]
    pub version_prefix: Option<String>,

    #[serde(default)]
    pub json: bool,
}

/// Location of the per-user config file, if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `vers.toml` in current directory
/// 3. `git-vers/vers.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(LOCAL_CONFIG).exists() {
        PathBuf::from(LOCAL_CONFIG)
    } else if let Some(path) = user_config_path().filter(|p| p.exists()) {
        path
    } else {
        debug!("no config file found, using defaults");
        return Ok(Config::default());
    };

    debug!(path = %path.display(), "loading config");
    let config_str = fs::read_to_string(&path)?;
    parse_config(&config_str)
        .map_err(|e| VersError::config(format!("{}: {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| VersError::config(e.to_string()))
}
