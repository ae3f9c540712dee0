// src/config/app.rs
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::*;
use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::enums::{Framing, KeyType, LineEnding};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub keygen: KeygenSection,
    pub cipher: CipherSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeygenSection {
    pub bits: usize,
    pub key_type: KeyType,
    pub line_ending: LineEnding,
    pub private_key_file: String,
    pub public_key_file: String,
}

impl Default for KeygenSection {
    fn default() -> Self {
        default_keygen()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CipherSection {
    pub framing: Framing,
}

impl Default for CipherSection {
    fn default() -> Self {
        default_cipher()
    }
}

impl Config {
    /// Parse a TOML document; missing sections and keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once; falls back to defaults if the file is missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&config_path).exists() {
            debug!(path = %config_path, "config file not found, using built-in defaults");
            return Config::default();
        }

        match Config::from_file(&config_path) {
            Ok(conf) => conf,
            Err(err) => {
                warn!(path = %config_path, error = %err, "ignoring unreadable config file");
                Config::default()
            }
        }
    })
}
