use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Missing required API key: {0}")]
    MissingApiKey(String),
}

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";
const CONFIG_DIR: &str = ".scriptforge";
const CONFIG_FILE: &str = "config.yaml";

/// User configuration for scriptforge.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ForgeConfig {
    /// API key for the completion service. Falls back to the
    /// GEMINI_API_KEY environment variable when unset.
    pub api_key: Option<String>,

    /// Model identifier to request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Directory generated scripts are saved to. Defaults to the current
    /// working directory.
    pub save_location: Option<PathBuf>,

    /// Write accepted results to disk without asking.
    #[serde(default)]
    pub auto_save: bool,

    /// Consume streamed responses instead of a single body.
    #[serde(default)]
    pub streaming: bool,

    /// Attempt budget per generation request.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Pause between rejected attempts, in milliseconds.
    #[serde(default = "default_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_attempts() -> u32 {
    crate::generator::DEFAULT_MAX_ATTEMPTS
}

fn default_backoff_ms() -> u64 {
    crate::generator::DEFAULT_BACKOFF.as_millis() as u64
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            save_location: None,
            auto_save: false,
            streaming: false,
            max_attempts: default_max_attempts(),
            retry_backoff_ms: default_backoff_ms(),
        }
    }
}

impl ForgeConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: ForgeConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from the given path, or from `~/.scriptforge/config.yaml`, or
    /// fall back to defaults when no file exists.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!("loading config from {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// The API key, checking the environment when the config has none.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        if let Some(key) = &self.api_key {
            if !key.is_empty() {
                debug!("using API key from config");
                return Ok(key.clone());
            }
        }
        std::env::var(API_KEY_ENV_VAR).map_err(|_| {
            ConfigError::MissingApiKey(format!(
                "set api_key in the config file or the {} environment variable",
                API_KEY_ENV_VAR
            ))
        })
    }

    /// The configured API key with most characters hidden, for display.
    pub fn masked_api_key(&self) -> String {
        match self.api_key.as_deref().filter(|k| !k.is_empty()) {
            Some(key) => {
                // Keys come from user config; count and slice characters,
                // not bytes.
                let chars: Vec<char> = key.chars().collect();
                if chars.len() > 12 {
                    let head: String = chars[..8].iter().collect();
                    let tail: String = chars[chars.len() - 4..].iter().collect();
                    format!("{}...{}", head, tail)
                } else {
                    "***".to_string()
                }
            }
            None => "Not set".to_string(),
        }
    }

    /// The directory generated files land in.
    pub fn save_location(&self) -> PathBuf {
        self.save_location
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = ForgeConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_attempts, 3);
        assert!(!config.auto_save);
        assert_eq!(config.masked_api_key(), "Not set");
    }

    #[test]
    fn parses_partial_yaml() {
        let config: ForgeConfig = serde_yaml::from_str("model: gemini-2.0-pro\nauto_save: true\n")
            .expect("partial config should parse");
        assert_eq!(config.model, "gemini-2.0-pro");
        assert!(config.auto_save);
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn masks_long_keys() {
        let config = ForgeConfig {
            api_key: Some("abcdefgh0123456789".to_string()),
            ..ForgeConfig::default()
        };
        assert_eq!(config.masked_api_key(), "abcdefgh...6789");
    }

    #[test]
    fn masks_multibyte_keys_without_panicking() {
        let config = ForgeConfig {
            api_key: Some("ü".repeat(16)),
            ..ForgeConfig::default()
        };
        assert_eq!(config.masked_api_key(), "üüüüüüüü...üüüü");

        let short = ForgeConfig {
            api_key: Some("ümlaut-key".to_string()),
            ..ForgeConfig::default()
        };
        assert_eq!(short.masked_api_key(), "***");
    }
}
