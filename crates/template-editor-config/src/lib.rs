use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Italic delimiters the serializer understands.
pub const ITALIC_DELIMITERS: [&str; 2] = ["_", "*"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value {value:?} for `{setting}` in config file at {config_path}")]
    InvalidSetting {
        config_path: PathBuf,
        setting: &'static str,
        value: String,
    },
}

/// Editor settings. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `"_"` writes `_italic_` and `**bold**`; `"*"` writes `*italic*` and `__bold__`.
    pub italic_delimiter: String,
    pub autoformat: bool,
    pub unescape_notifications: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            italic_delimiter: "_".to_string(),
            autoformat: true,
            unescape_notifications: false,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.validate(config_path)?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        self.validate(config_path)?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/template-editor");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn validate(&self, config_path: &Path) -> Result<(), ConfigError> {
        if !ITALIC_DELIMITERS.contains(&self.italic_delimiter.as_str()) {
            return Err(ConfigError::InvalidSetting {
                config_path: config_path.to_path_buf(),
                setting: "italic_delimiter",
                value: self.italic_delimiter.clone(),
            });
        }
        Ok(())
    }
}
