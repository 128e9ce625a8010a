use crate::errors::{AppError, AppResult};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for the deeperror command-line tool
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How extracted messages are printed
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Loads and persists the tool configuration
///
/// # Lookup order
///
/// 1. An explicit `--config` path, which must exist
/// 2. `<config dir>/deeperror/config.toml` when present
/// 3. Built-in defaults
///
/// # Example
///
/// ```rust,no_run
/// use deeperror::config::ConfigManager;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let manager = ConfigManager::load(None)?;
///     println!("log level: {}", manager.config().logging.level);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: Option<PathBuf>,
    config: Config,
}

impl ConfigManager {
    /// Load configuration following the lookup order above
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - An explicit path was given and does not exist
    /// - The configuration file cannot be read or parsed
    pub fn load(explicit_path: Option<PathBuf>) -> AppResult<Self> {
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(AppError::ConfigNotFound { path });
            }
            let config = Self::read(&path)?;
            return Ok(Self {
                config_path: Some(path),
                config,
            });
        }

        match Self::global_config_path() {
            Some(path) if path.exists() => {
                let config = Self::read(&path)?;
                Ok(Self {
                    config_path: Some(path),
                    config,
                })
            }
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self {
                    config_path: None,
                    config: Config::default(),
                })
            }
        }
    }

    /// Write the default configuration to `path`, or to the global location
    ///
    /// Returns the path written to. An existing file is only replaced when
    /// `force` is set.
    pub fn init(path: Option<PathBuf>, force: bool) -> AppResult<PathBuf> {
        let path = match path {
            Some(path) => path,
            None => Self::global_config_path()
                .ok_or_else(|| AppError::config("Failed to get base directories"))?,
        };

        if path.exists() && !force {
            return Err(AppError::ConfigExists { path });
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::io_with_source(parent, "create config directory", e))?;
        }

        let manager = Self {
            config_path: Some(path.clone()),
            config: Config::default(),
        };
        manager.save()?;
        Ok(path)
    }

    /// Global configuration path, `<config dir>/deeperror/config.toml`
    pub fn global_config_path() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.config_dir().join("deeperror").join("config.toml"))
    }

    fn read(path: &Path) -> AppResult<Config> {
        debug!("Reading configuration from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::io_with_source(path, "read config file", e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::config_with_source("Failed to parse config file", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the current configuration to the file it was loaded from
    pub fn save(&self) -> AppResult<()> {
        let path = self
            .config_path
            .as_ref()
            .ok_or_else(|| AppError::config("No configuration file to save to"))?;
        let content = self.to_toml()?;
        fs::write(path, content)
            .map_err(|e| AppError::io_with_source(path, "write config file", e))?;
        Ok(())
    }

    /// The effective configuration rendered as TOML
    pub fn to_toml(&self) -> AppResult<String> {
        toml::to_string_pretty(&self.config)
            .map_err(|e| AppError::config_with_source("Failed to serialize config", e))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// File the configuration came from, `None` for built-in defaults
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

impl Config {
    /// Reject values the logging layer cannot use
    pub fn validate(&self) -> AppResult<()> {
        const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];
        if !LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(AppError::InvalidConfigValue {
                key: "logging.level".to_string(),
                value: self.logging.level.clone(),
            });
        }
        Ok(())
    }
}
