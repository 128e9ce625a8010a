//! CLI context shared by the command handlers

use crate::config::ConfigManager;
use anyhow::Result;
use std::path::PathBuf;

/// CLI execution context containing the loaded configuration
#[derive(Debug, Clone)]
pub struct CliContext {
    pub verbose: bool,
    pub config_manager: ConfigManager,
}

impl CliContext {
    /// Create a new CLI context, loading configuration from `config_path` or the defaults
    pub fn new(config_path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let config_manager = ConfigManager::load(config_path)?;
        Ok(Self {
            verbose,
            config_manager,
        })
    }

    /// Initialize logging based on verbosity and configuration
    ///
    /// `RUST_LOG` takes precedence; logs go to stderr.
    pub fn init_logging(&self) -> Result<()> {
        let log_level = if self.verbose {
            "debug"
        } else {
            self.config_manager.config().logging.level.as_str()
        };

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

        // A subscriber may already be installed when running inside tests.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();

        if self.verbose {
            tracing::debug!("Verbose logging enabled");
            tracing::debug!("Config path: {:?}", self.config_manager.config_path());
        }

        Ok(())
    }
}
