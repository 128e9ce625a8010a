//! Error types for the deeperror command-line tool
//!
//! The annotation and extraction operations never fail. This module covers
//! the fallible edges around them: configuration loading and reading input.

use thiserror::Error;
use std::path::PathBuf;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        path: PathBuf,
    },

    #[error("Configuration file already exists: {path}")]
    ConfigExists {
        path: PathBuf,
    },

    #[error("Invalid configuration value for '{key}': {value}")]
    InvalidConfigValue {
        key: String,
        value: String,
    },

    #[error("File I/O error for '{path}': {operation}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to read standard input")]
    Stdin {
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {context}")]
    JsonSerialization {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new Config error with context
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new Config error with source
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new I/O error with source
    pub fn io_with_source(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Io {
            path: path.into(),
            operation: operation.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new JSON serialization error with source
    pub fn json_with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::JsonSerialization {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether the error came from configuration handling
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config { .. }
                | Self::ConfigNotFound { .. }
                | Self::ConfigExists { .. }
                | Self::InvalidConfigValue { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_config_error_display() {
        let err = AppError::config("bad level");
        assert_eq!(err.to_string(), "Configuration error: bad level");
        assert!(err.is_config_error());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AppError::io_with_source("/tmp/x", "read input", source);
        assert_eq!(err.to_string(), "File I/O error for '/tmp/x': read input");
        assert_eq!(err.source().unwrap().to_string(), "gone");
        assert!(!err.is_config_error());
    }
}
