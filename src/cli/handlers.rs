//! Command handlers for all CLI operations

use super::{CliContext, Commands};
use crate::config::{ConfigManager, OutputFormat};
use crate::deepest::deepest_message;
use crate::errors::{AppError, AppResult};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{debug, info};

/// JSON shape printed by `deepest --json` and `demo` in JSON mode
#[derive(Debug, Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    deepest: &'a str,
}

/// Coordinates all command handling operations
pub struct CommandHandler {
    context: CliContext,
}

impl CommandHandler {
    pub fn new(context: CliContext) -> Self {
        Self { context }
    }

    /// Route commands to their appropriate handlers
    pub fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Deepest { input, json } => self.handle_deepest(input, json),
            Commands::Demo => self.handle_demo(),
            Commands::Init { path, force } => self.handle_init(path, force),
            Commands::Config => self.handle_config(),
        }
    }

    fn output_format(&self, json: bool) -> OutputFormat {
        if json {
            OutputFormat::Json
        } else {
            self.context.config_manager.config().output.format
        }
    }

    /// Print the deepest message of the text read from a file or stdin
    fn handle_deepest(&self, input: Option<PathBuf>, json: bool) -> Result<()> {
        let text = read_input(input)?;
        let deepest = deepest_message(trim_line_ending(&text));
        debug!("Deepest message: {:?}", deepest);

        let report = Report {
            error: None,
            deepest: &deepest,
        };
        println!("{}", render(&report, self.output_format(json))?);
        Ok(())
    }

    /// Run the leaf/mid/top chain and print the accumulated trace
    fn handle_demo(&self) -> Result<()> {
        let err = match demo::top() {
            Ok(()) => return Ok(()),
            Err(err) => err,
        };
        let text = err.to_string();
        let deepest = err.deepest_message();

        match self.output_format(false) {
            OutputFormat::Text => {
                println!("{text}");
                println!("deepest: {deepest}");
            }
            format => {
                let report = Report {
                    error: Some(&text),
                    deepest: &deepest,
                };
                println!("{}", render(&report, format)?);
            }
        }
        Ok(())
    }

    fn handle_init(&self, path: Option<PathBuf>, force: bool) -> Result<()> {
        let written = ConfigManager::init(path, force).context("Failed to initialize configuration")?;
        info!("Wrote default configuration to {}", written.display());
        println!("Configuration initialized successfully at: {}", written.display());
        Ok(())
    }

    fn handle_config(&self) -> Result<()> {
        let manager = &self.context.config_manager;
        match manager.config_path() {
            Some(path) => println!("# {}", path.display()),
            None => println!("# built-in defaults"),
        }
        print!("{}", manager.to_toml()?);
        Ok(())
    }
}

fn read_input(input: Option<PathBuf>) -> AppResult<String> {
    match input {
        Some(path) => {
            fs::read_to_string(&path).map_err(|e| AppError::io_with_source(&path, "read error text", e))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| AppError::Stdin { source })?;
            Ok(buffer)
        }
    }
}

/// Drop the single line ending that files and pipes usually add
fn trim_line_ending(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}

fn render(report: &Report<'_>, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(report.deepest.to_string()),
        OutputFormat::Json => serde_json::to_string(report)
            .map_err(|e| AppError::json_with_source("Failed to serialize report", e)),
    }
}

/// A three-level call chain that fails at the bottom
mod demo {
    use crate::annotate::AnnotatedError;
    use crate::errors::ErrorContextExt;
    use std::io;

    fn leaf() -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "origin error aab"))
    }

    fn mid() -> Result<(), AnnotatedError> {
        leaf().with_context("call aaa failed")
    }

    pub(super) fn top() -> Result<(), AnnotatedError> {
        mid().with_context("call a failed")
    }
}
