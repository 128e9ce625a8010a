//! Command definitions and structures for the CLI
//!
//! This module contains the clap-based command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "deeperror")]
#[command(about = "Inspect annotated error traces and recover the deepest message")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to the global configuration)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Strip location markers from an annotated error text
    ///
    /// Plain text only yields the message line with its markers removed;
    /// the innermost message alone is only recoverable from an in-process
    /// annotated error (see `demo`).
    Deepest {
        /// Read the error text from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Run a three-level annotation chain and show the result
    Demo,

    /// Write a default configuration file
    Init {
        /// Where to write it (defaults to the global location)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration
    Config,
}
