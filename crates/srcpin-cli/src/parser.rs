//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the srcpin dependency tool.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "srcpin")]
#[command(about = "Pin and materialize vendored source dependencies at fixed tags")]
#[command(version)]
pub struct Cli {
    /// Override the vendor directory for this invocation
    #[arg(long = "vendor-dir", global = true)]
    pub vendor_dir: Option<String>,

    /// Path to the descriptor manifest (defaults to searching upward for srcpin.toml)
    #[arg(long = "manifest", global = true)]
    pub manifest: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
