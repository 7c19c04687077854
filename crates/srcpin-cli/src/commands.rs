//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

/// Available commands for the srcpin dependency tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Check out registered dependencies at their pinned tags
    Build {
        /// Names of dependencies to build (all registered when empty)
        names: Vec<String>,

        /// Re-sync even when a directory is already at the pinned tag
        #[arg(long)]
        always_sync: bool,
    },

    /// Run the clean hook for dependencies (checkout-only deps have no outputs)
    Clean {
        /// Names of dependencies to clean (all registered when empty)
        names: Vec<String>,
    },

    /// List registered dependency descriptors and their sync status
    List,

    /// Check system dependencies required by srcpin
    CheckDeps,

    /// Show the resolved manifest and vendor directory paths
    Paths,
}
