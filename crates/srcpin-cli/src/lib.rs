#![deny(unused_crate_dependencies)]

//! CLI adapter for srcpin.
//!
//! The binary is the composition root: `bootstrap` wires the descriptor
//! registry, the manifest, and the git checkout adapter together, and
//! command handlers delegate to the composed context.

// Dependencies used only by the binary entry point (main.rs)
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
