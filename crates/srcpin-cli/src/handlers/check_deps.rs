//! Check system dependencies handler.
//!
//! srcpin's only system dependency is the git binary; this verifies it is
//! present and reports its version.

use srcpin_core::ports::SyncPolicy;
use srcpin_git::{GitCheckout, git_version};

use crate::error::CliError;

/// Execute the check-deps command.
///
/// # Errors
///
/// Returns a configuration error when git is not found on PATH.
pub async fn execute() -> Result<(), CliError> {
    println!("Checking system dependencies...\n");

    match GitCheckout::locate(SyncPolicy::default()) {
        Ok(git) => {
            let version = git_version(git.git_binary())
                .await
                .unwrap_or_else(|| "unknown version".to_string());
            println!("✓ git: {} ({})", git.git_binary().display(), version);
            Ok(())
        }
        Err(_) => {
            println!("✗ git: not found on PATH");
            println!();
            println!("Install git and re-run 'srcpin check-deps'.");
            Err(CliError::Config("git binary not found on PATH".to_string()))
        }
    }
}
