//! Paths command handler.
//!
//! Shows where srcpin found its manifest and where checkouts will land.

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the paths command.
pub fn execute(ctx: &CliContext) -> Result<(), CliError> {
    println!("Resolved srcpin paths:\n");

    match ctx.manifest_path() {
        Some(path) => println!("  Manifest:    {}", path.display()),
        None => println!("  Manifest:    (none found, using built-in descriptors)"),
    }

    println!(
        "  Vendor root: {} (from {})",
        ctx.vendor_root().path.display(),
        ctx.vendor_root().source
    );

    Ok(())
}
