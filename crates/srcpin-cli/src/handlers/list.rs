//! List command handler.
//!
//! Displays all registered dependency descriptors in a formatted table,
//! with the sync status read from each checkout's state record.

use srcpin_core::paths::SyncState;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the list command.
pub fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let registry = ctx.registry();

    if registry.is_empty() {
        println!("No dependencies registered.");
        println!("Declare some in srcpin.toml to get started.");
        return Ok(());
    }

    println!("Found {} registered dependency descriptor(s):\n", registry.len());

    println!(
        "{:<12} {:<12} {:<16} {:<24} Source",
        "NAME", "TAG", "DIRECTORY", "STATUS"
    );
    println!("{}", "=".repeat(100));

    for descriptor in registry.iter() {
        let dir = ctx.vendor_root().path.join(descriptor.local_dir_name());
        let status = sync_status(&dir, descriptor.revision_tag());

        println!(
            "{:<12} {:<12} {:<16} {:<24} {}",
            descriptor.name(),
            descriptor.revision_tag(),
            descriptor.local_dir_name(),
            status,
            descriptor.source_uri()
        );
    }

    Ok(())
}

fn sync_status(dir: &std::path::Path, pinned_tag: &str) -> String {
    match SyncState::load(dir) {
        Ok(state) if state.matches_tag(pinned_tag) => {
            format!("synced {}", state.synced_at.format("%Y-%m-%d %H:%M"))
        }
        Ok(state) => format!("at {}", state.tag),
        Err(_) if dir.exists() => "present (unpinned)".to_string(),
        Err(_) => "not synced".to_string(),
    }
}
