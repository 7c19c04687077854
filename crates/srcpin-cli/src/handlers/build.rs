//! Build command handler.
//!
//! Checks out the requested dependencies at their pinned tags, one at a
//! time, in registry order.

use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use srcpin_core::ports::{BuildLifecycle, DependencyTask};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::resolve_descriptors;

/// Execute the build command.
///
/// Constructs a task per requested descriptor and awaits each build to
/// completion before starting the next; failures stop the run and propagate.
pub async fn execute(ctx: &CliContext, names: &[String]) -> Result<(), CliError> {
    let descriptors = resolve_descriptors(ctx, names)?;

    if descriptors.is_empty() {
        println!("No dependencies registered.");
        println!("Declare some in srcpin.toml to get started.");
        return Ok(());
    }

    for descriptor in descriptors {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap(),
        );
        pb.set_message(format!(
            "Checking out {} @ {}...",
            descriptor.name(),
            descriptor.revision_tag()
        ));

        let task = DependencyTask::new(
            descriptor.clone(),
            Arc::clone(ctx.checkout()),
            ctx.vendor_root().path.clone(),
        );
        let result = task.build().await;
        pb.finish_and_clear();
        result?;

        println!(
            "✓ {} at {} in {}",
            descriptor.name(),
            descriptor.revision_tag(),
            ctx.vendor_root()
                .path
                .join(descriptor.local_dir_name())
                .display()
        );
    }

    Ok(())
}
