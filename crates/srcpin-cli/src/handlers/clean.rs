//! Clean command handler.
//!
//! Dispatches the clean lifecycle hook. Checkout-only dependencies produce
//! no build outputs, so the hook reports success without touching anything.

use std::sync::Arc;

use srcpin_core::ports::{BuildLifecycle, DependencyTask};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::resolve_descriptors;

/// Execute the clean command.
pub async fn execute(ctx: &CliContext, names: &[String]) -> Result<(), CliError> {
    let descriptors = resolve_descriptors(ctx, names)?;

    if descriptors.is_empty() {
        println!("No dependencies registered.");
        return Ok(());
    }

    for descriptor in descriptors {
        let task = DependencyTask::new(
            descriptor.clone(),
            Arc::clone(ctx.checkout()),
            ctx.vendor_root().path.clone(),
        );
        task.clean().await?;

        println!(
            "✓ {}: nothing to clean (checkout-only dependency)",
            descriptor.name()
        );
    }

    Ok(())
}
