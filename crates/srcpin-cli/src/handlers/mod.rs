//! Command handlers.
//!
//! Each submodule implements one CLI command against the composed
//! `CliContext`.

pub mod build;
pub mod check_deps;
pub mod clean;
pub mod list;
pub mod paths;

use srcpin_core::domain::DependencyDescriptor;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Resolve requested names to descriptors; empty means every registered one.
///
/// Unknown names are a usage error naming the known descriptors.
pub(crate) fn resolve_descriptors(
    ctx: &CliContext,
    names: &[String],
) -> Result<Vec<DependencyDescriptor>, CliError> {
    if names.is_empty() {
        return Ok(ctx.registry().iter().cloned().collect());
    }

    names
        .iter()
        .map(|name| {
            ctx.registry().get(name).cloned().ok_or_else(|| {
                CliError::Arguments(format!(
                    "Unknown dependency '{}'. Known: {}",
                    name,
                    ctx.registry().names().join(", ")
                ))
            })
        })
        .collect()
}
