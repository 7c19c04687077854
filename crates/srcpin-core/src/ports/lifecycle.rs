//! Build lifecycle trait and the generic dependency task.
//!
//! A task is a descriptor composed with an injected checkout capability.
//! The orchestrator invokes the lifecycle hooks; the task itself holds no
//! mutable state.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::CoreError;
use super::checkout::{Checkout, CheckoutOutcome, CheckoutRequest};
use crate::domain::DependencyDescriptor;

/// Lifecycle hooks a task orchestrator invokes on each dependency.
#[async_trait]
pub trait BuildLifecycle: Send + Sync {
    /// Ensure the dependency is materialized at its pinned revision.
    async fn build(&self) -> Result<(), CoreError>;

    /// Remove build outputs, where a dependency produces any.
    async fn clean(&self) -> Result<(), CoreError>;
}

/// A dependency descriptor wired to a checkout mechanism.
///
/// `build` delegates the descriptor's triple, verbatim, to the injected
/// [`Checkout`]. `clean` deliberately performs no action: a pinned source
/// checkout is header/source-only and produces no build outputs of its own.
pub struct DependencyTask {
    descriptor: DependencyDescriptor,
    checkout: Arc<dyn Checkout>,
    vendor_root: PathBuf,
}

impl DependencyTask {
    /// Compose a task from a descriptor, a checkout capability, and the
    /// vendor root the checkout lands under.
    pub fn new(
        descriptor: DependencyDescriptor,
        checkout: Arc<dyn Checkout>,
        vendor_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            descriptor,
            checkout,
            vendor_root: vendor_root.into(),
        }
    }

    /// The descriptor this task is bound to.
    pub fn descriptor(&self) -> &DependencyDescriptor {
        &self.descriptor
    }
}

#[async_trait]
impl BuildLifecycle for DependencyTask {
    async fn build(&self) -> Result<(), CoreError> {
        let request = CheckoutRequest::from_descriptor(&self.descriptor, &self.vendor_root);
        let outcome = self.checkout.checkout(request).await?;

        match outcome {
            CheckoutOutcome::Synced { path } => {
                info!(
                    dependency = %self.descriptor.name(),
                    tag = %self.descriptor.revision_tag(),
                    path = %path.display(),
                    "checkout complete"
                );
            }
            CheckoutOutcome::UpToDate { path } => {
                debug!(
                    dependency = %self.descriptor.name(),
                    path = %path.display(),
                    "already at pinned tag"
                );
            }
        }

        Ok(())
    }

    async fn clean(&self) -> Result<(), CoreError> {
        // The checkout is the only artifact; its removal belongs to the
        // checkout mechanism, not to this task.
        debug!(dependency = %self.descriptor.name(), "clean: nothing to do");
        Ok(())
    }
}
