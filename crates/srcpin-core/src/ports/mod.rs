//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No process or filesystem implementation details in signatures
//! - The checkout mechanism is expressed as intent (`checkout this triple`),
//!   not as git plumbing
//! - Lifecycle hooks are injected into tasks, never inherited

pub mod checkout;
pub mod lifecycle;

use thiserror::Error;

pub use checkout::{Checkout, CheckoutError, CheckoutOutcome, CheckoutRequest, SyncPolicy};
pub use lifecycle::{BuildLifecycle, DependencyTask};

#[cfg(test)]
pub use checkout::MockCheckout;

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain. Adapters
/// map this to their own error types (CLI exit codes, user-facing messages).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout mechanism failure, surfaced verbatim.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// Descriptor manifest failure.
    #[error(transparent)]
    Manifest(#[from] crate::manifest::ManifestError),

    /// Path resolution or directory failure.
    #[error(transparent)]
    Path(#[from] crate::paths::PathError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}
