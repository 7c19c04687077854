//! Checkout mechanism trait definition.
//!
//! This port defines the interface the core expects from whatever
//! materializes a remote source tree at a pinned tag. Implementations handle
//! all version-control details internally.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::DependencyDescriptor;

/// How a checkout mechanism treats a directory that is already pinned at the
/// requested tag.
///
/// Whether `checkout` re-fetches in that situation is deliberately a policy
/// of the mechanism, not of the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPolicy {
    /// Report the directory up to date without touching the network.
    #[default]
    SkipIfSynced,
    /// Always fetch and re-checkout the tag.
    AlwaysSync,
}

/// One checkout request: the descriptor triple plus the resolved vendor root
/// the local directory lives under.
///
/// The triple is carried verbatim from the descriptor - the mechanism
/// receives exactly what the descriptor holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    /// Version-control location to fetch from.
    pub source_uri: String,
    /// Directory name for the checkout under `vendor_root`.
    pub local_dir_name: String,
    /// Tag to pin the checkout to.
    pub revision_tag: String,
    /// Directory the checkout is materialized under.
    pub vendor_root: PathBuf,
}

impl CheckoutRequest {
    /// Build a request from a descriptor, copying its triple unchanged.
    pub fn from_descriptor(
        descriptor: &DependencyDescriptor,
        vendor_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_uri: descriptor.source_uri().to_string(),
            local_dir_name: descriptor.local_dir_name().to_string(),
            revision_tag: descriptor.revision_tag().to_string(),
            vendor_root: vendor_root.into(),
        }
    }
}

/// What a successful checkout did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The working copy was created or moved to the requested tag.
    Synced {
        /// Path of the materialized checkout.
        path: PathBuf,
    },
    /// The working copy was already at the requested tag; nothing was done.
    UpToDate {
        /// Path of the existing checkout.
        path: PathBuf,
    },
}

impl CheckoutOutcome {
    /// Path of the checkout regardless of whether work was performed.
    pub fn path(&self) -> &Path {
        match self {
            Self::Synced { path } | Self::UpToDate { path } => path,
        }
    }
}

/// Errors originating in the checkout mechanism.
///
/// These are surfaced verbatim to callers; no recovery or retry happens at
/// this layer.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Source location unreachable or malformed.
    #[error("Failed to fetch {uri}: {reason}")]
    Fetch { uri: String, reason: String },

    /// The revision tag does not exist upstream.
    #[error("Revision '{tag}' not found in {uri}")]
    RevisionNotFound { tag: String, uri: String },

    /// The target directory cannot be created or written.
    #[error("Cannot write checkout to {}: {reason}", path.display())]
    LocalWrite { path: PathBuf, reason: String },

    /// The version-control binary backing the mechanism is missing.
    #[error("git binary not found on PATH")]
    GitUnavailable,
}

/// Checkout mechanism for materializing pinned source dependencies.
///
/// This trait abstracts the version-control backend for testability and
/// potential alternative mechanisms (local mirrors, tarball fetchers).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Checkout: Send + Sync {
    /// Ensure a working copy of `request.source_uri` exists at
    /// `vendor_root/local_dir_name`, checked out at `revision_tag`.
    async fn checkout(&self, request: CheckoutRequest)
    -> Result<CheckoutOutcome, CheckoutError>;
}
