#![deny(unused_crate_dependencies)]

//! Core domain types and port definitions for srcpin.
//!
//! srcpin pins external source dependencies at fixed revision tags and
//! materializes them into a local vendor directory. This crate holds the
//! domain model (dependency descriptors and the registry that names them),
//! the ports that infrastructure adapters implement (the checkout mechanism
//! and the build lifecycle), the descriptor manifest format, and path
//! resolution for the vendor directory.
//!
//! No adapter concerns live here: nothing in this crate spawns processes,
//! talks to the network, or parses command lines.

pub mod domain;
pub mod manifest;
pub mod paths;
pub mod ports;
pub mod registry;

// Re-export commonly used types for convenience
pub use domain::DependencyDescriptor;
pub use manifest::{MANIFEST_FILE_NAME, Manifest, ManifestError, find_manifest};
pub use paths::{
    PathError, SyncState, VendorRootResolution, VendorRootSource, ensure_directory,
    resolve_vendor_root,
};
pub use ports::{
    BuildLifecycle, Checkout, CheckoutError, CheckoutOutcome, CheckoutRequest, CoreError,
    DependencyTask, SyncPolicy,
};
pub use registry::DescriptorRegistry;
