//! Path utilities for the vendor directory and sync state.
//!
//! This module provides the canonical path resolution for srcpin:
//! - Vendor root (where checkouts land)
//! - Directory creation and writability checks
//! - The per-checkout sync state record
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user output separately

mod ensure;
mod error;
mod state;
mod vendor;

// Re-export public API

pub use ensure::{ensure_directory, verify_writable};
pub use error::PathError;
pub use state::{STATE_FILE_NAME, StateError, SyncState};
pub use vendor::{
    VENDOR_DIR_ENV, VendorRootResolution, VendorRootSource, resolve_vendor_root,
};
