//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from core errors to exit codes and user-facing messages.

use srcpin_core::manifest::ManifestError;
use srcpin_core::paths::PathError;
use srcpin_core::ports::{CheckoutError, CoreError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Checkout mechanism error.
    #[error("Checkout failed: {0}")]
    Checkout(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,  // EX_USAGE
            Self::Io(_) => 74,        // EX_IOERR
            Self::Config(_) => 78,    // EX_CONFIG
            Self::Checkout(_) => 69,  // EX_UNAVAILABLE
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Checkout(checkout_err) => checkout_err.into(),
            CoreError::Manifest(manifest_err) => manifest_err.into(),
            CoreError::Path(path_err) => path_err.into(),
            CoreError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

impl From<CheckoutError> for CliError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::LocalWrite { .. } => Self::Io(err.to_string()),
            CheckoutError::GitUnavailable => Self::Config(err.to_string()),
            CheckoutError::Fetch { .. } | CheckoutError::RevisionNotFound { .. } => {
                Self::Checkout(err.to_string())
            }
        }
    }
}

impl From<ManifestError> for CliError {
    fn from(err: ManifestError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revision_not_found_maps_to_checkout_exit_code() {
        let err = CliError::from(CoreError::Checkout(CheckoutError::RevisionNotFound {
            tag: "9.9.9".to_string(),
            uri: "uri".to_string(),
        }));
        assert_eq!(err.exit_code(), 69);
        assert!(err.to_string().contains("9.9.9"));
    }

    #[test]
    fn validation_maps_to_usage_exit_code() {
        let err = CliError::from(CoreError::Validation("empty tag".to_string()));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_git_maps_to_config_exit_code() {
        let err = CliError::from(CheckoutError::GitUnavailable);
        assert_eq!(err.exit_code(), 78);
    }
}
