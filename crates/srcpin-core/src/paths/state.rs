//! Per-checkout sync state record.
//!
//! After a successful checkout the mechanism drops a small JSON file inside
//! the checked-out directory recording which tag it is at. The record lets
//! `list` show sync status and lets the skip-if-synced policy avoid touching
//! the network.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the sync state record inside a checkout directory.
pub const STATE_FILE_NAME: &str = ".srcpin-state.json";

/// Errors reading or writing a sync state record.
#[derive(Debug, Error)]
pub enum StateError {
    /// The state file could not be read or written.
    #[error("Failed to access state file {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },

    /// The state file is not valid JSON.
    #[error("Failed to parse state file {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}

/// Sync state of one checkout directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncState {
    /// The tag the directory was last synced to.
    pub tag: String,
    /// The source URI the checkout came from.
    pub source_uri: String,
    /// When the sync happened.
    pub synced_at: DateTime<Utc>,
}

impl SyncState {
    /// Create a record for a sync that just completed.
    pub fn new(tag: impl Into<String>, source_uri: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            source_uri: source_uri.into(),
            synced_at: Utc::now(),
        }
    }

    /// Whether the record names the given tag.
    pub fn matches_tag(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// Save the record into a checkout directory.
    pub fn save(&self, checkout_dir: &Path) -> Result<(), StateError> {
        let path = checkout_dir.join(STATE_FILE_NAME);
        let json = serde_json::to_string_pretty(self).map_err(|e| StateError::Parse {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        fs::write(&path, json).map_err(|e| StateError::Io {
            path,
            reason: e.to_string(),
        })
    }

    /// Load the record from a checkout directory.
    pub fn load(checkout_dir: &Path) -> Result<Self, StateError> {
        let path = checkout_dir.join(STATE_FILE_NAME);
        let json = fs::read_to_string(&path).map_err(|e| StateError::Io {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&json).map_err(|e| StateError::Parse {
            path,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_roundtrip() {
        let dir = tempfile::tempdir().unwrap();

        let original = SyncState::new("0.4.1.0", "https://github.com/g-truc/gli.git");
        original.save(dir.path()).unwrap();
        let loaded = SyncState::load(dir.path()).unwrap();

        assert_eq!(loaded.tag, original.tag);
        assert_eq!(loaded.source_uri, original.source_uri);
        assert!(loaded.matches_tag("0.4.1.0"));
        assert!(!loaded.matches_tag("0.5.0.0"));
    }

    #[test]
    fn load_fails_when_record_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = SyncState::load(dir.path()).unwrap_err();
        assert!(matches!(err, StateError::Io { .. }));
    }
}
