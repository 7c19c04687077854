//! Descriptor manifest loading.
//!
//! A `srcpin.toml` file declares additional dependency descriptors beyond
//! the built-ins:
//!
//! ```toml
//! [dependencies.glm]
//! git = "https://github.com/g-truc/glm.git"
//! dir = "glm-src"
//! tag = "0.9.4.4"
//! ```
//!
//! The manifest is searched for from a starting directory upward, so srcpin
//! can run from anywhere inside a workspace.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::DependencyDescriptor;
use crate::registry::DescriptorRegistry;

/// File name the manifest search looks for.
pub const MANIFEST_FILE_NAME: &str = "srcpin.toml";

/// Errors reading or interpreting a descriptor manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("Failed to read manifest {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    /// The manifest file is not valid TOML or has the wrong shape.
    #[error("Failed to parse manifest {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// A dependency entry failed descriptor validation.
    #[error("Invalid dependency entry '{name}': {reason}")]
    InvalidEntry { name: String, reason: String },
}

/// One `[dependencies.<name>]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    /// Git repository URI.
    pub git: String,
    /// Local checkout directory name.
    pub dir: String,
    /// Revision tag to pin.
    pub tag: String,
}

/// Parsed descriptor manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Declared dependencies, keyed by name.
    #[serde(default)]
    pub dependencies: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|e| ManifestError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ManifestError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Fold the manifest's entries into a registry.
    ///
    /// Entries with the same name as a built-in override it. Every entry is
    /// validated through the descriptor constructor.
    pub fn apply_to(&self, registry: &mut DescriptorRegistry) -> Result<(), ManifestError> {
        for (name, entry) in &self.dependencies {
            let descriptor = DependencyDescriptor::new(name, &entry.git, &entry.dir, &entry.tag)
                .map_err(|e| ManifestError::InvalidEntry {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            registry.insert(descriptor);
        }
        Ok(())
    }
}

/// Search `start` and its ancestors for a `srcpin.toml`.
///
/// Returns `None` when no manifest exists; that is not an error - the
/// registry then holds only the built-in descriptors.
pub fn find_manifest(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        let candidate = current.join(MANIFEST_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = current.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[dependencies.glm]
git = "https://github.com/g-truc/glm.git"
dir = "glm-src"
tag = "0.9.4.4"

[dependencies.gli]
git = "https://example.com/fork/gli.git"
dir = "gli-src"
tag = "0.5.0.0"
"#;

    #[test]
    fn parses_dependency_tables() {
        let manifest: Manifest = toml::from_str(SAMPLE).unwrap();
        assert_eq!(manifest.dependencies.len(), 2);
        assert_eq!(manifest.dependencies["glm"].tag, "0.9.4.4");
    }

    #[test]
    fn empty_manifest_is_valid() {
        let manifest: Manifest = toml::from_str("").unwrap();
        assert!(manifest.dependencies.is_empty());
    }

    #[test]
    fn apply_adds_and_overrides() {
        let manifest: Manifest = toml::from_str(SAMPLE).unwrap();
        let mut registry = DescriptorRegistry::builtin();

        manifest.apply_to(&mut registry).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("gli").unwrap().source_uri(),
            "https://example.com/fork/gli.git"
        );
        assert_eq!(registry.get("glm").unwrap().local_dir_name(), "glm-src");
    }

    #[test]
    fn invalid_entry_is_rejected_with_its_name() {
        let manifest: Manifest = toml::from_str(
            r#"
[dependencies.broken]
git = "https://example.com/x.git"
dir = "x-src"
tag = ""
"#,
        )
        .unwrap();
        let mut registry = DescriptorRegistry::new();

        let err = manifest.apply_to(&mut registry).unwrap_err();
        assert!(matches!(err, ManifestError::InvalidEntry { ref name, .. } if name == "broken"));
    }

    #[test]
    fn find_manifest_searches_upward() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(MANIFEST_FILE_NAME), SAMPLE).unwrap();

        let found = find_manifest(&nested).unwrap();
        assert_eq!(found, dir.path().join(MANIFEST_FILE_NAME));
    }

    #[test]
    fn find_manifest_returns_none_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_manifest(dir.path()).is_none());
    }
}
