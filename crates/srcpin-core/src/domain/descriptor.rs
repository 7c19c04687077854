//! Dependency descriptor - the core domain entity.

use serde::{Deserialize, Serialize};

use crate::ports::CoreError;

/// An immutable record describing one external dependency: where it lives,
/// what the local checkout directory is called, and which revision tag it is
/// pinned to.
///
/// A descriptor is plain data. The checkout capability and the build
/// lifecycle are injected separately (see [`crate::ports::DependencyTask`]),
/// so one descriptor type covers every dependency instead of one type per
/// dependency.
///
/// All fields are stored verbatim: no trimming, normalization, or URI
/// rewriting happens on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDescriptor {
    name: String,
    source_uri: String,
    local_dir_name: String,
    revision_tag: String,
}

impl DependencyDescriptor {
    /// Create a descriptor from its four fields.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if any field is empty.
    pub fn new(
        name: impl Into<String>,
        source_uri: impl Into<String>,
        local_dir_name: impl Into<String>,
        revision_tag: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let descriptor = Self {
            name: name.into(),
            source_uri: source_uri.into(),
            local_dir_name: local_dir_name.into(),
            revision_tag: revision_tag.into(),
        };

        if descriptor.name.is_empty() {
            return Err(CoreError::Validation(
                "dependency name cannot be empty".to_string(),
            ));
        }
        if descriptor.source_uri.is_empty() {
            return Err(CoreError::Validation(format!(
                "source URI for '{}' cannot be empty",
                descriptor.name
            )));
        }
        if descriptor.local_dir_name.is_empty() {
            return Err(CoreError::Validation(format!(
                "local directory name for '{}' cannot be empty",
                descriptor.name
            )));
        }
        if descriptor.revision_tag.is_empty() {
            return Err(CoreError::Validation(format!(
                "revision tag for '{}' cannot be empty",
                descriptor.name
            )));
        }

        Ok(descriptor)
    }

    /// The registry name of this dependency (e.g. `"gli"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version-control location the dependency is fetched from.
    pub fn source_uri(&self) -> &str {
        &self.source_uri
    }

    /// The directory name used for the checkout under the vendor root.
    pub fn local_dir_name(&self) -> &str {
        &self.local_dir_name
    }

    /// The tag the checkout is pinned to (a fixed reference, not a branch).
    pub fn revision_tag(&self) -> &str {
        &self.revision_tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_preserves_exact_values() {
        let descriptor = DependencyDescriptor::new(
            "gli",
            "https://github.com/g-truc/gli.git",
            "gli-src",
            "0.4.1.0",
        )
        .unwrap();

        assert_eq!(descriptor.name(), "gli");
        assert_eq!(descriptor.source_uri(), "https://github.com/g-truc/gli.git");
        assert_eq!(descriptor.local_dir_name(), "gli-src");
        assert_eq!(descriptor.revision_tag(), "0.4.1.0");
    }

    #[test]
    fn construction_does_not_trim_or_rewrite() {
        let descriptor =
            DependencyDescriptor::new("dep", " https://example.com/a.git ", "a src", "v1 ")
                .unwrap();

        assert_eq!(descriptor.source_uri(), " https://example.com/a.git ");
        assert_eq!(descriptor.local_dir_name(), "a src");
        assert_eq!(descriptor.revision_tag(), "v1 ");
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert!(DependencyDescriptor::new("", "uri", "dir", "tag").is_err());
        assert!(DependencyDescriptor::new("name", "", "dir", "tag").is_err());
        assert!(DependencyDescriptor::new("name", "uri", "", "tag").is_err());
        assert!(DependencyDescriptor::new("name", "uri", "dir", "").is_err());
    }

    #[test]
    fn empty_field_error_is_validation() {
        let err = DependencyDescriptor::new("name", "uri", "dir", "").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
