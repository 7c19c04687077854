//! Name-to-descriptor registry.
//!
//! One generic descriptor type parameterized by data, with a mapping from
//! dependency name to descriptor, replaces the one-task-type-per-dependency
//! pattern of older build toolkits.

use std::collections::BTreeMap;

use crate::domain::DependencyDescriptor;

/// Ordered collection of dependency descriptors, keyed by name.
///
/// Iteration order is name order, which is also the order the orchestrator
/// dispatches builds in.
#[derive(Debug, Clone, Default)]
pub struct DescriptorRegistry {
    entries: BTreeMap<String, DependencyDescriptor>,
}

impl DescriptorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the built-in descriptors.
    ///
    /// Currently that is the GLI image library, pinned at 0.4.1.0.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(
            DependencyDescriptor::new(
                "gli",
                "https://github.com/g-truc/gli.git",
                "gli-src",
                "0.4.1.0",
            )
            .expect("built-in descriptor is valid"),
        );
        registry
    }

    /// Insert a descriptor, replacing any existing one with the same name.
    ///
    /// Returns the replaced descriptor, if any. Manifest entries use this to
    /// override built-ins.
    pub fn insert(&mut self, descriptor: DependencyDescriptor) -> Option<DependencyDescriptor> {
        self.entries
            .insert(descriptor.name().to_string(), descriptor)
    }

    /// Look up a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&DependencyDescriptor> {
        self.entries.get(name)
    }

    /// All registered names, in order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Iterate over descriptors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &DependencyDescriptor> {
        self.entries.values()
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
