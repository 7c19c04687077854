//! Domain types for srcpin.

mod descriptor;

pub use descriptor::DependencyDescriptor;
