#![deny(unused_crate_dependencies)]

//! Git checkout adapter for srcpin.
//!
//! Implements the [`srcpin_core::ports::Checkout`] port by shelling out to
//! the `git` binary: a missing directory is cloned at the pinned tag, an
//! existing one is fetched and moved to the tag. Failures are classified
//! into the core error taxonomy (fetch failure, revision not found, local
//! write failure).

mod runner;

pub use runner::{GitCheckout, git_version};
