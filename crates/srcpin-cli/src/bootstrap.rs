//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - The descriptor registry (built-ins plus the manifest, via srcpin-core)
//! - The git checkout adapter (via srcpin-git)
//! - The vendor root resolution
//!
//! Command handlers receive the fully-composed `CliContext` and delegate
//! work to it.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use srcpin_core::manifest::{Manifest, find_manifest};
use srcpin_core::paths::{VendorRootResolution, resolve_vendor_root};
use srcpin_core::ports::{Checkout, SyncPolicy};
use srcpin_core::registry::DescriptorRegistry;
use srcpin_git::GitCheckout;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Explicit vendor directory override.
    pub vendor_dir: Option<String>,
    /// Explicit manifest path (skips the upward search).
    pub manifest: Option<PathBuf>,
    /// Sync policy for the checkout mechanism.
    pub sync_policy: SyncPolicy,
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    registry: DescriptorRegistry,
    checkout: Arc<dyn Checkout>,
    vendor_root: VendorRootResolution,
    manifest_path: Option<PathBuf>,
}

impl std::fmt::Debug for CliContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliContext")
            .field("registry", &self.registry)
            .field("vendor_root", &self.vendor_root)
            .field("manifest_path", &self.manifest_path)
            .finish_non_exhaustive()
    }
}

impl CliContext {
    /// The descriptor registry (built-ins plus manifest entries).
    pub fn registry(&self) -> &DescriptorRegistry {
        &self.registry
    }

    /// The checkout mechanism handlers inject into tasks.
    pub fn checkout(&self) -> &Arc<dyn Checkout> {
        &self.checkout
    }

    /// The resolved vendor root.
    pub fn vendor_root(&self) -> &VendorRootResolution {
        &self.vendor_root
    }

    /// The manifest that was loaded, if any.
    pub fn manifest_path(&self) -> Option<&Path> {
        self.manifest_path.as_deref()
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Locates the descriptor manifest (explicit path beats upward search)
/// 2. Seeds the registry with built-ins and folds in the manifest
/// 3. Resolves the vendor root
/// 4. Constructs the git checkout adapter
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    // 1. Locate the manifest
    let manifest_path = match &config.manifest {
        Some(path) if path.is_file() => Some(path.clone()),
        Some(path) => {
            return Err(CliError::Config(format!(
                "Manifest not found: {}",
                path.display()
            )));
        }
        None => {
            let cwd = env::current_dir().map_err(|e| CliError::Io(e.to_string()))?;
            find_manifest(&cwd)
        }
    };

    // 2. Seed built-in descriptors and fold in the manifest
    let mut registry = DescriptorRegistry::builtin();
    if let Some(path) = &manifest_path {
        debug!(path = %path.display(), "loading descriptor manifest");
        let manifest = Manifest::load(path)?;
        manifest.apply_to(&mut registry)?;
    }

    // 3. Resolve the vendor root (manifest dir is the workspace default)
    let manifest_dir = manifest_path.as_deref().and_then(Path::parent);
    let vendor_root = resolve_vendor_root(config.vendor_dir.as_deref(), manifest_dir)?;
    debug!(
        path = %vendor_root.path.display(),
        source = %vendor_root.source,
        "resolved vendor root"
    );

    // 4. Construct the git checkout adapter. A missing git binary surfaces
    //    on first use so commands that never touch git keep working.
    let checkout: Arc<dyn Checkout> =
        Arc::new(GitCheckout::locate_or_default(config.sync_policy));

    Ok(CliContext {
        registry,
        checkout,
        vendor_root,
        manifest_path,
    })
}

/// Bootstrap with an injected registry and checkout mechanism (for testing).
pub fn bootstrap_with(
    registry: DescriptorRegistry,
    checkout: Arc<dyn Checkout>,
    vendor_root: VendorRootResolution,
    manifest_path: Option<PathBuf>,
) -> CliContext {
    CliContext {
        registry,
        checkout,
        vendor_root,
        manifest_path,
    }
}
