//! Vendor root resolution.
//!
//! The vendor root is the directory dependency checkouts are materialized
//! under. It can come from an explicit override, the environment, or the
//! workspace the manifest was found in.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable overriding the vendor root.
pub const VENDOR_DIR_ENV: &str = "SRCPIN_VENDOR_DIR";

/// How the vendor root was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorRootSource {
    /// The user passed an explicit path (CLI flag).
    Explicit,
    /// The path came from `SRCPIN_VENDOR_DIR`.
    EnvVar,
    /// Fallback to the directory containing the manifest.
    ManifestDir,
    /// Fallback to the current working directory.
    CurrentDir,
}

impl fmt::Display for VendorRootSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Explicit => "explicit flag",
            Self::EnvVar => "environment",
            Self::ManifestDir => "manifest directory",
            Self::CurrentDir => "current directory",
        };
        f.write_str(label)
    }
}

/// Resolution result for the vendor root.
#[derive(Debug, Clone)]
pub struct VendorRootResolution {
    /// The resolved vendor root path.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: VendorRootSource,
}

/// Resolve the vendor root from an explicit override, env var, manifest
/// location, or the current directory.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `SRCPIN_VENDOR_DIR` environment variable
/// 3. The directory containing the manifest, when one was found
/// 4. The current working directory
pub fn resolve_vendor_root(
    explicit: Option<&str>,
    manifest_dir: Option<&Path>,
) -> Result<VendorRootResolution, PathError> {
    if let Some(path) = explicit {
        if path.trim().is_empty() {
            return Err(PathError::EmptyPath);
        }
        return Ok(VendorRootResolution {
            path: PathBuf::from(path),
            source: VendorRootSource::Explicit,
        });
    }

    if let Ok(env_path) = env::var(VENDOR_DIR_ENV) {
        if !env_path.trim().is_empty() {
            return Ok(VendorRootResolution {
                path: PathBuf::from(env_path),
                source: VendorRootSource::EnvVar,
            });
        }
    }

    if let Some(dir) = manifest_dir {
        return Ok(VendorRootResolution {
            path: dir.to_path_buf(),
            source: VendorRootSource::ManifestDir,
        });
    }

    let cwd = env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))?;
    Ok(VendorRootResolution {
        path: cwd,
        source: VendorRootSource::CurrentDir,
    })
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use std::sync::{Mutex, MutexGuard};

    use super::*;

    // Tests that touch SRCPIN_VENDOR_DIR must not run concurrently.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn restore_env(key: &str, previous: Option<String>) {
        if let Some(value) = previous {
            unsafe {
                env::set_var(key, value);
            }
        } else {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn explicit_beats_everything() {
        let _guard = env_guard();
        let prev = env::var(VENDOR_DIR_ENV).ok();
        unsafe {
            env::set_var(VENDOR_DIR_ENV, "/tmp/from-env");
        }

        let resolved =
            resolve_vendor_root(Some("/tmp/explicit"), Some(Path::new("/tmp/manifest"))).unwrap();
        assert_eq!(resolved.source, VendorRootSource::Explicit);
        assert_eq!(resolved.path, PathBuf::from("/tmp/explicit"));

        restore_env(VENDOR_DIR_ENV, prev);
    }

    #[test]
    fn env_var_beats_manifest_dir() {
        let _guard = env_guard();
        let prev = env::var(VENDOR_DIR_ENV).ok();
        unsafe {
            env::set_var(VENDOR_DIR_ENV, "/tmp/from-env");
        }

        let resolved = resolve_vendor_root(None, Some(Path::new("/tmp/manifest"))).unwrap();
        assert_eq!(resolved.source, VendorRootSource::EnvVar);
        assert_eq!(resolved.path, PathBuf::from("/tmp/from-env"));

        restore_env(VENDOR_DIR_ENV, prev);
    }

    #[test]
    fn manifest_dir_then_current_dir() {
        let _guard = env_guard();
        let prev = env::var(VENDOR_DIR_ENV).ok();
        unsafe {
            env::remove_var(VENDOR_DIR_ENV);
        }

        let resolved = resolve_vendor_root(None, Some(Path::new("/tmp/workspace"))).unwrap();
        assert_eq!(resolved.source, VendorRootSource::ManifestDir);
        assert_eq!(resolved.path, PathBuf::from("/tmp/workspace"));

        let resolved = resolve_vendor_root(None, None).unwrap();
        assert_eq!(resolved.source, VendorRootSource::CurrentDir);

        restore_env(VENDOR_DIR_ENV, prev);
    }

    #[test]
    fn empty_explicit_path_is_an_error() {
        let err = resolve_vendor_root(Some("  "), None).unwrap_err();
        assert!(matches!(err, PathError::EmptyPath));
    }
}
