//! Git-backed checkout mechanism.

use std::path::{Path, PathBuf};
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use srcpin_core::paths::{SyncState, ensure_directory};
use srcpin_core::ports::{Checkout, CheckoutError, CheckoutOutcome, CheckoutRequest, SyncPolicy};

/// Checkout mechanism backed by the system `git` binary.
///
/// Re-running a checkout converges: an existing directory already pinned at
/// the requested tag is left alone under [`SyncPolicy::SkipIfSynced`], and
/// re-fetched under [`SyncPolicy::AlwaysSync`].
pub struct GitCheckout {
    git_binary: PathBuf,
    policy: SyncPolicy,
}

impl GitCheckout {
    /// Locate `git` on PATH.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::GitUnavailable` when no git binary is found.
    pub fn locate(policy: SyncPolicy) -> Result<Self, CheckoutError> {
        let git_binary = which::which("git").map_err(|_| CheckoutError::GitUnavailable)?;
        debug!(git = %git_binary.display(), "located git binary");
        Ok(Self { git_binary, policy })
    }

    /// Locate `git` on PATH, falling back to the bare command name.
    ///
    /// With the fallback, a missing binary surfaces as
    /// `CheckoutError::GitUnavailable` on the first checkout instead of at
    /// construction time. This keeps commands that never touch git (like
    /// `list`) working without it.
    pub fn locate_or_default(policy: SyncPolicy) -> Self {
        Self::locate(policy).unwrap_or_else(|_| Self::with_binary("git", policy))
    }

    /// Use a specific git binary.
    pub fn with_binary(git_binary: impl Into<PathBuf>, policy: SyncPolicy) -> Self {
        Self {
            git_binary: git_binary.into(),
            policy,
        }
    }

    /// Path of the git binary this mechanism invokes.
    pub fn git_binary(&self) -> &Path {
        &self.git_binary
    }

    async fn clone_at_tag(
        &self,
        request: &CheckoutRequest,
        target: &Path,
    ) -> Result<(), CheckoutError> {
        info!(
            uri = %request.source_uri,
            tag = %request.revision_tag,
            target = %target.display(),
            "cloning"
        );

        let output = Command::new(&self.git_binary)
            .arg("clone")
            .arg("--branch")
            .arg(&request.revision_tag)
            .arg("--depth")
            .arg("1")
            .arg(&request.source_uri)
            .arg(target)
            .output()
            .await
            .map_err(|e| spawn_failure(&request.source_uri, &e))?;

        check_git_output(&output, request, target)
    }

    async fn sync_existing(
        &self,
        request: &CheckoutRequest,
        target: &Path,
    ) -> Result<(), CheckoutError> {
        info!(
            tag = %request.revision_tag,
            target = %target.display(),
            "fetching and checking out tag"
        );

        let output = Command::new(&self.git_binary)
            .arg("-C")
            .arg(target)
            .arg("fetch")
            .arg("--tags")
            .arg("--force")
            .arg("origin")
            .output()
            .await
            .map_err(|e| spawn_failure(&request.source_uri, &e))?;
        check_git_output(&output, request, target)?;

        let output = Command::new(&self.git_binary)
            .arg("-C")
            .arg(target)
            .arg("checkout")
            .arg(&request.revision_tag)
            .output()
            .await
            .map_err(|e| spawn_failure(&request.source_uri, &e))?;
        check_git_output(&output, request, target)
    }
}

#[async_trait]
impl Checkout for GitCheckout {
    async fn checkout(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        ensure_directory(&request.vendor_root).map_err(|e| CheckoutError::LocalWrite {
            path: request.vendor_root.clone(),
            reason: e.to_string(),
        })?;

        let target = request.vendor_root.join(&request.local_dir_name);

        if target.exists() {
            if self.policy == SyncPolicy::SkipIfSynced {
                if let Ok(state) = SyncState::load(&target) {
                    if state.matches_tag(&request.revision_tag) {
                        debug!(
                            target = %target.display(),
                            tag = %request.revision_tag,
                            "already pinned at requested tag, skipping"
                        );
                        return Ok(CheckoutOutcome::UpToDate { path: target });
                    }
                }
            }
            self.sync_existing(&request, &target).await?;
        } else {
            self.clone_at_tag(&request, &target).await?;
        }

        SyncState::new(&request.revision_tag, &request.source_uri)
            .save(&target)
            .map_err(|e| CheckoutError::LocalWrite {
                path: target.clone(),
                reason: e.to_string(),
            })?;

        Ok(CheckoutOutcome::Synced { path: target })
    }
}

/// Report the version string of a git binary, if it runs.
pub async fn git_version(git_binary: &Path) -> Option<String> {
    let output = Command::new(git_binary).arg("--version").output().await.ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn spawn_failure(uri: &str, err: &std::io::Error) -> CheckoutError {
    if err.kind() == std::io::ErrorKind::NotFound {
        CheckoutError::GitUnavailable
    } else {
        CheckoutError::Fetch {
            uri: uri.to_string(),
            reason: err.to_string(),
        }
    }
}

fn check_git_output(
    output: &Output,
    request: &CheckoutRequest,
    target: &Path,
) -> Result<(), CheckoutError> {
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    Err(classify_git_failure(
        &request.source_uri,
        &request.revision_tag,
        target,
        &stderr,
    ))
}

/// Classify a failed git invocation's stderr into the core error taxonomy.
///
/// Git reports everything on stderr with no structured codes, so this is
/// pattern matching on the messages current git versions emit. Anything
/// unrecognized is treated as a fetch failure.
fn classify_git_failure(uri: &str, tag: &str, target: &Path, stderr: &str) -> CheckoutError {
    const REVISION_PATTERNS: &[&str] = &[
        "not found in upstream",
        "couldn't find remote ref",
        "did not match any file(s) known to git",
        "pathspec",
        "unknown revision",
    ];
    const LOCAL_WRITE_PATTERNS: &[&str] = &[
        "could not create work tree",
        "could not create directory",
        "unable to create file",
        "no space left on device",
        "read-only file system",
    ];

    let lower = stderr.to_lowercase();

    if REVISION_PATTERNS.iter().any(|p| lower.contains(p)) {
        return CheckoutError::RevisionNotFound {
            tag: tag.to_string(),
            uri: uri.to_string(),
        };
    }
    if LOCAL_WRITE_PATTERNS.iter().any(|p| lower.contains(p)) {
        return CheckoutError::LocalWrite {
            path: target.to_path_buf(),
            reason: first_stderr_line(stderr),
        };
    }
    CheckoutError::Fetch {
        uri: uri.to_string(),
        reason: first_stderr_line(stderr),
    }
}

fn first_stderr_line(stderr: &str) -> String {
    stderr
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("git exited with failure")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(vendor_root: &Path) -> CheckoutRequest {
        CheckoutRequest {
            source_uri: "https://github.com/g-truc/gli.git".to_string(),
            local_dir_name: "gli-src".to_string(),
            revision_tag: "0.4.1.0".to_string(),
            vendor_root: vendor_root.to_path_buf(),
        }
    }

    #[test]
    fn missing_tag_on_clone_is_revision_not_found() {
        let err = classify_git_failure(
            "https://github.com/g-truc/gli.git",
            "9.9.9",
            Path::new("/v/gli-src"),
            "fatal: Remote branch 9.9.9 not found in upstream origin\n",
        );
        assert!(matches!(
            err,
            CheckoutError::RevisionNotFound { ref tag, .. } if tag == "9.9.9"
        ));
    }

    #[test]
    fn missing_ref_on_fetch_is_revision_not_found() {
        let err = classify_git_failure(
            "uri",
            "v2",
            Path::new("/v/x"),
            "fatal: couldn't find remote ref refs/tags/v2\n",
        );
        assert!(matches!(err, CheckoutError::RevisionNotFound { .. }));
    }

    #[test]
    fn bad_pathspec_on_checkout_is_revision_not_found() {
        let err = classify_git_failure(
            "uri",
            "v2",
            Path::new("/v/x"),
            "error: pathspec 'v2' did not match any file(s) known to git\n",
        );
        assert!(matches!(err, CheckoutError::RevisionNotFound { .. }));
    }

    #[test]
    fn unreachable_host_is_fetch_failure() {
        let err = classify_git_failure(
            "https://github.com/g-truc/gli.git",
            "0.4.1.0",
            Path::new("/v/gli-src"),
            "fatal: unable to access 'https://github.com/g-truc/gli.git/': \
             Could not resolve host: github.com\n",
        );
        assert!(matches!(err, CheckoutError::Fetch { .. }));
    }

    #[test]
    fn missing_repository_is_fetch_failure() {
        let err = classify_git_failure(
            "https://github.com/nope/nope.git",
            "v1",
            Path::new("/v/x"),
            "fatal: repository 'https://github.com/nope/nope.git/' not found\n",
        );
        assert!(matches!(err, CheckoutError::Fetch { .. }));
    }

    #[test]
    fn unwritable_work_tree_is_local_write_failure() {
        let err = classify_git_failure(
            "uri",
            "v1",
            Path::new("/v/gli-src"),
            "fatal: could not create work tree dir 'gli-src': Permission denied\n",
        );
        assert!(matches!(
            err,
            CheckoutError::LocalWrite { ref path, .. } if path == Path::new("/v/gli-src")
        ));
    }

    #[test]
    fn empty_stderr_falls_back_to_generic_reason() {
        assert_eq!(first_stderr_line(""), "git exited with failure");
        assert_eq!(first_stderr_line("\n  fatal: boom\n"), "fatal: boom");
    }

    #[tokio::test]
    async fn up_to_date_checkout_never_spawns_git() {
        let vendor = tempfile::tempdir().unwrap();
        let target = vendor.path().join("gli-src");
        std::fs::create_dir_all(&target).unwrap();
        SyncState::new("0.4.1.0", "https://github.com/g-truc/gli.git")
            .save(&target)
            .unwrap();

        // A nonexistent binary proves git is never invoked on the skip path.
        let checkout = GitCheckout::with_binary("/nonexistent/git", SyncPolicy::SkipIfSynced);
        let outcome = checkout.checkout(request(vendor.path())).await.unwrap();

        assert_eq!(outcome, CheckoutOutcome::UpToDate { path: target });
    }

    #[tokio::test]
    async fn always_sync_refetches_even_when_pinned() {
        let vendor = tempfile::tempdir().unwrap();
        let target = vendor.path().join("gli-src");
        std::fs::create_dir_all(&target).unwrap();
        SyncState::new("0.4.1.0", "https://github.com/g-truc/gli.git")
            .save(&target)
            .unwrap();

        let checkout = GitCheckout::with_binary("/nonexistent/git", SyncPolicy::AlwaysSync);
        let err = checkout.checkout(request(vendor.path())).await.unwrap_err();

        assert!(matches!(err, CheckoutError::GitUnavailable));
    }

    #[tokio::test]
    async fn missing_binary_surfaces_as_git_unavailable() {
        let vendor = tempfile::tempdir().unwrap();

        let checkout = GitCheckout::with_binary("/nonexistent/git", SyncPolicy::SkipIfSynced);
        let err = checkout.checkout(request(vendor.path())).await.unwrap_err();

        assert!(matches!(err, CheckoutError::GitUnavailable));
    }
}
