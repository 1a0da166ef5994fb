//! Companion test-suite repository sync.
//!
//! The suite checkout is the source of the staging templates, so a sync
//! failure terminates the run before any staging happens.

use std::process::Command;

use thiserror::Error;

use crate::paths::Layout;

/// Default repository the suite is cloned from.
pub const DEFAULT_SUITE_URL: &str = "https://github.com/rakuco/crosswalk-test-suite";

/// Default branch of the suite repository.
pub const DEFAULT_SUITE_BRANCH: &str = "apptools-fixes";

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("git {action} exited with {status}")]
    GitFailed {
        action: &'static str,
        status: std::process::ExitStatus,
    },

    #[error("Failed to run git: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Clone the suite repository, or pull if a checkout already exists.
///
/// # Errors
///
/// Returns [`SuiteError::GitFailed`] when git exits non-zero and
/// [`SuiteError::Spawn`] when git cannot be launched at all.
pub fn sync(layout: &Layout, url: &str, branch: &str) -> Result<(), SuiteError> {
    let dir = layout.suite_dir();

    if dir.is_dir() {
        tracing::info!("Updating test suite in {}", dir.display());
        let status = Command::new("git").arg("pull").current_dir(&dir).status()?;
        if !status.success() {
            return Err(SuiteError::GitFailed {
                action: "pull",
                status,
            });
        }
    } else {
        tracing::info!("Cloning test suite from {url} (branch {branch})");
        let status = Command::new("git")
            .args(["clone", "-b", branch, url])
            .arg(&dir)
            .status()?;
        if !status.success() {
            return Err(SuiteError::GitFailed {
                action: "clone",
                status,
            });
        }
    }

    Ok(())
}
