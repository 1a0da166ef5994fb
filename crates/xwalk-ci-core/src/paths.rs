//! Filesystem layout of a provisioning run.

use std::path::{Path, PathBuf};

use xwalk_ci_schema::Platform;

/// Directory name of the companion test-suite checkout.
pub const SUITE_DIR_NAME: &str = "crosswalk-test-suite";

/// Path layout rooted at the invocation directory.
///
/// All path construction in the pipeline goes through this type so the
/// whole run can be pointed at a different root (the integration tests
/// do exactly that).
///
/// ```text
/// <root>/
/// ├── src/                      # app-tools source tree (CROSSWALK_APP_SRC)
/// ├── crosswalk-test-suite/     # suite checkout, synced per run
/// │   └── apptools/
/// │       └── apptools-<platform>-tests/   # staging templates
/// └── tmp/                      # workspace, deleted at start of run
///     └── apptools-<platform>-tests/
///         ├── tools/            # artifact download destination
///         └── apptools/CI/      # test-discovery working directory
/// ```
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    /// Create a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The invocation root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The companion test-suite checkout.
    pub fn suite_dir(&self) -> PathBuf {
        self.root.join(SUITE_DIR_NAME)
    }

    /// The `apptools` subtree of the suite, holding staging templates.
    pub fn apptools_dir(&self) -> PathBuf {
        self.suite_dir().join("apptools")
    }

    /// The staging template for one platform.
    pub fn template_dir(&self, platform: Platform) -> PathBuf {
        self.apptools_dir().join(platform.tests_dir_name())
    }

    /// The packaging-tool source tree handed to the test suite.
    pub fn app_src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    /// The per-run scratch workspace. Deleted at the start of every run.
    pub fn workspace_dir(&self) -> PathBuf {
        self.root.join("tmp")
    }

    /// The staged test directory for one platform.
    pub fn staged_dir(&self, platform: Platform) -> PathBuf {
        self.workspace_dir().join(platform.tests_dir_name())
    }
}
