//! End-to-end checks of the xwalk-ci binary surface.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Test context that runs the binary against a temporary root
struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        Self { temp_dir }
    }

    fn root(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    fn cmd(&self) -> Command {
        let bin_path = env!("CARGO_BIN_EXE_xwalk-ci");
        let mut cmd = Command::new(bin_path);
        cmd.arg("--root").arg(self.root());
        cmd
    }
}

#[test]
fn test_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_xwalk-ci"))
        .arg("--help")
        .output()
        .expect("failed to run xwalk-ci");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--platform"));
}

#[test]
fn test_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_xwalk-ci"))
        .arg("--version")
        .output()
        .expect("failed to run xwalk-ci");
    assert!(output.status.success());
}

#[test]
fn test_platform_is_required() {
    let ctx = TestContext::new();
    let output = ctx.cmd().output().expect("failed to run xwalk-ci");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--platform"));
}

#[test]
fn test_unknown_platform_fails_fast() {
    let ctx = TestContext::new();
    let output = ctx
        .cmd()
        .args(["-p", "beos"])
        .output()
        .expect("failed to run xwalk-ci");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("beos"));
}

#[test]
fn test_unknown_arch_fails_fast() {
    let ctx = TestContext::new();
    let output = ctx
        .cmd()
        .args(["-p", "android", "-a", "128bit"])
        .output()
        .expect("failed to run xwalk-ci");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("128bit"));
}

#[test]
fn test_suite_sync_failure_terminates_run() {
    let ctx = TestContext::new();
    // A suite URL that cannot be cloned makes the run fail before any
    // staging; the workspace must not appear.
    let output = ctx
        .cmd()
        .args(["-p", "ios", "--suite-url", "/nonexistent/suite-repo"])
        .output()
        .expect("failed to run xwalk-ci");
    assert!(!output.status.success());
    assert!(!ctx.root().join("tmp").exists());
}
