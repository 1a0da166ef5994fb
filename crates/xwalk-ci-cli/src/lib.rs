//! xwalk-ci - Crosswalk test-environment provisioner
#![allow(missing_docs)]
//!
//! Provisions a platform-specific test environment for the Crosswalk
//! app-packaging toolchain and runs the suite's test discovery:
//!
//! 1. clone or update the companion `crosswalk-test-suite` repository;
//! 2. resolve the newest released runtime version from the release
//!    server's directory listing;
//! 3. stage a fresh per-platform test directory (with metadata files on
//!    the Android path) and download the runtime archive into its
//!    `tools/` subdirectory;
//! 4. invoke `python -m unittest discover` and exit with its status.

use std::path::PathBuf;
use std::process::Command;

use anyhow::Result;
use clap::Parser;

use xwalk_ci_core::provision::{Context, provision};
use xwalk_ci_core::{Layout, suite};
use xwalk_ci_schema::{HostOs, PackagingArch, Platform};

#[derive(Debug, Parser)]
#[command(name = "xwalk-ci")]
#[command(version, about = "Provision and run Crosswalk app-tools test suites")]
pub struct Cli {
    /// Target platform of the test suite
    #[arg(short = 'p', long, value_name = "PLATFORM")]
    pub platform: Platform,

    /// Packaging bit-width of the runtime to fetch (android only)
    #[arg(short = 'a', long, value_name = "ARCH")]
    pub arch: Option<PackagingArch>,

    /// Release-server root for listings and downloads
    #[arg(
        long,
        env = "XWALK_CI_BASE_URL",
        default_value = xwalk_ci_core::DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Test-suite repository to clone
    #[arg(long, env = "XWALK_CI_SUITE_URL", default_value = suite::DEFAULT_SUITE_URL)]
    pub suite_url: String,

    /// Branch of the test-suite repository
    #[arg(long, default_value = suite::DEFAULT_SUITE_BRANCH)]
    pub suite_branch: String,

    /// Root directory for the suite checkout and tmp workspace
    /// (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Run the full pipeline and return the test runner's exit code.
pub async fn run(cli: Cli) -> Result<i32> {
    preflight();

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let layout = Layout::new(root);

    suite::sync(&layout, &cli.suite_url, &cli.suite_branch)?;

    let ctx = Context::new(layout, HostOs::current(), cli.base_url);
    let provisioned = provision(&ctx, cli.platform, cli.arch).await?;

    if let Some(version) = &provisioned.version {
        tracing::info!("Provisioned {} with runtime {version}", cli.platform);
    } else {
        tracing::info!("Provisioned {} from template only", cli.platform);
    }

    let code = provisioned.runner.discover()?;
    Ok(code)
}

/// The packaging tools under test are Node-based; surface the
/// interpreter version up front. Never fatal.
fn preflight() {
    match which::which("node") {
        Ok(node) => match Command::new(node).arg("-v").output() {
            Ok(out) if out.status.success() => {
                let version = String::from_utf8_lossy(&out.stdout);
                tracing::info!("node {}", version.trim());
            }
            _ => tracing::warn!("node found but `node -v` failed"),
        },
        Err(_) => tracing::warn!("node not found on PATH"),
    }
}
