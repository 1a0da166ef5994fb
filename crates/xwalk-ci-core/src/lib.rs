//! Core pipeline for the Crosswalk test-environment provisioner.
//!
//! The pipeline is strictly linear: scrape the release listing, resolve
//! the artifact, stage the per-platform test directory, download the
//! runtime into its `tools/` subdirectory and hand a ready-to-spawn
//! runner configuration back to the caller. Each step blocks on the
//! previous step's output; there is no internal parallelism, no retry
//! beyond the download candidate plan, and no cleanup on failure.

pub mod artifact;
pub mod devices;
pub mod download;
pub mod error;
pub mod listing;
pub mod paths;
pub mod provision;
pub mod runner;
pub mod stage;
pub mod suite;

pub use error::ProvisionError;
pub use paths::Layout;
pub use provision::{Context, Provisioned, provision};

/// User Agent string for pipeline HTTP requests
pub const USER_AGENT: &str = concat!("xwalk-ci/", env!("CARGO_PKG_VERSION"));

/// Default release-server root for directory listings and artifact downloads.
pub const DEFAULT_BASE_URL: &str = "https://download.01.org/crosswalk/releases/crosswalk";
