//! Artifact resolution and the download candidate plan.
//!
//! A descriptor is a deterministic function of platform, channel,
//! version and packaging arch. The Windows release server publishes some
//! canary builds under an alternate `crosswalk64-` stem, so its plan
//! carries two candidates; every candidate is attempted exactly once, in
//! order, and the first success wins.

use std::path::{Path, PathBuf};

use reqwest::Client;

use crate::download::{self, DownloadError};
use xwalk_ci_schema::{Channel, PackagingArch, Platform, Version};

/// Stem of every downloadable runtime archive.
const PRODUCT: &str = "crosswalk";

/// A fully resolved download target: exact URL and local filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    /// Target platform of the runtime build.
    pub platform: Platform,
    /// Release channel the artifact lives under.
    pub channel: Channel,
    /// Resolved release version.
    pub version: Version,
    /// Packaging bit-width, when one was requested.
    pub arch: Option<PackagingArch>,
    /// Local filename the artifact is saved under.
    pub filename: String,
    /// Full download URL.
    pub url: String,
}

impl ArtifactDescriptor {
    /// Resolve the primary artifact name for the given inputs.
    ///
    /// `crosswalk-<version>-64bit.zip` when 64-bit packaging was
    /// requested, `crosswalk-<version>.zip` otherwise (including no arch
    /// at all).
    pub fn resolve(
        base_url: &str,
        platform: Platform,
        channel: Channel,
        version: &Version,
        arch: Option<PackagingArch>,
    ) -> Self {
        let filename = match arch {
            Some(PackagingArch::Bit64) => format!("{PRODUCT}-{version}-64bit.zip"),
            _ => format!("{PRODUCT}-{version}.zip"),
        };
        Self::with_filename(base_url, platform, channel, version, arch, filename)
    }

    /// The alternate naming scheme some releases are published under:
    /// `crosswalk64-<version>.zip`.
    pub fn resolve_alternate(
        base_url: &str,
        platform: Platform,
        channel: Channel,
        version: &Version,
    ) -> Self {
        let filename = format!("{PRODUCT}64-{version}.zip");
        Self::with_filename(base_url, platform, channel, version, None, filename)
    }

    fn with_filename(
        base_url: &str,
        platform: Platform,
        channel: Channel,
        version: &Version,
        arch: Option<PackagingArch>,
        filename: String,
    ) -> Self {
        let url = format!(
            "{}/{platform}/{channel}/{version}/{filename}",
            base_url.trim_end_matches('/')
        );
        Self {
            platform,
            channel,
            version: version.clone(),
            arch,
            filename,
            url,
        }
    }
}

/// Build the ordered candidate list for one download.
///
/// Windows gets the primary name plus the `crosswalk64-` alternate;
/// every other platform gets the primary name only.
pub fn download_plan(
    base_url: &str,
    platform: Platform,
    channel: Channel,
    version: &Version,
    arch: Option<PackagingArch>,
) -> Vec<ArtifactDescriptor> {
    let primary = ArtifactDescriptor::resolve(base_url, platform, channel, version, arch);
    match platform {
        Platform::Windows => vec![
            primary,
            ArtifactDescriptor::resolve_alternate(base_url, platform, channel, version),
        ],
        _ => vec![primary],
    }
}

/// Try each candidate in order, streaming it into `dest_dir` under its
/// own filename. Returns the path of the first candidate that
/// downloaded successfully.
///
/// # Errors
///
/// A candidate's failure is logged and the next candidate is tried;
/// once the plan is exhausted the last failure is returned.
pub async fn fetch(
    client: &Client,
    plan: &[ArtifactDescriptor],
    dest_dir: &Path,
) -> Result<PathBuf, DownloadError> {
    let mut last_err: Option<DownloadError> = None;

    for candidate in plan {
        let dest = dest_dir.join(&candidate.filename);
        tracing::debug!("Fetching {}", candidate.url);
        match download::download_to(client, &candidate.url, &dest).await {
            Ok(bytes) => {
                tracing::info!("Downloaded {} ({bytes} bytes)", candidate.filename);
                return Ok(dest);
            }
            Err(err) => {
                tracing::warn!("Download of {} failed: {err}", candidate.filename);
                last_err = Some(err);
            }
        }
    }

    Err(last_err.unwrap_or_else(|| {
        DownloadError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "empty download plan",
        ))
    }))
}
