//! Top-level error taxonomy for the provisioning pipeline.

use thiserror::Error;

use crate::download::DownloadError;
use crate::listing::ListingError;
use crate::runner::RunnerError;
use crate::stage::StageError;
use crate::suite::SuiteError;

/// Any failure the pipeline can surface to the caller.
///
/// Every variant is fatal: the run terminates and the workspace is left
/// in whatever partial state it reached. The only internal recovery is
/// the download candidate plan, which lives below this type.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Scraping the release listing failed, or it held no version.
    #[error("Release resolution failed: {0}")]
    Listing(#[from] ListingError),

    /// Every candidate in the download plan failed.
    #[error("Artifact download failed: {0}")]
    Download(#[from] DownloadError),

    /// Cloning or updating the companion test-suite repository failed.
    #[error("Test-suite sync failed: {0}")]
    RepositorySync(#[from] SuiteError),

    /// Copying the template tree or writing metadata failed.
    #[error("Environment staging failed: {0}")]
    Stage(#[from] StageError),

    /// The test-discovery subprocess could not be run.
    #[error("Test runner failed: {0}")]
    Runner(#[from] RunnerError),
}
