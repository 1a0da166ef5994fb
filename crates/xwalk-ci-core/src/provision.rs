//! Platform dispatch: the end-to-end provisioning flow.
//!
//! One run resolves one artifact and produces one staged environment.
//! The three platform branches share the same skeleton and differ in
//! channel, metadata and download plan:
//!
//! - android: enumerate devices, resolve stable, stage with metadata,
//!   download (arch-dependent name), host-dependent discovery pattern;
//! - windows: stage, resolve canary, download with the two-candidate
//!   plan, default pattern;
//! - ios: stage the template only, default pattern.

use std::fs;
use std::path::PathBuf;

use reqwest::Client;

use crate::artifact;
use crate::devices;
use crate::error::ProvisionError;
use crate::listing;
use crate::paths::Layout;
use crate::runner::{self, RunnerConfig, RunnerEnv};
use crate::stage::{StageError, StagedEnvironment, Stager};
use xwalk_ci_schema::{Channel, HostOs, PackagingArch, Platform, Version};

/// Everything a provisioning run depends on, gathered up front.
///
/// Host identity is captured here once instead of being queried mid
/// pipeline, so tests can provision "as" any host.
#[derive(Debug)]
pub struct Context {
    /// Filesystem layout of the run.
    pub layout: Layout,
    /// Operating system of the machine running the pipeline.
    pub host: HostOs,
    /// Release-server root.
    pub base_url: String,
    /// Shared HTTP client.
    pub client: Client,
}

impl Context {
    /// Create a context with a fresh HTTP client.
    pub fn new(layout: Layout, host: HostOs, base_url: impl Into<String>) -> Self {
        Self {
            layout,
            host,
            base_url: base_url.into(),
            client: Client::new(),
        }
    }
}

/// The outcome of a provisioning run, short of actually spawning the
/// test runner.
#[derive(Debug)]
pub struct Provisioned {
    /// The staged test directory.
    pub staged: StagedEnvironment,
    /// Resolved runtime version, when the platform downloads one.
    pub version: Option<Version>,
    /// Path of the downloaded artifact, when the platform downloads one.
    pub artifact: Option<PathBuf>,
    /// Ready-to-spawn runner invocation.
    pub runner: RunnerConfig,
}

/// Delete the per-run workspace so nothing leaks in from a previous run.
pub fn reset_workspace(layout: &Layout) -> Result<(), StageError> {
    let workspace = layout.workspace_dir();
    if workspace.exists() {
        tracing::debug!("Removing stale workspace {}", workspace.display());
        fs::remove_dir_all(&workspace)?;
    }
    Ok(())
}

/// Provision the test environment for `platform`.
///
/// Resets the workspace, then runs the platform's branch to completion.
/// The returned [`Provisioned`] carries the runner configuration; the
/// caller decides when to spawn it.
pub async fn provision(
    ctx: &Context,
    platform: Platform,
    arch: Option<PackagingArch>,
) -> Result<Provisioned, ProvisionError> {
    reset_workspace(&ctx.layout)?;

    match platform {
        Platform::Android => provision_android(ctx, arch).await,
        Platform::Windows => provision_windows(ctx).await,
        Platform::Ios => provision_ios(ctx),
    }
}

async fn provision_android(
    ctx: &Context,
    arch: Option<PackagingArch>,
) -> Result<Provisioned, ProvisionError> {
    let channel = Channel::Stable;
    let device_ids = devices::list_devices();

    let version =
        listing::latest_version(&ctx.client, &ctx.base_url, Platform::Android, channel).await?;

    let stager = Stager::new(&ctx.layout);
    let staged = stager.stage(Platform::Android)?;
    stager.write_android_metadata(&staged, ctx.host, &version, arch)?;

    let plan = artifact::download_plan(&ctx.base_url, Platform::Android, channel, &version, arch);
    let artifact_path = artifact::fetch(&ctx.client, &plan, staged.tools_dir()).await?;

    let runner = RunnerConfig {
        working_dir: staged.ci_dir(),
        pattern: runner::discovery_pattern(Platform::Android, ctx.host).to_string(),
        env: RunnerEnv {
            app_src: ctx.layout.app_src_dir(),
            cache_dir: Some(staged.tools_dir().to_path_buf()),
            device_ids,
            skip_emulator: true,
        },
    };

    Ok(Provisioned {
        staged,
        version: Some(version),
        artifact: Some(artifact_path),
        runner,
    })
}

async fn provision_windows(ctx: &Context) -> Result<Provisioned, ProvisionError> {
    let channel = Channel::Canary;

    let staged = Stager::new(&ctx.layout).stage(Platform::Windows)?;

    let version =
        listing::latest_version(&ctx.client, &ctx.base_url, Platform::Windows, channel).await?;

    let plan = artifact::download_plan(&ctx.base_url, Platform::Windows, channel, &version, None);
    let artifact_path = artifact::fetch(&ctx.client, &plan, staged.tools_dir()).await?;

    let runner = RunnerConfig {
        working_dir: staged.ci_dir(),
        pattern: runner::DEFAULT_PATTERN.to_string(),
        env: RunnerEnv {
            app_src: ctx.layout.app_src_dir(),
            cache_dir: Some(staged.tools_dir().to_path_buf()),
            device_ids: Vec::new(),
            skip_emulator: false,
        },
    };

    Ok(Provisioned {
        staged,
        version: Some(version),
        artifact: Some(artifact_path),
        runner,
    })
}

fn provision_ios(ctx: &Context) -> Result<Provisioned, ProvisionError> {
    let staged = Stager::new(&ctx.layout).stage(Platform::Ios)?;

    let runner = RunnerConfig {
        working_dir: staged.ci_dir(),
        pattern: runner::DEFAULT_PATTERN.to_string(),
        env: RunnerEnv {
            app_src: ctx.layout.app_src_dir(),
            cache_dir: None,
            device_ids: Vec::new(),
            skip_emulator: false,
        },
    };

    Ok(Provisioned {
        staged,
        version: None,
        artifact: None,
        runner,
    })
}
