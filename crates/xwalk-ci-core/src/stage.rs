//! Environment staging: template copy plus metadata files.
//!
//! Staging is a fresh-start operation: the destination is removed before
//! the template subtree is copied, so running it twice yields the same
//! tree as running it once. It mutates the shared workspace directory
//! and is not safe to run concurrently against the same root.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::paths::Layout;
use xwalk_ci_schema::{HostOs, PackagingArch, Platform, Version};

/// CPU target of the packaged app, recorded in `arch.txt`. Distinct
/// from the 32/64-bit packaging arch used for artifact naming.
const TARGET_CPU: &str = "arm";

#[derive(Error, Debug)]
pub enum StageError {
    #[error("Staging template not found at {0}")]
    MissingTemplate(PathBuf),

    #[error("Template copy failed: {0}")]
    Copy(#[from] fs_extra::error::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A staged per-platform test directory, ready for the artifact
/// download and the test runner.
#[derive(Debug)]
pub struct StagedEnvironment {
    root: PathBuf,
    tools_dir: PathBuf,
}

impl StagedEnvironment {
    /// Root of the staged tree (`tmp/apptools-<platform>-tests`).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Artifact download destination (`<root>/tools`).
    pub fn tools_dir(&self) -> &Path {
        &self.tools_dir
    }

    /// Working directory for test discovery (`<root>/apptools/CI`).
    pub fn ci_dir(&self) -> PathBuf {
        self.root.join("apptools").join("CI")
    }
}

/// Copies platform templates out of the suite checkout and writes the
/// metadata files the Android suite reads back.
#[derive(Debug)]
pub struct Stager<'a> {
    layout: &'a Layout,
}

impl<'a> Stager<'a> {
    /// Create a stager over the given layout.
    pub fn new(layout: &'a Layout) -> Self {
        Self { layout }
    }

    /// Stage the template tree for `platform` into the workspace.
    ///
    /// Removes a pre-existing staged directory first, copies the
    /// template subtree and ensures the `tools/` download destination
    /// exists.
    pub fn stage(&self, platform: Platform) -> Result<StagedEnvironment, StageError> {
        let template = self.layout.template_dir(platform);
        if !template.is_dir() {
            return Err(StageError::MissingTemplate(template));
        }

        let dest = self.layout.staged_dir(platform);
        if dest.exists() {
            fs::remove_dir_all(&dest)?;
        }
        fs::create_dir_all(&dest)?;

        fs_extra::dir::copy(
            &template,
            &dest,
            &fs_extra::dir::CopyOptions::new().content_only(true),
        )?;

        let tools_dir = dest.join("tools");
        fs::create_dir_all(&tools_dir)?;

        let entries = walkdir::WalkDir::new(&dest)
            .into_iter()
            .filter_map(Result::ok)
            .count();
        tracing::debug!("Staged {entries} entries into {}", dest.display());

        Ok(StagedEnvironment {
            root: dest,
            tools_dir,
        })
    }

    /// Write the Android metadata files into a staged tree.
    ///
    /// - `arch.txt`: the packaged app's CPU target, always `arm`;
    /// - `host.txt`: `Android` when the invoking host is the Linux
    ///   build host, `Windows` otherwise;
    /// - `version.txt`: the resolved version, with a ` 64` suffix when
    ///   64-bit packaging was requested and unsuffixed otherwise.
    pub fn write_android_metadata(
        &self,
        staged: &StagedEnvironment,
        host: HostOs,
        version: &Version,
        arch: Option<PackagingArch>,
    ) -> Result<(), StageError> {
        fs::write(staged.root().join("arch.txt"), TARGET_CPU)?;

        let host_label = if host.is_linux() { "Android" } else { "Windows" };
        fs::write(staged.root().join("host.txt"), host_label)?;

        let version_line = match arch {
            Some(PackagingArch::Bit64) => format!("{version} 64"),
            _ => version.to_string(),
        };
        fs::write(staged.root().join("version.txt"), version_line)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn layout_with_template(platform: Platform) -> (TempDir, Layout) {
        let tmp = TempDir::new().unwrap();
        let layout = Layout::new(tmp.path());
        let template = layout.template_dir(platform);
        fs::create_dir_all(template.join("apptools").join("CI")).unwrap();
        fs::write(
            template.join("apptools").join("CI").join("test_basic.py"),
            "# suite file\n",
        )
        .unwrap();
        (tmp, layout)
    }

    #[test]
    fn stages_template_and_tools_dir() {
        let (_tmp, layout) = layout_with_template(Platform::Ios);
        let staged = Stager::new(&layout).stage(Platform::Ios).unwrap();

        assert!(staged.ci_dir().join("test_basic.py").is_file());
        assert!(staged.tools_dir().is_dir());
    }

    #[test]
    fn staging_twice_equals_staging_once() {
        let (_tmp, layout) = layout_with_template(Platform::Android);
        let stager = Stager::new(&layout);

        let staged = stager.stage(Platform::Android).unwrap();
        fs::write(staged.root().join("leftover.txt"), "stale").unwrap();

        let staged = stager.stage(Platform::Android).unwrap();
        assert!(!staged.root().join("leftover.txt").exists());
        assert!(staged.ci_dir().join("test_basic.py").is_file());
    }

    #[test]
    fn missing_template_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let layout = Layout::new(tmp.path());
        let err = Stager::new(&layout).stage(Platform::Windows).unwrap_err();
        assert!(matches!(err, StageError::MissingTemplate(_)));
    }

    #[test]
    fn metadata_for_32bit_is_unsuffixed() {
        let (_tmp, layout) = layout_with_template(Platform::Android);
        let stager = Stager::new(&layout);
        let staged = stager.stage(Platform::Android).unwrap();
        let version = Version::parse("20.21.561.4").unwrap();

        stager
            .write_android_metadata(
                &staged,
                HostOs::Linux,
                &version,
                Some(PackagingArch::Bit32),
            )
            .unwrap();

        let read = |name: &str| fs::read_to_string(staged.root().join(name)).unwrap();
        assert_eq!(read("arch.txt"), "arm");
        assert_eq!(read("host.txt"), "Android");
        assert_eq!(read("version.txt"), "20.21.561.4");
    }

    #[test]
    fn metadata_for_64bit_carries_suffix() {
        let (_tmp, layout) = layout_with_template(Platform::Android);
        let stager = Stager::new(&layout);
        let staged = stager.stage(Platform::Android).unwrap();
        let version = Version::parse("20.21.561.4").unwrap();

        stager
            .write_android_metadata(
                &staged,
                HostOs::Windows,
                &version,
                Some(PackagingArch::Bit64),
            )
            .unwrap();

        let read = |name: &str| fs::read_to_string(staged.root().join(name)).unwrap();
        assert_eq!(read("host.txt"), "Windows");
        assert_eq!(read("version.txt"), "20.21.561.4 64");
    }
}
