//! Test-runner invocation.
//!
//! The suite is an external Python unittest tree. Everything it needs
//! from the pipeline travels in an explicit [`RunnerEnv`]; marshaling to
//! actual environment variables happens only at the subprocess spawn
//! site, so the configuration stays inspectable in tests.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;

use xwalk_ci_schema::{HostOs, Platform};

/// Discovery pattern matching the whole suite.
pub const DEFAULT_PATTERN: &str = "*.py";

/// Reduced pattern used for Android runs on non-Linux hosts, where only
/// the basic packaging tests are expected to work.
pub const BASIC_PATTERN: &str = "crosswalk_pkg_basic.py";

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to launch test discovery: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Test runner terminated without an exit code")]
    NoExitCode,
}

/// Pick the discovery pattern for a platform/host combination.
pub fn discovery_pattern(platform: Platform, host: HostOs) -> &'static str {
    match platform {
        Platform::Android if !host.is_linux() => BASIC_PATTERN,
        _ => DEFAULT_PATTERN,
    }
}

/// Environment handed to the test-suite process.
#[derive(Debug, Clone)]
pub struct RunnerEnv {
    /// Packaging-tool source tree (`CROSSWALK_APP_SRC`, trailing
    /// separator included).
    pub app_src: PathBuf,
    /// Download cache for the suite's tooling
    /// (`CROSSWALK_APP_TOOLS_CACHE_DIR`), absent on the iOS path.
    pub cache_dir: Option<PathBuf>,
    /// Connected device ids (`DEVICE_ID`, comma-joined, only when
    /// non-empty).
    pub device_ids: Vec<String>,
    /// Force the suite to skip emulator runs (`SKIP_EMULATOR`).
    pub skip_emulator: bool,
}

impl RunnerEnv {
    /// Marshal the configuration into environment variable pairs.
    pub fn to_env_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![(
            "CROSSWALK_APP_SRC",
            format!("{}{}", self.app_src.display(), std::path::MAIN_SEPARATOR),
        )];
        if let Some(cache_dir) = &self.cache_dir {
            pairs.push(("CROSSWALK_APP_TOOLS_CACHE_DIR", cache_dir.display().to_string()));
        }
        if !self.device_ids.is_empty() {
            pairs.push(("DEVICE_ID", self.device_ids.join(",")));
        }
        if self.skip_emulator {
            pairs.push(("SKIP_EMULATOR", "True".to_string()));
        }
        pairs
    }
}

/// A ready-to-spawn test-discovery invocation.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Working directory (`<staged>/apptools/CI`).
    pub working_dir: PathBuf,
    /// `--pattern` argument for unittest discovery.
    pub pattern: String,
    /// Suite environment.
    pub env: RunnerEnv,
}

impl RunnerConfig {
    /// Run `python -m unittest discover` and return its exit code.
    ///
    /// Suite output goes to the suite's own stderr; stdout is
    /// discarded, matching how the CI harness consumes the result (exit
    /// code only).
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Spawn`] when the interpreter cannot be
    /// launched and [`RunnerError::NoExitCode`] when the child was
    /// killed by a signal.
    pub fn discover(&self) -> Result<i32, RunnerError> {
        tracing::info!(
            "Discovering tests in {} (pattern {})",
            self.working_dir.display(),
            self.pattern
        );

        let mut cmd = Command::new("python");
        cmd.args(["-m", "unittest", "discover"])
            .arg(format!("--pattern={}", self.pattern))
            .current_dir(&self.working_dir)
            .stdout(Stdio::null());
        for (key, value) in self.env.to_env_pairs() {
            cmd.env(key, value);
        }

        let status = cmd.status()?;
        status.code().ok_or(RunnerError::NoExitCode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> RunnerEnv {
        RunnerEnv {
            app_src: PathBuf::from("/ci/src"),
            cache_dir: Some(PathBuf::from("/ci/tmp/apptools-android-tests/tools")),
            device_ids: vec!["emulator-5554".into(), "0123456789ABCDEF".into()],
            skip_emulator: true,
        }
    }

    #[test]
    fn env_pairs_are_marshaled_at_the_boundary() {
        let pairs = env().to_env_pairs();
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
        };

        assert!(get("CROSSWALK_APP_SRC").unwrap().ends_with(std::path::MAIN_SEPARATOR));
        assert_eq!(
            get("CROSSWALK_APP_TOOLS_CACHE_DIR"),
            Some("/ci/tmp/apptools-android-tests/tools")
        );
        assert_eq!(get("DEVICE_ID"), Some("emulator-5554,0123456789ABCDEF"));
        assert_eq!(get("SKIP_EMULATOR"), Some("True"));
    }

    #[test]
    fn optional_vars_are_omitted_when_unset() {
        let pairs = RunnerEnv {
            app_src: PathBuf::from("/ci/src"),
            cache_dir: None,
            device_ids: Vec::new(),
            skip_emulator: false,
        }
        .to_env_pairs();

        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["CROSSWALK_APP_SRC"]);
    }

    #[test]
    fn pattern_narrows_for_android_off_linux() {
        assert_eq!(
            discovery_pattern(Platform::Android, HostOs::Windows),
            BASIC_PATTERN
        );
        assert_eq!(
            discovery_pattern(Platform::Android, HostOs::Linux),
            DEFAULT_PATTERN
        );
        assert_eq!(
            discovery_pattern(Platform::Windows, HostOs::Windows),
            DEFAULT_PATTERN
        );
        assert_eq!(
            discovery_pattern(Platform::Ios, HostOs::MacOs),
            DEFAULT_PATTERN
        );
    }
}
