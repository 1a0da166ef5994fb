//! Operating system of the machine running the provisioner.

/// The invoking host's operating system.
///
/// Host identity influences two things downstream: the `host.txt`
/// metadata written into the staged Android tree and the test-discovery
/// pattern passed to the runner. It describes the machine running this
/// pipeline, never the target device, and is detected once at startup so
/// tests can substitute a fixed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    /// Linux, the reference build host.
    Linux,
    /// Windows.
    Windows,
    /// macOS.
    MacOs,
}

impl HostOs {
    /// Detect the operating system this process is running on.
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::MacOs
        }
    }

    /// Whether this is the reference Linux build host.
    pub fn is_linux(&self) -> bool {
        matches!(self, Self::Linux)
    }
}

impl std::fmt::Display for HostOs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::MacOs => "macos",
        };
        write!(f, "{name}")
    }
}
