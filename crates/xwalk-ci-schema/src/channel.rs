//! Release channels of the Crosswalk runtime distribution.

/// A release track on the download server.
///
/// The channel selects which sub-path of the directory listing is
/// scraped for versions and which tree the artifact is fetched from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Production releases.
    #[default]
    Stable,
    /// Pre-release builds.
    Beta,
    /// Nightly builds.
    Canary,
}

impl Channel {
    /// Lowercase channel name, as used in release-server URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Beta => "beta",
            Self::Canary => "canary",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stable" => Ok(Self::Stable),
            "beta" => Ok(Self::Beta),
            "canary" => Ok(Self::Canary),
            _ => Err(format!("Unknown channel: {s}")),
        }
    }
}
