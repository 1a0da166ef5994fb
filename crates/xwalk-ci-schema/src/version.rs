//! Crosswalk version identifiers.

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Version`].
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    /// The string is not four dot-separated numeric components.
    #[error("Invalid version: expected major.minor.build.patch, got '{0}'")]
    Malformed(String),
}

/// A Crosswalk release version: four dot-separated numeric components,
/// `major.minor.build.patch`.
///
/// Versions are taken verbatim from the release server's directory
/// listing; only the shape is validated, and no ordering beyond the
/// listing's own document order is ever imposed on them.
///
/// # Example
///
/// ```
/// use xwalk_ci_schema::Version;
///
/// let v = Version::parse("20.50.533.12").unwrap();
/// assert_eq!(v.as_str(), "20.50.533.12");
/// assert!(Version::parse("1.2.3").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    /// Parse and validate a version string.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::Malformed`] unless the input is exactly
    /// four non-empty, all-digit components separated by dots.
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() == 4
            && parts
                .iter()
                .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
        {
            Ok(Self(s.to_string()))
        } else {
            Err(VersionError::Malformed(s.to_string()))
        }
    }

    /// The raw version string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
