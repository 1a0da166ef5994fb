//! Target platforms of the packaging toolchain under test.

/// A platform whose test suite can be provisioned.
///
/// Each platform maps to one subtree of the companion test-suite
/// repository and (for the platforms that download a runtime) one
/// sub-path of the release server.
///
/// # Example
///
/// ```
/// use xwalk_ci_schema::Platform;
///
/// let p: Platform = "android".parse().unwrap();
/// assert_eq!(p.tests_dir_name(), "apptools-android-tests");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Android packaging (APK); downloads a stable-channel runtime.
    Android,
    /// Windows packaging (MSI); downloads a canary-channel runtime.
    Windows,
    /// iOS packaging; ships no embedded runtime, so nothing is downloaded.
    Ios,
}

impl Platform {
    /// Lowercase platform identifier, as used in release-server URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Windows => "windows",
            Self::Ios => "ios",
        }
    }

    /// Name of this platform's test directory, both inside the suite
    /// repository template and inside the staged workspace.
    pub fn tests_dir_name(&self) -> String {
        format!("apptools-{}-tests", self.as_str())
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "android" => Ok(Self::Android),
            "windows" => Ok(Self::Windows),
            "ios" => Ok(Self::Ios),
            _ => Err(format!(
                "Unknown platform: {s} (expected android, windows or ios)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_platforms() {
        assert_eq!("android".parse::<Platform>().unwrap(), Platform::Android);
        assert_eq!("WINDOWS".parse::<Platform>().unwrap(), Platform::Windows);
        assert_eq!("ios".parse::<Platform>().unwrap(), Platform::Ios);
    }

    #[test]
    fn parse_rejects_unknown_platform() {
        let err = "beos".parse::<Platform>().unwrap_err();
        assert!(err.contains("beos"));
        assert!(err.contains("android"));
    }

    #[test]
    fn tests_dir_names() {
        assert_eq!(Platform::Ios.tests_dir_name(), "apptools-ios-tests");
        assert_eq!(
            Platform::Windows.tests_dir_name(),
            "apptools-windows-tests"
        );
    }
}
