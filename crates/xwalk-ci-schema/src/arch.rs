//! Packaging bit-width of the downloaded runtime archive.

/// 32-bit vs 64-bit build variant of the runtime artifact.
///
/// This is the bit-width of the *packaged* runtime, selected with the
/// `-a` flag. It is distinct from the CPU target recorded in the staged
/// `arch.txt` metadata file, which describes what the packaged app runs
/// on.
///
/// # Example
///
/// ```
/// use xwalk_ci_schema::PackagingArch;
///
/// let arch: PackagingArch = "64bit".parse().unwrap();
/// assert_eq!(arch.as_str(), "64bit");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackagingArch {
    /// 32-bit runtime package.
    Bit32,
    /// 64-bit runtime package.
    Bit64,
}

impl PackagingArch {
    /// String form accepted by the CLI (`32bit` / `64bit`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bit32 => "32bit",
            Self::Bit64 => "64bit",
        }
    }
}

impl std::fmt::Display for PackagingArch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PackagingArch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "32bit" | "32" => Ok(Self::Bit32),
            "64bit" | "64" => Ok(Self::Bit64),
            _ => Err(format!("Unknown arch: {s} (expected 32bit or 64bit)")),
        }
    }
}
