//! Shared value types for the Crosswalk test-environment provisioner.
//!
//! Everything in this crate is plain data: release channels, target
//! platforms, packaging bit-widths, four-part Crosswalk version strings
//! and the invoking host's operating system. No I/O happens here.

pub mod arch;
pub mod channel;
pub mod host;
pub mod platform;
pub mod version;

// Re-exports
pub use arch::PackagingArch;
pub use channel::Channel;
pub use host::HostOs;
pub use platform::Platform;
pub use version::{Version, VersionError};
