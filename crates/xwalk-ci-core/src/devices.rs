//! Connected-device enumeration for the Android path.

use std::process::Command;

/// Parse the output of `adb devices -l` into device identifiers.
///
/// The header line is skipped; each remaining line contributes its first
/// whitespace-delimited token, dropping blanks and the `*` markers adb
/// prints while its daemon starts up.
pub fn parse_devices(output: &str) -> Vec<String> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .filter(|token| *token != "*")
        .map(str::to_string)
        .collect()
}

/// Enumerate devices currently visible to adb.
///
/// A missing or failing `adb` is not fatal: the run proceeds without
/// device ids and the suite decides for itself what to skip.
pub fn list_devices() -> Vec<String> {
    match Command::new("adb").args(["devices", "-l"]).output() {
        Ok(out) if out.status.success() => {
            let devices = parse_devices(&String::from_utf8_lossy(&out.stdout));
            tracing::debug!("adb reported {} device(s)", devices.len());
            devices
        }
        Ok(out) => {
            tracing::warn!("adb devices exited with {}", out.status);
            Vec::new()
        }
        Err(err) => {
            tracing::warn!("adb not available: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_device_lines() {
        let output = "List of devices attached\n\
                      emulator-5554 device product:sdk model:Android_SDK\n\
                      0123456789ABCDEF device usb:1-1\n";
        assert_eq!(parse_devices(output), ["emulator-5554", "0123456789ABCDEF"]);
    }

    #[test]
    fn skips_daemon_noise_and_blank_lines() {
        let output = "List of devices attached\n\
                      * daemon not running; starting now *\n\
                      \n\
                      emulator-5554 device\n";
        assert_eq!(parse_devices(output), ["emulator-5554"]);
    }

    #[test]
    fn empty_listing_yields_no_devices() {
        assert!(parse_devices("List of devices attached\n").is_empty());
    }
}
