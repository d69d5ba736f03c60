//! OS color-scheme detection.
//!
//! The OS scheme is a read-only input to preference resolution. Detection
//! goes through a process-wide function pointer so tests (or embedders with
//! their own detection) can substitute a fixed mode.

use dark_light::{detect as detect_os_scheme, Mode as OsSchemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::preference::ColorMode;

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to read the OS color scheme.
///
/// Useful for testing or for forcing a specific mode. The override is
/// process-wide; tests that use it must not run concurrently with each
/// other.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

pub(crate) fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    // Platforms without a readable scheme report a fallback mode; treat
    // anything that is not explicitly dark as light.
    match detect_os_scheme() {
        OsSchemeMode::Dark => ColorMode::Dark,
        _ => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_detector_override_is_observed() {
        set_mode_detector(|| ColorMode::Dark);
        assert_eq!(detect_color_mode(), ColorMode::Dark);

        set_mode_detector(|| ColorMode::Light);
        assert_eq!(detect_color_mode(), ColorMode::Light);
    }
}
