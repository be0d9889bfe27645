//! Human-readable formatting for byte sizes and durations.

use std::time::Duration;

use crate::error::{Error, Result};

/// Binary unit prefixes, bytes through exbibytes
const UNITS: [&str; 7] = ["", "K", "M", "G", "T", "P", "E"];

/// Format a byte count as a human-readable string.
///
/// Uses 1024 as the division factor. Plain bytes render as an integer;
/// anything larger renders with two decimals and the binary-unit suffix.
/// The unit scale deliberately stops at `EiB`: values past the exabyte
/// range keep the last unit rather than growing further (a `u64` tops out
/// at `"16.00 EiB"`).
///
/// # Examples
///
/// ```
/// use rex_console::human_readable_size;
///
/// assert_eq!(human_readable_size(10), "10 B");
/// assert_eq!(human_readable_size(1024), "1.00 KiB");
/// assert_eq!(human_readable_size(1536), "1.50 KiB");
/// assert_eq!(human_readable_size(1024 * 1024), "1.00 MiB");
/// assert_eq!(human_readable_size(1024u64.pow(6)), "1.00 EiB");
/// ```
pub fn human_readable_size(size: u64) -> String {
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{size} B")
    } else {
        format!("{:.2} {}iB", value, UNITS[unit])
    }
}

/// Format a seconds value as a human-readable `??h??min??s` string.
///
/// Fractional seconds are truncated. Hours are the largest unit: durations
/// never roll over into days. Negative or non-finite input is outside the
/// domain and fails with [`Error::InvalidSeconds`].
///
/// # Examples
///
/// ```
/// use rex_console::human_readable_seconds;
///
/// assert_eq!(human_readable_seconds(10.0).unwrap(), "10s");
/// assert_eq!(human_readable_seconds(60.0).unwrap(), "01min00s");
/// assert_eq!(human_readable_seconds(3600.0).unwrap(), "01h00min00s");
/// ```
pub fn human_readable_seconds(secs: f64) -> Result<String> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(Error::InvalidSeconds(secs));
    }
    Ok(format_hms(secs as u64))
}

/// Format a measured [`Duration`] as a human-readable `??h??min??s` string.
///
/// Infallible form of [`human_readable_seconds`] for the common case where
/// the value comes from the clock and cannot be negative.
pub fn human_readable_duration(duration: Duration) -> String {
    format_hms(duration.as_secs())
}

fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{hours:02}h{minutes:02}min{seconds:02}s")
    } else if minutes > 0 {
        format!("{minutes:02}min{seconds:02}s")
    } else {
        format!("{seconds:02}s")
    }
}
