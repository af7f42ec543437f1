//! Human-readable rendering of second counts.

use std::fmt;

/// A wrapper around a number of seconds that formats it as `1h 10m`, `45m`,
/// `1m 30s` or `30s` via the `Display` trait.
///
/// Fractional seconds are rounded to the nearest whole second.
pub struct Clock(pub f64);

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.max(0.0).round() as u64;
        let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

        let mut parts = Vec::with_capacity(3);
        if hours > 0 {
            parts.push(format!("{hours}h"));
        }
        if minutes > 0 {
            parts.push(format!("{minutes}m"));
        }
        if seconds > 0 || parts.is_empty() {
            parts.push(format!("{seconds}s"));
        }
        write!(f, "{}", parts.join(" "))
    }
}
