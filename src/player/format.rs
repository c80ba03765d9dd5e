//! Time and percentage conversions for the scrub bar and time label.

/// Convert a playback position to a scrub bar percentage.
///
/// Rounds up to two decimal places so the bar never under-reports progress
/// at the end of the stream. Returns `None` while the duration is unknown
/// (zero, negative, NaN or infinite).
pub fn time_to_percent(current_time: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 || current_time.is_nan() {
        return None;
    }
    let percent = ((current_time / duration) * 10000.0).ceil() / 100.0;
    Some(percent.clamp(0.0, 100.0))
}

/// Convert a scrub bar percentage back to a playback position in seconds.
pub fn percent_to_time(percent: f64, duration: f64) -> f64 {
    (percent * duration) / 100.0
}

/// Whole seconds left until the end of the stream.
///
/// Reports 0 when the duration is not known yet.
pub fn remaining_seconds(current_time: f64, duration: f64) -> u64 {
    if !duration.is_finite() || duration <= 0.0 {
        return 0;
    }
    let remaining = duration - current_time.max(0.0);
    if remaining.is_nan() || remaining <= 0.0 {
        0
    } else {
        remaining as u64
    }
}

/// Left-pad `number` with zeros to `width` characters. Never truncates.
pub fn zero_pad(number: u64, width: usize) -> String {
    format!("{:0>width$}", number, width = width)
}

/// Format seconds as `MM:SS`, or `HH:MM:SS` once the value reaches an hour.
///
/// Fractional seconds are truncated; negative and NaN input formats as zero.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_nan() || seconds < 0.0 {
        0
    } else {
        seconds as u64
    };

    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let secs = total % 60;

    let formatted = format!("{}:{}", zero_pad(minutes, 2), zero_pad(secs, 2));
    if hours > 0 {
        format!("{}:{}", zero_pad(hours, 2), formatted)
    } else {
        formatted
    }
}
