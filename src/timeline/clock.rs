//! Clock text parsing and `MM:SS` formatting.

/// Parse a clock field into seconds.
///
/// Accepts `H:MM:SS[.fff]` (raw source clock) and `MM:SS[.fff]` (already
/// relative clock). The leading field is unbounded, the following ones must
/// stay below 60. Empty, negative, malformed or overflowing text yields
/// `None`.
pub fn parse_clock(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let parts: Vec<&str> = text.split(':').collect();
    let seconds = match parts.as_slice() {
        [h, m, s] => {
            let hours = parse_whole(h)?;
            let minutes = parse_whole(m)?;
            if minutes >= 60 {
                return None;
            }
            hours.checked_mul(3600)?.checked_add(minutes.checked_mul(60)?)? as f64
                + parse_seconds(s)?
        }
        [m, s] => parse_whole(m)?.checked_mul(60)? as f64 + parse_seconds(s)?,
        _ => return None,
    };

    Some(seconds)
}

/// Seconds elapsed from `start` to `end`, both clock texts.
pub fn clock_difference(start: &str, end: &str) -> Option<f64> {
    Some(parse_clock(end)? - parse_clock(start)?)
}

/// Format seconds as `MM:SS`, rounded to the nearest second.
///
/// Minutes are not wrapped into hours. Negative or non-finite input formats
/// as `00:00`.
pub fn format_mmss(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Like [`format_mmss`], but blank for a missing value.
pub fn format_optional_mmss(seconds: Option<f64>) -> String {
    seconds.map(format_mmss).unwrap_or_default()
}

fn parse_whole(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

fn parse_seconds(field: &str) -> Option<f64> {
    // Leading digit rules out signs, "inf" and "nan".
    if !field.bytes().next()?.is_ascii_digit() {
        return None;
    }
    if !field.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    let value: f64 = field.parse().ok()?;
    (value < 60.0).then_some(value)
}
