// crates/cutlist-core/src/helpers/time.rs
//
// Shared timestamp parsing and formatting used by cutlist-cli and
// cutlist-media.
//
// Canonical source for turning user-typed text into a Timecode. The strict
// `HH:MM:SS` rendering used in ffmpeg arguments is Timecode's Display impl;
// this module holds the looser, human-facing forms.

use crate::error::TimeError;
use crate::timecode::Timecode;

/// Parse a user-typed timestamp.
///
/// | Input     | Meaning                         |
/// |-----------|---------------------------------|
/// | `H:MM:SS` | hours, minutes, seconds         |
/// | `M:SS`    | minutes, seconds                |
/// | `S`       | flat seconds, normalized        |
///
/// Colon forms reject minute/second fields above 59; a bare count is
/// normalized, so `"90"` is one minute thirty.
///
/// ```
/// use cutlist_core::helpers::time::parse_timecode;
/// assert_eq!(parse_timecode("1:02:03").unwrap().as_secs(), 3723);
/// assert_eq!(parse_timecode("1:30").unwrap().as_secs(),    90);
/// assert_eq!(parse_timecode("90").unwrap().as_secs(),      90);
/// assert!(parse_timecode("0:61").is_err());
/// ```
pub fn parse_timecode(text: &str) -> Result<Timecode, TimeError> {
    let trimmed = text.trim();
    let unparsable = || TimeError::Unparsable(text.to_string());

    let fields = trimmed
        .split(':')
        .map(|f| {
            if f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            f.parse::<u64>().ok()
        })
        .collect::<Option<Vec<u64>>>()
        .ok_or_else(unparsable)?;

    match fields.as_slice() {
        [secs]                 => Ok(Timecode::from_secs(*secs)),
        [min, sec]             => Timecode::new(0, *min, *sec),
        [hour, min, sec]       => Timecode::new(*hour, *min, *sec),
        _                      => Err(unparsable()),
    }
}

/// Format a duration as a compact human-readable string for listings.
///
/// | Range         | Format       | Example   |
/// |---------------|--------------|-----------|
/// | ≥ 1 h         | `H:MM:SS`    | `1:04:35` |
/// | ≥ 1 min       | `M:SS`       | `3:07`    |
/// | < 1 min       | `Ss`         | `42s`     |
///
/// ```
/// use cutlist_core::helpers::time::format_duration;
/// use cutlist_core::timecode::Timecode;
/// assert_eq!(format_duration(Timecode::from_secs(42)),   "42s");
/// assert_eq!(format_duration(Timecode::from_secs(187)),  "3:07");
/// assert_eq!(format_duration(Timecode::from_secs(3875)), "1:04:35");
/// ```
pub fn format_duration(t: Timecode) -> String {
    if t.hour() > 0 {
        format!("{}:{:02}:{:02}", t.hour(), t.minute(), t.second())
    } else if t.minute() > 0 {
        format!("{}:{:02}", t.minute(), t.second())
    } else {
        format!("{}s", t.second())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_timecode("  0:01:30 \n").unwrap().as_secs(), 90);
    }

    #[test]
    fn garbage_is_unparsable() {
        for bad in ["", ":", "1::2", "a:b", "-5", "1:2:3:4", "+3", "1.5"] {
            assert!(
                matches!(parse_timecode(bad), Err(TimeError::Unparsable(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn colon_forms_are_range_checked() {
        assert!(matches!(parse_timecode("0:60:00"), Err(TimeError::OutOfRange { .. })));
        assert!(matches!(parse_timecode("5:60"),    Err(TimeError::OutOfRange { .. })));
        assert_eq!(parse_timecode("100:00:00").unwrap().hour(), 100);
    }

    #[test]
    fn from_str_delegates_here() {
        let t: Timecode = "2:03".parse().unwrap();
        assert_eq!(t.to_string(), "00:02:03");
    }

    #[test]
    fn zero_duration_label() {
        assert_eq!(format_duration(Timecode::ZERO), "0s");
    }
}
