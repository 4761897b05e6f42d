// crates/cutlist-core/src/timecode.rs
//
// Whole-second (hour, minute, second) time value. Used both as a position in
// the source file and as a duration (the `-t` argument of a cut).
//
// Representation is always normalized: minute and second are 0..=59, hour is
// unbounded apart from the flat-seconds total having to fit in a u64. Two
// Timecodes are equal exactly when their flat-seconds values are equal, so the
// derived Eq/Hash agree with the hand-written Ord below.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::TimeError;

const SECS_PER_MIN:  u64 = 60;
const SECS_PER_HOUR: u64 = 60 * 60;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Timecode {
    hour:   u64,
    minute: u8,
    second: u8,
}

impl Timecode {
    pub const ZERO: Timecode = Timecode { hour: 0, minute: 0, second: 0 };

    /// Build from components. Fails when `minute` or `second` is outside
    /// 0..=59, or when the total would not fit in a u64 of seconds.
    ///
    /// ```
    /// use cutlist_core::timecode::Timecode;
    /// assert_eq!(Timecode::new(1, 2, 3).unwrap().as_secs(), 3723);
    /// assert!(Timecode::new(0, 60, 0).is_err());
    /// assert!(Timecode::new(0, 0, 61).is_err());
    /// ```
    pub fn new(hour: u64, minute: u64, second: u64) -> Result<Self, TimeError> {
        let out_of_range = || TimeError::OutOfRange { hour, minute, second };
        if minute >= SECS_PER_MIN || second >= SECS_PER_MIN {
            return Err(out_of_range());
        }
        hour.checked_mul(SECS_PER_HOUR)
            .and_then(|h| h.checked_add(minute * SECS_PER_MIN + second))
            .ok_or_else(out_of_range)?;
        Ok(Self { hour, minute: minute as u8, second: second as u8 })
    }

    /// Normalize a flat seconds count. Never fails.
    ///
    /// ```
    /// use cutlist_core::timecode::Timecode;
    /// let t = Timecode::from_secs(3725);
    /// assert_eq!((t.hour(), t.minute(), t.second()), (1, 2, 5));
    /// ```
    pub fn from_secs(total: u64) -> Self {
        Self {
            hour:   total / SECS_PER_HOUR,
            minute: ((total / SECS_PER_MIN) % SECS_PER_MIN) as u8,
            second: (total % SECS_PER_MIN) as u8,
        }
    }

    pub fn as_secs(self) -> u64 {
        (self.hour * 60 + self.minute as u64) * 60 + self.second as u64
    }

    pub fn hour(self)   -> u64 { self.hour }
    pub fn minute(self) -> u8  { self.minute }
    pub fn second(self) -> u8  { self.second }

    /// `[hour, minute, second]`, the shape stored in cut-list documents.
    pub fn to_triple(self) -> [u64; 3] {
        [self.hour, self.minute as u64, self.second as u64]
    }

    pub fn from_triple([hour, minute, second]: [u64; 3]) -> Result<Self, TimeError> {
        Self::new(hour, minute, second)
    }
}

impl Ord for Timecode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_secs().cmp(&other.as_secs())
    }
}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Timecode {
    type Output = Timecode;

    fn add(self, rhs: Timecode) -> Timecode {
        Timecode::from_secs(self.as_secs().saturating_add(rhs.as_secs()))
    }
}

/// Floors at zero: durations are never negative.
impl Sub for Timecode {
    type Output = Timecode;

    fn sub(self, rhs: Timecode) -> Timecode {
        Timecode::from_secs(self.as_secs().saturating_sub(rhs.as_secs()))
    }
}

/// `HH:MM:SS`, the form ffmpeg accepts for `-ss` and `-t`.
impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for Timecode {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::helpers::time::parse_timecode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tc(h: u64, m: u64, s: u64) -> Timecode {
        Timecode::new(h, m, s).unwrap()
    }

    #[test]
    fn components_round_trip_through_flat_seconds() {
        for (h, m, s) in [(0, 0, 0), (0, 59, 59), (1, 0, 0), (12, 34, 56), (100, 1, 1)] {
            let t = Timecode::from_secs(tc(h, m, s).as_secs());
            assert_eq!(t.to_triple(), [h, m, s]);
        }
    }

    #[test]
    fn flat_seconds_round_trip() {
        for s in [0, 1, 59, 60, 61, 3599, 3600, 86_399, 360_000, u64::MAX] {
            assert_eq!(Timecode::from_secs(s).as_secs(), s);
        }
    }

    #[test]
    fn out_of_range_components_are_rejected() {
        assert_eq!(
            Timecode::new(0, 61, 0),
            Err(TimeError::OutOfRange { hour: 0, minute: 61, second: 0 })
        );
        assert!(Timecode::new(0, 0, 60).is_err());
        assert!(Timecode::new(u64::MAX, 0, 0).is_err());
        assert!(Timecode::new(0, 59, 59).is_ok());
    }

    #[test]
    fn addition_carries_into_minutes_and_hours() {
        assert_eq!(tc(0, 59, 30) + tc(0, 0, 45), tc(1, 0, 15));
        assert_eq!(tc(0, 0, 0) + tc(2, 3, 4), tc(2, 3, 4));
    }

    #[test]
    fn subtraction_floors_at_zero() {
        assert_eq!(tc(0, 1, 30) - tc(0, 0, 45), tc(0, 0, 45));
        assert_eq!(tc(0, 0, 3) - tc(0, 0, 5), Timecode::ZERO);
        assert_eq!((Timecode::ZERO - tc(9, 9, 9)).as_secs(), 0);
    }

    #[test]
    fn ordering_follows_flat_seconds() {
        let mut v = vec![tc(1, 0, 0), tc(0, 59, 59), tc(0, 0, 1), tc(0, 1, 0)];
        v.sort();
        let secs: Vec<u64> = v.iter().map(|t| t.as_secs()).collect();
        assert_eq!(secs, vec![1, 60, 3599, 3600]);
        assert!(tc(0, 2, 0) > tc(0, 1, 59));
        assert_eq!(tc(0, 1, 0).cmp(&Timecode::from_secs(60)), Ordering::Equal);
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(tc(0, 1, 30).to_string(), "00:01:30");
        assert_eq!(tc(123, 4, 5).to_string(), "123:04:05");
    }
}
