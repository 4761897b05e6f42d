// crates/cutlist-core/src/interval.rs
//
// One [begin, end) range over the source file. The constructor is the only
// way in, so every Interval that exists has begin <= end.

use crate::error::IntervalError;
use crate::timecode::Timecode;

/// Raw document shape of one interval: `[[h, m, s], [h, m, s]]`.
pub type IntervalTriples = [[u64; 3]; 2];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    begin: Timecode,
    end:   Timecode,
}

impl Interval {
    /// ```
    /// use cutlist_core::interval::Interval;
    /// use cutlist_core::timecode::Timecode;
    /// let a = Timecode::from_secs(5);
    /// let b = Timecode::from_secs(3);
    /// assert!(Interval::new(b, a).is_ok());
    /// assert!(Interval::new(a, b).is_err());
    /// ```
    pub fn new(begin: Timecode, end: Timecode) -> Result<Self, IntervalError> {
        if begin > end {
            return Err(IntervalError::Inverted { begin, end });
        }
        Ok(Self { begin, end })
    }

    pub fn begin(&self) -> Timecode { self.begin }
    pub fn end(&self)   -> Timecode { self.end }

    /// `end - begin`; the `-t` argument of the cut.
    pub fn duration(&self) -> Timecode {
        self.end - self.begin
    }

    /// Replace either bound, keeping the other. Fails if the result would be
    /// inverted; `self` is never modified.
    pub fn with_bounds(&self, begin: Option<Timecode>, end: Option<Timecode>) -> Result<Self, IntervalError> {
        Self::new(begin.unwrap_or(self.begin), end.unwrap_or(self.end))
    }

    pub fn to_triples(&self) -> IntervalTriples {
        [self.begin.to_triple(), self.end.to_triple()]
    }

    /// Materialize a raw document entry, checking both endpoints and order.
    pub fn from_triples([begin, end]: IntervalTriples) -> Result<Self, IntervalError> {
        Self::new(Timecode::from_triple(begin)?, Timecode::from_triple(end)?)
    }
}
