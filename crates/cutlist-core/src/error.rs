// crates/cutlist-core/src/error.rs
//
// Error types for the cut-list data model.
//
// Three families, one per call site:
//   TimeError     — a (hour, minute, second) triple or a typed timestamp is bad.
//   LoadError     — a JSON document was rejected. Tagged so callers can tell
//                   malformed text, a wrong shape and a bad interval apart.
//   EditError     — an in-place mutation was refused. The list is unchanged.

use thiserror::Error;

use crate::timecode::Timecode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("time {hour}:{minute:02}:{second:02} is out of range (minute and second must be 0..=59)")]
    OutOfRange { hour: u64, minute: u64, second: u64 },

    #[error("cannot parse {0:?} as a timestamp (expected H:MM:SS, M:SS or seconds)")]
    Unparsable(String),
}

/// Why a single interval is not well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error(transparent)]
    Endpoint(#[from] TimeError),

    #[error("begin {begin} is after end {end}")]
    Inverted { begin: Timecode, end: Timecode },
}

#[derive(Debug, Error)]
pub enum LoadError {
    /// The text is not JSON at all.
    #[error("malformed JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// Valid JSON, wrong fields or types.
    #[error("document does not match the cut-list shape: {0}")]
    Schema(String),

    /// Well-typed, but interval `index` is not a valid time range.
    #[error("interval {index}: {source}")]
    Temporal {
        index:  usize,
        #[source]
        source: IntervalError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("index {index} out of range (list has {len} intervals)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot move interval {index} by {offset}: destination outside 0..{len}")]
    DestinationOutOfRange { index: usize, offset: isize, len: usize },

    #[error("interval {index} would end before it begins ({begin} > {end})")]
    Inverted { index: usize, begin: Timecode, end: Timecode },
}

pub type Result<T, E = EditError> = std::result::Result<T, E>;
