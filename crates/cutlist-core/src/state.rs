// crates/cutlist-core/src/state.rs
// Pure cut-list data — no CLI, no process spawning, no file handles.
// Loaded from / saved to the JSON document described in document.rs.
//
// Row order is significant: it is the order the cuts are emitted in and the
// `_<index>` suffix of every output file name.
//
// Every mutator either applies completely or returns an error and leaves the
// list as it was. begin <= end is re-checked on every write, not only on load.

use log::debug;

use crate::document::{self, RawDocument};
use crate::error::{EditError, LoadError, Result};
use crate::interval::Interval;
use crate::timecode::Timecode;

/// Which side of an interval `CutList::get` should return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    Begin,
    End,
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selected {
    One(Timecode),
    Both(Interval),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CutList {
    /// Media file every interval refers to.
    pub source_path:           String,
    /// Directory the cut files are written into.
    pub destination_directory: String,
    intervals:                 Vec<Interval>,
}

impl CutList {
    pub fn new(source_path: impl Into<String>, destination_directory: impl Into<String>) -> Self {
        Self {
            source_path:           source_path.into(),
            destination_directory: destination_directory.into(),
            intervals:             Vec::new(),
        }
    }

    // ── Persistence ──────────────────────────────────────────────────────────

    /// Parse and fully validate a document. Nothing partial is ever returned.
    pub fn from_json(text: &str) -> std::result::Result<Self, LoadError> {
        let value = document::parse(text)?;
        let (raw, intervals) = document::validate_value(&value)?;
        debug!("[store] loaded {} intervals for {:?}", intervals.len(), raw.source_path);
        Ok(Self {
            source_path:           raw.source_path,
            destination_directory: raw.destination_directory,
            intervals,
        })
    }

    /// Serialize with the canonical keys. `pretty` indents by two spaces.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        let raw = self.to_document();
        if pretty {
            serde_json::to_string_pretty(&raw)
        } else {
            serde_json::to_string(&raw)
        }
    }

    pub fn to_document(&self) -> RawDocument {
        RawDocument {
            source_path:           self.source_path.clone(),
            destination_directory: self.destination_directory.clone(),
            intervals:             self.intervals.iter().map(Interval::to_triples).collect(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn interval(&self, index: usize) -> Option<&Interval> {
        self.intervals.get(index)
    }

    pub fn get(&self, index: usize, part: Part) -> Result<Selected> {
        let iv = *self.interval(index).ok_or_else(|| self.out_of_range(index))?;
        Ok(match part {
            Part::Begin => Selected::One(iv.begin()),
            Part::End   => Selected::One(iv.end()),
            Part::Both  => Selected::Both(iv),
        })
    }

    // ── Mutation ─────────────────────────────────────────────────────────────

    /// Append to the end.
    pub fn push(&mut self, begin: Timecode, end: Timecode) -> Result<()> {
        let iv = self.checked(self.len(), begin, end)?;
        self.intervals.push(iv);
        debug!("[store] appended row {}: {begin}–{end}", self.len() - 1);
        Ok(())
    }

    /// Insert before `index`. `index == len()` appends.
    pub fn insert(&mut self, index: usize, begin: Timecode, end: Timecode) -> Result<()> {
        if index > self.len() {
            return Err(self.out_of_range(index));
        }
        let iv = self.checked(index, begin, end)?;
        self.intervals.insert(index, iv);
        debug!("[store] inserted row {index}: {begin}–{end}");
        Ok(())
    }

    /// Remove and return the interval at `index`; later rows shift up.
    pub fn remove(&mut self, index: usize) -> Result<Interval> {
        if index >= self.len() {
            return Err(self.out_of_range(index));
        }
        debug!("[store] removed row {index}");
        Ok(self.intervals.remove(index))
    }

    /// Update either bound (or both) of one row. A partial update that would
    /// leave the row inverted is refused.
    pub fn set_bounds(&mut self, index: usize, begin: Option<Timecode>, end: Option<Timecode>) -> Result<()> {
        let current = *self.interval(index).ok_or_else(|| self.out_of_range(index))?;
        let updated = current
            .with_bounds(begin, end)
            .map_err(|_| EditError::Inverted {
                index,
                begin: begin.unwrap_or(current.begin()),
                end:   end.unwrap_or(current.end()),
            })?;
        self.intervals[index] = updated;
        debug!("[store] row {index} now {}–{}", updated.begin(), updated.end());
        Ok(())
    }

    /// Move the row at `index` to `index + offset`. Rows in between shift by
    /// one toward the vacated slot; everything else keeps its place. Same end
    /// state as `|offset|` adjacent swaps. An offset of zero is a successful
    /// no-op as long as `index` exists.
    pub fn move_by(&mut self, index: usize, offset: isize) -> Result<()> {
        let len = self.len();
        if index >= len {
            return Err(self.out_of_range(index));
        }
        let target = index
            .checked_add_signed(offset)
            .filter(|&t| t < len)
            .ok_or(EditError::DestinationOutOfRange { index, offset, len })?;

        if target > index {
            self.intervals[index..=target].rotate_left(1);
        } else if target < index {
            self.intervals[target..=index].rotate_right(1);
        }
        debug!("[store] moved row {index} → {target}");
        Ok(())
    }

    /// Drop every interval. Source and destination are kept.
    pub fn clear(&mut self) {
        debug!("[store] cleared {} rows", self.len());
        self.intervals.clear();
    }

    // ── Internals ────────────────────────────────────────────────────────────

    fn checked(&self, index: usize, begin: Timecode, end: Timecode) -> Result<Interval> {
        Interval::new(begin, end).map_err(|_| EditError::Inverted { index, begin, end })
    }

    fn out_of_range(&self, index: usize) -> EditError {
        EditError::IndexOutOfRange { index, len: self.len() }
    }
}

impl<'a> IntoIterator for &'a CutList {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
