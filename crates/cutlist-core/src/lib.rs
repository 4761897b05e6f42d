// crates/cutlist-core/src/lib.rs
//
// Cut-list data model. No process spawning, no filesystem access — just the
// validated, ordered list of time ranges and its JSON form.

pub mod commands;
pub mod document;
pub mod error;
pub mod helpers;
pub mod interval;
pub mod state;
pub mod timecode;

pub use commands::EditCommand;
pub use error::{EditError, IntervalError, LoadError, TimeError};
pub use interval::Interval;
pub use state::{CutList, Part, Selected};
pub use timecode::Timecode;
