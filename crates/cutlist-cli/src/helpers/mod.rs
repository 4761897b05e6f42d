// crates/cutlist-cli/src/helpers/mod.rs

pub mod format;
pub mod log;
