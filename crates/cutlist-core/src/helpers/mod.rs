// crates/cutlist-core/src/helpers/mod.rs

pub mod time;
