// crates/cutlist-media/src/error.rs

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("no source file set")]
    NoSource,

    #[error("source path {0:?} has no file name to derive outputs from")]
    NoFileName(PathBuf),
}
