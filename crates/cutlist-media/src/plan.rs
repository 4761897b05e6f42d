// crates/cutlist-media/src/plan.rs
//
// Turns a CutList into one CutSpec per interval.
//
// Design:
//   • `CutSpec`     — everything needed to describe one lossless cut: where
//                     to read, where to start, how long, where to write.
//   • `plan_cuts()` — pure function; walks the list in row order so the
//                     `_<index>` suffix of each output matches its row.
//
// Output naming:
//   <destination_directory>/<source stem>_<index><.source extension>
//   e.g. talk.mp4 → cuts/talk_0.mp4, cuts/talk_1.mp4, …
//   A source without an extension yields outputs without one.

use std::path::{Path, PathBuf};

use log::debug;

use cutlist_core::{CutList, Timecode};

use crate::error::MediaError;

// ── Public types ──────────────────────────────────────────────────────────────

/// One interval's contribution to the output set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutSpec {
    /// Row of the interval in the cut list.
    pub index:    usize,
    /// Media file to read from.
    pub source:   PathBuf,
    /// Position in the source at which the cut begins (`-ss`).
    pub start:    Timecode,
    /// Length of the cut (`-t`), `end - begin`.
    pub duration: Timecode,
    /// Destination file, including extension.
    pub output:   PathBuf,
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Plan every cut in row order. An empty list plans nothing, even without a
/// source path.
pub fn plan_cuts(list: &CutList) -> Result<Vec<CutSpec>, MediaError> {
    if list.is_empty() {
        return Ok(Vec::new());
    }
    if list.source_path.trim().is_empty() {
        return Err(MediaError::NoSource);
    }

    let source   = PathBuf::from(&list.source_path);
    let dest_dir = Path::new(&list.destination_directory);

    let cuts = list.iter()
        .enumerate()
        .map(|(index, iv)| -> Result<CutSpec, MediaError> {
            Ok(CutSpec {
                index,
                source:   source.clone(),
                start:    iv.begin(),
                duration: iv.duration(),
                output:   output_path(&source, dest_dir, index)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("[cut] planned {} cuts from {}", cuts.len(), source.display());
    Ok(cuts)
}

/// `dest_dir/<stem>_<index><.ext>` for `source`.
///
/// ```
/// use std::path::Path;
/// use cutlist_media::plan::output_path;
/// let out = output_path(Path::new("/v/talk.mp4"), Path::new("/v/cuts"), 3).unwrap();
/// assert_eq!(out, Path::new("/v/cuts/talk_3.mp4"));
/// ```
pub fn output_path(source: &Path, dest_dir: &Path, index: usize) -> Result<PathBuf, MediaError> {
    let stem = source.file_stem()
        .ok_or_else(|| MediaError::NoFileName(source.to_path_buf()))?;

    let mut name = stem.to_os_string();
    name.push(format!("_{index}"));
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    Ok(dest_dir.join(name))
}
