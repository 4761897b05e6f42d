// crates/cutlist-cli/src/session.rs
//
// File bookkeeping around one CutList: which file it came from, whether it
// changed, and writing it back.
//
// Saves go through a temp file in the target's directory followed by a
// rename, so an interrupted save never leaves a half-written cut list.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use cutlist_core::{CutList, EditCommand};

pub struct Session {
    path:     PathBuf,
    pub list: CutList,
    dirty:    bool,
}

impl Session {
    /// A new, unsaved session that will be written to `path`.
    pub fn create(path: impl Into<PathBuf>, list: CutList) -> Self {
        Self { path: path.into(), list, dirty: true }
    }

    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let list = CutList::from_json(&text)
            .with_context(|| format!("loading {}", path.display()))?;
        info!("[session] opened {} ({} intervals)", path.display(), list.len());
        Ok(Self { path, list, dirty: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Apply one edit; only a successful edit marks the session dirty.
    pub fn apply(&mut self, command: EditCommand) -> Result<()> {
        self.list.apply(command.clone())
            .with_context(|| format!("applying {command:?}"))?;
        self.dirty = true;
        Ok(())
    }

    pub fn save(&mut self, pretty: bool) -> Result<()> {
        let mut text = self.list.to_json(pretty).context("serializing cut list")?;
        text.push('\n');
        write_atomic(&self.path, text.as_bytes())
            .with_context(|| format!("writing {}", self.path.display()))?;
        self.dirty = false;
        info!("[session] saved {}", self.path.display());
        Ok(())
    }

    /// Save under a new name; later `save` calls go to the new path.
    pub fn save_as(&mut self, path: impl Into<PathBuf>, pretty: bool) -> Result<()> {
        self.path = path.into();
        self.save(pretty)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}
