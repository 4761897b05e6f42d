// crates/cutlist-media/src/paths.rs
// Single source of truth for which ffmpeg binary the rendered commands name.
//
// Lookup order:
//   1. an explicit override (CLI flag / CUTLIST_FFMPEG)
//   2. a private install under the app data dir (see app_ffmpeg_dir)
//   3. the bare name, left for the shell to resolve through PATH

use std::path::{Path, PathBuf};

use log::debug;

/// Private ffmpeg install location: `%APPDATA%\cutlist\ffmpeg` on Windows,
/// `~/.local/share/cutlist/ffmpeg` elsewhere.
///
/// `cutlist commands` searches here (directly, or one folder down as unpacked
/// release archives lay it out, see [`find_in`]) whenever no `--ffmpeg` /
/// `CUTLIST_FFMPEG` override is given. Nothing is ever downloaded into it.
pub fn app_ffmpeg_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    let base = std::env::var("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir());
    #[cfg(not(target_os = "windows"))]
    let base = std::env::var("HOME")
        .map(|h| PathBuf::from(h).join(".local").join("share"))
        .unwrap_or_else(|_| std::env::temp_dir());
    base.join("cutlist").join("ffmpeg")
}

fn ffmpeg_name() -> &'static str {
    #[cfg(target_os = "windows")]
    let name = "ffmpeg.exe";
    #[cfg(not(target_os = "windows"))]
    let name = "ffmpeg";
    name
}

/// Resolve the ffmpeg binary to put at the front of every command.
pub fn ffmpeg_bin(override_path: Option<&Path>) -> PathBuf {
    if let Some(p) = override_path {
        debug!("[paths] ffmpeg override {}", p.display());
        return p.to_path_buf();
    }
    if let Some(found) = find_in(&app_ffmpeg_dir(), ffmpeg_name()) {
        debug!("[paths] ffmpeg from app dir {}", found.display());
        return found;
    }
    PathBuf::from(ffmpeg_name())
}

/// Look for `name` directly in `dir`, or one level down (with or without a
/// `bin/` subfolder), matching the layout of unpacked release archives like
/// `ffmpeg-7.1-essentials_build/bin/ffmpeg`.
pub fn find_in(dir: &Path, name: &str) -> Option<PathBuf> {
    let flat = dir.join(name);
    if flat.is_file() {
        return Some(flat);
    }
    let entries = std::fs::read_dir(dir).ok()?;
    for entry in entries.flatten() {
        let candidate = entry.path().join("bin").join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        let candidate = entry.path().join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_dir_is_namespaced() {
        assert!(app_ffmpeg_dir().ends_with(Path::new("cutlist").join("ffmpeg")));
    }

    #[test]
    fn override_wins() {
        let p = Path::new("/custom/ffmpeg");
        assert_eq!(ffmpeg_bin(Some(p)), p);
    }

    #[test]
    fn finds_flat_and_nested_layouts() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_in(dir.path(), "ffmpeg"), None);

        let nested = dir.path().join("ffmpeg-7.1-essentials_build").join("bin");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("ffmpeg"), b"").unwrap();
        assert_eq!(find_in(dir.path(), "ffmpeg"), Some(nested.join("ffmpeg")));

        std::fs::write(dir.path().join("ffmpeg"), b"").unwrap();
        assert_eq!(find_in(dir.path(), "ffmpeg"), Some(dir.path().join("ffmpeg")));
    }

    #[test]
    fn missing_dir_finds_nothing() {
        assert_eq!(find_in(Path::new("/definitely/not/here"), "ffmpeg"), None);
    }
}
