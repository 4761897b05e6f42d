// crates/cutlist-media/src/command.rs
//
// Renders a CutSpec as an ffmpeg invocation. Nothing here runs a process;
// callers print the result or hand the argument vector to their own runner.
//
// Template (stream copy, no re-encode):
//
//   ffmpeg -ss HH:MM:SS -t HH:MM:SS -i <source> -vcodec copy -acodec copy <output>
//
// `-ss` before `-i` is an input seek, which is what a keyframe-aligned
// lossless cut wants.

use std::borrow::Cow;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::plan::CutSpec;

/// Settings shared by every rendered command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutOptions {
    /// ffmpeg executable, a bare name is resolved by the shell's `PATH`.
    pub ffmpeg:      PathBuf,
    pub video_codec: String,
    pub audio_codec: String,
}

impl Default for CutOptions {
    fn default() -> Self {
        Self {
            ffmpeg:      PathBuf::from("ffmpeg"),
            video_codec: "copy".into(),
            audio_codec: "copy".into(),
        }
    }
}

impl CutSpec {
    /// Arguments after the program name, unquoted.
    pub fn args(&self, opts: &CutOptions) -> Vec<OsString> {
        vec![
            "-ss".into(),     self.start.to_string().into(),
            "-t".into(),      self.duration.to_string().into(),
            "-i".into(),      self.source.clone().into_os_string(),
            "-vcodec".into(), opts.video_codec.clone().into(),
            "-acodec".into(), opts.audio_codec.clone().into(),
            self.output.clone().into_os_string(),
        ]
    }

    /// One shell-ready line, program name included.
    ///
    /// ```
    /// use cutlist_core::CutList;
    /// use cutlist_core::Timecode;
    /// use cutlist_media::{plan_cuts, CutOptions};
    ///
    /// let mut list = CutList::new("/v/talk.mp4", "/v/cuts");
    /// list.push(Timecode::from_secs(65), Timecode::from_secs(125)).unwrap();
    /// let cut = &plan_cuts(&list).unwrap()[0];
    /// assert_eq!(
    ///     cut.command_line(&CutOptions::default()),
    ///     "ffmpeg -ss 00:01:05 -t 00:01:00 -i /v/talk.mp4 -vcodec copy -acodec copy /v/cuts/talk_0.mp4",
    /// );
    /// ```
    pub fn command_line(&self, opts: &CutOptions) -> String {
        std::iter::once(opts.ffmpeg.clone().into_os_string())
            .chain(self.args(opts))
            .map(|arg| shell_quote(&arg.to_string_lossy()).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Command lines for a whole plan, in row order.
pub fn render_all(cuts: &[CutSpec], opts: &CutOptions) -> Vec<String> {
    cuts.iter().map(|c| c.command_line(opts)).collect()
}

/// POSIX single-quote `s` unless every character is shell-safe.
///
/// ```
/// use cutlist_media::command::shell_quote;
/// assert_eq!(shell_quote("/v/a_0.mp4"),  "/v/a_0.mp4");
/// assert_eq!(shell_quote("my clip.mp4"), "'my clip.mp4'");
/// assert_eq!(shell_quote("it's.mp4"),    r"'it'\''s.mp4'");
/// ```
pub fn shell_quote(s: &str) -> Cow<'_, str> {
    let safe = |c: char| c.is_ascii_alphanumeric() || "_-./:@%+=,".contains(c);
    if !s.is_empty() && s.chars().all(safe) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(format!("'{}'", s.replace('\'', r"'\''")))
}
