// crates/cutlist-cli/src/cli.rs
//
// Argument definitions. Every flag that changes output has an environment
// fallback so a shell profile can pin it.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};

use cutlist_core::Timecode;

#[derive(Parser, Debug)]
#[command(name = "cutlist", version)]
#[command(about = "Keep a list of time ranges over a video and print one lossless ffmpeg cut per range")]
pub struct Cli {
    /// Indent JSON when saving or exporting (env accepts 1/0, yes/no, on/off)
    #[arg(long, global = true, env = "CUTLIST_PRETTY", action = ArgAction::SetTrue,
          value_parser = BoolishValueParser::new())]
    pub pretty: bool,

    /// ffmpeg binary to put in generated commands. Without it, `commands`
    /// looks in ~/.local/share/cutlist/ffmpeg (%APPDATA%\cutlist\ffmpeg on
    /// Windows) and then falls back to `ffmpeg` on PATH
    #[arg(long, global = true, env = "CUTLIST_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty cut list
    New {
        file: PathBuf,
        /// Source media file
        #[arg(long)]
        source: Option<String>,
        /// Directory the cuts are written to
        #[arg(long)]
        dest: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// List intervals
    Show { file: PathBuf },
    /// Add an interval (times as H:MM:SS, M:SS or seconds)
    Add(AddArgs),
    /// Remove one or more rows
    Remove {
        file: PathBuf,
        #[arg(required = true)]
        rows: Vec<usize>,
    },
    /// Move a row up (negative offset) or down
    Move {
        file:   PathBuf,
        row:    usize,
        #[arg(allow_negative_numbers = true)]
        offset: isize,
    },
    /// Change one or both bounds of a row
    Set(SetArgs),
    /// Write the normalized list to a new file
    SaveAs {
        file:     PathBuf,
        new_file: PathBuf,
        /// Overwrite NEW_FILE if it exists
        #[arg(long)]
        force:    bool,
    },
    /// Remove all intervals, keep source and destination
    Clear { file: PathBuf },
    /// Set the source media file
    Source { file: PathBuf, path: String },
    /// Set the destination directory
    Dest { file: PathBuf, dir: String },
    /// Validate a cut list and report what is wrong with it
    Check { file: PathBuf },
    /// Print one ffmpeg command per interval
    Commands { file: PathBuf },
    /// Print the normalized JSON document
    Export { file: PathBuf },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    pub file:  PathBuf,
    pub begin: Timecode,
    pub end:   Timecode,
    /// Insert before this row instead of appending
    #[arg(long)]
    pub at:    Option<usize>,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    pub file:   PathBuf,
    pub row:    usize,
    #[command(flatten)]
    pub bounds: Bounds,
}

/// At least one of the two must be given.
#[derive(Args, Debug)]
#[group(required = true, multiple = true)]
pub struct Bounds {
    #[arg(long)]
    pub begin: Option<Timecode>,
    #[arg(long)]
    pub end:   Option<Timecode>,
}
