// crates/cutlist-media/src/lib.rs
//
// ffmpeg-facing side of cutlist: plans one cut per interval and renders the
// matching stream-copy command lines. No process is ever spawned here.
//
// To support another external tool:
//   1. Add a renderer module next to command.rs
//   2. Feed it the same CutSpec values from plan_cuts()

pub mod command;
pub mod error;
pub mod paths;
pub mod plan;

// Re-export the main public API so cutlist-cli imports are simple.
pub use command::{render_all, CutOptions};
pub use error::MediaError;
pub use plan::{plan_cuts, CutSpec};
