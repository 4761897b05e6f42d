// crates/cutlist-cli/src/helpers/log.rs
//
// Logger setup for the binary. Library crates only use the `log` macros;
// this is the one place a backend is installed.
//
// Levels: warnings by default, `-v` for info, `-vv` for the per-edit debug
// lines from cutlist-core. RUST_LOG still overrides everything.
//
// Output goes to stderr so `cutlist commands FILE > cuts.sh` stays clean.

use env_logger::Env;

pub fn init(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}
