// hdentropy/src/logger.rs
//! Logger initialization for the `hdentropy` binary and its tests.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Initializes `env_logger` writing to stderr.
///
/// `level` overrides `RUST_LOG` when given. Calling this more than once is
/// harmless; only the first call installs a logger.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);

    let _ = builder.try_init();
}

/// Maps the global `--quiet` / `--debug` flags to a level override.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
