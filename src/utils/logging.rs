//! Log setup. Records go to ~/.flappy/flappy.log because the terminal is
//! owned by the game screen while it runs.

use crate::core::constants::LOG_FILE;
use crate::utils::persistence::data_path;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io;

/// Initialize the global logger. `RUST_LOG` overrides the `info` default.
///
/// Returns an error if the log file cannot be opened; callers treat that as
/// "run without logs".
pub fn init() -> io::Result<()> {
    let path = data_path(LOG_FILE)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;

    log::info!("Logging to {}", path.display());
    Ok(())
}
