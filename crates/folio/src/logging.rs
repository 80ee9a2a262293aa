//! File logging.
//!
//! The terminal belongs to the UI, so events go to `folio.log` in the data
//! directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::WrapErr;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FOLIO_LOG";

const LOG_FILE: &str = "folio.log";

/// Filter from `FOLIO_LOG`, or `info`.
fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `<dir>/folio.log`.
///
/// Returns the log file path.
pub fn init(dir: &Path) -> color_eyre::Result<PathBuf> {
    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create log directory {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!(e))?;

    Ok(path)
}

/// Install file logging if a log directory is known.
///
/// Failures are reported on stderr and the app runs without a log.
pub fn try_init(dir: Option<&Path>) -> Option<PathBuf> {
    let dir = dir?;
    match init(dir) {
        Ok(path) => Some(path),
        Err(e) => {
            eprintln!("folio: logging disabled: {e:#}");
            None
        }
    }
}
