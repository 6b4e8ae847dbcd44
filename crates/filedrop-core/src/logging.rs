//! Logging init: file under the XDG state dir, with stderr fallback.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,filedrop=debug"))
}

fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("filedrop")?;
    let log_dir = xdg_dirs.get_state_home().join("filedrop");
    fs::create_dir_all(&log_dir)?;
    Ok(log_dir.join("filedrop.log"))
}

fn try_init_file() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(path)
}

/// Initialize structured logging to `~/.local/state/filedrop/filedrop.log`.
/// If the state dir is unusable (unwritable, no home), logs go to stderr
/// instead; the CLI never fails over logging.
pub fn init() {
    match try_init_file() {
        Ok(path) => tracing::info!("filedrop logging initialized at {}", path.display()),
        Err(err) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .init();
            tracing::warn!("file logging unavailable ({:#}); logging to stderr", err);
        }
    }
}
