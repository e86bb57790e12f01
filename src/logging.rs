use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const APP_DIR: &str = "trip-adder";
const LOG_FILE: &str = "trip-adder.log";

/// Default log location, `<data dir>/trip-adder/trip-adder.log`.
pub fn default_log_path() -> Option<PathBuf> {
    let data_dir = dirs::data_local_dir()?;
    Some(data_dir.join(APP_DIR).join(LOG_FILE))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))
}

/// Install the tracing subscriber. The terminal belongs to the UI, so
/// logs are appended to a file. Returns the path in use, if any.
pub fn init(log_file: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let Some(path) = log_file.or_else(default_log_path) else {
        return Ok(None);
    };
    let file = open_log_file(&path)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file));
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,trip_adder=debug".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .wrap_err("failed to install log subscriber")?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path() {
        // Should return Some on most systems
        if let Some(p) = default_log_path() {
            assert!(p.ends_with("trip-adder/trip-adder.log"));
        }
    }

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = std::env::temp_dir().join(format!("trip-adder-test-{}", std::process::id()));
        let path = dir.join("nested").join("app.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}
