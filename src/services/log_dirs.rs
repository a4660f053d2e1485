//! XDG-compliant log directory management
//!
//! Logs are stored in `$XDG_STATE_HOME/breaches/logs/` (typically
//! `~/.local/state/breaches/logs/`). Each run writes its own PID-named file so
//! an `import` and a `view` running side by side do not interleave output.
//! Files older than a day are removed on startup.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};

/// Minimum age for log files to be cleaned up (24 hours)
const CLEANUP_AGE: Duration = Duration::from_secs(24 * 60 * 60);

const LOG_PREFIX: &str = "breaches-";

/// Cached log directory path
static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the base log directory, creating it if necessary.
///
/// Falls back to the system temp directory if the XDG location is unavailable
/// or cannot be created.
pub fn log_dir() -> &'static PathBuf {
    LOG_DIR.get_or_init(|| {
        let dir = get_xdg_log_dir().unwrap_or_else(|| std::env::temp_dir().join("breaches-logs"));

        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("Failed to create log directory {:?}: {}", dir, e);
            let fallback = std::env::temp_dir().join("breaches-logs");
            let _ = fs::create_dir_all(&fallback);
            return fallback;
        }

        dir
    })
}

/// Get the XDG state home log directory
fn get_xdg_log_dir() -> Option<PathBuf> {
    if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
        let path = PathBuf::from(state_home);
        if path.is_absolute() {
            return Some(path.join("breaches").join("logs"));
        }
    }

    dirs::home_dir().map(|home| home.join(".local").join("state").join("breaches").join("logs"))
}

/// Path of this process's log file: `{log_dir}/breaches-{PID}.log`
pub fn main_log_path() -> PathBuf {
    log_dir().join(format!("{LOG_PREFIX}{}.log", std::process::id()))
}

/// Remove log files from earlier runs that are older than a day.
pub fn cleanup_stale_logs() {
    cleanup_stale_logs_in_dir(log_dir(), std::process::id(), CLEANUP_AGE);
}

fn cleanup_stale_logs_in_dir(dir: &Path, current_pid: u32, age: Duration) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        let Some(pid) = extract_pid_from_filename(&name) else {
            continue;
        };
        if pid == current_pid {
            continue;
        }

        if entry.file_type().map(|t| t.is_file()).unwrap_or(false)
            && is_file_older_than(&entry.path(), age)
        {
            if let Err(e) = fs::remove_file(entry.path()) {
                tracing::debug!("Failed to clean up stale log {:?}: {}", entry.path(), e);
            } else {
                tracing::debug!("Cleaned up stale log file: {:?}", entry.path());
            }
        }
    }
}

/// Check if a file is older than the specified duration
fn is_file_older_than(path: &Path, age: Duration) -> bool {
    let Ok(modified) = fs::metadata(path).and_then(|m| m.modified()) else {
        return false;
    };

    SystemTime::now()
        .duration_since(modified)
        .map(|elapsed| elapsed > age)
        .unwrap_or(false)
}

/// Extract the PID from a name like `breaches-12345.log`
fn extract_pid_from_filename(name: &str) -> Option<u32> {
    name.strip_prefix(LOG_PREFIX)?
        .strip_suffix(".log")?
        .parse()
        .ok()
}

/// Print the directories and files used by the program to stdout
pub fn print_all_paths(config_path: Option<&Path>) {
    use std::io::Write;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let config = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("<unavailable>"));

    writeln!(handle, "Config:     {}", config.display()).ok();
    writeln!(handle, "Logs:       {}", log_dir().display()).ok();
    writeln!(handle, "  this run:     {}", main_log_path().display()).ok();
}
