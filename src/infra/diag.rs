//! File-based diagnostics. Failures never surface in the UI: they are
//! appended to log files under `.promptdeck/errors/` and the interface keeps
//! whatever it was showing (empty grids after a failed startup load).

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::infra::constants::STORE_DIR;

pub fn errors_dir() -> PathBuf {
    PathBuf::from(STORE_DIR).join("errors")
}

/// Append a timestamped line to an error log. Best-effort: diagnostics must
/// never take the UI down, so every step swallows its own errors.
pub fn log_error(file: &str, msg: &str) {
    let dir = errors_dir();
    let _ = fs::create_dir_all(&dir);
    let ts = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    if let Ok(mut f) = fs::OpenOptions::new().create(true).append(true).open(dir.join(file)) {
        let _ = writeln!(f, "[{}] {}", ts, msg);
    }
}
