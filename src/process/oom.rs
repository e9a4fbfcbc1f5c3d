//! OOM killer inputs: `/proc/<pid>/oom_score` and `/proc/<pid>/oom_score_adj`.

use crate::fields::parse_leading_int;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Reads `/proc/<pid>/<name>` and parses the leading integer.
fn read_proc_file_integer(proc_path: &Path, name: &str) -> io::Result<i32> {
    let content = fs::read_to_string(proc_path.join(name))?;
    parse_leading_int(&content)
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| io::Error::other(format!("Invalid {} format", name)))
}

/// Reads the kernel's badness score (>= 0) for the process.
pub fn read_oom_score(proc_path: &Path) -> Option<u32> {
    match read_proc_file_integer(proc_path, "oom_score") {
        Ok(v) => u32::try_from(v).ok(),
        Err(e) => {
            debug!("Failed to read oom_score from {}: {}", proc_path.display(), e);
            None
        }
    }
}

/// Reads the user-set score bias, -1000..=1000.
///
/// Negative values are valid, so absence is reported as `None`.
pub fn read_oom_score_adj(proc_path: &Path) -> Option<i32> {
    match read_proc_file_integer(proc_path, "oom_score_adj") {
        Ok(v) => Some(v),
        Err(e) => {
            debug!(
                "Failed to read oom_score_adj from {}: {}",
                proc_path.display(),
                e
            );
            None
        }
    }
}
