//! Process discovery: numeric directories under the proc root.

use std::fs;
use std::path::Path;

/// Scans `root` for numeric pid directories, sorted ascending.
///
/// Stops after `max` entries when given. An unreadable root yields nothing.
pub fn collect_pids(root: &Path, max: Option<usize>) -> Vec<u32> {
    let mut out = Vec::new();
    if let Ok(entries) = fs::read_dir(root) {
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = match name.to_str() {
                Some(v) => v,
                None => continue,
            };
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            let pid: u32 = match name.parse() {
                Ok(v) => v,
                Err(_) => continue,
            };
            out.push(pid);
        }
    }
    out.sort_unstable();
    if let Some(maxp) = max {
        out.truncate(maxp);
    }
    out
}
