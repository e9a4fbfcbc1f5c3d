//! Owner and short name of a process.

use std::fs::{self, File};
use std::io::{self, Read};
use std::os::unix::fs::MetadataExt;
use std::path::Path;
use tracing::debug;

/// Buffer size for `/proc/<pid>/comm`: the kernel's TASK_COMM_LEN, 15
/// characters plus terminator.
pub const COMM_CAPACITY: usize = 16;

/// Returns the uid owning `/proc/<pid>`, which is the process's EUID.
pub fn read_uid(proc_path: &Path) -> Option<u32> {
    match fs::metadata(proc_path) {
        Ok(meta) => Some(meta.uid()),
        Err(e) => {
            debug!("Failed to stat {}: {}", proc_path.display(), e);
            None
        }
    }
}

/// Drops an incomplete UTF-8 sequence at the end of `bytes`.
///
/// The kernel cuts `comm` at a byte boundary, which can split a multi-byte
/// character. Invalid bytes elsewhere are left for the lossy conversion.
pub fn fix_truncated_utf8(bytes: &mut Vec<u8>) {
    let Err(e) = std::str::from_utf8(bytes).map(|_| ()) else {
        return;
    };
    if e.error_len().is_none() {
        bytes.truncate(e.valid_up_to());
    }
}

/// Turns raw `comm` bytes into a name: requires at least one character plus
/// the newline, strips the newline and repairs truncated UTF-8.
pub fn parse_comm(mut bytes: Vec<u8>) -> Option<String> {
    if bytes.len() < 2 {
        return None;
    }
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    fix_truncated_utf8(&mut bytes);
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

fn read_comm_bytes(proc_path: &Path, capacity: usize) -> io::Result<Vec<u8>> {
    let limit = capacity.saturating_sub(1);
    let mut bytes = Vec::with_capacity(limit);
    File::open(proc_path.join("comm"))?
        .take(limit as u64)
        .read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Reads `/proc/<pid>/comm` into at most `capacity - 1` bytes.
///
/// Only a trailing newline is stripped. When `capacity` cuts the name short,
/// the last byte read is kept, so the result can be one character longer than
/// what earlyoom reports for the same capacity (it always drops byte `n - 1`).
pub fn read_comm(proc_path: &Path, capacity: usize) -> Option<String> {
    match read_comm_bytes(proc_path, capacity) {
        Ok(bytes) => parse_comm(bytes),
        Err(e) => {
            debug!("Failed to read comm from {}: {}", proc_path.display(), e);
            None
        }
    }
}
