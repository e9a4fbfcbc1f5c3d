//! Resident memory of a process from `/proc/<pid>/statm`.

use once_cell::sync::Lazy;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Get the system page size in bytes (usually 4096).
fn get_page_size() -> u64 {
    #[cfg(unix)]
    {
        // SAFETY: sysconf is safe to call with _SC_PAGESIZE
        // Returns -1 on error - handled by the > 0 check
        unsafe {
            let size = libc::sysconf(libc::_SC_PAGESIZE);
            if size > 0 {
                return size as u64;
            }
        }
    }
    4096
}

/// System page size, looked up once.
pub static PAGE_SIZE: Lazy<u64> = Lazy::new(get_page_size);

/// Parses the resident page count (second field) of a `statm` line.
///
/// Format: `size resident shared text lib data dt`, all in pages.
pub fn parse_statm_resident_pages(content: &str) -> Option<u64> {
    let mut parts = content.split_whitespace();
    parts.next()?.parse::<u64>().ok()?;
    parts.next()?.parse::<u64>().ok()
}

/// Converts a page count to kiB, rounding down.
pub fn pages_to_kib(pages: u64, page_size: u64) -> u64 {
    pages.saturating_mul(page_size) / 1024
}

fn parse_vm_rss_pages(proc_path: &Path) -> Result<u64, io::Error> {
    let content = fs::read_to_string(proc_path.join("statm"))?;
    parse_statm_resident_pages(&content).ok_or_else(|| io::Error::other("Invalid statm format"))
}

/// Reads VmRSS of the process in kiB.
pub fn read_vm_rss_kib(proc_path: &Path) -> Option<u64> {
    match parse_vm_rss_pages(proc_path) {
        Ok(pages) => Some(pages_to_kib(pages, *PAGE_SIZE)),
        Err(e) => {
            debug!("Failed to read statm from {}: {}", proc_path.display(), e);
            None
        }
    }
}
