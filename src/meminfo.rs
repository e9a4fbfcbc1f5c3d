//! System-wide memory and swap accounting from `/proc/meminfo`.
//!
//! [`MemInfoReader`] keeps one handle to `/proc/meminfo` open and re-reads it
//! from the start on every call. Parsing itself lives in [`parse_meminfo`],
//! which has no side effects and can be fed any buffer.
//!
//! All values read from the kernel are in kiB. Percentages and MiB values are
//! derived with integer (floor) division, multiplying before dividing.

use crate::error::MemInfoError;
use crate::fields::{get_entry, get_entry_fatal};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default location of the global memory accounting file.
pub const MEMINFO_PATH: &str = "/proc/meminfo";

/// Read buffer size. On Linux 5.3 `/proc/meminfo` is about 1400 bytes.
pub const MEMINFO_BUFFER_BYTES: usize = 8192;

/// Point-in-time memory and swap figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemorySnapshot {
    pub mem_total_kib: i64,
    pub mem_total_mib: i64,
    pub mem_available_mib: i64,
    pub mem_available_percent: i64,
    pub swap_total_kib: i64,
    pub swap_total_mib: i64,
    pub swap_free_mib: i64,
    pub swap_free_percent: i64,
}

impl MemorySnapshot {
    /// Builds a snapshot from raw kiB values.
    pub fn from_kib(
        mem_total_kib: i64,
        mem_available_kib: i64,
        swap_total_kib: i64,
        swap_free_kib: i64,
    ) -> Self {
        Self {
            mem_total_kib,
            mem_total_mib: mem_total_kib / 1024,
            mem_available_mib: mem_available_kib / 1024,
            mem_available_percent: percent_of(mem_available_kib, mem_total_kib),
            swap_total_kib,
            swap_total_mib: swap_total_kib / 1024,
            swap_free_mib: swap_free_kib / 1024,
            swap_free_percent: percent_of(swap_free_kib, swap_total_kib),
        }
    }
}

/// `value * 100 / total`, truncated. A zero total yields 0.
fn percent_of(value: i64, total: i64) -> i64 {
    if total > 0 {
        value.saturating_mul(100) / total
    } else {
        0
    }
}

impl fmt::Display for MemorySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mem avail: {:5} of {:5} MiB ({:2} %), swap free: {:4} of {:4} MiB ({:2} %)",
            self.mem_available_mib,
            self.mem_total_mib,
            self.mem_available_percent,
            self.swap_free_mib,
            self.swap_total_mib,
            self.swap_free_percent
        )
    }
}

/// Hands the one-line status text for `m` to `out`.
///
/// The caller picks the destination, e.g. `|l| info!("{l}")` for routine
/// output or `|l| warn!("{l}")` when memory is getting low.
pub fn print_mem_stats<F>(out: F, m: &MemorySnapshot)
where
    F: FnOnce(&str),
{
    out(&m.to_string());
}

/// Where the available-memory figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailableSource {
    /// The kernel reported `MemAvailable` (Linux 3.14+).
    Kernel,
    /// Estimated as `MemFree + Cached + Buffers - Shmem`.
    Estimated,
}

/// Result of parsing one `/proc/meminfo` buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMemInfo {
    pub snapshot: MemorySnapshot,
    pub available_source: AvailableSource,
}

/// Approximates `MemAvailable` for kernels that do not provide it.
pub fn available_guesstimate(buf: &str) -> Result<i64, MemInfoError> {
    let cached = get_entry_fatal(buf, "Cached:")?;
    let mem_free = get_entry_fatal(buf, "MemFree:")?;
    let buffers = get_entry_fatal(buf, "Buffers:")?;
    let shmem = get_entry_fatal(buf, "Shmem:")?;

    Ok(mem_free
        .saturating_add(cached)
        .saturating_add(buffers)
        .saturating_sub(shmem))
}

/// Parses the contents of `/proc/meminfo`.
pub fn parse_meminfo(buf: &str) -> Result<ParsedMemInfo, MemInfoError> {
    let mem_total_kib = get_entry_fatal(buf, "MemTotal:")?;
    let swap_total_kib = get_entry_fatal(buf, "SwapTotal:")?;
    let swap_free_kib = get_entry_fatal(buf, "SwapFree:")?;

    let (mem_available_kib, available_source) = match get_entry(buf, "MemAvailable:") {
        Some(v) => (v, AvailableSource::Kernel),
        None => (available_guesstimate(buf)?, AvailableSource::Estimated),
    };

    Ok(ParsedMemInfo {
        snapshot: MemorySnapshot::from_kib(
            mem_total_kib,
            mem_available_kib,
            swap_total_kib,
            swap_free_kib,
        ),
        available_source,
    })
}

/// Re-reads `/proc/meminfo` through one long-lived handle.
///
/// Create once at startup and keep it for the lifetime of the process.
pub struct MemInfoReader {
    path: PathBuf,
    file: Option<File>,
    guesstimate_warned: bool,
}

impl MemInfoReader {
    pub fn new() -> Self {
        Self::with_path(MEMINFO_PATH)
    }

    /// Reader for a meminfo-formatted file at `path`.
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            file: None,
            guesstimate_warned: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the current contents.
    pub fn read(&mut self) -> Result<MemorySnapshot, MemInfoError> {
        let buf = self.read_raw()?;
        let parsed = parse_meminfo(&buf)?;

        if parsed.available_source == AvailableSource::Estimated
            && self.take_guesstimate_warning()
        {
            warn!(
                "Your kernel does not provide MemAvailable data (needs 3.14+), \
                 falling back to guesstimate"
            );
        }

        Ok(parsed.snapshot)
    }

    /// True exactly once: the first time the estimate is used.
    fn take_guesstimate_warning(&mut self) -> bool {
        !std::mem::replace(&mut self.guesstimate_warned, true)
    }

    fn read_raw(&mut self) -> Result<String, MemInfoError> {
        let path = &self.path;
        let file = match self.file.take() {
            Some(f) => f,
            None => {
                let f = File::open(path).map_err(|source| MemInfoError::Open {
                    path: path.clone(),
                    source,
                })?;
                debug!("Opened {}", path.display());
                f
            }
        };
        let file = self.file.insert(file);

        let read_err = |source| MemInfoError::Read {
            path: path.clone(),
            source,
        };
        file.seek(SeekFrom::Start(0)).map_err(read_err)?;

        let mut bytes = Vec::with_capacity(MEMINFO_BUFFER_BYTES);
        file.take((MEMINFO_BUFFER_BYTES - 1) as u64)
            .read_to_end(&mut bytes)
            .map_err(read_err)?;

        if bytes.is_empty() {
            return Err(MemInfoError::Empty { path: path.clone() });
        }

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Default for MemInfoReader {
    fn default() -> Self {
        Self::new()
    }
}
