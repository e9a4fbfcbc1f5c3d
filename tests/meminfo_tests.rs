//! Integration tests for the global memory reader.
//!
//! These tests drive MemInfoReader against meminfo files on disk, including
//! rewriting the file between reads to verify the handle is re-read.

use lowmem_stat::meminfo::{parse_meminfo, AvailableSource};
use lowmem_stat::{MemInfoError, MemInfoReader, EXIT_MEMINFO_FIELD_MISSING, EXIT_MEMINFO_UNREADABLE};
use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tempfile::{tempdir, NamedTempFile};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

const MEMINFO_LINUX_5: &str = "MemTotal:       16302724 kB
MemFree:         9317520 kB
MemAvailable:   11946352 kB
Buffers:          228640 kB
Cached:          3386904 kB
SwapCached:            0 kB
Active:          4066508 kB
Inactive:        2270476 kB
SwapTotal:       8388604 kB
SwapFree:        8388604 kB
Dirty:               300 kB
Shmem:            721500 kB
HugePages_Total:       0
Hugepagesize:       2048 kB
";

const MEMINFO_LINUX_3_10: &str = "MemTotal:         102400 kB
MemFree:            1024 kB
Buffers:             512 kB
Cached:             2048 kB
SwapCached:            0 kB
SwapTotal:        204800 kB
SwapFree:         102400 kB
Shmem:               256 kB
";

fn write_meminfo(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("Failed to create temp file");
    f.write_all(content.as_bytes()).expect("Failed to write meminfo");
    f
}

#[test]
fn test_reader_modern_kernel() {
    let f = write_meminfo(MEMINFO_LINUX_5);
    let mut reader = MemInfoReader::with_path(f.path());

    let m = reader.read().expect("meminfo should parse");
    assert_eq!(m.mem_total_mib, 15920);
    assert_eq!(m.mem_available_mib, 11666);
    assert_eq!(m.mem_available_percent, 73);
    assert_eq!(m.swap_free_percent, 100);
}

#[test]
fn test_reader_old_kernel_uses_estimate() {
    let f = write_meminfo(MEMINFO_LINUX_3_10);
    let mut reader = MemInfoReader::with_path(f.path());

    // 1024 + 2048 + 512 - 256 = 3328 kiB
    let m = reader.read().expect("meminfo should parse");
    assert_eq!(m.mem_available_mib, 3);
    assert_eq!(m.mem_available_percent, 3);
    assert_eq!(m.swap_total_mib, 200);
    assert_eq!(m.swap_free_mib, 100);
    assert_eq!(m.swap_free_percent, 50);

    // Estimation recurs without error
    assert_eq!(reader.read().expect("meminfo should parse"), m);

    assert_eq!(
        parse_meminfo(MEMINFO_LINUX_3_10).unwrap().available_source,
        AvailableSource::Estimated
    );
}

#[test]
fn test_reader_warns_once_about_estimate() {
    let f = write_meminfo(MEMINFO_LINUX_3_10);
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut reader = MemInfoReader::with_path(f.path());
        for _ in 0..3 {
            reader.read().expect("meminfo should parse");
        }
    });

    let output = logs.contents();
    assert_eq!(output.matches("does not provide MemAvailable").count(), 1);
}

#[test]
fn test_reader_no_estimate_warning_on_modern_kernel() {
    let f = write_meminfo(MEMINFO_LINUX_5);
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut reader = MemInfoReader::with_path(f.path());
        reader.read().expect("meminfo should parse");
        reader.read().expect("meminfo should parse");
    });

    assert!(!logs.contents().contains("MemAvailable"));
}

#[test]
fn test_reader_rereads_from_start() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("meminfo");
    fs::write(&path, MEMINFO_LINUX_5).expect("Failed to write meminfo");

    let mut reader = MemInfoReader::with_path(&path);
    let first = reader.read().expect("meminfo should parse");

    // Same inode, new content: the long-lived handle must see it
    let changed = MEMINFO_LINUX_5.replace("11946352", "00001024");
    fs::write(&path, changed).expect("Failed to rewrite meminfo");

    let second = reader.read().expect("meminfo should parse");
    assert_ne!(first, second);
    assert_eq!(second.mem_available_mib, 1);
    assert_eq!(second.mem_available_percent, 0);
}

#[test]
fn test_reader_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut reader = MemInfoReader::with_path(dir.path().join("meminfo"));

    let err = reader.read().expect_err("missing file must fail");
    assert!(matches!(err, MemInfoError::Open { .. }));
    assert_eq!(err.exit_code(), EXIT_MEMINFO_UNREADABLE);
}

#[test]
fn test_reader_empty_file() {
    let f = write_meminfo("");
    let mut reader = MemInfoReader::with_path(f.path());

    let err = reader.read().expect_err("empty file must fail");
    assert!(matches!(err, MemInfoError::Empty { .. }));
    assert_eq!(err.exit_code(), EXIT_MEMINFO_UNREADABLE);
}

#[test]
fn test_reader_missing_mem_total() {
    let f = write_meminfo(&MEMINFO_LINUX_5.replace("MemTotal:", "MemTotl:"));
    let mut reader = MemInfoReader::with_path(f.path());

    let err = reader.read().expect_err("MemTotal is mandatory");
    assert_eq!(err.exit_code(), EXIT_MEMINFO_FIELD_MISSING);
}

#[test]
fn test_reader_only_reads_buffer_size() {
    // Fields past the 8191-byte window are invisible
    let mut content = String::from("MemTotal: 1000 kB\nMemAvailable: 500 kB\nSwapTotal: 0 kB\n");
    content.push_str(&"X".repeat(9000));
    content.push_str("\nSwapFree: 0 kB\n");
    let f = write_meminfo(&content);
    let mut reader = MemInfoReader::with_path(f.path());

    assert!(matches!(
        reader.read(),
        Err(MemInfoError::MissingField("SwapFree:"))
    ));
}

#[test]
fn test_reader_live_proc_meminfo() {
    let mut reader = MemInfoReader::new();
    let m = reader.read().expect("/proc/meminfo should be readable");

    assert!(m.mem_total_kib > 0);
    assert!((0..=100).contains(&m.mem_available_percent));
    if m.swap_total_kib == 0 {
        assert_eq!(m.swap_free_percent, 0);
    }
}
