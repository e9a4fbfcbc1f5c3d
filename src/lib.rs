//! lowmem-stat library
//!
//! Read-and-parse layer for low-memory monitors. It turns `/proc/meminfo`
//! into a [`MemorySnapshot`] with the two percentages policy code acts on,
//! and answers point questions about single processes through [`ProcFs`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use lowmem_stat::{fatal, print_mem_stats, MemInfoReader, ProcFs, COMM_CAPACITY};
//!
//! // Create once, reuse for every poll
//! let mut reader = MemInfoReader::new();
//! let m = reader.read().unwrap_or_else(|e| fatal(&e));
//! print_mem_stats(|line| println!("{line}"), &m);
//!
//! let procfs = ProcFs::default();
//! let pid = std::process::id();
//! if procfs.is_alive(pid) {
//!     println!(
//!         "{:?} uses {:?} kiB, oom_score {:?}",
//!         procfs.comm(pid, COMM_CAPACITY),
//!         procfs.vm_rss_kib(pid),
//!         procfs.oom_score(pid)
//!     );
//! }
//! ```
//!
//! # Failure model
//!
//! Per-process lookups never fail hard: a vanished process reads as `None`.
//! The global reader returns a [`MemInfoError`] when `/proc/meminfo` is
//! unusable; pass it to [`fatal`] to exit with the documented status code.

pub mod error;
pub mod fields;
pub mod meminfo;
pub mod process;

// Re-export main types for convenience
pub use error::{fatal, MemInfoError, EXIT_MEMINFO_FIELD_MISSING, EXIT_MEMINFO_UNREADABLE};
pub use meminfo::{parse_meminfo, print_mem_stats, MemInfoReader, MemorySnapshot};
pub use process::{ProcFs, COMM_CAPACITY};
