//! Per-process facts read from /proc/<pid>.
//!
//! This module provides:
//! - `state`: liveness from /proc/<pid>/stat
//! - `oom`: oom_score and oom_score_adj
//! - `memory`: resident set size from /proc/<pid>/statm
//! - `identity`: owner uid and comm name
//! - `scanner`: pid discovery
//! - `procfs`: pid-keyed front end over all of the above
//!
//! Every accessor reports a vanished process or a malformed file as `None`
//! (or `false` for liveness); processes exit at any moment.

pub mod identity;
pub mod memory;
pub mod oom;
pub mod procfs;
pub mod scanner;
pub mod state;

// Re-export commonly used types
pub use identity::{fix_truncated_utf8, read_comm, read_uid, COMM_CAPACITY};
pub use memory::{read_vm_rss_kib, PAGE_SIZE};
pub use oom::{read_oom_score, read_oom_score_adj};
pub use procfs::{ProcFs, PROC_ROOT};
pub use scanner::collect_pids;
pub use state::is_alive;
