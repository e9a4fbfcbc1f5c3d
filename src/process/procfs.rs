//! Pid-keyed access to the per-process introspection files.

use super::identity::{read_comm, read_uid};
use super::memory::read_vm_rss_kib;
use super::oom::{read_oom_score, read_oom_score_adj};
use super::scanner::collect_pids;
use super::state;
use std::path::{Path, PathBuf};

/// Default mount point of procfs.
pub const PROC_ROOT: &str = "/proc";

/// Handle on a procfs mount. Each query opens, reads and closes its own file;
/// nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ProcFs {
    root: PathBuf,
}

impl ProcFs {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<pid>`
    pub fn pid_path(&self, pid: u32) -> PathBuf {
        self.root.join(pid.to_string())
    }

    /// False when the process is gone or a zombie.
    pub fn is_alive(&self, pid: u32) -> bool {
        state::is_alive(&self.pid_path(pid))
    }

    pub fn oom_score(&self, pid: u32) -> Option<u32> {
        read_oom_score(&self.pid_path(pid))
    }

    pub fn oom_score_adj(&self, pid: u32) -> Option<i32> {
        read_oom_score_adj(&self.pid_path(pid))
    }

    pub fn vm_rss_kib(&self, pid: u32) -> Option<u64> {
        read_vm_rss_kib(&self.pid_path(pid))
    }

    pub fn uid(&self, pid: u32) -> Option<u32> {
        read_uid(&self.pid_path(pid))
    }

    /// Process name, read into at most `capacity - 1` bytes.
    pub fn comm(&self, pid: u32, capacity: usize) -> Option<String> {
        read_comm(&self.pid_path(pid), capacity)
    }

    pub fn pids(&self, max: Option<usize>) -> Vec<u32> {
        collect_pids(&self.root, max)
    }
}

impl Default for ProcFs {
    fn default() -> Self {
        Self::new(PROC_ROOT)
    }
}
