//! Runtime requirement validation for lowmem-stat.
//!
//! Verifies that procfs is mounted where configured, that the memory
//! accounting file parses, and warns when running unprivileged.

use crate::config::Config;
use lowmem_stat::process::PAGE_SIZE;
use lowmem_stat::{MemInfoError, MemInfoReader, ProcFs};
use nix::unistd::geteuid;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Validate all runtime requirements
pub fn validate_requirements(config: &Config) -> Result<(), ValidationError> {
    info!("🔍 Validating runtime requirements...");

    check_user_privileges();
    check_meminfo(config)?;
    check_proc_access(config)?;
    debug!("Page size: {} bytes", *PAGE_SIZE);

    info!("✅ All runtime requirements validated");
    Ok(())
}

/// Check if running with sufficient privileges
fn check_user_privileges() {
    if !geteuid().is_root() {
        warn!("⚠️  Not running as root - processes of other users cannot be acted upon");
    } else {
        info!("✅ Running as root (uid=0)");
    }
}

/// Check that the memory accounting file is readable and complete
fn check_meminfo(config: &Config) -> Result<(), ValidationError> {
    let mut reader = MemInfoReader::with_path(&config.meminfo_path);
    match reader.read() {
        Ok(m) => {
            info!("✅ {} readable: {}", config.meminfo_path.display(), m);
            Ok(())
        }
        Err(e) => {
            error!("❌ {}", e);
            Err(ValidationError::MemInfo(e))
        }
    }
}

/// Check that per-process entries can be listed and read
fn check_proc_access(config: &Config) -> Result<(), ValidationError> {
    let procfs = ProcFs::new(&config.proc_root);
    let pids = procfs.pids(Some(5));
    if pids.is_empty() {
        error!(
            "❌ No process entries found under {}",
            config.proc_root.display()
        );
        return Err(ValidationError::NoProcesses(config.proc_root.clone()));
    }

    let first = pids[0];
    match procfs.oom_score(first) {
        Some(score) => info!("✅ pid {} readable (oom_score {})", first, score),
        None => {
            warn!("⚠️  Could not read oom_score of pid {}", first);
            warn!("   Kernels without oom_score support cannot rank processes");
        }
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("memory accounting unusable: {0}")]
    MemInfo(#[from] MemInfoError),

    #[error("no process entries under {}", .0.display())]
    NoProcesses(PathBuf),
}
