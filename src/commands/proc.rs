//! Proc command implementation.
//!
//! Reports the facts a low-memory killer looks at for each process.

use crate::cli::OutputFormat;
use crate::config::Config;
use lowmem_stat::ProcFs;
use serde::Serialize;
use std::fmt::Display;

/// Facts about one process. Fields are `None` when the process vanished or
/// the kernel does not expose the value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessReport {
    pub pid: u32,
    pub alive: bool,
    pub name: Option<String>,
    pub uid: Option<u32>,
    pub oom_score: Option<u32>,
    pub oom_score_adj: Option<i32>,
    pub vm_rss_kib: Option<u64>,
}

impl ProcessReport {
    pub fn collect(procfs: &ProcFs, pid: u32, comm_capacity: usize) -> Self {
        Self {
            pid,
            alive: procfs.is_alive(pid),
            name: procfs.comm(pid, comm_capacity),
            uid: procfs.uid(pid),
            oom_score: procfs.oom_score(pid),
            oom_score_adj: procfs.oom_score_adj(pid),
            vm_rss_kib: procfs.vm_rss_kib(pid),
        }
    }

    /// One fixed-width text line.
    pub fn to_line(&self) -> String {
        format!(
            "{:>7} {:<5} {:<15} uid={:<6} oom_score={:<5} oom_score_adj={:<5} rss={} kiB",
            self.pid,
            if self.alive { "alive" } else { "dead" },
            or_dash(self.name.as_ref()),
            or_dash(self.uid),
            or_dash(self.oom_score),
            or_dash(self.oom_score_adj),
            or_dash(self.vm_rss_kib)
        )
    }
}

fn or_dash<T: Display>(v: Option<T>) -> String {
    v.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Prints reports for the given pids, or for all of them with `all`.
pub fn command_proc(
    pids: &[u32],
    all: bool,
    max: Option<usize>,
    format: OutputFormat,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let procfs = ProcFs::new(&config.proc_root);

    let pids = if all {
        procfs.pids(max)
    } else if pids.is_empty() {
        return Err("no pids given (pass pids or --all)".into());
    } else {
        pids.to_vec()
    };

    let reports: Vec<ProcessReport> = pids
        .iter()
        .map(|&pid| ProcessReport::collect(&procfs, pid, config.comm_capacity))
        .collect();

    match format {
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", report.to_line());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&reports)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_collect_report_from_fake_proc() {
        let dir = tempdir().expect("Failed to create temp dir");
        let pid_dir = dir.path().join("4242");
        fs::create_dir(&pid_dir).expect("Failed to create pid dir");
        fs::write(pid_dir.join("stat"), "4242 (cat) S 1 4242 4242 0").unwrap();
        fs::write(pid_dir.join("comm"), "cat\n").unwrap();
        fs::write(pid_dir.join("oom_score"), "12\n").unwrap();
        fs::write(pid_dir.join("oom_score_adj"), "-100\n").unwrap();
        fs::write(pid_dir.join("statm"), "100 0 0 0 0 0 0\n").unwrap();

        let report = ProcessReport::collect(&ProcFs::new(dir.path()), 4242, 16);
        assert!(report.alive);
        assert_eq!(report.name.as_deref(), Some("cat"));
        assert_eq!(report.oom_score, Some(12));
        assert_eq!(report.oom_score_adj, Some(-100));
        assert_eq!(report.vm_rss_kib, Some(0));
        assert!(report.uid.is_some());
    }

    #[test]
    fn test_report_for_vanished_process() {
        let dir = tempdir().expect("Failed to create temp dir");
        let report = ProcessReport::collect(&ProcFs::new(dir.path()), 7, 16);

        assert_eq!(
            report,
            ProcessReport {
                pid: 7,
                alive: false,
                name: None,
                uid: None,
                oom_score: None,
                oom_score_adj: None,
                vm_rss_kib: None,
            }
        );
        assert!(report.to_line().contains("dead"));
        assert!(report.to_line().ends_with("rss=- kiB"));
    }
}
