//! Effective settings for lowmem-stat.
//!
//! There are no config files: every setting has a built-in default and can be
//! overridden on the command line.

use crate::cli::{Args, Commands, OutputFormat};
use lowmem_stat::COMM_CAPACITY;
use serde::Serialize;
use std::path::PathBuf;

// Default configuration constants
pub const DEFAULT_PROC_ROOT: &str = "/proc";
pub const DEFAULT_MEMINFO_PATH: &str = "/proc/meminfo";
pub const DEFAULT_COMM_CAPACITY: usize = COMM_CAPACITY;

/// Effective configuration
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub proc_root: PathBuf,
    pub meminfo_path: PathBuf,
    pub comm_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proc_root: PathBuf::from(DEFAULT_PROC_ROOT),
            meminfo_path: PathBuf::from(DEFAULT_MEMINFO_PATH),
            comm_capacity: DEFAULT_COMM_CAPACITY,
        }
    }
}

/// Validate effective config (used by the check command and at startup)
pub fn validate_effective_config(cfg: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if !cfg.proc_root.is_dir() {
        return Err(format!("proc root is not a directory: {}", cfg.proc_root.display()).into());
    }

    // One character plus the newline must fit
    if cfg.comm_capacity < 3 {
        return Err(format!(
            "comm_capacity must be at least 3 bytes, got {}",
            cfg.comm_capacity
        )
        .into());
    }

    Ok(())
}

/// Resolves configuration from CLI args and defaults.
/// A custom --proc-root also moves the meminfo default below it.
pub fn resolve_config(args: &Args) -> Config {
    let mut config = Config::default();

    if let Some(root) = &args.proc_root {
        config.proc_root = root.clone();
        config.meminfo_path = root.join("meminfo");
    }

    if let Some(meminfo) = &args.meminfo {
        config.meminfo_path = meminfo.clone();
    }

    if let Some(Commands::Proc {
        comm_capacity: Some(capacity),
        ..
    }) = &args.command
    {
        config.comm_capacity = *capacity;
    }

    config
}

/// Shows configuration in requested format
pub fn show_config(config: &Config, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Yaml | OutputFormat::Text => serde_yaml::to_string(config)?,
    };
    println!("{output}");
    Ok(())
}
