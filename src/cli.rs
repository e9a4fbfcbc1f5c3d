//! CLI arguments and subcommands for lowmem-stat.
//!
//! This module defines the command-line interface structure using the clap library,
//! including all flags, options, and subcommands.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Log level options for CLI parsing
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Output format for reports and --show-config
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Yaml,
    Json,
}

/// Main CLI arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "lowmem-stat",
    about = "Inspect memory pressure and per-process OOM facts from /proc",
    long_about = "Inspect memory pressure and per-process OOM facts from /proc.\n\n\
                  Reads /proc/meminfo the way a low-memory killer does (including the \
                  MemAvailable estimate for old kernels) and reports liveness, oom_score, \
                  oom_score_adj, RSS, owner and name of individual processes.",
    version,
    propagate_version = true,
    after_help = "Exit status 102: /proc/meminfo unreadable, 104: mandatory /proc/meminfo entry missing"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log level
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// procfs mount point
    #[arg(long, global = true)]
    pub proc_root: Option<PathBuf>,

    /// meminfo file (defaults to <proc-root>/meminfo)
    #[arg(long, global = true)]
    pub meminfo: Option<PathBuf>,

    /// Print effective config and exit
    #[arg(long)]
    pub show_config: bool,

    /// Output format for --show-config
    #[arg(long, value_enum, default_value = "yaml")]
    pub config_format: OutputFormat,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the memory status line (default)
    Mem {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Report facts about processes
    Proc {
        /// Process ids to inspect
        pids: Vec<u32>,

        /// Inspect every process under the proc root
        #[arg(long, conflicts_with = "pids")]
        all: bool,

        /// Maximum number of processes with --all
        #[arg(long)]
        max: Option<usize>,

        /// Buffer size for the comm name (bytes, including terminator)
        #[arg(long)]
        comm_capacity: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Check runtime requirements and permissions
    Check,
}
