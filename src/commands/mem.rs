//! Mem command implementation.
//!
//! Prints one snapshot of /proc/meminfo.

use crate::cli::OutputFormat;
use crate::config::Config;
use lowmem_stat::{fatal, print_mem_stats, MemInfoReader};

/// Reads the memory accounting file once and prints it.
///
/// An unusable meminfo file terminates the process (exit status 102/104).
pub fn command_mem(format: OutputFormat, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = MemInfoReader::with_path(&config.meminfo_path);
    let m = reader.read().unwrap_or_else(|e| fatal(&e));

    match format {
        OutputFormat::Text => print_mem_stats(|line| println!("{line}"), &m),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&m)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&m)?),
    }
    Ok(())
}
