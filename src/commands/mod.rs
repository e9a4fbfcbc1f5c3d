//! CLI command implementations for lowmem-stat.
//!
//! This module provides implementations for all CLI subcommands:
//! - `mem`: memory status line
//! - `proc`: per-process facts
//! - `check`: runtime requirement validation

pub mod check;
pub mod mem;
pub mod proc;

// Re-export command functions
pub use check::command_check;
pub use mem::command_mem;
pub use proc::command_proc;
