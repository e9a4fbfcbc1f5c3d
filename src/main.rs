//! lowmem-stat - version 0.1.0
//!
//! Diagnostic front end for the lowmem-stat library with tracing logging.
//! This is the main entry point that resolves configuration and dispatches subcommands.

mod cli;
mod commands;
mod config;
mod startup_checks;

use clap::Parser;
use tracing::{debug, Level};

use cli::{Args, Commands, LogLevel, OutputFormat};
use commands::{command_check, command_mem, command_proc};
use config::{resolve_config, show_config, validate_effective_config};

/// Initializes tracing logging subsystem with configured log level.
/// Logs go to stderr so stdout only carries report output.
fn setup_logging(args: &Args) {
    let log_level = match args.log_level {
        LogLevel::Off => Level::ERROR,
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    debug!("Logging initialized with level: {:?}", args.log_level);
}

/// Main application entry point.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_logging(&args);

    let config = resolve_config(&args);

    if args.show_config {
        return show_config(&config, args.config_format);
    }

    if let Some(Commands::Check) = &args.command {
        return command_check(&config);
    }

    if let Err(e) = validate_effective_config(&config) {
        eprintln!("❌ Configuration invalid: {}", e);
        std::process::exit(1);
    }

    match &args.command {
        None => command_mem(OutputFormat::Text, &config),
        Some(Commands::Mem { format }) => command_mem(*format, &config),
        Some(Commands::Proc {
            pids,
            all,
            max,
            format,
            ..
        }) => command_proc(pids, *all, *max, *format, &config),
        Some(Commands::Check) => command_check(&config),
    }
}
