//! duralog CLI
//!
//! Command-line front end for the append-only log.
//!
//! # Commands
//!
//! - `append` - Append one or more values to a log file
//! - `count` - Open a log (running recovery) and print its record count
//! - `verify` - Check a log's integrity without modifying it

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// duralog command-line tools.
#[derive(Parser)]
#[command(name = "duralog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the log file
    #[arg(global = true, short, long)]
    path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append one or more values to the log
    Append {
        /// Values to append, in order
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Open the log (running recovery) and print the record count
    Count,

    /// Check log integrity without modifying the file
    Verify,

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Append { values } => {
            let path = cli.path.ok_or("Log path required for append")?;
            commands::append::run(&path, &values)?;
        }
        Commands::Count => {
            let path = cli.path.ok_or("Log path required for count")?;
            commands::count::run(&path)?;
        }
        Commands::Verify => {
            let path = cli.path.ok_or("Log path required for verify")?;
            commands::verify::run(&path)?;
        }
        Commands::Version => {
            println!("duralog CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("duralog core v{}", duralog_core::VERSION);
        }
    }

    Ok(())
}
