use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "py-compliance-auditor")]
#[command(about = "License compliance gate for Python projects")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show detailed information
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Audit Python files for required license header tokens
    Headers {
        /// Root directories to scan for Python files
        #[arg(long, num_args = 1..)]
        roots: Option<Vec<PathBuf>>,

        /// Path to CSV output report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit with code 0 even on violations
        #[arg(long)]
        exit_zero: bool,
    },
    /// Summarize audit artifacts and enforce fail gates
    Summarize {
        /// Directory containing generated audit artifacts
        #[arg(long)]
        artifacts_dir: Option<PathBuf>,

        /// Exit with code 0 even when a gate trips
        #[arg(long)]
        exit_zero: bool,
    },
    /// Initialize configuration in pyproject.toml
    Init,
    /// Show or validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}
