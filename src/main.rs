use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Headers {
            roots,
            output,
            exit_zero,
        } => commands::handle_headers(roots, output, exit_zero, cli.quiet, cli.verbose),
        Commands::Summarize {
            artifacts_dir,
            exit_zero,
        } => commands::handle_summarize(artifacts_dir, exit_zero, cli.quiet, cli.verbose),
        Commands::Init => commands::handle_init(cli.quiet),
        Commands::Config { show, validate } => commands::handle_config(show, validate),
    }
}
