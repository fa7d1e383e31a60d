use anyhow::Result;
use std::path::PathBuf;

use py_compliance_auditor::config::load_config;
use py_compliance_auditor::headers::{collect_py_files, run_audit, REQUIRED_TOKENS};
use py_compliance_auditor::output::format_header_result;

pub fn handle_headers(
    roots: Option<Vec<PathBuf>>,
    output: Option<PathBuf>,
    exit_zero: bool,
    quiet: bool,
    verbose: bool,
) -> Result<()> {
    // Load configuration from pyproject.toml
    let config = load_config()?;

    // CLI arguments override config values
    let roots = roots.unwrap_or_else(|| config.roots_or_default());
    let output_path = output.unwrap_or_else(|| config.output_or_default());

    let files = collect_py_files(&roots)?;
    let rows = run_audit(&files, &output_path, &REQUIRED_TOKENS)?;

    if !quiet {
        print!("{}", format_header_result(&rows, verbose));
    }

    let violations = rows.iter().filter(|row| row.is_violation()).count();
    if violations > 0 && !exit_zero {
        std::process::exit(1);
    }

    Ok(())
}
