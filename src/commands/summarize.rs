use anyhow::Result;
use std::path::PathBuf;

use py_compliance_auditor::config::load_config;
use py_compliance_auditor::output::format_summary;
use py_compliance_auditor::summary::{
    count_attribution_matches, count_dependency_categories, count_header_violations,
    require_artifacts, AuditSummary,
};

pub fn handle_summarize(
    artifacts_dir: Option<PathBuf>,
    exit_zero: bool,
    quiet: bool,
    verbose: bool,
) -> Result<()> {
    // Load configuration from pyproject.toml
    let config = load_config()?;

    // CLI arguments override config values
    let artifacts_dir = artifacts_dir.unwrap_or_else(|| config.artifacts_dir_or_default());

    // Missing artifacts are fatal; nothing is counted afterwards
    let artifacts = match require_artifacts(&artifacts_dir) {
        Ok(artifacts) => artifacts,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            std::process::exit(1);
        }
    };

    let header_violations = count_header_violations(&artifacts.header_csv)?;
    let categories = count_dependency_categories(&artifacts.dependency_audit_csv)?;
    let attribution_matches = count_attribution_matches(&artifacts.attribution_txt)?;

    let summary = AuditSummary {
        header_violations,
        categories,
        attribution_matches,
    };

    // The summary is rendered before the gate decision
    if !quiet {
        print!("{}", format_summary(&summary, &artifacts_dir, verbose));
    }

    if summary.gate_failed() && !exit_zero {
        std::process::exit(1);
    }

    Ok(())
}
