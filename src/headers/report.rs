use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::{checker, HeaderAuditRow};
use crate::csvio;

/// Column set of the persisted report.
pub const REPORT_COLUMNS: [&str; 3] = ["file", "status", "missing_tokens"];

/// Audit every file and persist the CSV report.
///
/// The report is rewritten from scratch on each run and rows keep the
/// sorted file order handed in, so identical inputs produce identical
/// bytes. Returns one row per audited file.
pub fn run_audit(
    files: &[PathBuf],
    output_path: &Path,
    required_tokens: &[&str],
) -> Result<Vec<HeaderAuditRow>> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create report directory: {}", parent.display())
            })?;
        }
    }

    let mut rows = Vec::with_capacity(files.len());
    let mut report = String::new();
    report.push_str(&csvio::format_record(&REPORT_COLUMNS));
    report.push('\n');

    for file in files {
        let missing = checker::check_file(file, required_tokens)?;
        let row = HeaderAuditRow::new(file.clone(), missing);

        let file_field = row.file.display().to_string();
        let missing_field = row.missing_tokens.join("; ");
        report.push_str(&csvio::format_record(&[
            &file_field,
            row.status.as_str(),
            &missing_field,
        ]));
        report.push('\n');

        rows.push(row);
    }

    fs::write(output_path, report)
        .with_context(|| format!("Failed to write report: {}", output_path.display()))?;

    Ok(rows)
}
