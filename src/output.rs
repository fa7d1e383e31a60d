use std::path::Path;

use crate::headers::HeaderAuditRow;
use crate::summary::AuditSummary;

/// Render the header audit result for stdout.
///
/// Violating files are always listed with the tokens they lack; verbose
/// mode additionally shows every audited row.
pub fn format_header_result(rows: &[HeaderAuditRow], verbose: bool) -> String {
    let mut output = String::new();

    let violations: Vec<&HeaderAuditRow> = rows.iter().filter(|row| row.is_violation()).collect();

    output.push_str(&format!("Audited files: {}\n", rows.len()));
    output.push_str(&format!("Header violations: {}\n", violations.len()));

    if verbose {
        for row in rows {
            output.push_str(&format!(
                "  {} {}\n",
                row.status.as_str(),
                row.file.display()
            ));
        }
    }

    for row in &violations {
        output.push_str(&format!(
            "- {}: missing {:?}\n",
            row.file.display(),
            row.missing_tokens
        ));
    }

    output
}

/// Render the summary block.
///
/// Rendered in full before any gate decision is taken; a tripped gate
/// never suppresses the report.
pub fn format_summary(summary: &AuditSummary, artifacts_dir: &Path, verbose: bool) -> String {
    let mut output = String::new();

    output.push_str("License compliance audit completed.\n");
    output.push_str(&format!(
        "- Header violations: {}\n",
        summary.header_violations
    ));
    output.push_str(&format!(
        "- Blocked dependencies: {}\n",
        summary.categories.blocked
    ));
    output.push_str(&format!(
        "- Review-required dependencies: {}\n",
        summary.categories.review
    ));
    output.push_str(&format!(
        "- Third-party attribution checks: completed ({} matches)\n",
        summary.attribution_matches
    ));

    if verbose && !summary.categories.other.is_empty() {
        let listed: Vec<String> = summary
            .categories
            .other
            .iter()
            .map(|(name, count)| format!("{} ({})", name, count))
            .collect();
        output.push_str(&format!("- Other categories: {}\n", listed.join(", ")));
    }

    let resolved = artifacts_dir
        .canonicalize()
        .unwrap_or_else(|_| artifacts_dir.to_path_buf());
    output.push_str(&format!("Artifacts: {}/*\n", resolved.display()));

    output
}
