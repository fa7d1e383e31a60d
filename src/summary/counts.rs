use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::path::Path;

use crate::csvio;

/// Dependency category tally from the audit CSV.
///
/// Only `blocked` participates in gating. Categories outside
/// BLOCK/REVIEW are retained in first-seen order for verbose output.
#[derive(Debug, Default, Clone)]
pub struct CategoryCounts {
    pub blocked: usize,
    pub review: usize,
    pub other: IndexMap<String, usize>,
}

/// Count FAIL rows in the header audit report.
pub fn count_header_violations(header_csv: &Path) -> Result<usize> {
    let records = csvio::read_records(header_csv)?;
    let violations = records
        .iter()
        .filter(|row| normalize(row.get("status")) == "FAIL")
        .count();
    Ok(violations)
}

/// Tally dependency rows by their Category field.
pub fn count_dependency_categories(audit_csv: &Path) -> Result<CategoryCounts> {
    let records = csvio::read_records(audit_csv)?;
    let mut counts = CategoryCounts::default();

    for row in &records {
        let category = normalize(row.get("Category"));
        match category.as_str() {
            "BLOCK" => counts.blocked += 1,
            "REVIEW" => counts.review += 1,
            "" => {}
            _ => *counts.other.entry(category).or_insert(0) += 1,
        }
    }

    Ok(counts)
}

/// Count attribution marker matches, one per line of the grep artifact.
pub fn count_attribution_matches(attribution_txt: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(attribution_txt).with_context(|| {
        format!(
            "Failed to read attribution artifact: {}",
            attribution_txt.display()
        )
    })?;
    Ok(content.lines().count())
}

fn normalize(field: Option<&String>) -> String {
    field.map(|value| value.trim().to_uppercase()).unwrap_or_default()
}
