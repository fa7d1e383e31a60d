use anyhow::{Context, Result};
use std::path::Path;

/// Return the required tokens missing from `content`, preserving their
/// configured order.
///
/// Plain substring matching, nothing smarter: the notice phrases are
/// literal and a looser match would mis-classify edited headers.
pub fn missing_tokens(content: &str, required_tokens: &[&str]) -> Vec<String> {
    required_tokens
        .iter()
        .copied()
        .filter(|token| !content.contains(token))
        .map(str::to_string)
        .collect()
}

/// Audit a single file against the required tokens.
///
/// The file must decode as UTF-8. An unreadable or malformed file aborts
/// the whole audit instead of being silently skipped.
pub fn check_file(path: &Path, required_tokens: &[&str]) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    Ok(missing_tokens(&content, required_tokens))
}
