use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Collect Python files recursively from the provided roots.
///
/// Roots that do not exist are skipped so optional directories can stay in
/// the default configuration. The result is sorted for reproducible report
/// output regardless of filesystem traversal order.
pub fn collect_py_files(roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for root in roots {
        if !root.exists() {
            continue;
        }
        files.extend(scan_root(root)?);
    }

    files.sort();
    Ok(files)
}

fn scan_root(root: &Path) -> Result<Vec<PathBuf>> {
    // Escape the root so glob metacharacters in directory names stay literal
    let pattern = format!(
        "{}/**/*.py",
        glob::Pattern::escape(&root.display().to_string())
    );
    let entries = glob(&pattern)
        .with_context(|| format!("Invalid scan pattern for root: {}", root.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read an entry under: {}", root.display()))?;
        // `**` also matches directories whose name ends in .py
        if path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}
