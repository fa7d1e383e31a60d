use anyhow::Result;
use std::path::{Path, PathBuf};

use super::{
    ATTRIBUTION_ARTIFACT, DEPENDENCY_AUDIT_ARTIFACT, DEPENDENCY_LIST_ARTIFACT, HEADER_ARTIFACT,
};

/// Resolved locations of the four required artifacts.
///
/// The dependency list CSV is existence-checked but never parsed; it is
/// kept alongside the audit CSV for cross-referencing.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub header_csv: PathBuf,
    pub dependency_list_csv: PathBuf,
    pub dependency_audit_csv: PathBuf,
    pub attribution_txt: PathBuf,
}

/// Validate that every required artifact exists in `artifacts_dir`.
///
/// Batch validation: the error names all missing paths so a broken
/// pipeline run surfaces the complete gap, not just the first file.
pub fn require_artifacts(artifacts_dir: &Path) -> Result<ArtifactPaths> {
    let paths = ArtifactPaths {
        header_csv: artifacts_dir.join(HEADER_ARTIFACT),
        dependency_list_csv: artifacts_dir.join(DEPENDENCY_LIST_ARTIFACT),
        dependency_audit_csv: artifacts_dir.join(DEPENDENCY_AUDIT_ARTIFACT),
        attribution_txt: artifacts_dir.join(ATTRIBUTION_ARTIFACT),
    };

    let required = [
        &paths.header_csv,
        &paths.dependency_list_csv,
        &paths.dependency_audit_csv,
        &paths.attribution_txt,
    ];
    let missing: Vec<String> = required
        .iter()
        .filter(|path| !path.exists())
        .map(|path| path.display().to_string())
        .collect();

    if !missing.is_empty() {
        anyhow::bail!("Missing required artifacts: {}", missing.join(", "));
    }

    Ok(paths)
}
