use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Conventional scan roots for a Python project layout.
pub const DEFAULT_ROOTS: [&str; 3] = ["src", "tests", "scripts"];

/// Default destination of the header audit report.
pub const DEFAULT_OUTPUT: &str = "build/license-compliance/header-audit.csv";

/// Default directory holding generated audit artifacts.
pub const DEFAULT_ARTIFACTS_DIR: &str = "build/license-compliance";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Root directories scanned by the header audit
    pub roots: Option<Vec<PathBuf>>,

    /// Header audit CSV destination
    pub output: Option<PathBuf>,

    /// Directory containing generated audit artifacts
    pub artifacts_dir: Option<PathBuf>,
}

impl Config {
    pub fn roots_or_default(&self) -> Vec<PathBuf> {
        match &self.roots {
            Some(roots) => roots.clone(),
            None => DEFAULT_ROOTS.iter().map(PathBuf::from).collect(),
        }
    }

    pub fn output_or_default(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    pub fn artifacts_dir_or_default(&self) -> PathBuf {
        self.artifacts_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACTS_DIR))
    }
}

/// Load configuration from pyproject.toml in the current directory
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    load_config_from(&current_dir)
}

/// Load configuration from pyproject.toml in the given directory
pub fn load_config_from(dir: &Path) -> Result<Config> {
    let pyproject_path = dir.join("pyproject.toml");

    if !pyproject_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&pyproject_path)
        .with_context(|| format!("Failed to read pyproject.toml: {}", pyproject_path.display()))?;

    let pyproject: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse pyproject.toml: {}", pyproject_path.display()))?;

    // Extract [tool.py-compliance-auditor] section
    if let Some(tool) = pyproject.get("tool") {
        if let Some(section) = tool.get("py-compliance-auditor") {
            let config: Config = section
                .clone()
                .try_into()
                .context("Failed to parse [tool.py-compliance-auditor] section")?;
            return Ok(config);
        }
    }

    Ok(Config::default())
}
