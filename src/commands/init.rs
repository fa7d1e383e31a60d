use anyhow::Result;
use std::fs;
use std::path::Path;

use py_compliance_auditor::config::{DEFAULT_ARTIFACTS_DIR, DEFAULT_OUTPUT, DEFAULT_ROOTS};

pub fn handle_init(quiet: bool) -> Result<()> {
    generate_config_at_path("pyproject.toml", quiet)
}

pub fn generate_config_at_path<P: AsRef<Path>>(path: P, quiet: bool) -> Result<()> {
    let pyproject_path = path.as_ref();

    if !pyproject_path.exists() {
        return Err(anyhow::anyhow!(
            "pyproject.toml not found. Run from the project root of an existing Python project."
        ));
    }

    let existing_content = fs::read_to_string(pyproject_path)?;

    // Parse with toml_edit so existing formatting survives
    let mut doc = existing_content.parse::<toml_edit::DocumentMut>()?;

    if !doc.contains_key("tool") {
        doc["tool"] = toml_edit::Item::Table(toml_edit::Table::new());
    }

    let mut section = toml_edit::Table::new();
    let mut roots = toml_edit::Array::new();
    for root in DEFAULT_ROOTS {
        roots.push(root);
    }
    section["roots"] = toml_edit::Item::Value(roots.into());
    section["output"] = toml_edit::value(DEFAULT_OUTPUT);
    section["artifacts_dir"] = toml_edit::value(DEFAULT_ARTIFACTS_DIR);

    if let Some(tool_table) = doc["tool"].as_table_mut() {
        tool_table["py-compliance-auditor"] = toml_edit::Item::Table(section);
    }

    fs::write(pyproject_path, doc.to_string())?;

    if !quiet {
        println!("Added [tool.py-compliance-auditor] section to pyproject.toml");
    }

    Ok(())
}
