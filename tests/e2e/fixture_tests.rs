use super::helpers::{TestProject, FULL_HEADER};
use std::fs;

const PYPROJECT_WITH_CONFIG: &str = r#"[project]
name = "demo"
version = "0.1.0"

[tool.py-compliance-auditor]
roots = ["lib"]
output = "reports/header-audit.csv"
artifacts_dir = "reports"
"#;

#[test]
fn test_preconfigured_project_uses_pyproject_paths() {
    let project = TestProject::new();
    project.write_file("pyproject.toml", PYPROJECT_WITH_CONFIG);
    project.write_file("lib/module.py", FULL_HEADER);
    // Default roots must be ignored in favor of the configured one
    project.write_file("src/unscanned.py", "pass\n");

    let output = project.run(&["headers"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Audited files: 1"));

    let report = fs::read_to_string(project.path().join("reports/header-audit.csv")).unwrap();
    assert!(report.contains("lib/module.py"));
    assert!(!report.contains("unscanned.py"));
}

#[test]
fn test_cli_roots_override_pyproject() {
    let project = TestProject::new();
    project.write_file("pyproject.toml", PYPROJECT_WITH_CONFIG);
    project.write_file("lib/module.py", FULL_HEADER);
    project.write_file("plugins/extra.py", FULL_HEADER);

    let output = project.run(&["headers", "--roots", "plugins"]);

    assert!(output.status.success());
    let report = fs::read_to_string(project.path().join("reports/header-audit.csv")).unwrap();
    assert!(report.contains("plugins/extra.py"));
    assert!(!report.contains("lib/module.py"));
}

#[test]
fn test_init_adds_tool_section() {
    let project = TestProject::new();
    project.write_file("pyproject.toml", "[project]\nname = \"demo\"\nversion = \"0.1.0\"\n");

    let output = project.run(&["init"]);

    assert!(output.status.success());
    let content = fs::read_to_string(project.path().join("pyproject.toml")).unwrap();
    assert!(content.contains("name = \"demo\"")); // Existing content preserved
    assert!(content.contains("py-compliance-auditor"));

    // The generated section must validate
    let validate_output = project.run(&["config", "--validate"]);
    assert!(validate_output.status.success());
    assert!(String::from_utf8_lossy(&validate_output.stdout).contains("Configuration is valid"));
}

#[test]
fn test_init_without_pyproject_fails() {
    let project = TestProject::new();

    let output = project.run(&["init"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("pyproject.toml not found"));
}

#[test]
fn test_config_show_prints_json() {
    let project = TestProject::new();
    project.write_file("pyproject.toml", PYPROJECT_WITH_CONFIG);

    let output = project.run(&["config", "--show"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"roots\""));
    assert!(stdout.contains("lib"));
}

#[test]
fn test_config_requires_a_flag() {
    let project = TestProject::new();

    let output = project.run(&["config"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Use --show or --validate"));
}
