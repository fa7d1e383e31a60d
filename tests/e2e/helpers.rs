use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A Python module carrying every required notice phrase.
pub const FULL_HEADER: &str = "\
# Copyright (C) 2026 Example Author
#
# This program is free software: you can redistribute it and/or modify
# it under the terms of the GNU Affero General Public License.
# This program is distributed WITHOUT ANY WARRANTY.
# See <https://www.gnu.org/licenses/>.
";

pub struct TestProject {
    pub dir: TempDir,
    pub binary_path: String,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let binary_path = env!("CARGO_BIN_EXE_py-compliance-auditor").to_string();

        Self { dir, binary_path }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(path, content).expect("Failed to write fixture file");
    }

    pub fn artifacts_dir(&self) -> PathBuf {
        self.dir.path().join("build").join("license-compliance")
    }

    pub fn write_artifact(&self, name: &str, content: &str) {
        let dir = self.artifacts_dir();
        fs::create_dir_all(&dir).expect("Failed to create artifacts directory");
        fs::write(dir.join(name), content).expect("Failed to write artifact");
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run py-compliance-auditor")
    }
}
