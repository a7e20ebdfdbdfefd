//! Fixture project trees with lockfiles

use std::path::PathBuf;

use tempfile::TempDir;

/// yarn.lock recording `alpha@9.9.9` and `@scope/beta@2.3.4`
pub const YARN_LOCK: &str = r#"# THIS IS AN AUTOGENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY.
# yarn lockfile v1


"@scope/beta@^2.0.0":
  version "2.3.4"
  resolved "https://registry.yarnpkg.com/@scope/beta/-/beta-2.3.4.tgz#1a1b2c3d4e5f60718293a4b5c6d7e8f901234567"
  integrity sha512-YmV0YQ==

alpha@^9.0.0:
  version "9.9.9"
  resolved "https://registry.yarnpkg.com/alpha/-/alpha-9.9.9.tgz#0a1b2c3d4e5f60718293a4b5c6d7e8f901234567"
  integrity sha512-YWxwaGE=
"#;

/// poetry.lock recording `pre-commit-hooks` at `v4.0.0` and `black` at `23.1.0`
pub const POETRY_LOCK: &str = r#"[[package]]
name = "black"
version = "23.1.0"
description = "The uncompromising code formatter."
optional = false
python-versions = ">=3.7"

[[package]]
name = "pre-commit-hooks"
version = "v4.0.0"
description = "Some out-of-the-box hooks for pre-commit."
optional = false
python-versions = ">=3.8"

[metadata]
lock-version = "2.0"
python-versions = "^3.10"
content-hash = "0000"
"#;

/// package-lock.json recording `prettier@3.1.0`
pub const PACKAGE_LOCK: &str = r#"{
  "name": "web",
  "lockfileVersion": 3,
  "requires": true,
  "packages": {
    "": { "name": "web", "devDependencies": { "prettier": "^3.0.0" } },
    "node_modules/prettier": { "version": "3.1.0", "dev": true }
  }
}
"#;

/// A temporary project directory
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Project with `yarn.lock` and `poetry.lock` at its root
    pub fn with_lockfiles() -> Self {
        let project = Self::new();
        project.write("yarn.lock", YARN_LOCK);
        project.write("poetry.lock", POETRY_LOCK);
        project
    }

    /// Write a file relative to the project root, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(relative)).unwrap()
    }
}
