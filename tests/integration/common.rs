//! Shared helpers for integration tests

use assert_cmd::Command;
use caskwatch::test_utils::ManifestFixture;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding manifests and an isolated config path.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Write `fixture` and return its path.
    pub fn write_manifest(&self, fixture: &ManifestFixture) -> PathBuf {
        fixture.write_to(self.dir.path()).unwrap()
    }

    /// Write raw `content` to `name` in the project directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// The caskwatch binary with a clean environment: no colors, no
    /// spinner, no token, and a config path that does not exist.
    pub fn caskwatch(&self) -> Command {
        let mut cmd = Command::cargo_bin("caskwatch").unwrap();
        cmd.current_dir(self.dir.path())
            .env("NO_COLOR", "1")
            .env("CASKWATCH_NO_PROGRESS", "1")
            .env("CASKWATCH_CONFIG_PATH", self.dir.path().join("no-config.toml"))
            .env_remove("CASKWATCH_GITHUB_TOKEN")
            .env_remove("RUST_LOG");
        cmd
    }
}
