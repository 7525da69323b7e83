use caskwatch::test_utils::{CannedServer, ManifestFixture, RELEASES_BODY};
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_missing_manifest_exits_two() {
    let project = TestProject::new();

    project
        .caskwatch()
        .args(["--manifest", "absent.toml", "--mode", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Manifest file absent.toml not found"))
        .stderr(predicate::str::contains("--manifest"));
}

#[test]
fn test_invalid_toml_exits_two() {
    let project = TestProject::new();
    let manifest = project.write_manifest(&ManifestFixture::invalid_syntax());

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse manifest"));
}

#[test]
fn test_unknown_key_exits_two() {
    let project = TestProject::new();
    let manifest = project.write_file(
        "typo.toml",
        "name = \"App\"\nversion = \"latest\"\nurl = \"https://e.com/App.dmg\"\nsha = \"no_check\"\n",
    );

    project.caskwatch().arg("--manifest").arg(&manifest).assert().code(2);
}

#[test]
fn test_missing_manifest_flag_is_usage_error() {
    let project = TestProject::new();

    project
        .caskwatch()
        .args(["--mode", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--manifest"));
}

#[test]
fn test_invalid_config_file_exits_two() {
    let server = CannedServer::start(200, RELEASES_BODY);
    let project = TestProject::new();
    let manifest = project
        .write_manifest(&ManifestFixture::my_amp_switcher("1.9.0", &server.url("/releases")));
    let config = project.write_file("config.toml", "timeout_secs = \"soon\"\n");

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .args(["--mode", "check"])
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_file_token_is_used() {
    let server = CannedServer::start(200, RELEASES_BODY);
    let project = TestProject::new();
    let manifest = project
        .write_manifest(&ManifestFixture::my_amp_switcher("1.9.0", &server.url("/releases")));
    let config = project.write_file("cw.toml", "github_token = \"ghp_from_file\"\n");

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .args(["--mode", "check"])
        .env("CASKWATCH_CONFIG_PATH", &config)
        .assert()
        .success();

    assert!(server.last_request().unwrap().contains("Bearer ghp_from_file"));
}
