use caskwatch::test_utils::{CannedServer, ManifestFixture, RELEASES_BODY};
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_check_reports_newest_release() {
    let server = CannedServer::start(200, RELEASES_BODY);
    let project = TestProject::new();
    let manifest = project
        .write_manifest(&ManifestFixture::my_amp_switcher("1.9.0", &server.url("/releases")));

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .args(["--mode", "check"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("MyAmpSwitcher: 1.9.0 ==> v2.0.0"));

    assert_eq!(server.request_count(), 1);
}

#[test]
fn test_check_verbose_lists_releases() {
    let server = CannedServer::start(200, RELEASES_BODY);
    let project = TestProject::new();
    let manifest = project
        .write_manifest(&ManifestFixture::my_amp_switcher("2.0.0", &server.url("/releases")));

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .args(["--mode", "check", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status: up to date"))
        .stdout(predicate::str::contains("asset: MyAmpSwitcher-universal.dmg"))
        .stdout(predicate::str::contains("releases found: 3"));
}

#[test]
fn test_check_json_output() {
    let server = CannedServer::start(200, RELEASES_BODY);
    let project = TestProject::new();
    let manifest = project
        .write_manifest(&ManifestFixture::my_amp_switcher("latest", &server.url("/releases")));

    let output = project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .args(["--mode", "check", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["name"], "MyAmpSwitcher");
    assert_eq!(report["current_version"], "latest");
    assert_eq!(report["newest"]["tag"], "v2.0.0");
    assert_eq!(report["status"], "unknown");
    assert_eq!(report["releases"].as_array().unwrap().len(), 3);
    assert!(report["checked_at"].is_string());
}

#[test]
fn test_check_sends_token_from_env() {
    let server = CannedServer::start(200, RELEASES_BODY);
    let project = TestProject::new();
    let manifest = project
        .write_manifest(&ManifestFixture::my_amp_switcher("1.9.0", &server.url("/releases")));

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .args(["--mode", "check"])
        .env("CASKWATCH_GITHUB_TOKEN", "ghp_integration")
        .assert()
        .success();

    let request = server.last_request().unwrap();
    assert!(request.contains("Bearer ghp_integration"));
}

#[test]
fn test_check_http_error_exits_two() {
    let server = CannedServer::start(404, r#"{"message": "Not Found"}"#);
    let project = TestProject::new();
    let manifest = project
        .write_manifest(&ManifestFixture::my_amp_switcher("1.9.0", &server.url("/releases")));

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .args(["--mode", "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("HTTP 404"));
}

#[test]
fn test_check_unreachable_endpoint_exits_two() {
    let project = TestProject::new();
    let manifest = project
        .write_manifest(&ManifestFixture::my_amp_switcher("1.9.0", &CannedServer::unused_url()));

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .args(["--mode", "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Network error"));
}

#[test]
fn test_check_timeout_exits_two() {
    let server = CannedServer::silent();
    let project = TestProject::new();
    let manifest = project
        .write_manifest(&ManifestFixture::my_amp_switcher("1.9.0", &server.url("/releases")));

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .args(["--mode", "check", "--timeout", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("timed out"));
}

#[test]
fn test_check_no_matches_exits_two() {
    let server = CannedServer::start(200, "<html>No releases yet</html>");
    let project = TestProject::new();
    let manifest = project
        .write_manifest(&ManifestFixture::my_amp_switcher("1.9.0", &server.url("/releases")));

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .args(["--mode", "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No releases matched"));
}

#[test]
fn test_check_without_livecheck_exits_one() {
    let project = TestProject::new();
    let manifest = project.write_manifest(&ManifestFixture::example_app());

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .args(["--mode", "check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no [livecheck] section"));
}

#[test]
fn test_check_zero_groups_exits_two_without_request() {
    let server = CannedServer::start(200, RELEASES_BODY);
    let project = TestProject::new();
    let manifest = project.write_manifest(&ManifestFixture::zero_groups(&server.url("/releases")));

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .args(["--mode", "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid livecheck pattern"));

    assert_eq!(server.request_count(), 0);
}
