use caskwatch::test_utils::ManifestFixture;
use predicates::prelude::*;

use crate::common::TestProject;

/// The minimal `latest` + `no_check` manifest validates cleanly
#[test]
fn test_validate_example_app() {
    let project = TestProject::new();
    let manifest = project.write_manifest(&ManifestFixture::example_app());

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .args(["--mode", "validate"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("✓ ExampleApp is valid"))
        .stdout(predicate::str::contains("✗").not());
}

#[test]
fn test_validate_full_manifest() {
    let project = TestProject::new();
    let fixture = ManifestFixture::my_amp_switcher(
        "1.9.0",
        "https://api.github.com/repos/paolofrigo/my-amp-switcher/releases",
    );
    let manifest = project.write_manifest(&fixture);

    project
        .caskwatch()
        .arg("-m")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("MyAmpSwitcher is valid"));
}

#[test]
fn test_validate_missing_fields() {
    let project = TestProject::new();
    let manifest = project.write_manifest(&ManifestFixture::missing_fields());

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .args(["--mode", "validate"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ version: missing required field 'version'"))
        .stdout(predicate::str::contains("✗ sha256: missing required field 'sha256'"))
        .stderr(predicate::str::contains("Manifest validation failed with 2 error(s)"));
}

#[test]
fn test_validate_zero_capture_groups() {
    let project = TestProject::new();
    let manifest =
        project.write_manifest(&ManifestFixture::zero_groups("https://example.com/releases"));

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .args(["--mode", "validate"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("livecheck.regex"))
        .stdout(predicate::str::contains("no capture groups"));
}

#[test]
fn test_validate_warnings_pass_unless_strict() {
    let project = TestProject::new();
    let manifest = project.write_manifest(&ManifestFixture::warnings_only());

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("⚠ version:"))
        .stdout(predicate::str::contains("valid with 1 warning(s)"));

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .arg("--strict")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Strict mode"));
}

#[test]
fn test_validate_json_output() {
    let project = TestProject::new();
    let manifest = project.write_manifest(&ManifestFixture::missing_fields());

    let output = project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .args(["--format", "json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["name"], "ExampleApp");
    assert_eq!(report["errors"], 2);

    let fields: Vec<_> =
        report["issues"].as_array().unwrap().iter().map(|i| i["field"].clone()).collect();
    assert_eq!(fields, vec!["version", "sha256"]);
}

#[test]
fn test_validate_quiet_prints_only_errors() {
    let project = TestProject::new();
    let manifest = project.write_manifest(&ManifestFixture::example_app());

    project
        .caskwatch()
        .arg("--manifest")
        .arg(&manifest)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
