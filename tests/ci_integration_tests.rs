//! Integration tests for the `ci` command with the visual suite skipped.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn ci_skip_visual_passes_clean_site() {
    let fixture = TestFixture::site();

    css_guard!()
        .current_dir(fixture.path())
        .args(["ci", "--skip-visual"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CSS rule checks"))
        .stdout(predicate::str::contains("Visual regression").not());
}

#[test]
fn ci_propagates_rule_failures() {
    let fixture = TestFixture::site();
    fixture.create_file("css/components/extra.css", ".extra { color: red; }\n");

    css_guard!()
        .current_dir(fixture.path())
        .args(["ci", "--skip-visual"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Extra: extra.css"));
}

#[test]
fn ci_json_has_rules_section_only() {
    let fixture = TestFixture::site();

    let output = css_guard!()
        .current_dir(fixture.path())
        .args(["ci", "--skip-visual", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["rules"]["summary"]["total"], 8);
    assert!(report.get("visual").is_none());
}

#[test]
fn ci_missing_stylesheets_is_config_error() {
    let fixture = TestFixture::new();

    css_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "ci", "--skip-visual"])
        .assert()
        .code(2);
}
