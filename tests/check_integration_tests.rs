//! Integration tests for the `check` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn check_passes_on_well_formed_site() {
    let fixture = TestFixture::site();

    css_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CSS rule checks"))
        .stdout(predicate::str::contains("Summary: 8 total"))
        .stdout(predicate::str::contains("0 failed"))
        .stdout(predicate::str::contains("BEM compliance: 100.0%"));
}

#[test]
fn check_fails_on_important_declaration() {
    let fixture = TestFixture::site();
    fixture.create_file(
        "css/components/cards.css",
        "/* Cards */\n/* Layout */\n.card { color: red !important; }\n",
    );

    css_guard!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 1 !important declarations"))
        .stdout(predicate::str::contains("Failures:"));
}

#[test]
fn check_fails_on_missing_component() {
    let fixture = TestFixture::site();
    fixture.create_config(
        r#"
[rules]
expected_components = ["buttons.css", "cards.css", "hero.css"]
"#,
    );

    css_guard!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing: hero.css"));
}

#[test]
fn check_missing_components_dir_is_config_error() {
    let fixture = TestFixture::new();

    css_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("components"));
}

#[test]
fn check_strict_fails_on_warnings() {
    let fixture = TestFixture::site();

    css_guard!()
        .current_dir(fixture.path())
        .args(["check", "--strict"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Only 2 custom properties found"));
}

#[test]
fn check_css_root_override() {
    let fixture = TestFixture::site();
    fixture.create_file("alt/components/buttons.css", common::BUTTONS_CSS);

    css_guard!()
        .current_dir(fixture.path())
        .args(["check", "--css-root", "alt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing: cards.css"))
        .stdout(predicate::str::contains("Variables file not found"));
}

#[test]
fn check_json_output() {
    let fixture = TestFixture::site();

    let output = css_guard!()
        .current_dir(fixture.path())
        .args(["check", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["total"], 8);
    assert_eq!(report["summary"]["failed"], 0);
    assert_eq!(report["results"][0]["name"], "Component File Structure");
    assert_eq!(report["results"][0]["status"], "PASS");
}

#[test]
fn check_writes_output_file() {
    let fixture = TestFixture::site();

    css_guard!()
        .current_dir(fixture.path())
        .args(["check", "--output", "reports/rules.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = String::from_utf8(fixture.read("reports/rules.txt")).unwrap();
    assert!(written.contains("Success rate:"));
}

#[test]
fn check_invalid_config_is_config_error() {
    let fixture = TestFixture::site();
    fixture.create_config("[rules.bem]\npass_below = 30.0\nwarn_below = 10.0\n");

    css_guard!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("pass_below"));
}
