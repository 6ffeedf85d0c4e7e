//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_valid_config() {
    let fixture = TestFixture::new();

    css_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = String::from_utf8(fixture.read(".css-guard.toml")).unwrap();
    assert!(content.contains("[rules.bem]"));
    assert!(content.contains("[visual]"));

    css_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success();
}

#[test]
fn init_custom_output_path() {
    let fixture = TestFixture::new();

    css_guard!()
        .current_dir(fixture.path())
        .args(["init", "--output", "ci/css-guard.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ci/css-guard.toml"));

    fixture.create_dir("ci");
    css_guard!()
        .current_dir(fixture.path())
        .args(["init", "--output", "ci/css-guard.toml"])
        .assert()
        .success();
    assert!(fixture.path().join("ci/css-guard.toml").exists());
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    css_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fixture.read(".css-guard.toml"), b"# existing config\n");
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    css_guard!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = String::from_utf8(fixture.read(".css-guard.toml")).unwrap();
    assert!(content.starts_with("# css-guard configuration file"));
}
