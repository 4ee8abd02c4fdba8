//! Integration tests for webstrap-cli.
//!
//! The full wizard needs a TTY and network access to the generator
//! registries, so these cover the argument surface and the failure paths
//! that do not spawn external tools.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_flag_describes_the_tool() {
    let mut cmd = Command::cargo_bin("webstrap").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scaffolding"))
        .stdout(predicate::str::contains("--yes"));
}

#[test]
fn version_flag_matches_cargo() {
    let mut cmd = Command::cargo_bin("webstrap").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn quiet_and_verbose_conflict() {
    let mut cmd = Command::cargo_bin("webstrap").unwrap();
    cmd.args(["--quiet", "--verbose"]).assert().code(2);
}

#[test]
fn yes_without_name_is_a_user_error() {
    let temp = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("webstrap").unwrap();
    cmd.current_dir(temp.path())
        .arg("--yes")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("project name"));
}

#[test]
fn yes_with_invalid_name_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("webstrap").unwrap();
    cmd.current_dir(temp.path())
        .args([".hidden", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn unreadable_config_exits_with_configuration_code() {
    let temp = tempfile::tempdir().unwrap();
    let config = temp.path().join("broken.toml");
    std::fs::write(&config, "not [valid toml").unwrap();

    let mut cmd = Command::cargo_bin("webstrap").unwrap();
    cmd.current_dir(temp.path())
        .args(["my-app", "--yes", "--config"])
        .arg(&config)
        .assert()
        .code(4);
}
