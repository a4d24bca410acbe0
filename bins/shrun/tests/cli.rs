//! CLI-level tests: the binary mirrors its child's termination status.

use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn mirrors_zero_exit_code() {
    Command::cargo_bin("shrun")
        .unwrap()
        .arg("true")
        .assert()
        .success();
}

#[test]
fn mirrors_nonzero_exit_code() {
    Command::cargo_bin("shrun")
        .unwrap()
        .arg("false")
        .assert()
        .code(1);
}

#[test]
fn passes_arguments_through_verbatim() {
    Command::cargo_bin("shrun")
        .unwrap()
        .args(["echo", "hello", "world"])
        .assert()
        .success()
        .stdout(contains("hello world"));
}

#[test]
fn exec_failure_exits_with_failure_status() {
    Command::cargo_bin("shrun")
        .unwrap()
        .arg("/nonexistent/binary")
        .assert()
        .code(127)
        .stderr(contains("exec"));
}

#[test]
fn requires_a_command() {
    Command::cargo_bin("shrun")
        .unwrap()
        .assert()
        .failure()
        .stderr(contains("Usage"));
}
