// CLI behaviour: output formats, informational messages, exit codes.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn airq() -> Command {
    Command::cargo_bin("airq").unwrap()
}

#[test]
fn cli_converts_file_to_yaml() {
    airq()
        .arg("tests/fixtures/minimal.txt")
        .assert()
        .success()
        .stdout(contains("title: Test File").and(contains("site: Downtown")));
}

#[test]
fn cli_converts_file_to_json() {
    airq()
        .args(["-j", "tests/fixtures/minimal.txt"])
        .assert()
        .success()
        .stdout(contains("\"pm25\"").and(contains("\"Groups\"")));
}

#[test]
fn cli_reads_piped_stdin() {
    let input = fs::read_to_string("tests/fixtures/minimal.txt").unwrap();
    airq()
        .arg("--json")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("\"Test File\""));
}

#[test]
fn cli_reports_crlf_input() {
    airq()
        .arg("tests/fixtures/two_groups_crlf.txt")
        .assert()
        .success()
        .stderr(contains("Input has CR LF line endings"));
}

#[test]
fn cli_quiet_suppresses_info() {
    airq()
        .args(["--quiet", "tests/fixtures/two_groups_crlf.txt"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn cli_reports_parse_position_on_error() {
    airq()
        .arg("tests/fixtures/empty_data.txt")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(contains("0-indexed").and(contains("5:0")));
}

#[test]
fn cli_reports_unreadable_input() {
    airq()
        .arg("tests/fixtures/does_not_exist.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("failed to read"));
}

#[test]
fn cli_strict_rejects_trailing_content() {
    let mut input = fs::read_to_string("tests/fixtures/minimal.txt").unwrap();
    input.push_str("trailing\n");

    airq().write_stdin(input.clone()).assert().success();
    airq()
        .arg("--strict")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(contains("expected end of input"));
}

#[test]
fn cli_raw_emits_parse_tree() {
    airq()
        .args(["--raw", "-j", "tests/fixtures/minimal.txt"])
        .assert()
        .success()
        .stdout(contains("\"Locations\"").and(contains("\"Data\"")));
}
