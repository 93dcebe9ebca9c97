// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    Command::cargo_bin("gmc").unwrap()
}

fn message_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn accepts_valid_message() {
    let file = message_file("fix: correct a rare crash\n\nBody text here\n");
    cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("fix: correct a rare crash"));
}

#[test]
fn accepts_component_header() {
    let file = message_file("fix[core]: correct a rare crash\n");
    cmd().arg(file.path()).assert().success();
}

#[test]
fn rejects_trivial_summary() {
    let file = message_file("fix: bad\n");
    cmd()
        .arg(file.path())
        .assert()
        .failure()
        .stdout(contains("summary-trivial"))
        .stdout(contains("Summary is trivial"))
        .stdout(contains("commit guidelines"));
}

#[test]
fn rejects_unknown_prefix() {
    let file = message_file("feat: add a new thing\n");
    cmd()
        .arg(file.path())
        .assert()
        .failure()
        .stdout(contains("prefix-not-allowed"));
}

#[test]
fn rejects_empty_file() {
    let file = message_file("");
    cmd()
        .arg(file.path())
        .assert()
        .failure()
        .stdout(contains("must not be empty"));
}

#[test]
fn ignores_comment_lines() {
    let file = message_file(
        "# Please enter the commit message for your changes. Lines starting\n\
         # with '#' will be ignored, and an empty message aborts the commit.\n\
         fix: correct a rare crash\n\
         \n\
         Body starts with upper case\n",
    );
    cmd().arg(file.path()).assert().success();
}

#[test]
fn allowed_prefixes_flag_narrows_the_set() {
    let file = message_file("docs: clarify the readme wording\n");
    cmd().arg(file.path()).assert().success();

    let file = message_file("docs: clarify the readme wording\n");
    cmd()
        .args(["--allowed-prefixes", "fix,new"])
        .arg(file.path())
        .assert()
        .failure()
        .stdout(contains("prefix-not-allowed"));
}

#[test]
fn summary_length_flag_is_honored() {
    let file = message_file("fix: correct a rare crash\n");
    cmd()
        .args(["--max-summary-length", "10"])
        .arg(file.path())
        .assert()
        .failure()
        .stdout(contains("Summary exceeds character limit (20 > 10)"));
}

#[test]
fn json_output_on_failure() {
    let file = message_file("fix: correct a rare crash.\n");
    cmd()
        .args(["--format", "json"])
        .arg(file.path())
        .assert()
        .failure()
        .stdout(contains("\"valid\": false"))
        .stdout(contains("summary-punctuation"));
}

#[test]
fn json_output_on_success() {
    let file = message_file("fix: correct a rare crash\n");
    cmd()
        .args(["--format", "json"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("\"valid\": true"));
}

#[test]
fn missing_file_is_an_io_error() {
    cmd()
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn rejects_inconsistent_length_flags() {
    let file = message_file("fix: correct a rare crash\n");
    cmd()
        .args(["--max-summary-length", "80"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(contains("max-summary-length"));
}

#[test]
fn prints_version() {
    cmd().arg("--version").assert().success();
}
