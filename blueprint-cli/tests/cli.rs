//! Binary-level integration tests for `bp`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const CLEAN_SOURCE: &str = "\
class Point
    var x
    var y
";

const BROKEN_SOURCE: &str = "\
class Point
      var x
";

fn write_temp(source: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(source.as_bytes()).expect("write source");
    file
}

#[test]
fn test_clean_file_renders_tree_and_exits_zero() {
    let file = write_temp(CLEAN_SOURCE);
    Command::cargo_bin("bp")
        .expect("binary builds")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Class Point"))
        .stdout(predicate::str::contains("Var x"));
}

#[test]
fn test_broken_file_reports_diagnostics_and_exits_nonzero() {
    let file = write_temp(BROKEN_SOURCE);
    Command::cargo_bin("bp")
        .expect("binary builds")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "line 2: expected indentation of 4, found 6",
        ));
}

#[test]
fn test_check_suppresses_the_rendering() {
    let file = write_temp(BROKEN_SOURCE);
    Command::cargo_bin("bp")
        .expect("binary builds")
        .arg(file.path())
        .arg("--check")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_json_format() {
    let file = write_temp(CLEAN_SOURCE);
    Command::cargo_bin("bp")
        .expect("binary builds")
        .arg(file.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"node_type\": \"Root\""));
}

#[test]
fn test_yaml_format() {
    let file = write_temp(CLEAN_SOURCE);
    Command::cargo_bin("bp")
        .expect("binary builds")
        .arg(file.path())
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("node_type: Class"));
}

#[test]
fn test_unknown_format_is_an_error() {
    let file = write_temp(CLEAN_SOURCE);
    Command::cargo_bin("bp")
        .expect("binary builds")
        .arg(file.path())
        .args(["--format", "dot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn test_missing_file_is_a_single_io_error() {
    Command::cargo_bin("bp")
        .expect("binary builds")
        .arg("definitely-not-here.bp")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}
