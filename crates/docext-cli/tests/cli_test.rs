//! End-to-end CLI tests via `assert_cmd`.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    Command::cargo_bin("docext")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_convert_missing_input_fails() {
    Command::cargo_bin("docext")
        .unwrap()
        .args(["convert", "no-such-file.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_extract_rejects_unparseable_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.pdf");
    std::fs::write(&path, b"not a pdf at all").unwrap();

    Command::cargo_bin("docext")
        .unwrap()
        .args(["extract", path.to_str().unwrap()])
        .assert()
        .failure();
}
