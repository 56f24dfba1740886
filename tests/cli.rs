//! Smoke tests for the `unity-summary` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::PathBuf};
use tempfile::TempDir;
use unity_summary::config::{self, Config};

fn results_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

fn cmd() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("unity-summary").unwrap()
}

#[test]
fn test_summarises_directory() {
    let dir = results_dir(&[
        (
            "a.testpass",
            "test/a.c:1:test_a:PASS:\n1 Tests 0 Failures 0 Ignored\nOK\n",
        ),
        (
            "b.testfail",
            "test/b.c:7:test_b:FAIL:Expected 2\n1 Tests 1 Failures 0 Ignored\nFAIL\n",
        ),
    ]);

    cmd()
        .arg(dir.path())
        .arg("R/")
        .assert()
        .success()
        .stdout(predicate::str::contains(r"R\test\a.c:1:test_a:PASS:"))
        .stdout(predicate::str::contains(r"R\test\b.c:7:test_b:FAIL:Expected 2"))
        .stdout(predicate::str::contains("UNITY IGNORED TEST SUMMARY").not())
        .stdout(predicate::str::ends_with(
            "2 TOTAL TESTS 1 TOTAL FAILURES 0 IGNORED\n\n",
        ));
}

#[test]
fn test_empty_file_fails_with_usage() {
    let dir = results_dir(&[("a.testpass", "")]);

    cmd()
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("\nERROR: \n"))
        .stdout(predicate::str::contains("Empty test result file"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("TOTAL TESTS").not());
}

#[test]
fn test_no_results_fails() {
    let dir = results_dir(&[("notes.txt", "hello\n")]);

    cmd()
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No *.testpass"));
}

#[test]
fn test_dump_config() {
    let assert = cmd()
        .args(&["--dump-config", "results/", "R/"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    let config = Config::from_str(&stdout).unwrap();
    assert_eq!(config.results_dir, PathBuf::from("results/"));
    assert_eq!(config.root.as_deref(), Some("R/"));
    assert_eq!(config.pattern, config::top::DEFAULT_PATTERN);
}
