//! Golden tests for combine-tests
//!
//! The sample project is copied to a temporary directory, combined, and the
//! written file is compared byte for byte with the expected output.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Recursively copy a fixture tree
fn copy_tree(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_tree(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

fn combine_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("combine-tests"))
}

#[cfg(unix)]
#[test]
fn golden_sample_project_output_file() {
    let temp = tempdir().unwrap();
    copy_tree(&fixtures_dir().join("sample_project"), temp.path());

    combine_cmd().arg("--root").arg(temp.path()).assert().success();

    let actual = fs::read_to_string(temp.path().join("combined_tests.txt")).unwrap();
    let expected =
        fs::read_to_string(fixtures_dir().join("expected").join("combined_tests.txt")).unwrap();
    assert_eq!(actual, expected);
}

#[cfg(unix)]
#[test]
fn golden_sample_project_stdout_matches_file() {
    let temp = tempdir().unwrap();
    copy_tree(&fixtures_dir().join("sample_project"), temp.path());

    let assert = combine_cmd().arg("--root").arg(temp.path()).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    let expected =
        fs::read_to_string(fixtures_dir().join("expected").join("combined_tests.txt")).unwrap();
    // println! adds one trailing newline
    assert_eq!(stdout, format!("{}\n", expected));
}

#[cfg(unix)]
#[test]
fn golden_rerun_is_byte_identical() {
    let temp = tempdir().unwrap();
    copy_tree(&fixtures_dir().join("sample_project"), temp.path());
    let output = temp.path().join("combined_tests.txt");

    combine_cmd().arg("--root").arg(temp.path()).assert().success();
    let first = fs::read(&output).unwrap();

    combine_cmd().arg("--root").arg(temp.path()).assert().success();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}
