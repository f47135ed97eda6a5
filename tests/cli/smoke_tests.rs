use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn lines() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lines"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "main.go", "package main\n\n// entry\nfunc main() {}\n");
    write(dir.path(), "lib/util.c", "/* util */\nint util(void) { return 1; }\n");
    write(dir.path(), "vendor/dep.go", "package dep\n");
    dir
}

fn json(args: &[&str], root: &Path) -> serde_json::Value {
    let output = lines().args(args).arg("--format").arg("json").arg(root).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn shows_help() {
    lines()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--filter-dir"))
        .stdout(predicate::str::contains("--legacy-trailing-line"));
}

#[test]
fn path_is_required() {
    lines().assert().failure();
}

#[test]
fn prints_a_table_with_totals() {
    let dir = project();
    lines()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Language"))
        .stdout(predicate::str::contains("Go"))
        .stdout(predicate::str::contains("Totals:"))
        .stdout(predicate::str::contains("Scanned").not());
}

#[test]
fn json_reports_per_language_counts() {
    let dir = project();
    let value = json(&[], dir.path());

    let go = value["languages"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["language"] == "Go")
        .unwrap();
    assert_eq!(go["files"], 2);
    assert_eq!(go["total"], 5);
    assert_eq!(go["line_comment"], 1);
    assert_eq!(value["totals"]["files"], 3);
}

#[test]
fn exclude_dir_alias_prunes_vendor() {
    let dir = project();
    let value = json(&["--excludeDir", "^vendor$"], dir.path());
    let go = value["languages"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["language"] == "Go")
        .unwrap();
    assert_eq!(go["files"], 1);
}

#[test]
fn legacy_trailing_line_adds_a_line_per_file() {
    let dir = project();
    let fixed = json(&[], dir.path());
    let legacy = json(&["--legacy-trailing-line"], dir.path());
    assert_eq!(
        legacy["totals"]["total"].as_u64().unwrap(),
        fixed["totals"]["total"].as_u64().unwrap() + 3
    );
}

#[test]
fn trailing_slash_is_accepted() {
    let dir = project();
    let root = format!("{}/", dir.path().display());
    lines().arg(root).assert().success().stdout(predicate::str::contains("Go"));
}

#[test]
fn empty_directory_has_no_source_files() {
    let dir = TempDir::new().unwrap();
    lines()
        .args(["--timing"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No source files found"))
        .stdout(predicate::str::contains("Scanned 0 files"));
}

#[test]
fn malformed_pattern_fails_before_scanning() {
    let dir = project();
    lines()
        .args(["--exclude", "("])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("--exclude"));
}

#[test]
fn missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    lines()
        .arg(dir.path().join("nowhere"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to list directory"));
}

#[test]
fn excluded_file_root_is_skipped() {
    let dir = project();
    lines()
        .args(["--exclude", "main"])
        .arg(dir.path().join("main.go"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No source files found"));
}
