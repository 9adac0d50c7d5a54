use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn record_scan() -> Command {
    Command::cargo_bin("record-scan").unwrap()
}

#[test]
fn test_reads_text_txt_from_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("text.txt"), "alice,hello {world} foo").unwrap();

    record_scan()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("{\"alice\": \"hello {world} foo\"}\n{\"world\"}\n");
}

#[test]
fn test_explicit_input_and_strip_newlines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.csv");
    fs::write(&path, "carol,{a}{b}\n\nbob,no braces here\n").unwrap();

    record_scan()
        .arg(&path)
        .arg("--strip-newlines")
        .assert()
        .success()
        .stdout("{\"carol\": \"{a}{b}\", \"bob\": \"no braces here\"}\n{\"a\"}\n");
}

#[test]
fn test_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.csv");
    fs::write(&path, "dave,first\ndave,{second}").unwrap();

    record_scan()
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .stdout("{\"records\":{\"dave\":\"{second}\"},\"placeholders\":[\"second\"]}\n");
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    record_scan()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("text.txt"));
}

#[test]
fn test_invalid_pattern_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("text.txt"), "a,b").unwrap();

    record_scan()
        .current_dir(dir.path())
        .args(["--pattern", "("])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid placeholder pattern"));
}

#[test]
fn test_custom_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("text.txt"), "k;a,b {c}").unwrap();

    record_scan()
        .current_dir(dir.path())
        .args(["-d", ";"])
        .assert()
        .success()
        .stdout("{\"k\": \"a,b {c}\"}\n{\"c\"}\n");
}

#[test]
fn test_skip_blank() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("text.txt"), "a,{x}\n  \n\nb,y").unwrap();

    record_scan()
        .current_dir(dir.path())
        .arg("--skip-blank")
        .assert()
        .success()
        .stdout("{\"a\": \"{x}\\n\", \"b\": \"y\"}\n{\"x\"}\n");
}

#[test]
fn test_verbose_logs_stay_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("text.txt"), "alice,hello {world} foo").unwrap();

    record_scan()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("-vvv")
        .assert()
        .success()
        .stdout("{\"alice\": \"hello {world} foo\"}\n{\"world\"}\n")
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn test_single_verbose_logs_scan_summary() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("text.txt"), "bob,no braces here").unwrap();

    record_scan()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("-v")
        .assert()
        .success()
        .stdout("{\"bob\": \"no braces here\"}\n{}\n")
        .stderr(predicate::str::contains("Scanned 1 lines into 1 records"));
}

#[test]
fn test_quiet_by_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("text.txt"), "bob,no braces here").unwrap();

    record_scan()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
