use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn bin() -> Command {
    Command::cargo_bin("jsonmend").unwrap()
}

#[test]
fn cli_stdin_stdout_repair() {
    bin()
        .write_stdin("{'a':1, b: 'x'}\n")
        .assert()
        .success()
        .stdout(predicate::function(|out: &[u8]| {
            std::str::from_utf8(out)
                .ok()
                .and_then(|s| serde_json::from_str::<serde_json::Value>(s).ok())
                .is_some()
        }));
}

#[test]
fn cli_minify_stdin() {
    bin()
        .arg("--minify")
        .write_stdin("{a: 1, b: [2, 3,]}")
        .assert()
        .success()
        .stdout("{\"a\":1,\"b\":[2,3]}\n");
}

#[test]
fn cli_pretty_file_to_file() {
    let dir = tempdir().unwrap();
    let inp = dir.path().join("in.json");
    let out = dir.path().join("out.json");
    fs::write(&inp, "{'a':1, b:2}").unwrap();
    bin()
        .args([
            "--pretty",
            inp.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();
    let s = fs::read_to_string(out).unwrap();
    assert!(s.contains('\n') && s.contains("  "));
    let v: serde_json::Value = serde_json::from_str(&s).unwrap();
    assert_eq!(v, serde_json::json!({"a": 1, "b": 2}));
}

#[test]
fn cli_indent_width() {
    bin()
        .args(["--indent", "4"])
        .write_stdin("{\"a\":1}")
        .assert()
        .success()
        .stdout("{\n    \"a\": 1\n}\n");
}

#[test]
fn cli_unrepairable_input_fails_with_error() {
    bin()
        .arg("--minify")
        .write_stdin("{{{")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("parse error"));
}

#[test]
fn cli_unknown_option_is_usage_error() {
    bin().arg("--bogus").assert().failure().code(2);
}

#[test]
fn cli_log_reports_repairs_on_stderr() {
    bin()
        .arg("--log")
        .write_stdin("{a: None,}")
        .assert()
        .success()
        .stderr(predicate::str::contains("trailing comma"));
}

#[test]
fn cli_stats_on_stderr() {
    bin()
        .args(["--minify", "--stats"])
        .write_stdin("{a: [1, 2, 3]}")
        .assert()
        .success()
        .stderr(predicate::str::contains("keys: 4"));
}
