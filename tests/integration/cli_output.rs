//! Integration tests for the `tintlog` binary writing records.

use assert_cmd::Command;
use predicates::prelude::*;
use regex::Regex;

#[allow(deprecated)]
fn tintlog() -> Command {
    Command::cargo_bin("tintlog").unwrap()
}

fn strip_timestamp(s: &str) -> String {
    let re = Regex::new(r"\d{2}:\d{2}:\d{2}\.\d{9} (AM|PM)").unwrap();
    re.replace_all(s, "").into_owned()
}

#[test]
fn message_goes_to_stderr_only() {
    let output = tintlog().args(["hello", "world"]).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "stdout should stay empty");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(strip_timestamp(&stderr), "\x1b[32mINFO\x1b[0m[] hello world\n");
}

#[test]
fn level_flag_selects_tag_and_color() {
    let cases = [
        ("debug", "\x1b[36mDBUG"),
        ("info", "\x1b[32mINFO"),
        ("warn", "\x1b[33mWARN"),
        ("error", "\x1b[31mEROR"),
    ];
    for (level, prefix) in cases {
        tintlog()
            .arg(format!("--level={level}"))
            .arg("msg")
            .assert()
            .success()
            .stderr(predicate::str::starts_with(prefix));
    }
}

#[test]
fn stdin_lines_become_records() {
    let output = tintlog()
        .arg("-l")
        .arg("warn")
        .write_stdin("first\nsecond\nthird\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = strip_timestamp(&String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stderr,
        "\x1b[33mWARN\x1b[0m[] first\n\x1b[33mWARN\x1b[0m[] second\n\x1b[33mWARN\x1b[0m[] third\n"
    );
}

#[test]
fn empty_stdin_writes_nothing() {
    tintlog().write_stdin("").assert().success().stderr("");
}

#[test]
fn timestamp_shape() {
    let output = tintlog().arg("tick").output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    let re = Regex::new(r"^\x1b\[32mINFO\x1b\[0m\[\d{2}:\d{2}:\d{2}\.\d{9} (AM|PM)\] tick\n$").unwrap();
    assert!(re.is_match(&stderr), "unexpected record: {stderr:?}");
}

#[test]
fn output_file_receives_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");

    tintlog()
        .arg("--output")
        .arg(&path)
        .arg("first run")
        .assert()
        .success()
        .stderr("");
    tintlog()
        .arg("-o")
        .arg(&path)
        .arg("-l")
        .arg("error")
        .arg("second run")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        strip_timestamp(&contents),
        "\x1b[32mINFO\x1b[0m[] first run\n\x1b[31mEROR\x1b[0m[] second run\n"
    );
}

#[test]
fn unopenable_output_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("app.log");
    tintlog()
        .arg("--output")
        .arg(&path)
        .arg("lost")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("tintlog: configuration error"));
}

#[test]
fn invalid_level_is_rejected() {
    tintlog()
        .arg("--level=loud")
        .arg("msg")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid level"));
}

#[test]
fn invalid_utf8_stdin_line_is_kept() {
    let mut input = b"before\n".to_vec();
    input.extend_from_slice(b"bad \xff\xfe bytes\r\n");
    input.extend_from_slice(b"after");
    let output = tintlog().write_stdin(input).output().unwrap();
    assert!(output.status.success());
    let stderr = strip_timestamp(&String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stderr,
        "\x1b[32mINFO\x1b[0m[] before\n\x1b[32mINFO\x1b[0m[] bad \u{fffd}\u{fffd} bytes\n\x1b[32mINFO\x1b[0m[] after\n"
    );
}
