//! End-to-end runs of the `linecalc` binary.

use std::io::Write as _;
use std::process::{Command, Output, Stdio};

use rstest::rstest;

fn linecalc(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_linecalc"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("spawn: {e}"));
    if let Some(mut pipe) = child.stdin.take() {
        pipe.write_all(stdin.as_bytes())
            .unwrap_or_else(|e| panic!("stdin: {e}"));
    }
    child
        .wait_with_output()
        .unwrap_or_else(|e| panic!("wait: {e}"))
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[rstest]
fn evaluates_stdin() {
    let out = linecalc(&[], "2+3*4\n2^3^2\n");
    assert!(out.status.success());
    assert_eq!(text(&out.stdout), "14\n512\n");
}

#[rstest]
fn syntax_error_fails() {
    let out = linecalc(&[], "1\nnope\n");
    assert!(!out.status.success());
    assert_eq!(text(&out.stdout), "1\n");
    assert!(text(&out.stderr).contains("ERROR: syntax error"));
}

#[rstest]
fn exit_succeeds_early() {
    let out = linecalc(&[], "exit\nnope\n");
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[rstest]
fn reads_named_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap_or_else(|e| panic!("tempfile: {e}"));
    writeln!(file, "10-3-2").unwrap_or_else(|e| panic!("write: {e}"));
    let path = file.path().to_string_lossy().into_owned();
    let out = linecalc(&[path.as_str()], "");
    assert!(out.status.success());
    assert_eq!(text(&out.stdout), "5\n");
}

#[rstest]
fn unopenable_file_fails() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
    let path = dir.path().join("absent.txt").to_string_lossy().into_owned();
    let out = linecalc(&[path.as_str()], "");
    assert!(!out.status.success());
    assert!(text(&out.stderr).contains("couldn't be opened for input"));
}

#[rstest]
fn too_many_arguments_fails() {
    let out = linecalc(&["a.txt", "b.txt"], "");
    assert!(!out.status.success());
    assert!(text(&out.stderr).contains("invalid number of arguments"));
}

#[rstest]
fn precision_flag_changes_output() {
    let out = linecalc(&["--precision", "10"], "pi\n");
    assert!(out.status.success());
    assert_eq!(text(&out.stdout), "3.141592654\n");
}
