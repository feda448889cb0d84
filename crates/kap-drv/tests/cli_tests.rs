//! CLI end-to-end tests: drive the `kapc` binary over real files and check
//! the artifacts it writes next to them.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn kapc_bin() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_kapc"))
}

#[test]
fn help_mentions_usage() {
    let mut cmd = Command::new(kapc_bin());
    cmd.arg("--help");
    cmd.assert().success().stdout(predicate::str::contains("Usage"));
}

#[test]
fn accepts_well_formed_program_and_writes_artifacts() {
    let dir = TempDir::new().unwrap();
    let src_path = dir.path().join("ok.src");
    fs::write(&src_path, b"main do end;").unwrap();

    let mut cmd = Command::new(kapc_bin());
    cmd.arg(&src_path);
    cmd.assert().success();

    assert!(dir.path().join("ok.outlextokens").exists());
    assert!(dir.path().join("ok.outlextokensflaci").exists());
    assert!(dir.path().join("ok.outlexerrors").exists());

    let flaci = fs::read_to_string(dir.path().join("ok.outlextokensflaci")).unwrap();
    assert_eq!(flaci, "main\ndo\nend\n;\n");
}

#[test]
fn reports_syntax_error_with_nonzero_exit() {
    let dir = TempDir::new().unwrap();
    let src_path = dir.path().join("bad.src");
    fs::write(&src_path, b"main do if end;").unwrap();

    let mut cmd = Command::new(kapc_bin());
    cmd.arg(&src_path);
    cmd.assert().failure().stderr(predicate::str::contains("Syntax error"));
}

#[test]
fn emit_sets_writes_first_and_follow_dumps() {
    let dir = TempDir::new().unwrap();
    let src_path = dir.path().join("ok.src");
    fs::write(&src_path, b"main do end;").unwrap();

    let mut cmd = Command::new(kapc_bin());
    cmd.arg(&src_path).arg("--emit-sets");
    cmd.assert().success();

    let first = fs::read_to_string(dir.path().join("ok.out.first")).unwrap();
    let follow = fs::read_to_string(dir.path().join("ok.out.follow")).unwrap();
    assert!(first.contains("FIRST(<prog>)="));
    assert!(follow.contains("FOLLOW(<prog>)="));
}

#[test]
fn unknown_token_is_recorded_in_errors_file() {
    let dir = TempDir::new().unwrap();
    let src_path = dir.path().join("weird.src");
    fs::write(&src_path, b"main do end; @").unwrap();

    let mut cmd = Command::new(kapc_bin());
    cmd.arg(&src_path);
    cmd.assert().failure();

    let errors = fs::read_to_string(dir.path().join("weird.outlexerrors")).unwrap();
    assert!(errors.contains("Unknown token '@'"));
}

#[test]
fn continues_processing_remaining_files_after_a_syntax_error() {
    let dir = TempDir::new().unwrap();
    let bad_path = dir.path().join("bad.src");
    let good_path = dir.path().join("good.src");
    fs::write(&bad_path, b"main do if end;").unwrap();
    fs::write(&good_path, b"main do end;").unwrap();

    let mut cmd = Command::new(kapc_bin());
    cmd.arg(&bad_path).arg(&good_path);
    cmd.assert().failure();

    assert!(dir.path().join("good.outlextokens").exists());
}
