//! CLI E2E Tests
//!
//! These tests pipe input into `cpylex` and verify its stdout, stderr and
//! exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Get the path to the cpylex binary
fn cpylex_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_cpylex"))
}

fn cpylex() -> Command {
    let mut cmd = Command::new(cpylex_bin());
    cmd.env_remove("PYLEX_LOG");
    cmd
}

/// Test 1: Empty Input
/// No tokens means no output and a successful exit
#[test]
fn test_empty_input() {
    cpylex().write_stdin("").assert().success().stdout("");
}

/// Test 2: Small Function
/// Verifies the full line format for a short Python snippet
#[test]
fn test_small_function() {
    let expected = "\
1: 'def'
9: ' '
2: 'foo'
7: '('
7: ')'
7: ':'
8: '\\n'
9: '    '
1: 'return'
9: ' '
3: '42'
8: '\\n'
";

    cpylex()
        .write_stdin("def foo():\n    return 42\n")
        .assert()
        .success()
        .stdout(expected);
}

/// Test 3: Escaped Lexemes
/// Backslashes and tabs inside tokens are rendered with escapes
#[test]
fn test_escaped_lexemes() {
    cpylex()
        .write_stdin("'a\\\\b'\t# c\r\n")
        .assert()
        .success()
        .stdout("4: ''a\\\\\\\\b''\n9: '\\t'\n5: '# c\\r'\n8: '\\n'\n");
}

/// Test 4: Lexical Error
/// A byte no rule matches ends the stream, still with success status
#[test]
fn test_lexical_error_exits_successfully() {
    cpylex()
        .write_stdin("x $ y")
        .assert()
        .success()
        .stdout("2: 'x'\n9: ' '\n");
}

/// Test 5: Lexical Error Is Logged
/// The reason for stopping is reported on stderr
#[test]
fn test_lexical_error_is_logged() {
    cpylex()
        .write_stdin("x $")
        .assert()
        .success()
        .stderr(predicate::str::contains("lexical error"));
}

/// Test 6: Quiet On Success
/// Nothing is logged at the default level for clean input
#[test]
fn test_clean_input_logs_nothing() {
    cpylex().write_stdin("x\n").assert().success().stderr("");
}

/// Test 7: Binary Input
/// Non-UTF-8 bytes inside a string are hex-escaped
#[test]
fn test_binary_input() {
    cpylex()
        .write_stdin(&b"\"\x00\xff\""[..])
        .assert()
        .success()
        .stdout("4: '\"\\0\\xff\"'\n");
}

/// Test 8: Verbose Logging
/// PYLEX_LOG raises the log level
#[test]
fn test_debug_logging() {
    cpylex()
        .env("PYLEX_LOG", "debug")
        .write_stdin("x")
        .assert()
        .success()
        .stdout("2: 'x'\n")
        .stderr(predicate::str::contains("end of input"));
}

/// Test 9: Arguments Are Ignored
/// The driver takes no options
#[test]
fn test_arguments_are_ignored() {
    cpylex()
        .arg("--help")
        .write_stdin("x")
        .assert()
        .success()
        .stdout("2: 'x'\n");
}

/// Test 10: Plain Log Lines
/// Stderr that is not a terminal gets no colour codes
#[test]
fn test_piped_stderr_has_no_colour() {
    cpylex()
        .write_stdin("x $")
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN stopping at lexical error"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}
