//! End-to-end runs of the optionpane binary with piped standard streams

use std::io::Write;
use std::process::{Command, Output, Stdio};
use test_log::test;

fn run_optionpane(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_optionpane"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start optionpane");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for optionpane")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn message_with_title() {
    let output = run_optionpane(
        &["message", "Done", "--title", "Status", "--severity", "information"],
        "",
    );
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Status : Done\n");
}

#[test]
fn input_echoes_the_answer() {
    let output = run_optionpane(&["input", "Enter width: "], "42\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Enter width: \n42\n");
}

#[test]
fn input_on_closed_stdin_exits_with_exhaustion_code() {
    let output = run_optionpane(&["input", "Enter width: "], "");
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout_of(&output), "Enter width: \n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("No more input"));
}

#[test]
fn volume_calculator_end_to_end() {
    let output = run_optionpane(&["volume"], "10\n20\n30\n");
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Result : The volume of the container is 6000\n"));
    assert!(stdout.contains("Result : The dimensions concatenated are 102030\n"));
}

#[test]
fn missing_command_prints_help_and_fails() {
    let output = run_optionpane(&[], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("Usage"));
}
