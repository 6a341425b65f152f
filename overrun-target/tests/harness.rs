// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io::Write;
use std::process::{Command, Stdio};

use overrun_target::{Outcome, Status};
use pretty_assertions::assert_eq;

const UNCHECKED: &str = env!("CARGO_BIN_EXE_overrun");
const CHECKED: &str = env!("CARGO_BIN_EXE_overrun-control");

struct Run {
    outcome: Outcome,
    stdout: String,
}

fn run(exe: &str, input: &[u8]) -> Run {
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    {
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(input).unwrap();
    }

    let output = child.wait_with_output().unwrap();

    Run {
        outcome: Outcome::from_exit_status(output.status),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
    }
}

fn assert_status(exe: &str, input: &[u8], expected: Status) {
    let run = run(exe, input);
    assert_eq!(run.outcome, Outcome::from(expected));
    assert_eq!(run.stdout, expected.output());
}

fn with_comparison(len: usize, left: u8, right: u8) -> Vec<u8> {
    let mut input = vec![b'A'; len];
    input[4] = left;
    input[5] = right;
    input.push(b'\n');
    input
}

#[test]
fn test_empty_input() {
    for exe in [UNCHECKED, CHECKED] {
        assert_status(exe, b"\n", Status::Empty);
        assert_status(exe, b"", Status::Empty);
    }
}

#[test]
fn test_normal_input() {
    for exe in [UNCHECKED, CHECKED] {
        assert_status(exe, &with_comparison(6, 5, 11), Status::Normal);
    }
}

#[test]
fn test_condition_true() {
    for exe in [UNCHECKED, CHECKED] {
        assert_status(exe, &with_comparison(6, 11, 5), Status::ConditionTrue);
    }
}

#[test]
fn test_large_input_within_capacity() {
    for exe in [UNCHECKED, CHECKED] {
        assert_status(exe, &[b'A'; 62], Status::Large);
        assert_status(exe, &[b'A'; 63], Status::Large);
    }
}

#[test]
fn test_identical_input_identical_result() {
    let input = with_comparison(30, 1, 2);

    for exe in [UNCHECKED, CHECKED] {
        let first = run(exe, &input);
        let second = run(exe, &input);
        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.stdout, second.stdout);
    }
}

#[test]
fn test_overrun_comparison_precedes_size() {
    let run = run(UNCHECKED, &with_comparison(70, 11, 5));

    // Either the frame survived and the status came back, or the corruption
    // took the process down on the way out.
    match run.outcome {
        Outcome::Code(code) => {
            assert_eq!(code, Status::ConditionTrue.code());
            assert_eq!(run.stdout, Status::ConditionTrue.output());
        }
        Outcome::Signal(_) => {}
    }
}

#[test]
fn test_control_rejects_overrun() {
    let run = run(CHECKED, &with_comparison(70, 11, 5));

    assert_eq!(run.outcome, Outcome::Code(overrun_target::error::EXIT_REJECTED));
    assert_eq!(run.stdout, "");
}
