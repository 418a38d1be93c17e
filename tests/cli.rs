use anyhow::Result;

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Runs the game binary with `args`, feeding it `input` and then end of input
fn play(args: &[&str], input: &str) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_connect_m_cli"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        // the process may already have exited on bad arguments
        let _ = stdin.write_all(input.as_bytes());
    }
    Ok(child.wait_with_output()?)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn invalid_parameters_exit_with_status_one() -> Result<()> {
    let cases = [
        (["2", "2", "1"], "Board size N must be between 3 and 10."),
        (["11", "4", "1"], "Board size N must be between 3 and 10."),
        (["4", "5", "1"], "Parameter M must be higher than 1 and no higher than N."),
        (["4", "1", "0"], "Parameter M must be higher than 1 and no higher than N."),
        (["4", "3", "2"], "Parameter H must be 0 or 1."),
    ];
    for (args, message) in cases.iter() {
        let output = play(args, "")?;
        assert_eq!(output.status.code(), Some(1), "args {:?}", args);
        assert!(stdout(&output).contains(message), "args {:?}", args);
    }
    Ok(())
}

#[test]
fn zero_depth_is_rejected() -> Result<()> {
    let output = play(&["4", "3", "1", "--depth", "0"], "")?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Search depth must be at least 1."));
    Ok(())
}

#[test]
fn non_numeric_parameters_are_usage_errors() -> Result<()> {
    let output = play(&["four", "3", "1"], "")?;
    assert_eq!(output.status.code(), Some(2));
    assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
    Ok(())
}

#[test]
fn game_ends_when_input_runs_out() -> Result<()> {
    let output = play(&["3", "3", "1"], "")?;
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("No more input. Ending the game."));
    assert_eq!(text.matches("Enter column").count(), 1);
    Ok(())
}

#[test]
fn bad_columns_are_prompted_again() -> Result<()> {
    let output = play(&["3", "3", "1"], "abc\n0\n9\n")?;
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Invalid input. Please enter a number."));
    assert_eq!(text.matches("Column out of range.").count(), 2);
    assert_eq!(text.matches("Enter column").count(), 4);
    assert!(text.contains("No more input. Ending the game."));
    Ok(())
}
