//! End-to-end runs of both binaries.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn play(moves: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fair-rps"))
        .args(moves)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // Argument errors exit before reading stdin; a broken pipe is fine
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

fn field<'a>(stdout: &'a str, prefix: &str) -> &'a str {
    stdout
        .lines()
        .find_map(|l| l.split(prefix).nth(1))
        .unwrap_or_else(|| panic!("no '{}' in output:\n{}", prefix, stdout))
}

#[test]
fn test_even_count_exits_one() {
    let out = play(&["rock", "paper"], "");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage:"));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_no_args_exits_one() {
    let out = play(&[], "");
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_duplicate_exits_one() {
    let out = play(&["rock", "rock", "paper"], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unique"));
}

#[test]
fn test_help_exits_zero() {
    let out = play(&["rock", "paper", "scissors"], "?\n");
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Help table:"));
    assert!(stdout.contains("PC/USER"));
}

#[test]
fn test_exit_choice_exits_zero() {
    let out = play(&["rock", "paper", "scissors"], "0\n");
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_out_of_range_exits_one() {
    let out = play(&["rock", "paper", "scissors", "lizard", "spock"], "6\n");
    assert_eq!(out.status.code(), Some(1));

    // One plain line: the message, no log noise or colour codes
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("Invalid move"));
    assert_eq!(stderr.lines().count(), 1);
    assert!(!stderr.contains('\x1b'));
}

#[test]
fn test_bad_flag_value_exits_one() {
    let out = play(&["--column-width", "x", "rock", "paper", "scissors"], "0\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_unknown_flag_exits_one() {
    let out = play(&["--bogus", "rock", "paper", "scissors"], "0\n");
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_huge_column_width_exits_one() {
    let out = play(
        &["--column-width", "18446744073709551615", "rock", "paper", "scissors"],
        "?\n",
    );
    assert_eq!(out.status.code(), Some(1));

    let out = play(&["--column-width", "2", "rock", "paper", "scissors"], "?\n");
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_column_width_in_range_renders_help() {
    let out = play(&["--column-width", "80", "rock", "paper", "scissors"], "?\n");
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Help table:"));
}

#[test]
fn test_flag_like_moves_after_first_move() {
    let out = play(&["rock", "-h", "paper"], "0\n");
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("2 - -h"));
    assert!(stdout.contains("3 - paper"));
}

#[test]
fn test_double_dash_allows_leading_hyphen_move() {
    let out = play(&["--", "-v", "paper", "scissors"], "0\n");
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("1 - -v"));
}

#[test]
fn test_help_flag_exits_zero() {
    let out = play(&["--help"], "");
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Use --"));
}

#[test]
fn test_round_can_be_verified() {
    let out = play(&["rock", "paper", "scissors"], "2\n");
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&out.stdout).into_owned();
    let hmac = field(&stdout, "HMAC: ");
    let key = field(&stdout, "Key: ");
    let computer = field(&stdout, "Computer move: ");
    assert_eq!(hmac.len(), 64);
    assert_eq!(key.len(), 64);
    assert!(field(&stdout, "Your move: ") == "paper");

    let verified = Command::new(env!("CARGO_BIN_EXE_fair-rps-verify"))
        .args(["--key", key, "--hmac", hmac, computer])
        .output()
        .unwrap();
    assert_eq!(verified.status.code(), Some(0));

    let forged = Command::new(env!("CARGO_BIN_EXE_fair-rps-verify"))
        .args(["--key", key, "--hmac", hmac, "--json", "not-a-move"])
        .output()
        .unwrap();
    assert_eq!(forged.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&forged.stdout).unwrap();
    assert_eq!(report["valid"], false);
}

#[test]
fn test_verify_missing_key_exits_one() {
    let out = Command::new(env!("CARGO_BIN_EXE_fair-rps-verify"))
        .args(["--hmac", "00", "rock"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
}
