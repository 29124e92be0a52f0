//! End-to-end tests for the `reckon` binary.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const INVALID_INPUT: &str =
    "Invalid input. Please enter a valid operation and two numbers. Type 'help' for instructions.";

/// A `reckon` command isolated from the user's config and environment.
fn reckon(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("reckon");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env_remove("RECKON__REPL__PROMPT")
        .env_remove("RECKON__REPL__BANNER")
        .env_remove("RECKON__LOGGING__FILE")
        .env_remove("RECKON__OUTPUT__NO_COLOR");
    cmd
}

// ── flags ─────────────────────────────────────────────────────────────────────

#[test]
fn help_flag() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_exits_with_user_error() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .arg("--frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--frobnicate"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn no_color_env_accepts_any_value() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .env("NO_COLOR", "1")
        .args(["eval", "add", "5", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 8.0"));

    reckon(&home)
        .env("NO_COLOR", "1")
        .write_stdin("add 5 3\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 8.0"));
}

#[test]
fn repl_survives_invalid_utf8() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .write_stdin(b"add 1 2\nadd \xff 2\nadd 3 4\nexit\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains(INVALID_INPUT))
        .stdout(predicate::str::contains("Result: 7.0"));
}

// ── repl ──────────────────────────────────────────────────────────────────────

#[test]
fn repl_adds_and_exits() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .write_stdin("add 5 3\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the OOP Calculator!"))
        .stdout(predicate::str::contains("Result: 8.0"))
        .stdout(predicate::str::contains("Exiting calculator..."));
}

#[test]
fn repl_subcommand_without_banner() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .args(["repl", "--no-banner"])
        .write_stdin("multiply 7 3\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome").not())
        .stdout(predicate::str::contains("Result: 21.0"));
}

#[test]
fn repl_division_by_zero_keeps_running() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .write_stdin("divide 5 0\ndivide 20 5\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(INVALID_INPUT))
        .stdout(predicate::str::contains("Result: 4.0"));
}

#[test]
fn repl_unknown_operation() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .write_stdin("invalid 10 2\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unknown operation 'invalid'. Type 'help' for available commands.",
        ));
}

#[test]
fn repl_list_and_clear() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .write_stdin("list\nadd 5 3\nsubtract 10 4\nlist\nclear\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("5.0 addition 3.0 = 8.0"))
        .stdout(predicate::str::contains("10.0 subtraction 4.0 = 6.0"))
        .stdout(predicate::str::contains("History cleared."))
        .stdout(predicate::str::contains("No calculations in history.").count(2));
}

#[test]
fn repl_help() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available commands:"))
        .stdout(predicate::str::contains("divide <num1> <num2>"));
}

#[test]
fn repl_end_of_input_exits_cleanly() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .write_stdin("add 1 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 3.0"))
        .stdout(predicate::str::contains("Exiting calculator..."));
}

#[test]
fn repl_prompt_from_environment() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .env("RECKON__REPL__PROMPT", "calc> ")
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("calc> "));
}

// ── eval ──────────────────────────────────────────────────────────────────────

#[test]
fn eval_prints_result() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .args(["eval", "divide", "20", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 4.0"));
}

#[test]
fn eval_prints_large_results_in_scientific_notation() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .args(["eval", "multiply", "1e10", "1e10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 1e+20"));
}

#[test]
fn eval_accepts_negative_numbers() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .args(["eval", "add", "-2", "-3.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: -5.5"));
}

#[test]
fn eval_json_output() {
    let home = TempDir::new().unwrap();
    let assert = reckon(&home)
        .args(["--output-format", "json", "eval", "add", "5", "3"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["operation"], "addition");
    assert_eq!(json["result"], 8.0);
}

#[test]
fn eval_division_by_zero_is_user_error() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .args(["eval", "divide", "5", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn eval_unknown_operation_is_user_error() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .args(["eval", "power", "2", "8"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown operation 'power'"));
}

// ── logging & config ──────────────────────────────────────────────────────────

#[test]
fn log_file_records_operations() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("calculator.log");

    reckon(&home)
        .arg("--log-file")
        .arg(&log)
        .args(["eval", "add", "5", "3"])
        .assert()
        .success();

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Operation performed: 5.0 and 3.0 -> Result: 8.0"));
    assert!(contents.contains("Observer: New calculation added -> 5.0 addition 3.0 = 8.0"));
}

#[test]
fn missing_explicit_config_is_config_error() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .arg("--config")
        .arg(home.path().join("absent.toml"))
        .args(["eval", "add", "1", "1"])
        .assert()
        .code(4);
}

#[test]
fn config_file_sets_prompt() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("reckon.toml");
    fs::write(&path, "[repl]\nprompt = \"=> \"\nbanner = false\n").unwrap();

    reckon(&home)
        .arg("--config")
        .arg(&path)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("=> "));
}

#[test]
fn config_get_unknown_key_fails() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .args(["config", "get", "nope.nothing"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    reckon(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reckon"));
}
