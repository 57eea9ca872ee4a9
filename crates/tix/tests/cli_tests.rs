//! Argument-surface behavior through the real binary: help, usage errors,
//! exit codes. Nothing here reaches the network.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn tix() -> Command {
    let mut cmd = Command::cargo_bin("tix").unwrap();
    // Point at a nonexistent config by default so user machines don't leak in.
    cmd.env("TIX_CONFIG", "/nonexistent/tix-config.toml");
    cmd.env_remove("TIX_API_TOKEN");
    cmd.env_remove("TIX_PROJECT");
    cmd
}

fn config_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[server]\nurl = \"https://jira.example.invalid\"\nlogin = \"me@example.com\"\n\n[project]\nkey = \"PROJ\"\n"
    )
    .unwrap();
    file
}

#[test]
fn help_lists_the_bulk_commands() {
    tix()
        .args(["issue", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("assign-bulk"))
        .stdout(predicate::str::contains("move-bulk"))
        .stdout(predicate::str::contains("story-points"));
}

#[test]
fn unknown_subcommand_exits_2() {
    tix().args(["issue", "frobnicate"]).assert().code(2);
}

#[test]
fn missing_required_args_exit_2() {
    // move-bulk requires at least keys plus a state.
    tix().args(["issue", "move-bulk", "PROJ-1"]).assert().code(2);
}

#[test]
fn stdin_and_jql_are_mutually_exclusive() {
    tix()
        .args([
            "issue",
            "assign-bulk",
            "PROJ-1",
            "jane",
            "--stdin",
            "--jql",
            "project = PROJ",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_config_file_is_reported() {
    tix()
        .args(["issue", "assign-bulk", "PROJ-1", "jane"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn missing_api_token_is_reported() {
    let config = config_file();
    tix()
        .env("TIX_CONFIG", config.path())
        .args(["issue", "assign-bulk", "PROJ-1", "jane"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TIX_API_TOKEN"));
}
