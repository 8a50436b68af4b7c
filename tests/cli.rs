use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const NOW: &str = "2025-01-15 09:30";

const TRANSCRIPT: &str = "Aman you take the landing page by 10pm tomorrow. \
Rajeev you take care of client follow-up by Wednesday. \
We should grab lunch sometime! \
Let's assign the landing copy to Sam by monday 3pm, it is urgent.";

/// A command isolated from the user's config and log settings.
fn quicktask(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("quicktask").unwrap();
    cmd.env("QUICKTASK_HOME", home.path())
        .env_remove("QUICKTASK_LOG")
        .env_remove("RUST_LOG")
        .arg("--now")
        .arg(NOW);
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// =====
// parse
// =====

#[test]
fn test_parse_json() {
    let home = TempDir::new().unwrap();
    let value = json_stdout(quicktask(&home).args([
        "-o",
        "json",
        "parse",
        "Finish landing page by tomorrow 5pm for Aman p1",
    ]));

    assert_eq!(value["title"], "Finish landing page");
    assert_eq!(value["assignee"], "Aman");
    assert_eq!(value["dueDate"], "2025-01-16T17:00:00");
    assert_eq!(value["priority"], "P1");
}

#[test]
fn test_parse_unquoted_words_with_alias() {
    let home = TempDir::new().unwrap();
    let value = json_stdout(quicktask(&home).args(["-o", "json", "p", "buy", "milk"]));

    assert_eq!(value["title"], "buy milk");
    assert_eq!(value["assignee"], "");
    assert!(value["dueDate"].is_null());
    assert_eq!(value["priority"], "P3");
}

#[test]
fn test_parse_pretty() {
    let home = TempDir::new().unwrap();
    quicktask(&home)
        .args(["parse", "call Rajeev before friday 11am urgent"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Assignee: Rajeev"))
        .stdout(predicate::str::contains("Fri Jan 17 2025 11:00"))
        .stdout(predicate::str::contains("P1"));
}

#[test]
fn test_parse_requires_text() {
    let home = TempDir::new().unwrap();
    quicktask(&home).arg("parse").assert().failure();
}

#[test]
fn test_invalid_now_is_reported() {
    let home = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("quicktask").unwrap();
    cmd.env("QUICKTASK_HOME", home.path())
        .args(["--now", "whenever", "parse", "ship it"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("--now"));
}

// =======
// minutes
// =======

#[test]
fn test_minutes_from_file() {
    let home = TempDir::new().unwrap();
    let notes = home.path().join("notes.txt");
    fs::write(&notes, TRANSCRIPT).unwrap();

    let value = json_stdout(quicktask(&home).args(["-o", "json", "minutes"]).arg(&notes));

    assert_eq!(value["count"], 3);
    let items = value["items"].as_array().unwrap();
    assert_eq!(items[0]["assignee"], "Aman");
    assert_eq!(items[0]["title"], "landing page");
    assert_eq!(items[0]["dueDate"], "2025-01-16T22:00:00");
    assert_eq!(items[1]["assignee"], "Rajeev");
    assert_eq!(items[1]["dueDate"], "2025-01-22T00:00:00");
    assert_eq!(items[2]["assignee"], "Sam");
    assert_eq!(items[2]["priority"], "P1");
}

#[test]
fn test_minutes_from_stdin() {
    let home = TempDir::new().unwrap();
    let value = json_stdout(
        quicktask(&home)
            .args(["-o", "json", "m", "-"])
            .write_stdin(TRANSCRIPT),
    );

    assert_eq!(value["count"], 3);
}

#[test]
fn test_minutes_filters() {
    let home = TempDir::new().unwrap();
    let value = json_stdout(
        quicktask(&home)
            .args(["-o", "json", "minutes", "--assignee", "rajeev"])
            .write_stdin(TRANSCRIPT),
    );
    assert_eq!(value["count"], 1);
    assert_eq!(value["items"][0]["title"], "client follow-up");

    let value = json_stdout(
        quicktask(&home)
            .args(["-o", "json", "minutes", "--search", "LANDING"])
            .write_stdin(TRANSCRIPT),
    );
    assert_eq!(value["count"], 2);
}

#[test]
fn test_minutes_sorting() {
    let home = TempDir::new().unwrap();
    let value = json_stdout(
        quicktask(&home)
            .args(["-o", "json", "minutes", "--sort", "due", "--desc"])
            .write_stdin(TRANSCRIPT),
    );

    let assignees: Vec<_> = value["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["assignee"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(assignees, vec!["Rajeev", "Sam", "Aman"]);
}

#[test]
fn test_minutes_missing_file() {
    let home = TempDir::new().unwrap();
    quicktask(&home)
        .args(["minutes", "/no/such/transcript.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_minutes_without_assignments() {
    let home = TempDir::new().unwrap();
    quicktask(&home)
        .arg("minutes")
        .write_stdin("Nothing to see here. Just chatting.")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Action items (0 items)"));
}

// ======
// config
// ======

#[test]
fn test_config_default_output_and_sort() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.yaml"),
        "general:\n  default_output: json\nminutes:\n  sort_by: due\n",
    )
    .unwrap();

    let value = json_stdout(quicktask(&home).arg("minutes").write_stdin(TRANSCRIPT));

    assert_eq!(value["items"][0]["assignee"], "Aman");
    assert_eq!(value["items"][2]["assignee"], "Rajeev");
}

#[test]
fn test_output_flag_beats_config() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.yaml"),
        "general:\n  default_output: json\n  color: never\n",
    )
    .unwrap();

    quicktask(&home)
        .args(["-o", "pretty", "parse", "buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("buy milk"));
}

#[test]
fn test_broken_config_is_an_error() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("config.yaml"), "general: [not, a, map]\n").unwrap();

    quicktask(&home)
        .args(["parse", "buy milk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

// =====
// stats
// =====

#[test]
fn test_stats_json() {
    let home = TempDir::new().unwrap();
    let value = json_stdout(
        quicktask(&home)
            .args(["-o", "json", "stats"])
            .write_stdin(TRANSCRIPT),
    );

    assert_eq!(value["total"], 3);
    assert_eq!(value["byPriority"]["P1"], 1);
    assert_eq!(value["byPriority"]["P3"], 2);
    assert_eq!(value["byAssignee"]["Sam"], 1);
    assert_eq!(value["unassigned"], 0);
    assert_eq!(value["withDueDate"], 3);
    assert_eq!(value["overdue"], 0);
    assert_eq!(value["dueSoon"], 3);
}

#[test]
fn test_stats_pretty() {
    let home = TempDir::new().unwrap();
    quicktask(&home)
        .arg("stats")
        .write_stdin(TRANSCRIPT)
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("TASK SUMMARY"))
        .stdout(predicate::str::contains("BY ASSIGNEE"));
}

// ===========
// completions
// ===========

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    quicktask(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quicktask"));
}

#[test]
fn test_completions_instructions() {
    let home = TempDir::new().unwrap();
    quicktask(&home)
        .args(["completions", "zsh", "--instructions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compinit"));
}
