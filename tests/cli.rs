use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut c = Command::cargo_bin("tasks").unwrap();
    c.arg("--no-color").env_remove("RUST_LOG");
    c
}

#[test]
fn exit_option_ends_session() {
    cmd()
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Task Tracker ==="))
        .stdout(predicate::str::ends_with("Goodbye.\n"));
}

#[test]
fn closed_stdin_ends_session() {
    cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn invalid_menu_input_is_reported() {
    cmd()
        .write_stdin("hello\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid selection 'hello'."))
        .stdout(predicate::str::contains("Please choose 1-4."));
}

#[test]
fn rejected_input_stays_off_stderr() {
    cmd()
        .write_stdin("x\n1\nTask\n\n01-01-30\n\n\n3\n9\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid selection 'x'."))
        .stdout(predicate::str::contains("Error: Invalid due date '01-01-30'"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn verbose_logs_are_plain_without_color() {
    cmd()
        .arg("-vv")
        .write_stdin("x\n4\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("request rejected"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn add_then_list_sorted_by_priority() {
    let script = "\
1\nLow one\n\n\nniedrig\n\n\
1\nHigh one\nimportant\n01-01-2030\nHIGH\nwork,\n\
2\n3\n\
4\n";
    let out = cmd()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task #1 on "))
        .stdout(predicate::str::contains("Added task #2 on "))
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).unwrap();
    let high = out.find("2    High one").expect("high row");
    let low = out.find("1    Low one").expect("low row");
    assert!(high < low);
    assert!(out.contains("01-01-2030"));
    assert!(out.contains("work, "));
}

#[test]
fn listing_empty_store_shows_message() {
    cmd()
        .write_stdin("2\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks yet."))
        .stdout(predicate::str::contains("Sort?").not());
}

#[test]
fn status_change_round_trip() {
    cmd()
        .write_stdin("1\nTask\n\n\n\n\n3\n1\nIn Bearbeitung\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current status: open"))
        .stdout(predicate::str::contains("Status updated: open -> in-progress."));
}

#[test]
fn json_layout_lists_tasks() {
    cmd()
        .args(["--layout", "json"])
        .write_stdin("1\nShip it\n\n15-06-2030\n\nrelease\n2\n\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Ship it\""))
        .stdout(predicate::str::contains("\"due\": \"2030-06-15\""));
}

#[test]
fn completions_are_printed() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tasks"));
}
