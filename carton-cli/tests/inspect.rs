use predicates::prelude::*;

mod common;

const OPEN_FULL: &str = "{id: 7, is_open: true, item: {length: 5, width: 5, height: 5}, \
                         size: {length: 10, width: 10, height: 10}}";

#[test]
fn test_inspect_text() {
    let mut ctx = common::carton();

    ctx.cmd
        .args(["inspect", OPEN_FULL])
        .assert()
        .success()
        .stdout(predicate::str::contains("STATUS"))
        .stdout(predicate::str::contains("open-full"))
        .stdout(predicate::str::contains("1000"));
}

#[test]
fn test_inspect_json_reassigns_id() {
    let mut ctx = common::carton();

    let output = ctx
        .cmd
        .args(["inspect", "--format", "json", OPEN_FULL])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let reports: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(reports[0]["id"], 0);
    assert_eq!(reports[0]["status"], "open-full");
    assert_eq!(reports[0]["volume"], 1000);
    assert_eq!(reports[0]["item"]["height"], 5);
}

#[test]
fn test_inspect_adopt_keeps_id() {
    let mut ctx = common::carton();

    ctx.cmd
        .args(["--id-policy", "adopt", "inspect", "--format", "json", OPEN_FULL])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 7"));
}

#[test]
fn test_inspect_reads_stdin() {
    let mut ctx = common::carton();

    ctx.cmd
        .args(["inspect", "-"])
        .write_stdin(format!("{}\n{}\n", OPEN_FULL, OPEN_FULL))
        .assert()
        .success()
        .stdout(predicate::str::contains("open-full").count(2));
}

#[test]
fn test_inspect_malformed() {
    let mut ctx = common::carton();

    ctx.cmd
        .args(["inspect", "{id: 1; size: {}}"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid symbol in stream (;)"));
}

#[test]
fn test_inspect_debug_logs_to_stderr() {
    let mut ctx = common::carton();

    ctx.cmd
        .args(["--debug", "inspect", OPEN_FULL])
        .assert()
        .success()
        .stderr(predicate::str::contains("Decoded carton"));
}
