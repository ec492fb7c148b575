use predicates::prelude::*;

mod common;

const INPUT: &str = "\
{id: 0, is_open: false, size: {length: 30, width: 25, height: 20}}
{id: 1, is_open: true, size: {length: 10, width: 10, height: 10}}
{id: 2, is_open: false, size: {length: 20, width: 20, height: 10}}
{id: 3, is_open: false, size: {length: 10, width: 10, height: 10}}
";

fn sorted_ids(args: &[&str]) -> Vec<String> {
    let ctx = common::carton();
    let output = ctx
        .new_cmd()
        .args(args)
        .write_stdin(INPUT)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    common::lines(&output)
        .iter()
        .map(|line| line.split(',').next().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_sort_ascending_is_stable() {
    assert_eq!(
        sorted_ids(&["--id-policy", "adopt", "sort"]),
        vec!["{id: 1", "{id: 3", "{id: 2", "{id: 0"]
    );
}

#[test]
fn test_sort_reverse() {
    assert_eq!(
        sorted_ids(&["--id-policy", "adopt", "sort", "--reverse"]),
        vec!["{id: 0", "{id: 2", "{id: 1", "{id: 3"]
    );
}

#[test]
fn test_sort_keeps_state() {
    let mut ctx = common::carton();

    ctx.cmd
        .arg("sort")
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("is_open: true").count(1));
}

#[test]
fn test_sort_empty_input() {
    let mut ctx = common::carton();

    ctx.cmd.arg("sort").write_stdin("").assert().success().stdout("");
}

#[test]
fn test_sort_rejects_whole_stream_on_error() {
    let mut ctx = common::carton();

    ctx.cmd
        .arg("sort")
        .write_stdin(format!("{}{{size: {{length: 0, width: 1, height: 1}}}}\n", INPUT))
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to decode cartons from stdin"));
}
