use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn run_requires_a_suite_file() {
    let mut cmd = Command::cargo_bin("regfix").unwrap();
    cmd.arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TEST_FILE_PATH"));
}

#[test]
fn run_help_documents_the_snapshot_flag() {
    let mut cmd = Command::cargo_bin("regfix").unwrap();
    cmd.args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--update-snapshots"))
        .stdout(predicate::str::contains("--cwd"));
}

#[test]
fn top_level_help_lists_all_subcommands() {
    let mut cmd = Command::cargo_bin("regfix").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bootstrap"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("publish"))
        .stdout(predicate::str::contains("scaffold"));
}
