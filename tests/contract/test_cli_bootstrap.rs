use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn bootstrap_rejects_a_config_pointing_at_a_public_registry() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("regfix.toml");
    std::fs::write(&config, "registry_url = \"https://registry.npmjs.org\"\n").unwrap();

    let mut cmd = Command::cargo_bin("regfix").unwrap();
    cmd.arg("bootstrap")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("does not point at a local registry"));
}

#[test]
fn bootstrap_rejects_a_malformed_version() {
    let mut cmd = Command::cargo_bin("regfix").unwrap();
    cmd.args(["bootstrap", "--version", "1.0.0 beta"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot contain whitespace"));
}

#[test]
fn bootstrap_rejects_unknown_config_keys() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("regfix.toml");
    std::fs::write(&config, "not_a_real_key = true\n").unwrap();

    let mut cmd = Command::cargo_bin("regfix").unwrap();
    cmd.arg("bootstrap")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .code(3);
}
