use assert_cmd::Command;
use predicates::prelude::*;

// Every scaffold variant must refuse to run when the active registry is not
// local, before any child process is spawned.

fn regfix() -> Command {
    let mut cmd = Command::cargo_bin("regfix").unwrap();
    cmd.env_remove("npm_config_registry");
    cmd
}

#[test]
fn install_refuses_a_public_registry() {
    regfix()
        .env("NPM_CONFIG_REGISTRY", "https://registry.npmjs.org")
        .args(["scaffold", "install"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("does not look like a local registry"));
}

#[test]
fn add_refuses_an_unset_registry() {
    regfix()
        .env_remove("NPM_CONFIG_REGISTRY")
        .args(["scaffold", "add"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("does not look like a local registry"));
}

#[test]
fn new_refuses_a_public_registry_even_with_a_valid_name() {
    regfix()
        .env("NPM_CONFIG_REGISTRY", "https://registry.npmjs.org")
        .args(["scaffold", "new", "fixture-workspace"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("does not look like a local registry"));
}

#[test]
fn new_rejects_an_invalid_workspace_name() {
    regfix()
        .env("NPM_CONFIG_REGISTRY", "http://localhost:4873")
        .args(["scaffold", "new", "1nvalid name"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid workspace name"));
}

#[test]
fn generate_refuses_a_public_registry() {
    regfix()
        .env("NPM_CONFIG_REGISTRY", "https://registry.npmjs.org")
        .args(["scaffold", "generate", "app", "my-app"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("does not look like a local registry"));
}
