use std::path::Path;

use regfix::models::publish::PublishOptions;
use regfix::services::publisher::{publish_local_packages, PublishError, ALREADY_PRESENT_MARKER};

// The publish script is invoked through the shell, so a fake driven via
// `sh <path>` stands in for ./publish-to-verdaccio.sh without needing +x bits.
fn fake_script(dir: &Path, body: &str) -> String {
    let path = dir.join("fake-publish.sh");
    std::fs::write(&path, body).unwrap();
    format!("sh {}", path.display())
}

#[tokio::test]
async fn successful_publish_resolves_in_quiet_mode() {
    let dir = tempfile::tempdir().unwrap();
    let script = fake_script(dir.path(), "echo published\nexit 0\n");

    let options = PublishOptions::new("9999.0.1-local-integration-tests").script(script);
    publish_local_packages(&options).await.unwrap();
}

#[tokio::test]
async fn successful_publish_resolves_in_verbose_mode() {
    let dir = tempfile::tempdir().unwrap();
    let script = fake_script(dir.path(), "echo published\nexit 0\n");

    let options = PublishOptions::new("9999.0.1-local-integration-tests")
        .script(script)
        .verbose(true);
    publish_local_packages(&options).await.unwrap();
}

#[tokio::test]
async fn version_is_forwarded_to_the_script() {
    let dir = tempfile::tempdir().unwrap();
    let witness = dir.path().join("version.txt");
    let script = fake_script(
        dir.path(),
        &format!("printf '%s' \"$1\" > {}\n", witness.display()),
    );

    let options = PublishOptions::new("9999.0.2-forwarded").script(script);
    publish_local_packages(&options).await.unwrap();

    assert_eq!(std::fs::read_to_string(witness).unwrap(), "9999.0.2-forwarded");
}

#[tokio::test]
async fn benign_republish_is_treated_as_success() {
    let dir = tempfile::tempdir().unwrap();
    let script = fake_script(
        dir.path(),
        &format!("echo 'npm ERR! {}'\nexit 1\n", ALREADY_PRESENT_MARKER),
    );

    let options = PublishOptions::new("9999.0.1-local-integration-tests").script(script);
    publish_local_packages(&options).await.unwrap();
}

#[tokio::test]
async fn marker_on_stderr_also_counts_as_benign() {
    let dir = tempfile::tempdir().unwrap();
    let script = fake_script(
        dir.path(),
        &format!("echo '{}' >&2\nexit 1\n", ALREADY_PRESENT_MARKER),
    );

    let options = PublishOptions::new("9999.0.1-local-integration-tests").script(script);
    publish_local_packages(&options).await.unwrap();
}

#[tokio::test]
async fn genuine_failure_rejects_with_the_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let script = fake_script(dir.path(), "echo 'npm ERR! 403 Forbidden'\nexit 7\n");

    let options = PublishOptions::new("9999.0.1-local-integration-tests").script(script);
    let result = publish_local_packages(&options).await;

    assert!(matches!(result, Err(PublishError::ScriptFailed(7))));
}

#[tokio::test]
async fn verbose_failure_rejects_without_classification() {
    let dir = tempfile::tempdir().unwrap();
    // Verbose mode streams instead of buffering, so the marker is never seen
    // and a non-zero exit stays fatal.
    let script = fake_script(
        dir.path(),
        &format!("echo '{}'\nexit 1\n", ALREADY_PRESENT_MARKER),
    );

    let options = PublishOptions::new("9999.0.1-local-integration-tests")
        .script(script)
        .verbose(true);
    let result = publish_local_packages(&options).await;

    assert!(matches!(result, Err(PublishError::ScriptFailed(1))));
}

#[tokio::test]
async fn missing_script_surfaces_the_shell_exit_code() {
    let options =
        PublishOptions::new("9999.0.1-local-integration-tests").script("./no-such-script.sh");
    let result = publish_local_packages(&options).await;

    // `sh -c` reports a missing command with exit code 127
    assert!(matches!(result, Err(PublishError::ScriptFailed(127))));
}
