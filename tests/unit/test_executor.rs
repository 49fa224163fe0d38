use regfix::models::executor::ExecutorOptions;
use regfix::services::executor::build_command;

#[test]
fn command_with_update_snapshots_matches_expected_shape() {
    let options = ExecutorOptions::new(".", "foo.spec.ts").update_snapshots(true);
    assert_eq!(build_command(&options), "npx jest --runInBand foo.spec.ts -u");
}

#[test]
fn command_without_update_snapshots_has_no_flag() {
    let options = ExecutorOptions::new(".", "foo.spec.ts").update_snapshots(false);
    assert_eq!(build_command(&options), "npx jest --runInBand foo.spec.ts");

    // Omitting the builder call entirely behaves the same way
    let options = ExecutorOptions::new(".", "foo.spec.ts");
    assert_eq!(build_command(&options), "npx jest --runInBand foo.spec.ts");
}

#[test]
fn suite_path_is_passed_through_verbatim() {
    let options = ExecutorOptions::new("e2e", "suites/nested/rules.spec.ts");
    assert_eq!(
        build_command(&options),
        "npx jest --runInBand suites/nested/rules.spec.ts"
    );
}
