// Options consumed by the test-suite executor

use std::path::PathBuf;

/// One executor invocation: which suite file to run, from where, and whether
/// the runner should rewrite snapshots. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct ExecutorOptions {
    /// Working directory the test runner executes in
    pub cwd: PathBuf,
    /// Path of the suite file, relative to `cwd`
    pub test_file_path: PathBuf,
    /// Append the runner's update-snapshots flag
    pub update_snapshots: bool,
}

impl ExecutorOptions {
    pub fn new(cwd: impl Into<PathBuf>, test_file_path: impl Into<PathBuf>) -> Self {
        ExecutorOptions {
            cwd: cwd.into(),
            test_file_path: test_file_path.into(),
            update_snapshots: false,
        }
    }

    pub fn update_snapshots(mut self, update: bool) -> Self {
        self.update_snapshots = update;
        self
    }
}
