use crate::common::command::{REPO_URL, run_slog_command, work_dir};
use crate::common::svn::SvnStub;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn propagate_svn_exit_code(work_dir: TempDir) {
    let stub = SvnStub::failing(
        work_dir.path(),
        "svn: E170013: Unable to connect to a repository",
        3,
    );

    run_slog_command(work_dir.path(), Some(&stub), &["--repo", REPO_URL])
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "svn: E170013: Unable to connect to a repository",
        ));
}

#[rstest]
fn non_executable_svn_override_is_rejected(work_dir: TempDir) {
    let mut cmd = run_slog_command(work_dir.path(), None, &["--repo", REPO_URL]);
    cmd.env("SLOG_SVN", work_dir.path().join("missing-svn"));

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is not executable"));
}
