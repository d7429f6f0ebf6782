use crate::common::command::{run_slog_command, svn_stub};
use crate::common::svn::SvnStub;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn fail_without_repository(svn_stub: (TempDir, SvnStub)) {
    let (dir, stub) = svn_stub;

    run_slog_command(dir.path(), Some(&stub), &["-f", "oneline"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no repository given"));

    assert!(stub.recorded_args().is_empty());
}

#[rstest]
fn repository_from_environment(svn_stub: (TempDir, SvnStub)) {
    let (dir, stub) = svn_stub;

    let mut cmd = run_slog_command(dir.path(), Some(&stub), &["-f", "oneline"]);
    cmd.env("SLOG_REPO", "file:///srv/svn/project");
    cmd.assert().success();

    assert_eq!(
        stub.recorded_args().last().map(String::as_str),
        Some("file:///srv/svn/project")
    );
}
