use crate::common::command::{REPO_URL, oneline_revisions, run_slog_command, svn_stub};
use crate::common::svn::SvnStub;
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(&["-e", "/fix/i"], vec![101, 102])]
#[case(&["-e", "/fix/i", "-e", "/ui/i"], vec![101])]
#[case(&["--regex=Fix", "--regex=backend"], vec![102])]
#[case(&["-e", "old_menu"], vec![105])]
#[case(&["-e", "/^buildbot$/m"], vec![103])]
#[case(&["-e", "/^10[24]$/m", "-a", "alice"], vec![104])]
fn filter_by_multiple_regexes(
    svn_stub: (TempDir, SvnStub),
    #[case] filters: &[&str],
    #[case] expected: Vec<u64>,
) {
    let (dir, stub) = svn_stub;
    let mut args = vec!["--repo", REPO_URL, "-f", "oneline"];
    args.extend_from_slice(filters);

    let output = run_slog_command(dir.path(), Some(&stub), &args)
        .assert()
        .success();

    assert_eq!(oneline_revisions(&output.get_output().stdout), expected);
}

#[rstest]
fn invalid_regex_fails_before_fetching(svn_stub: (TempDir, SvnStub)) {
    let (dir, stub) = svn_stub;

    run_slog_command(dir.path(), Some(&stub), &["--repo", REPO_URL, "-e", "/unterminated"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid pattern '/unterminated'"));

    assert!(stub.recorded_args().is_empty());
}
