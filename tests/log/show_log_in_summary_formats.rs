use crate::common::command::{REPO_URL, run_slog_command, svn_stub};
use crate::common::svn::SvnStub;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn summary_is_the_default_format(svn_stub: (TempDir, SvnStub)) {
    let (dir, stub) = svn_stub;

    run_slog_command(dir.path(), Some(&stub), &["--repo", REPO_URL])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("-".repeat(80)))
        .stdout(predicate::str::is_match(r"(?m)^r105 \| carol \| \w{3}, \d{2} \w{3} 2015 \d{2}:\d{2} (AM|PM)$").unwrap())
        .stdout(predicate::str::contains("Changed paths:\n   A /trunk/ui/menu.c\n   D /trunk/ui/old_menu.c\n"))
        .stdout(predicate::str::contains("\nFix backend bug\n"));
}

#[rstest]
fn short_summary_omits_changed_paths(svn_stub: (TempDir, SvnStub)) {
    let (dir, stub) = svn_stub;

    run_slog_command(dir.path(), Some(&stub), &["--repo", REPO_URL, "--format", "shortsummary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("r101 | alice |"))
        .stdout(predicate::str::contains("Changed paths:").not());
}
