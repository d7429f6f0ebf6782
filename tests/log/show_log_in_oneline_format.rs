use crate::common::command::{oneline_revisions, run_slog_command, svn_stub};
use crate::common::svn::SvnStub;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_log_in_oneline_format(
    svn_stub: (TempDir, SvnStub),
) -> Result<(), Box<dyn std::error::Error>> {
    let (dir, stub) = svn_stub;

    let output = run_slog_command(dir.path(), Some(&stub), &["--repo", "http://svn.example.com/project", "-f", "oneline"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "r101 Fix UI bug in toolbar");
    assert_eq!(lines[3], "r104 Refactor settings dialog");
    assert!(!stdout.contains('\u{1b}'));

    Ok(())
}

#[rstest]
fn show_log_in_reverse_order(svn_stub: (TempDir, SvnStub)) {
    let (dir, stub) = svn_stub;

    let output = run_slog_command(dir.path(), Some(&stub), &["-o", "http://svn.example.com/project", "--format=oneline", "-R"])
        .assert()
        .success();

    assert_eq!(
        oneline_revisions(&output.get_output().stdout),
        vec![105, 104, 103, 102, 101]
    );
}

#[rstest]
fn show_log_with_color(svn_stub: (TempDir, SvnStub)) {
    let (dir, stub) = svn_stub;

    let output = run_slog_command(dir.path(), Some(&stub), &["-o", "http://svn.example.com/project", "--format=oneline", "--color"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();

    assert!(stdout.contains("\u{1b}[33mr101\u{1b}[0m"), "{stdout}");
}
