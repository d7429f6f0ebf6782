use crate::common::svn::{LogEntrySpec, SvnStub, log_xml};
use assert_cmd::Command;
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Words;
use rstest::fixture;
use std::path::Path;

pub const REPO_URL: &str = "http://svn.example.com/project";

#[fixture]
pub fn work_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Five commits by three authors, revisions 101..=105
#[fixture]
pub fn history() -> Vec<LogEntrySpec> {
    vec![
        LogEntrySpec::simple(101, "alice", "Fix UI bug in toolbar"),
        LogEntrySpec::simple(102, "bob", "Fix backend bug"),
        LogEntrySpec::simple(103, "buildbot", "Minify CSS"),
        LogEntrySpec::simple(104, "alice", "Refactor settings dialog"),
        LogEntrySpec::new(
            105,
            "carol".to_string(),
            Words(3..6).fake::<Vec<String>>().join(" "),
            vec![
                ("A".to_string(), "/trunk/ui/menu.c".to_string()),
                ("D".to_string(), "/trunk/ui/old_menu.c".to_string()),
            ],
        ),
    ]
}

#[fixture]
pub fn svn_stub(work_dir: TempDir, history: Vec<LogEntrySpec>) -> (TempDir, SvnStub) {
    let stub = SvnStub::succeeding(work_dir.path(), &log_xml(&history));
    (work_dir, stub)
}

pub fn run_slog_command(dir: &Path, stub: Option<&SvnStub>, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("slog").expect("Failed to find slog binary");
    cmd.current_dir(dir);
    cmd.env_remove("SLOG_REPO");
    cmd.env_remove("RUST_LOG");
    match stub {
        Some(stub) => cmd.env("SLOG_SVN", stub.binary()),
        None => cmd.env_remove("SLOG_SVN"),
    };
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Revisions printed by the `oneline` format, in output order
pub fn oneline_revisions(stdout: &[u8]) -> Vec<u64> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter_map(|label| label.strip_prefix('r'))
        .filter_map(|revision| revision.parse().ok())
        .collect()
}
