use crate::common::command::{run_slog_command, work_dir};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case("--help")]
#[case("-h")]
#[case("--help=yes")]
fn show_help(work_dir: TempDir, #[case] flag: &str) {
    run_slog_command(work_dir.path(), None, &[flag])
        .assert()
        .success()
        .stdout(predicate::str::contains("OPTIONS"))
        .stdout(predicate::str::contains("-a|--author"))
        .stdout(predicate::str::contains("-d|--days=<days>"))
        .stdout(predicate::str::contains("-R|--reverse"));
}
