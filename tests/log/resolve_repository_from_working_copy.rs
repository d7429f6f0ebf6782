use crate::common::command::{run_slog_command, svn_stub};
use crate::common::svn::SvnStub;
use assert_fs::TempDir;
use assert_fs::prelude::{PathChild, PathCreateDir};
use rstest::rstest;

#[rstest]
fn resolve_repository_from_working_copy(
    svn_stub: (TempDir, SvnStub),
) -> Result<(), Box<dyn std::error::Error>> {
    let (dir, stub) = svn_stub;
    dir.child(".svn").create_dir_all()?;
    let nested = dir.child("trunk");
    nested.create_dir_all()?;

    let mut cmd = run_slog_command(nested.path(), Some(&stub), &["-f", "oneline"]);
    cmd.env("SLOG_REPO", "file:///srv/svn/ignored");
    cmd.assert().success();

    let repo_arg = stub.recorded_args().last().cloned().unwrap_or_default();
    assert!(repo_arg.ends_with("trunk"), "{repo_arg}");

    Ok(())
}
