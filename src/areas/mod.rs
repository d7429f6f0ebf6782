//! Outside world
//!
//! - `repository`: where the log comes from (`--repo`, working copy, `SLOG_REPO`)
//! - `svn`: the `svn` command line client

pub mod repository;
pub mod svn;
