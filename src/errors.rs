//! Error taxonomy
//!
//! Every fatal condition of an invocation is one of these variants. They travel
//! through `anyhow::Error` like the rest of the crate and are recovered once in
//! `main` to pick the process exit code.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlogError {
    #[error(
        "no repository given: pass --repo, run inside an svn working copy or set {env}",
        env = crate::areas::repository::REPO_ENV_VAR
    )]
    RepositoryUnresolved,

    #[error("unknown format '{0}' (expected one of: {names})", names = crate::artifacts::format::format_names().join(", "))]
    UnknownFormat(String),

    #[error("invalid value '{value}' for --{option}: expected a non-negative number")]
    InvalidNumber { option: String, value: String },

    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("malformed commit record: {0}")]
    MalformedCommit(String),

    #[error("{last_line}\n({command})")]
    FetchFailed {
        code: i32,
        last_line: String,
        command: String,
    },

    #[error("svn binary '{0}' is not executable")]
    SvnNotExecutable(String),
}

impl SlogError {
    /// Exit code the process should terminate with for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SlogError::FetchFailed { code, .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}

/// Maps any error of an invocation to a process exit code
pub fn exit_code_of(error: &anyhow::Error) -> i32 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<SlogError>())
        .map(SlogError::exit_code)
        .unwrap_or(1)
}
