//! Subversion command line client
//!
//! The log is fetched with a single blocking `svn log --xml -v` invocation.
//! There is no timeout and no retry: a non-zero exit status fails the fetch
//! with the tool's last output line and exit code.

use crate::artifacts::log::commit::Commit;
use crate::artifacts::log::svn_xml;
use crate::errors::SlogError;
use anyhow::Context;
use chrono::{Days, Local, NaiveDate};
use derive_new::new;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Environment variable overriding the svn executable
pub const SVN_ENV_VAR: &str = "SLOG_SVN";
pub const DEFAULT_SVN: &str = "svn";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// What to ask `svn log` for
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LogRequest {
    repo: String,
    /// Look back this many days; 0 fetches the whole history
    days: u64,
    /// At most this many commits; 0 means no limit
    limit: u64,
    stop_on_copy: bool,
    /// Unrecognized command line tokens, forwarded verbatim
    extra_args: Vec<String>,
}

impl LogRequest {
    /// Arguments for `svn`, with the date window computed from `today`
    pub fn args_on(&self, today: NaiveDate) -> Vec<String> {
        let mut args = vec!["log".to_string(), "--xml".to_string(), "-v".to_string()];

        if self.days > 0 {
            let start = today
                .checked_sub_days(Days::new(self.days))
                .unwrap_or(NaiveDate::MIN);
            args.push("-r".to_string());
            args.push(format!("{{{}}}:HEAD", start.format(DATE_FORMAT)));
        }
        if self.limit > 0 {
            args.push("--limit".to_string());
            args.push(self.limit.to_string());
        }
        if self.stop_on_copy {
            args.push("--stop-on-copy".to_string());
        }
        args.push(self.repo.clone());
        args.extend(self.extra_args.iter().cloned());

        args
    }

    pub fn args(&self) -> Vec<String> {
        self.args_on(Local::now().date_naive())
    }
}

#[derive(Debug, Clone)]
pub struct SvnClient {
    binary: PathBuf,
}

impl SvnClient {
    /// A bare program name is looked up on `PATH` at run time; anything that
    /// looks like a path must point at an executable file.
    pub fn new(binary: &str) -> Result<Self, SlogError> {
        let path = Path::new(binary);
        if path.components().count() > 1 && !is_executable::is_executable(path) {
            return Err(SlogError::SvnNotExecutable(binary.to_string()));
        }

        Ok(SvnClient {
            binary: path.to_path_buf(),
        })
    }

    pub fn from_env() -> Result<Self, SlogError> {
        match std::env::var(SVN_ENV_VAR) {
            Ok(binary) if !binary.trim().is_empty() => Self::new(binary.trim()),
            _ => Self::new(DEFAULT_SVN),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn command_line(&self, args: &[String]) -> String {
        std::iter::once(self.binary.to_string_lossy().to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Runs svn and returns its standard output
    pub fn run(&self, args: &[String]) -> anyhow::Result<String> {
        let command = self.command_line(args);
        debug!("executing: {}", command);

        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .with_context(|| format!("failed to execute '{}'", self.binary.display()))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let last_line = last_line(&stderr)
                .or_else(|| last_line(&stdout))
                .unwrap_or_default()
                .to_string();

            return Err(SlogError::FetchFailed {
                code: output.status.code().unwrap_or(1),
                last_line,
                command,
            }
            .into());
        }

        debug!("svn returned {} bytes", stdout.len());
        Ok(stdout)
    }

    /// Fetches and parses one batch of log entries
    pub fn log(&self, request: &LogRequest) -> anyhow::Result<Vec<Commit>> {
        let xml = self.run(&request.args())?;
        let commits = svn_xml::parse_log(&xml).context("reading svn log output")?;
        debug!("fetched {} commits", commits.len());

        Ok(commits)
    }
}

fn last_line(output: &str) -> Option<&str> {
    output.lines().rev().map(str::trim).find(|line| !line.is_empty())
}
