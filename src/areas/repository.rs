use crate::errors::SlogError;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Environment variable naming the repository to use when none is given
pub const REPO_ENV_VAR: &str = "SLOG_REPO";

/// Decides which repository location `svn log` is pointed at.
///
/// In order: the explicit `--repo` value, the current directory when it lies
/// inside an svn working copy, then `SLOG_REPO`.
#[derive(Debug, Clone, new)]
pub struct RepositoryLocator {
    explicit: Option<String>,
    cwd: PathBuf,
    env_value: Option<String>,
}

impl RepositoryLocator {
    pub fn from_env(explicit: Option<&str>) -> anyhow::Result<Self> {
        Ok(RepositoryLocator::new(
            explicit.map(str::to_string),
            std::env::current_dir()?,
            std::env::var(REPO_ENV_VAR).ok(),
        ))
    }

    pub fn resolve(&self) -> Result<String, SlogError> {
        if let Some(explicit) = non_empty(self.explicit.as_deref()) {
            return Ok(explicit.to_string());
        }
        if is_working_copy(&self.cwd) {
            return Ok(self.cwd.to_string_lossy().to_string());
        }
        if let Some(env_value) = non_empty(self.env_value.as_deref()) {
            return Ok(env_value.to_string());
        }

        Err(SlogError::RepositoryUnresolved)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// True when `dir` or one of its ancestors holds an `.svn` administrative directory
pub fn is_working_copy(dir: &Path) -> bool {
    dir.ancestors().any(|ancestor| ancestor.join(".svn").is_dir())
}
