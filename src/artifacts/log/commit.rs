//! Subversion log entry
//!
//! One `<logentry>` of `svn log --xml -v`:
//!
//! ```text
//! <logentry revision="42">
//!   <author>alice</author>
//!   <date>2015-03-03T16:05:12.000000Z</date>
//!   <paths>
//!     <path action="M" kind="file">/trunk/src/ui.c</path>
//!   </paths>
//!   <msg>Fix UI bug</msg>
//! </logentry>
//! ```

use chrono::{DateTime, FixedOffset, Local};
use derive_new::new;
use std::fmt;

/// Timestamp layout shared by the filter subject and the formatters,
/// e.g. `Tue, 03 Mar 2015 04:05 PM`
pub const READABLE_DATE_FORMAT: &str = "%a, %d %b %Y %I:%M %p";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    Added,
    Modified,
    Deleted,
    Replaced,
}

impl ChangeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeAction::Added => "A",
            ChangeAction::Modified => "M",
            ChangeAction::Deleted => "D",
            ChangeAction::Replaced => "R",
        }
    }
}

impl TryFrom<&str> for ChangeAction {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "A" => Ok(ChangeAction::Added),
            "M" => Ok(ChangeAction::Modified),
            "D" => Ok(ChangeAction::Deleted),
            "R" => Ok(ChangeAction::Replaced),
            other => Err(anyhow::anyhow!("unknown path action '{}'", other)),
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ChangedPath {
    action: ChangeAction,
    path: String,
}

impl ChangedPath {
    pub fn action(&self) -> ChangeAction {
        self.action
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for ChangedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action, self.path)
    }
}

/// A fetched commit; never mutated after parsing
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    revision: u64,
    author: String,
    date: DateTime<FixedOffset>,
    message: String,
    changed_paths: Vec<ChangedPath>,
}

impl Commit {
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn changed_paths(&self) -> &[ChangedPath] {
        &self.changed_paths
    }

    /// First line of the trimmed message
    pub fn short_message(&self) -> &str {
        self.message.trim().lines().next().unwrap_or_default()
    }

    /// Commit date in the local timezone, see [`READABLE_DATE_FORMAT`]
    pub fn readable_timestamp(&self) -> String {
        self.date
            .with_timezone(&Local)
            .format(READABLE_DATE_FORMAT)
            .to_string()
    }

    /// Text the `--regex` patterns are matched against: revision, author,
    /// date, one `<action> <path>` line per changed path, then the message
    pub fn subject(&self) -> String {
        let paths = self
            .changed_paths
            .iter()
            .map(ChangedPath::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        [
            self.revision.to_string(),
            self.author.clone(),
            self.readable_timestamp(),
            paths,
            self.message.clone(),
        ]
        .join("\n")
    }
}
