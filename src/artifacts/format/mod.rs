//! Commit log renderings
//!
//! Every format implements [`LogFormatter`]. Formats are looked up by name in a
//! static table, so the set of formats is fixed at compile time:
//!
//! - `summary`: header line, changed paths and the full message
//! - `shortsummary`: header line and the full message
//! - `oneline`: revision and first message line

pub mod oneline;
pub mod short_summary;
pub mod summary;

use crate::artifacts::log::commit::Commit;
use crate::errors::SlogError;
use colored::Colorize;
use derive_new::new;

pub const DEFAULT_FORMAT: &str = "summary";

/// Separator line printed around summary blocks
pub(crate) fn delimiter_line() -> String {
    format!("{}\n", "-".repeat(crate::artifacts::options::usage::WRAP_WIDTH))
}

/// Renders a filtered batch of commits to text
pub trait LogFormatter {
    fn format(&self, commits: &[Commit]) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct FormatOptions {
    /// Emit ANSI colors
    pub color: bool,
    /// Newest commit first
    pub reverse: bool,
}

impl FormatOptions {
    /// Commits ordered by revision, oldest first unless reversed
    pub(crate) fn display_order<'c>(&self, commits: &'c [Commit]) -> Vec<&'c Commit> {
        let mut ordered: Vec<&Commit> = commits.iter().collect();
        ordered.sort_by_key(|commit| commit.revision());
        if self.reverse {
            ordered.reverse();
        }
        ordered
    }

    pub(crate) fn revision_label(&self, commit: &Commit, bold: bool) -> String {
        let label = format!("r{}", commit.revision());
        match (self.color, bold) {
            (false, _) => label,
            (true, false) => label.yellow().to_string(),
            (true, true) => label.yellow().bold().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Summary,
    ShortSummary,
    OneLine,
}

pub const FORMATS: phf::Map<&'static str, Format> = phf::phf_map! {
    "summary" => Format::Summary,
    "shortsummary" => Format::ShortSummary,
    "oneline" => Format::OneLine,
};

/// Names accepted by `--format`, sorted
pub fn format_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = FORMATS.keys().copied().collect();
    names.sort_unstable();
    names
}

impl Format {
    pub fn from_name(name: &str) -> Result<Self, SlogError> {
        FORMATS
            .get(name.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| SlogError::UnknownFormat(name.to_string()))
    }

    pub fn formatter(self, options: FormatOptions) -> Box<dyn LogFormatter> {
        match self {
            Format::Summary => Box::new(summary::Summary::new(options)),
            Format::ShortSummary => Box::new(short_summary::ShortSummary::new(options)),
            Format::OneLine => Box::new(oneline::OneLine::new(options)),
        }
    }
}
