use crate::artifacts::format::{FormatOptions, LogFormatter, delimiter_line};
use crate::artifacts::log::commit::Commit;
use crate::artifacts::options::usage::{WRAP_WIDTH, wordwrap};
use derive_new::new;

/// `r<rev> | <author> | <date>` followed by the wrapped message
#[derive(Debug, Clone, new)]
pub struct ShortSummary {
    options: FormatOptions,
}

impl ShortSummary {
    pub(crate) fn header(options: &FormatOptions, commit: &Commit) -> String {
        format!(
            "{} | {} | {}\n",
            options.revision_label(commit, true),
            commit.author(),
            commit.readable_timestamp()
        )
    }

    pub(crate) fn body(commit: &Commit) -> String {
        format!("\n{}\n\n", wordwrap(commit.message().trim(), WRAP_WIDTH))
    }
}

impl LogFormatter for ShortSummary {
    fn format(&self, commits: &[Commit]) -> String {
        let delimiter = delimiter_line();
        let blocks = self
            .options
            .display_order(commits)
            .into_iter()
            .map(|commit| format!("{}{}", Self::header(&self.options, commit), Self::body(commit)))
            .collect::<Vec<_>>();

        format!("{delimiter}{}{delimiter}", blocks.join(&delimiter))
    }
}
