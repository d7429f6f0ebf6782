use crate::artifacts::format::{FormatOptions, LogFormatter};
use crate::artifacts::log::commit::Commit;
use derive_new::new;

/// `r<rev> <first message line>`
#[derive(Debug, Clone, new)]
pub struct OneLine {
    options: FormatOptions,
}

impl LogFormatter for OneLine {
    fn format(&self, commits: &[Commit]) -> String {
        self.options
            .display_order(commits)
            .into_iter()
            .map(|commit| {
                format!(
                    "{} {}\n",
                    self.options.revision_label(commit, false),
                    commit.short_message()
                )
            })
            .collect()
    }
}
