use crate::artifacts::format::short_summary::ShortSummary;
use crate::artifacts::format::{FormatOptions, LogFormatter, delimiter_line};
use crate::artifacts::log::commit::{ChangeAction, ChangedPath, Commit};
use colored::Colorize;
use derive_new::new;

/// Like [`ShortSummary`], plus the paths each commit changed
#[derive(Debug, Clone, new)]
pub struct Summary {
    options: FormatOptions,
}

impl Summary {
    fn changed_path(&self, changed: &ChangedPath) -> String {
        let action = changed.action().as_str();
        let action = if self.options.color {
            match changed.action() {
                ChangeAction::Added => action.green().to_string(),
                ChangeAction::Deleted => action.red().to_string(),
                ChangeAction::Modified | ChangeAction::Replaced => action.yellow().to_string(),
            }
        } else {
            action.to_string()
        };

        format!("   {action} {}\n", changed.path())
    }

    fn block(&self, commit: &Commit) -> String {
        let mut block = ShortSummary::header(&self.options, commit);
        if !commit.changed_paths().is_empty() {
            block.push_str("Changed paths:\n");
            for changed in commit.changed_paths() {
                block.push_str(&self.changed_path(changed));
            }
        }
        block.push_str(&ShortSummary::body(commit));
        block
    }
}

impl LogFormatter for Summary {
    fn format(&self, commits: &[Commit]) -> String {
        let delimiter = delimiter_line();
        let blocks = self
            .options
            .display_order(commits)
            .into_iter()
            .map(|commit| self.block(commit))
            .collect::<Vec<_>>();

        format!("{delimiter}{}{delimiter}", blocks.join(&delimiter))
    }
}
