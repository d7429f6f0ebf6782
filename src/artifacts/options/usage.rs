use crate::artifacts::options::spec::{OptionKind, OptionSpecs};
use colored::Colorize;

pub const WRAP_WIDTH: usize = 80;
const SHORT_PAD: &str = "    ";
const LONG_PAD: &str = "        ";

/// Greedy word wrap at `width` columns.
///
/// Existing line breaks are kept and words longer than `width` are never split.
pub fn wordwrap(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|paragraph| {
            let mut lines: Vec<String> = Vec::new();
            let mut line = String::new();

            for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
                if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
                    lines.push(std::mem::take(&mut line));
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
            }
            lines.push(line);

            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl OptionSpecs {
    /// Help text listing every option in registration order
    pub fn usage(&self) -> String {
        let mut out = format!("\n{}: {} OPTIONS\n\n", "Usage".bold(), self.program());

        if let Some(about) = self.about() {
            out.push_str(&format!(
                "{}\n{}\n\n",
                "ABOUT".bold(),
                wordwrap(about, WRAP_WIDTH)
            ));
        }

        out.push_str(&format!("{}\n", "OPTIONS".bold()));
        for spec in self.iter() {
            let value_desc = match spec.kind() {
                OptionKind::Value => format!("=<{}>", spec.long()),
                _ => String::new(),
            };
            out.push_str(&format!(
                "{SHORT_PAD}-{}|--{}{value_desc}\n",
                spec.short(),
                spec.long()
            ));

            let help = wordwrap(spec.help(), WRAP_WIDTH - LONG_PAD.len());
            out.push_str(&format!(
                "{LONG_PAD}{}\n\n",
                help.replace('\n', &format!("\n{LONG_PAD}"))
            ));
        }

        out
    }
}
