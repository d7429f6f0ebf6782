//! Delimited regular expressions
//!
//! Patterns are written the way they are on the command line of classic log
//! tools: `/component/i`, `#^r12#`, `{fix(es)?}`. A pattern that starts with
//! an alphanumeric character or a backslash has no delimiter of its own and is
//! wrapped in `/.../` first; this is a heuristic, so a bare pattern starting
//! with punctuation (`(foo|bar)`) is read as delimited by that punctuation.

use crate::errors::SlogError;
use regex::{Regex, RegexBuilder};

pub const DEFAULT_PATTERN_DELIMITER: char = '/';

/// Wraps a bare pattern in the default delimiter, escaping that delimiter
/// inside it; anything else is returned unchanged.
pub fn normalize(raw: &str) -> String {
    match raw.chars().next() {
        Some(first) if first.is_alphanumeric() || first == '\\' => {
            let delimiter = DEFAULT_PATTERN_DELIMITER.to_string();
            format!(
                "{delimiter}{}{delimiter}",
                raw.replace(DEFAULT_PATTERN_DELIMITER, &format!("\\{delimiter}"))
            )
        }
        _ => raw.to_string(),
    }
}

fn closing_delimiter(opening: char) -> char {
    match opening {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        '<' => '>',
        other => other,
    }
}

fn invalid(pattern: &str, reason: impl Into<String>) -> SlogError {
    SlogError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.into(),
    }
}

/// Splits `/body/flags` at the first unescaped closing delimiter
fn split_delimited(pattern: &str) -> Result<(char, &str, &str), SlogError> {
    let mut chars = pattern.char_indices();
    let (_, opening) = chars
        .next()
        .ok_or_else(|| invalid(pattern, "empty pattern"))?;
    if opening.is_alphanumeric() || opening == '\\' || opening.is_whitespace() {
        return Err(invalid(
            pattern,
            "delimiter must not be alphanumeric, backslash or whitespace",
        ));
    }

    let closing = closing_delimiter(opening);
    let body_start = opening.len_utf8();
    let mut depth = 0usize;
    let mut escaped = false;

    for (index, c) in chars {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == closing && depth == 0 {
            return Ok((
                opening,
                &pattern[body_start..index],
                &pattern[index + c.len_utf8()..],
            ));
        } else if c == closing {
            depth -= 1;
        } else if c == opening && closing != opening {
            depth += 1;
        }
    }

    Err(invalid(
        pattern,
        format!("no ending delimiter '{closing}' found"),
    ))
}

/// A compiled `--regex` pattern
#[derive(Debug, Clone)]
pub struct MatchPattern {
    source: String,
    regex: Regex,
}

impl MatchPattern {
    /// Compiles a delimited pattern such as `/fix/i`.
    ///
    /// Supported modifiers: `i` (case-insensitive), `m` (multi-line), `s`
    /// (dot matches newline), `x` (extended), `U` (ungreedy), `u` and `D`
    /// (accepted, already the default).
    pub fn compile(pattern: &str) -> Result<Self, SlogError> {
        let (opening, body, flags) = split_delimited(pattern)?;
        let closing = closing_delimiter(opening);

        let mut body = body.to_string();
        for delimiter in [opening, closing] {
            if regex::escape(&delimiter.to_string()) == delimiter.to_string() {
                body = body.replace(&format!("\\{delimiter}"), &delimiter.to_string());
            }
        }

        let mut builder = RegexBuilder::new(&body);
        for flag in flags.chars() {
            match flag {
                'i' => builder.case_insensitive(true),
                'm' => builder.multi_line(true),
                's' => builder.dot_matches_new_line(true),
                'x' => builder.ignore_whitespace(true),
                'U' => builder.swap_greed(true),
                'u' | 'D' => &mut builder,
                other => return Err(invalid(pattern, format!("unknown modifier '{other}'"))),
            };
        }

        let regex = builder
            .build()
            .map_err(|e| invalid(pattern, e.to_string()))?;

        Ok(MatchPattern {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Normalizes raw user input, then compiles it
    pub fn from_input(raw: &str) -> Result<Self, SlogError> {
        Self::compile(&normalize(raw))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Searches `subject` for a match anywhere
    pub fn is_match(&self, subject: &str) -> bool {
        self.regex.is_match(subject)
    }
}
