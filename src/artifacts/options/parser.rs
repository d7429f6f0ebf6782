use crate::artifacts::options::spec::{OptionKind, OptionSpecs};
use std::collections::HashMap;

/// Resolved value of one recognized option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A flag that was present; absent flags have no entry at all
    Flag,
    Value(String),
    Array(Vec<String>),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_slice(&self) -> &[String] {
        match self {
            OptionValue::Array(values) => values,
            _ => &[],
        }
    }
}

/// Text of an input that matched no option, plus the argv tokens it came from
#[derive(Debug, Clone, PartialEq, Eq)]
struct Unrecognized {
    text: String,
    raw: Vec<String>,
}

/// Outcome of [`OptionSpecs::parse`]
#[derive(Debug, Clone, Default)]
pub struct ParsedOptions {
    program: String,
    values: HashMap<char, OptionValue>,
    long_names: HashMap<String, char>,
    unrecognized: Vec<Unrecognized>,
}

impl ParsedOptions {
    /// Name the program was invoked as (`argv[0]`)
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Looks `name` up as a short name first, then as a long name
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        let mut chars = name.chars();
        if let (Some(short), None) = (chars.next(), chars.next())
            && let Some(value) = self.values.get(&short)
        {
            return Some(value);
        }

        self.long_names
            .get(name)
            .and_then(|short| self.values.get(short))
    }

    pub fn get_or<'a>(&'a self, name: &str, default: &'a OptionValue) -> &'a OptionValue {
        self.get(name).unwrap_or(default)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(OptionValue::as_str)
    }

    pub fn values(&self, name: &str) -> &[String] {
        self.get(name).map(OptionValue::as_slice).unwrap_or(&[])
    }

    /// Resolved options keyed by short name
    pub fn to_map(&self) -> &HashMap<char, OptionValue> {
        &self.values
    }

    /// Unmatched inputs in encounter order, dashes stripped from the name
    /// unless the input was a single `name=value` token
    pub fn unrecognized(&self) -> Vec<&str> {
        self.unrecognized.iter().map(|u| u.text.as_str()).collect()
    }

    /// Original argv tokens of every unmatched input, in encounter order
    pub fn passthrough_args(&self) -> Vec<&str> {
        self.unrecognized
            .iter()
            .flat_map(|u| u.raw.iter().map(String::as_str))
            .collect()
    }

    fn resolve(&mut self, short: char, kind: &OptionKind, value: Option<&str>) {
        match kind {
            OptionKind::Flag => {
                self.values.insert(short, OptionValue::Flag);
            }
            OptionKind::Value => match value {
                Some(value) => {
                    self.values
                        .insert(short, OptionValue::Value(value.to_string()));
                }
                None => {
                    self.values.remove(&short);
                }
            },
            OptionKind::Array { delimiter } => {
                let Some(value) = value else {
                    return;
                };
                let entry = self
                    .values
                    .entry(short)
                    .or_insert_with(|| OptionValue::Array(Vec::new()));
                let OptionValue::Array(values) = entry else {
                    return;
                };

                if value.contains(delimiter.as_str()) {
                    values.extend(
                        value
                            .split(delimiter.as_str())
                            .filter(|piece| !piece.is_empty())
                            .map(str::to_string),
                    );
                } else {
                    values.push(value.to_string());
                }
            }
        }
    }
}

fn strip_name(token: &str) -> &str {
    token.trim().trim_matches('-')
}

impl OptionSpecs {
    /// Resolves raw argv tokens against this table.
    ///
    /// `tokens[0]` is the program name. Parsing never fails: inputs matching
    /// no option are kept for pass-through, and `required` options are not
    /// checked.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> ParsedOptions {
        let mut parsed = ParsedOptions {
            program: tokens
                .first()
                .map(|t| t.as_ref().to_string())
                .unwrap_or_default(),
            long_names: self.long_names().clone(),
            ..Default::default()
        };

        let mut i = 1;
        while i < tokens.len() {
            let token = tokens[i].as_ref();
            let next = tokens.get(i + 1).map(AsRef::as_ref);

            let (name, value, text, raw) = if let Some((name, value)) = token.split_once('=') {
                i += 1;
                (
                    strip_name(name),
                    Some(value.trim()),
                    token.trim().to_string(),
                    vec![token.to_string()],
                )
            } else if let Some(next) = next.filter(|n| !n.starts_with('-')) {
                i += 2;
                let name = strip_name(token);
                let value = next.trim();
                (
                    name,
                    Some(value),
                    format!("{name} {value}").trim().to_string(),
                    vec![token.to_string(), next.to_string()],
                )
            } else {
                i += 1;
                let name = strip_name(token);
                (name, None, name.to_string(), vec![token.to_string()])
            };

            match self.find(name) {
                Some(spec) => parsed.resolve(spec.short(), spec.kind(), value),
                None => parsed.unrecognized.push(Unrecognized { text, raw }),
            }
        }

        parsed
    }
}
