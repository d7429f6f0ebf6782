use std::collections::HashMap;

/// Delimiter used by [`OptionKind::Array`] options when none is configured
pub const DEFAULT_DELIMITER: &str = ",";

/// How the value of an option is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    /// A single string, `--foo=bar` or `--foo bar`; the last occurrence wins
    Value,
    /// Presence only, `--foo` or `-f`
    Flag,
    /// Repeatable, `--foo=a --foo=b` or `--foo=a,b`
    Array { delimiter: String },
}

impl OptionKind {
    pub fn array() -> Self {
        OptionKind::Array {
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// An empty delimiter falls back to [`DEFAULT_DELIMITER`]
    pub fn array_delimited_by(delimiter: &str) -> Self {
        let delimiter = if delimiter.is_empty() {
            DEFAULT_DELIMITER
        } else {
            delimiter
        };

        OptionKind::Array {
            delimiter: delimiter.to_string(),
        }
    }
}

/// One recognized command line option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    short: char,
    long: String,
    help: String,
    /// Advisory only: the parser never checks it
    required: bool,
    kind: OptionKind,
}

impl OptionSpec {
    pub fn short(&self) -> char {
        self.short
    }

    pub fn long(&self) -> &str {
        &self.long
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn kind(&self) -> &OptionKind {
        &self.kind
    }

    pub fn matches(&self, name: &str) -> bool {
        self.long == name || {
            let mut chars = name.chars();
            chars.next() == Some(self.short) && chars.next().is_none()
        }
    }
}

/// Immutable table of the options a program accepts
///
/// Built once through [`OptionSpecsBuilder`] and then shared by reference with
/// the parser and the usage renderer. Registration order is preserved.
#[derive(Debug, Clone, Default)]
pub struct OptionSpecs {
    program: String,
    about: Option<String>,
    specs: Vec<OptionSpec>,
    long_names: HashMap<String, char>,
    max_long_len: usize,
}

impl OptionSpecs {
    pub fn builder(program: &str) -> OptionSpecsBuilder {
        OptionSpecsBuilder {
            inner: OptionSpecs {
                program: program.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn about(&self) -> Option<&str> {
        self.about.as_deref()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.specs.iter()
    }

    /// First spec, in registration order, whose short or long name is `name`
    pub fn find(&self, name: &str) -> Option<&OptionSpec> {
        self.specs.iter().find(|spec| spec.matches(name))
    }

    /// Canonical short name registered for a long name
    pub fn short_for(&self, long: &str) -> Option<char> {
        self.long_names.get(long).copied()
    }

    pub(crate) fn long_names(&self) -> &HashMap<String, char> {
        &self.long_names
    }

    /// Length of the longest long name registered so far
    pub fn max_long_len(&self) -> usize {
        self.max_long_len
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

pub struct OptionSpecsBuilder {
    inner: OptionSpecs,
}

impl OptionSpecsBuilder {
    pub fn about(mut self, about: &str) -> Self {
        self.inner.about = Some(about.to_string());
        self
    }

    /// Registers an option keyed by its short name.
    ///
    /// Registering a short name twice replaces the earlier entry in place: the
    /// option keeps its original position in the usage listing, and the earlier
    /// long name keeps resolving to the same short name.
    pub fn register(
        mut self,
        short: char,
        long: &str,
        help: &str,
        required: bool,
        kind: OptionKind,
    ) -> Self {
        let kind = match kind {
            OptionKind::Array { delimiter } => OptionKind::array_delimited_by(&delimiter),
            other => other,
        };
        let spec = OptionSpec {
            short,
            long: long.to_string(),
            help: help.to_string(),
            required,
            kind,
        };

        self.inner.long_names.insert(long.to_string(), short);
        self.inner.max_long_len = self.inner.max_long_len.max(long.len());

        match self.inner.specs.iter_mut().find(|s| s.short == short) {
            Some(existing) => *existing = spec,
            None => self.inner.specs.push(spec),
        }

        self
    }

    pub fn value(self, short: char, long: &str, help: &str) -> Self {
        self.register(short, long, help, false, OptionKind::Value)
    }

    pub fn flag(self, short: char, long: &str, help: &str) -> Self {
        self.register(short, long, help, false, OptionKind::Flag)
    }

    pub fn array(self, short: char, long: &str, help: &str, delimiter: &str) -> Self {
        self.register(
            short,
            long,
            help,
            false,
            OptionKind::array_delimited_by(delimiter),
        )
    }

    pub fn build(self) -> OptionSpecs {
        self.inner
    }
}
