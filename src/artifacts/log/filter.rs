use crate::artifacts::log::commit::Commit;
use crate::artifacts::log::pattern::MatchPattern;
use crate::errors::SlogError;
use std::collections::HashSet;

/// Author and pattern constraints a commit must satisfy to be shown
///
/// Built up with the additive methods below, then only read while filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    deny_authors: HashSet<String>,
    allow_authors: HashSet<String>,
    match_patterns: Vec<MatchPattern>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits by these authors are dropped, even if also allowed
    pub fn deny_authors<I, S>(&mut self, authors: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.deny_authors.extend(
            authors
                .into_iter()
                .map(|a| a.as_ref().to_string())
                .filter(|a| !a.is_empty()),
        );
        self
    }

    /// Once non-empty, only commits by these authors are kept
    pub fn allow_authors<I, S>(&mut self, authors: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allow_authors.extend(
            authors
                .into_iter()
                .map(|a| a.as_ref().to_string())
                .filter(|a| !a.is_empty()),
        );
        self
    }

    /// Adds a raw user pattern; bare patterns are wrapped as `/pattern/`
    pub fn match_regex(&mut self, raw: &str) -> Result<&mut Self, SlogError> {
        self.match_patterns.push(MatchPattern::from_input(raw)?);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.deny_authors.is_empty()
            && self.allow_authors.is_empty()
            && self.match_patterns.is_empty()
    }

    pub fn patterns(&self) -> &[MatchPattern] {
        &self.match_patterns
    }

    /// Deny list first, then allow list, then every pattern against
    /// [`Commit::subject`]; the first failing check rejects.
    pub fn accepts(&self, commit: &Commit) -> bool {
        if self.deny_authors.contains(commit.author()) {
            return false;
        }
        if !self.allow_authors.is_empty() && !self.allow_authors.contains(commit.author()) {
            return false;
        }
        if !self.match_patterns.is_empty() {
            let subject = commit.subject();
            return self
                .match_patterns
                .iter()
                .all(|pattern| pattern.is_match(&subject));
        }

        true
    }
}

/// Whether `commit` survives `criteria`
pub fn accepts(commit: &Commit, criteria: &FilterCriteria) -> bool {
    criteria.accepts(commit)
}

/// Keeps the accepted commits, in their original order
pub fn filter_batch(commits: Vec<Commit>, criteria: &FilterCriteria) -> Vec<Commit> {
    commits
        .into_iter()
        .filter(|commit| accepts(commit, criteria))
        .collect()
}
