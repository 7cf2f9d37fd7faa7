//! Placeholder environment and literal substitution.
//!
//! Templates carry tokens such as `__XCODE_PROJECT_NAME__`. Every token is
//! replaced verbatim by its value in one pass over the text: a value that
//! itself contains a token is inserted as is and never expanded again, so the
//! order in which tokens are listed is not observable.

use crate::constants::{IOS_DEVICE, IOS_VERSION, RUBY_VERSION, SWIFT_VERSION, XCODE_VERSION};
use crate::error::Result;
use crate::project::Project;
use indexmap::IndexMap;
use regex::{Captures, Regex};

/// Immutable mapping from placeholder token to replacement value.
#[derive(Debug, Clone)]
pub struct Environment {
    values: IndexMap<String, String>,
    /// Alternation of every non-empty token, longest first. `None` when there
    /// is nothing to replace.
    pattern: Option<Regex>,
}

impl Environment {
    /// Creates an environment from token/value pairs.
    ///
    /// Later pairs with an already seen token replace the earlier value.
    /// Empty tokens are kept in the map but never match.
    ///
    /// # Errors
    /// * `Error::PatternError` if the token alternation cannot be compiled
    pub fn new<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values: IndexMap<String, String> =
            pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();

        let mut tokens: Vec<&str> =
            values.keys().map(String::as_str).filter(|k| !k.is_empty()).collect();
        // Leftmost-first alternation: a token that is a prefix of another must come after it.
        tokens.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let pattern = if tokens.is_empty() {
            None
        } else {
            let alternation =
                tokens.iter().map(|t| regex::escape(t)).collect::<Vec<_>>().join("|");
            Some(Regex::new(&alternation)?)
        };

        Ok(Self { values, pattern })
    }

    /// The fixed environment for a discovered project.
    pub fn for_project(project: &Project) -> Result<Self> {
        Self::new([
            ("__IOS_VERSION__", IOS_VERSION.to_string()),
            ("__IOS_DEVICE__", IOS_DEVICE.to_string()),
            ("__RUBY_GEMSET__", project.name.to_lowercase()),
            ("__RUBY_VERSION__", RUBY_VERSION.to_string()),
            ("__SWIFT_VERSION__", SWIFT_VERSION.to_string()),
            ("__XCODE_PROJECT_NAME__", project.name.clone()),
            ("__XCODE_SCHEME_NAME__", project.name.clone()),
            ("__XCODE_WORKSPACE_NAME__", project.workspace_name.clone()),
            ("__XCODE_VERSION__", XCODE_VERSION.to_string()),
        ])
    }

    /// Replaces every token occurrence in `text` in a single pass.
    pub fn apply(&self, text: &str) -> String {
        match &self.pattern {
            Some(pattern) => pattern
                .replace_all(text, |caps: &Captures| {
                    self.values.get(&caps[0]).cloned().unwrap_or_else(|| caps[0].to_string())
                })
                .into_owned(),
            None => text.to_string(),
        }
    }

    /// Number of token occurrences in `text`.
    pub fn occurrences(&self, text: &str) -> usize {
        self.pattern.as_ref().map_or(0, |pattern| pattern.find_iter(text).count())
    }

    /// Value of a token, if the token is part of the environment.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }

    /// Tokens in insertion order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the environment has no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
