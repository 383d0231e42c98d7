// Lazily compiled static regex patterns
use super::regex_error::RegexError;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Static set of named patterns, compiled once on first use.
///
/// Patterns are validated by `build.rs`, so compilation failure here means the
/// generated table and the build script disagree.
pub struct StaticRegexSet {
    patterns: &'static [(&'static str, &'static str)], // (pattern, name)
    compiled: OnceLock<Result<Vec<Regex>, RegexError>>,
}

impl StaticRegexSet {
    pub const fn new(patterns: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            patterns,
            compiled: OnceLock::new(),
        }
    }

    pub fn get(&self, index: usize) -> Result<&Regex, RegexError> {
        let compiled = self.compiled.get_or_init(|| {
            self.patterns
                .iter()
                .map(|(pattern, name)| {
                    Regex::new(pattern).map_err(|source| RegexError::CompilationFailed {
                        pattern: (*pattern).to_string(),
                        name: (*name).to_string(),
                        source,
                    })
                })
                .collect()
        });

        match compiled {
            Ok(regexes) => regexes.get(index).ok_or(RegexError::IndexOutOfBounds {
                index,
                max: regexes.len(),
            }),
            Err(e) => Err(e.clone()),
        }
    }

    pub fn get_by_name(&self, name: &str) -> Result<&Regex, RegexError> {
        let index = self
            .patterns
            .iter()
            .position(|(_, pattern_name)| *pattern_name == name)
            .ok_or_else(|| RegexError::PatternNotFound {
                name: name.to_string(),
            })?;

        self.get(index)
    }

    /// Run the pattern at `index` against `text`.
    pub fn captures<'t>(
        &self,
        index: usize,
        text: &'t str,
    ) -> Result<Option<Captures<'t>>, RegexError> {
        Ok(self.get(index)?.captures(text))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn pattern_names(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|(_, name)| *name).collect()
    }
}
