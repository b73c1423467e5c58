// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoded variable mapping and `KEY=VALUE` materialization.

use std::collections::BTreeMap;

use super::lines::lines;
use super::parser::{LineKind, classify};
use crate::error::ParseError;

/// Mapping from variable name to decoded value.
///
/// Keys are unique and case-sensitive. When a key repeats, the last
/// occurrence wins. Iteration order is sorted by key, which is deterministic
/// but carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarMap {
    vars: BTreeMap<String, String>,
}

impl VarMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Parses configuration text, skipping every line that is not an assignment.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        lines(text)
            .filter_map(|line| match classify(line) {
                LineKind::Assignment(assignment) => Some(assignment.into_pair()),
                _ => None,
            })
            .collect()
    }

    /// Parses text that must consist only of assignments, blanks and comments.
    ///
    /// Used for the live environment, where a stray line means a value could
    /// not be represented on one line.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedEnvironment`] naming the first offending
    /// line (1-based).
    pub fn parse_strict(text: &str) -> Result<Self, ParseError> {
        let mut vars = Self::new();
        for (index, line) in lines(text).enumerate() {
            match classify(line) {
                LineKind::Blank | LineKind::CommentOnly => {}
                LineKind::NotAssignment => {
                    return Err(ParseError::MalformedEnvironment {
                        line: index + 1,
                        content: line.to_owned(),
                    });
                }
                LineKind::Assignment(assignment) => {
                    let (key, value) = assignment.into_pair();
                    vars.insert(key, value);
                }
            }
        }
        Ok(vars)
    }

    /// Inserts a variable, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders one `KEY=VALUE` string per variable for a child environment.
    ///
    /// Only the set of entries matters; callers must not rely on the order.
    #[must_use]
    pub fn to_env_strings(&self) -> Vec<String> {
        self.iter().map(|(key, value)| format!("{key}={value}")).collect()
    }
}

impl FromIterator<(String, String)> for VarMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut vars = Self::new();
        vars.extend(iter);
        vars
    }
}

impl Extend<(String, String)> for VarMap {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.vars.insert(key, value);
        }
    }
}
