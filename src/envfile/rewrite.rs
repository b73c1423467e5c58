// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment-driven substitution of marked lines.
//!
//! ```text
//! GOOS=windows # target {update}      live env: GOOS=linux
//!       |                 |
//!       |     comment contains marker
//!       v
//! GOOS='linux' # target {update}
//! ```
//!
//! A line is rewritten only when it starts with the variable name followed by
//! `=`, has a `#` and the text after the first `#` contains [`UPDATE_MARKER`].
//! Every other line is copied unchanged. Output always ends each line with `\n`.

use std::borrow::Cow;

use super::COMMENT;
use super::lines::lines;
use super::varmap::VarMap;
use crate::core::env::EnvSnapshot;
use crate::error::ParseError;

/// Marks a line for substitution when it appears in the trailing comment.
pub const UPDATE_MARKER: &str = "{update}";

/// Result of rewriting a configuration text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteOutcome {
    text: String,
    updated: Vec<String>,
}

impl RewriteOutcome {
    /// The rewritten text, one `\n` after every line.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Keys whose line changed, in line order.
    #[must_use]
    pub fn updated(&self) -> &[String] {
        &self.updated
    }

    /// Whether any line differs from its input.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        !self.updated.is_empty()
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Rewrites one line for one variable.
///
/// Applying this for a variable that does not own the line, or to a line
/// without the marker in its comment, returns the line untouched. Because a
/// line can only be owned by one name, trying every variable in any order
/// gives the same result.
#[must_use]
pub fn rewrite_line<'a>(line: &'a str, key: &str, value: &str) -> Cow<'a, str> {
    if !owns_line(line, key) {
        return Cow::Borrowed(line);
    }

    let Some((_, comment)) = line.split_once(COMMENT) else {
        return Cow::Borrowed(line);
    };

    if !comment.contains(UPDATE_MARKER) {
        return Cow::Borrowed(line);
    }

    Cow::Owned(format!("{key}='{value}' #{comment}"))
}

/// Rewrites every marked line of `text` using values from `env`.
#[must_use]
pub fn rewrite(text: &str, env: &VarMap) -> RewriteOutcome {
    let mut outcome = RewriteOutcome {
        text: String::with_capacity(text.len() + 1),
        updated: Vec::new(),
    };

    for line in lines(text) {
        let candidate = line_key(line).and_then(|key| env.get(key).map(|value| (key, value)));

        match candidate.map(|(key, value)| (key, rewrite_line(line, key, value))) {
            Some((key, rewritten)) if rewritten != line => {
                outcome.updated.push(key.to_owned());
                outcome.text.push_str(&rewritten);
            }
            _ => outcome.text.push_str(line),
        }
        outcome.text.push('\n');
    }

    outcome
}

/// Rewrites `text` with values taken from a captured process environment.
///
/// The environment is decoded with the same assignment rules as configuration
/// text, so values containing `=` survive.
///
/// # Errors
///
/// Returns [`ParseError::MalformedEnvironment`] if the environment does not
/// decode as one assignment per line. Nothing is rewritten in that case.
pub fn rewrite_from_environment(
    text: &str,
    snapshot: &EnvSnapshot,
) -> Result<RewriteOutcome, ParseError> {
    let env = VarMap::parse_strict(&snapshot.to_text())?;
    Ok(rewrite(text, &env))
}

/// The name a line assigns to, as written at the start of the line.
///
/// Leading whitespace is kept, so an indented line never matches a name.
fn line_key(line: &str) -> Option<&str> {
    let (key, _) = line.split_once('=')?;
    let key = key.trim_end_matches([' ', '\t']);
    (!key.is_empty()).then_some(key)
}

fn owns_line(line: &str, key: &str) -> bool {
    !key.is_empty()
        && line
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start_matches([' ', '\t']).starts_with('='))
}
