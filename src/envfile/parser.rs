// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line classification and assignment decoding.
//!
//! ```text
//! "  KEY = "a # b"  # note"
//!    |     |          |
//!    key   value      comment
//!    KEY   a # b      " note"
//! ```
//!
//! Quote handling is unwrapping, not shell unescaping: one outer pair of `"` or
//! `'` is removed. Inside double quotes `\"` collapses to `"`; nothing else is
//! interpreted.

use super::COMMENT;

const DOUBLE_QUOTE: char = '"';
const SINGLE_QUOTE: char = '\'';
const EXPORT: &str = "export";

/// A decoded `KEY=VALUE[ #comment]` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    key: String,
    value: String,
    comment: Option<String>,
}

impl Assignment {
    /// Variable name, case-sensitive and never empty.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Decoded value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Trailing comment text after `#`, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Consumes the assignment, returning `(key, value)`.
    #[must_use]
    pub fn into_pair(self) -> (String, String) {
        (self.key, self.value)
    }
}

/// Classification of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// Starts with `#` (after leading whitespace).
    CommentOnly,
    /// Has no `=`, or nothing before it.
    NotAssignment,
    /// A decoded assignment.
    Assignment(Assignment),
}

/// Classifies one raw line.
#[must_use]
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with(COMMENT) {
        return LineKind::CommentOnly;
    }

    let Some((key, remainder)) = trimmed.split_once('=') else {
        return LineKind::NotAssignment;
    };
    let key = strip_export(key.trim());
    if key.is_empty() {
        return LineKind::NotAssignment;
    }

    let (value, comment) = decode_value(remainder);
    LineKind::Assignment(Assignment {
        key: key.to_owned(),
        value,
        comment,
    })
}

/// Parses one raw line, returning `None` for anything that is not an assignment.
#[must_use]
pub fn parse_line(line: &str) -> Option<Assignment> {
    match classify(line) {
        LineKind::Assignment(assignment) => Some(assignment),
        _ => None,
    }
}

fn strip_export(key: &str) -> &str {
    key.strip_prefix(EXPORT)
        .filter(|rest| rest.starts_with([' ', '\t']))
        .map_or(key, str::trim_start)
}

fn decode_value(remainder: &str) -> (String, Option<String>) {
    let raw = remainder.trim();
    [DOUBLE_QUOTE, SINGLE_QUOTE]
        .into_iter()
        .find_map(|quote| decode_quoted(raw, quote))
        .unwrap_or_else(|| decode_unquoted(remainder))
}

/// Decodes a value opening with `quote`.
///
/// A closing quote followed only by whitespace or a comment ends the value.
/// Failing that, a value wrapped in a matching outer pair loses exactly that
/// pair. Anything else is not quoted.
fn decode_quoted(raw: &str, quote: char) -> Option<(String, Option<String>)> {
    let body = raw.strip_prefix(quote)?;

    if let Some(close) = closing_quote(body, quote) {
        let inner = &body[..close];
        let tail = body[close + quote.len_utf8()..].trim_start();
        if tail.is_empty() {
            return Some((unescape(inner, quote), None));
        }
        if let Some(comment) = tail.strip_prefix(COMMENT) {
            return Some((unescape(inner, quote), Some(comment.to_owned())));
        }
    }

    body.strip_suffix(quote)
        .map(|inner| (unescape(inner, quote), None))
}

fn closing_quote(body: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (index, c) in body.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' && quote == DOUBLE_QUOTE {
            escaped = true;
        } else if c == quote {
            return Some(index);
        }
    }
    None
}

fn unescape(inner: &str, quote: char) -> String {
    if quote == DOUBLE_QUOTE {
        inner.replace("\\\"", "\"")
    } else {
        inner.to_owned()
    }
}

/// A comment starts at a `#` preceded by whitespace; `a#b` is a plain value.
fn decode_unquoted(remainder: &str) -> (String, Option<String>) {
    let start = remainder
        .char_indices()
        .find(|&(index, c)| c == COMMENT && remainder[..index].ends_with(char::is_whitespace))
        .map(|(index, _)| index);

    match start {
        Some(index) => (
            remainder[..index].trim().to_owned(),
            Some(remainder[index + COMMENT.len_utf8()..].to_owned()),
        ),
        None => (remainder.trim().to_owned(), None),
    }
}
