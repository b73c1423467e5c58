// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line splitting.

/// Lazy iterator over the lines of a configuration text.
///
/// Clone it before consuming to walk the same text again.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
}

/// Splits `text` on `\n`.
///
/// A `\r` before the newline (or at the very end) is dropped. The last line is
/// yielded even without a trailing newline, and a trailing newline does not
/// produce an extra empty line.
#[must_use]
pub const fn lines(text: &str) -> Lines<'_> {
    Lines { rest: Some(text) }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest.take()?;
        if rest.is_empty() {
            return None;
        }

        let line = match rest.split_once('\n') {
            Some((line, tail)) => {
                self.rest = Some(tail);
                line
            }
            None => rest,
        };

        Some(line.strip_suffix('\r').unwrap_or(line))
    }
}

impl std::iter::FusedIterator for Lines<'_> {}
