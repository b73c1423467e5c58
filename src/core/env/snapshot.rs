// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Captured process environment.

use std::fmt::Write as _;

use crate::error::ParseError;

/// The process environment at one point in time, in OS order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    entries: Vec<(String, String)>,
}

impl EnvSnapshot {
    /// Captures the current process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NonUnicodeEnvironment`] if any name or value is
    /// not valid Unicode.
    pub fn capture() -> Result<Self, ParseError> {
        let entries = std::env::vars_os()
            .map(|(name, value)| {
                let name = name.into_string().map_err(|name| {
                    ParseError::NonUnicodeEnvironment {
                        name: name.to_string_lossy().into_owned(),
                    }
                })?;
                let value = value
                    .into_string()
                    .map_err(|_| ParseError::NonUnicodeEnvironment { name: name.clone() })?;
                Ok((name, value))
            })
            .collect::<Result<_, ParseError>>()?;

        Ok(Self { entries })
    }

    /// Builds a snapshot from explicit pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Renders `KEY=VALUE` lines, each ending with `\n`.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for (key, value) in &self.entries {
            let _ = writeln!(text, "{key}={value}");
        }
        text
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
