// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Child process environment.
//!
//! ```text
//! Env::inherit()                   PATH, HOME, ... (current process, raw bytes)
//!   .extend_assignments(vars)      + fetched KEY=VALUE, overriding
//!   --> ProcessBuilder::env(env)   env_clear() + every entry
//! ```

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// A set of environment variables for a child process.
///
/// Names and values are kept as [`OsString`], so inherited entries reach the
/// child byte for byte even when they are not valid Unicode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<OsString, OsString>,
}

impl Env {
    /// Creates an empty environment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Starts from the current process environment.
    #[must_use]
    pub fn inherit() -> Self {
        Self {
            vars: std::env::vars_os().collect(),
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub const fn from_map(vars: BTreeMap<OsString, OsString>) -> Self {
        Self { vars }
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Applies `KEY=VALUE` strings, split on the first `=`.
    ///
    /// Later entries override earlier ones and inherited values. Strings
    /// without `=` or with an empty name are ignored.
    pub fn extend_assignments<I, S>(&mut self, assignments: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for assignment in assignments {
            if let Some((key, value)) = assignment.as_ref().split_once('=')
                && !key.is_empty()
            {
                self.set(key, value);
            }
        }
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: impl AsRef<OsStr>) -> &mut Self {
        self.vars.remove(key.as_ref());
        self
    }

    /// Returns an iterator over environment variables.
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// Renders every entry as `KEY=VALUE`, one per line (debug output).
    ///
    /// Bytes that are not valid Unicode are shown as U+FFFD.
    #[must_use]
    pub fn to_listing(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}={}", k.display(), v.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}
