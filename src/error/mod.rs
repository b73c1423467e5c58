// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              ShimError (~24 bytes)
//!                     |
//!      +--------+-----+-----+---------+-----+
//!      |        |           |         |     |
//!      v        v           v         v     v
//!    Parse    Store      Config    Process  Other
//!     Box      Box         Box       Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Parse   MalformedEnvironment, NonUnicodeEnvironment, InvalidUtf8
//!   Store   Fetch, Publish, Deploy, List
//!   Config  MissingKey, InvalidValue, Load
//!   Process MissingProgram, ExecutableNotFound, SpawnFailed, WaitFailed
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ShimError`].
pub type ShimResult<T> = std::result::Result<T, ShimError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum ShimError {
    /// Configuration text or live environment could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] Box<ParseError>),

    /// Remote configuration store operation failed.
    #[error("store error: {0}")]
    Store(#[from] Box<StoreError>),

    /// Settings error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Child process error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl ShimError {
    /// Create a [`ShimError::Other`] from a message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into().into_boxed_str())
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ShimError {
                fn from(err: $error) -> Self {
                    ShimError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ParseError => Parse,
    StoreError => Store,
    ConfigError => Config,
    ProcessError => Process,
}

// --- Parse Errors ---

/// Errors raised while decoding configuration text or the live environment.
///
/// Lines that are blank, comment-only or lack a delimiter are never errors in
/// configuration text; they are skipped by the parser.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The live environment contains a line that is not an assignment.
    #[error("malformed environment at line {line}: '{content}' is not a KEY=VALUE assignment")]
    MalformedEnvironment { line: usize, content: String },

    /// An environment variable name or value is not valid Unicode.
    #[error("environment variable '{name}' is not valid unicode")]
    NonUnicodeEnvironment { name: String },

    /// Fetched configuration is not UTF-8 text.
    #[error("configuration is not valid UTF-8 (invalid byte at offset {offset})")]
    InvalidUtf8 { offset: usize },
}

// --- Store Errors ---

/// Remote configuration store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Fetching the latest configuration failed.
    #[error("failed to get config from AppConfig: {message}")]
    Fetch { message: String },

    /// Creating a new hosted configuration version failed.
    #[error("failed to create configuration version: {message}")]
    Publish { message: String },

    /// Starting a deployment of the new version failed.
    #[error("failed to start deployment of version {version}: {message}")]
    Deploy { version: i32, message: String },

    /// Listing parameters by path failed.
    #[error("failed to get parameters from SSM path '{path}': {message}")]
    List { path: String, message: String },
}

// --- Config Errors ---

/// Settings-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required setting.
    #[error("{message}")]
    MissingKey { key: String, message: String },

    /// Invalid setting value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Settings sources could not be loaded or merged.
    #[error("failed to load settings: {message}")]
    Load { message: String },
}

// --- Process Errors ---

/// Child process errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// No program was given on the command line.
    #[error("must specify program to execute")]
    MissingProgram,

    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed while waiting for the process.
    #[error("failed to wait for process '{command}': {source}")]
    WaitFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
