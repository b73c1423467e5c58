// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Flat `KEY=VALUE` configuration text.
//!
//! ```text
//! ConfigText
//!     |
//!     v
//! lines() ---> classify() ---> Blank | CommentOnly | NotAssignment
//!     |                              | Assignment { key, value, comment }
//!     |                                          |
//!     |                                          v
//!     |                              VarMap (last write wins)
//!     |                                          |
//!     |                                          v
//!     |                              to_env_strings() --> ["KEY=VALUE", ..]
//!     |
//!     +--> rewrite(text, live env) --> lines marked `# {update}` re-emitted
//!                                      as KEY='value' #comment
//! ```
//!
//! Supported line format:
//!
//! ```text
//! KEY=value
//! KEY="quoted value with spaces or # chars"
//! KEY='single quoted, taken literally'
//! KEY=value_with_embedded=signs
//! # full-line comment, ignored
//! KEY=value # trailing comment
//! KEY=value # ... {update} ...
//! ```
//!
//! Everything here is pure: no I/O, no shared state.

mod lines;
mod parser;
mod rewrite;
mod varmap;

#[cfg(test)]
mod tests;

pub use lines::{Lines, lines};
pub use parser::{Assignment, LineKind, classify, parse_line};
pub use rewrite::{RewriteOutcome, UPDATE_MARKER, rewrite, rewrite_from_environment, rewrite_line};
pub use varmap::VarMap;

/// Starts a full-line or trailing comment.
pub(crate) const COMMENT: char = '#';
