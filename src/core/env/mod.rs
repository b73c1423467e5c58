// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! EnvSnapshot  current process env, UTF-8 checked
//!              to_text() -> "KEY=VALUE\n..." for re-parsing
//!
//! Env          child environment (BTreeMap<OsString, OsString>)
//!              inherit() + extend_assignments(["KEY=VALUE", ..])
//! ```
//!
//! - **Case-sensitive keys**: names are compared byte for byte
//! - **Raw child env**: `Env` passes inherited bytes through unchanged
//! - **UTF-8 snapshot**: non-Unicode entries are rejected at capture

pub mod container;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use container::Env;
pub use snapshot::EnvSnapshot;
