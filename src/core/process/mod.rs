// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Child process spawning.
//!
//! ```text
//! ProcessBuilder::which("php-fpm")
//!   .args() .env() .name()
//!   .run(verbosity)
//!       --> tokio::process::Command (stdio inherited)
//!           Ctrl-C: keep waiting, the child gets it too
//!       --> ProcessOutcome { exit_code }
//! ```

pub mod builder;
mod runner;

pub use builder::{ProcessBuilder, ProcessOutcome};
