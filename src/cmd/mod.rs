// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementation.
//!
//! ```text
//! Settings + child command --> cmd::run::run_command --> ProcessOutcome
//!                                                    --> exit_status()
//! ```

pub mod run;
