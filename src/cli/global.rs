// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Behavior and logging options.
//!
//! # Option Precedence
//!
//! ```text
//! --settings FILE   ← Settings file (default: ./config-shim.toml if present)
//! -u, --update      ← Publish {update}-marked values from the environment
//! -f, --fail-on-empty
//! -v, --verbose     ← Counts, names, command line
//! -d, --debug       ← Also values and the child environment
//! --log-level N     ← Console level (0-6), overrides -v/-d
//! --log-file FILE   ← Trace log file
//!
//! Precedence: CLI flags > CONFIG_SHIM_* env > settings file > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;

/// Options that change what a run does and reports.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Settings file in TOML format.
    #[arg(short = 's', long = "settings", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Update the config profile with values from the environment.
    /// Lines whose comment contains {update} take the value of the
    /// environment variable of the same name; the result is deployed.
    #[arg(short = 'u', long = "update")]
    pub update: bool,

    /// Fail if no parameters are found.
    #[arg(short = 'f', long = "fail-on-empty")]
    pub fail_on_empty: bool,

    /// Verbose output.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Debug output, including configuration values.
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6))]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Applies the given flags as overrides. Switches left off do not
    /// override lower layers.
    #[must_use]
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> ConfigLoader {
        for (key, on) in [
            ("update", self.update),
            ("fail_on_empty", self.fail_on_empty),
            ("verbose", self.verbose),
            ("debug", self.debug),
        ] {
            if on {
                loader = loader.set(key, true);
            }
        }

        if let Some(level) = self.log_level {
            loader = loader.set("log.level", i64::from(level));
        }

        if let Some(ref path) = self.log_file {
            loader = loader.set("log.file", path.display().to_string());
        }

        loader
    }
}
