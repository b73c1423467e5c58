// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for config-shim using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! config-shim [options] --path PATH <program> [args...]
//! config-shim [options] --app A --env E --config C [--strategy S] <program> [args...]
//! ```
//!
//! Everything from the first positional argument on belongs to the child.

pub mod global;
pub mod source;


use clap::Parser;

use crate::cli::global::GlobalOptions;
use crate::cli::source::SourceOptions;
use crate::config::loader::ConfigLoader;
use crate::config::{DEFAULT_SETTINGS_FILE, ENV_PREFIX, Settings};
use crate::error::Result;

/// Remote configuration to environment launcher.
#[derive(Debug, Parser)]
#[command(
    name = "config-shim",
    author,
    version,
    about = "Run a program with its environment loaded from AWS AppConfig or Parameter Store",
    long_about = "config-shim Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads KEY=VALUE configuration from an AWS AppConfig profile or\n\
                  every parameter below a Parameter Store path, adds it to the\n\
                  current environment and runs the given program with it.",
    after_help = "EXIT STATUS:\n\n\
                  0 when the program succeeds, 2 when it fails or is killed,\n\
                  1 when config-shim itself cannot complete."
)]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceOptions,

    #[command(flatten)]
    pub global: GlobalOptions,

    /// Program to execute, followed by its arguments.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl Cli {
    /// Settings loader for this invocation.
    ///
    /// Layers: settings file, `CONFIG_SHIM_*` environment, then CLI flags.
    #[must_use]
    pub fn settings_loader(&self) -> ConfigLoader {
        let loader = Settings::builder();
        let loader = match &self.global.settings {
            Some(path) => loader.add_toml_file(path),
            None => loader.add_toml_file_optional(DEFAULT_SETTINGS_FILE),
        };
        let loader = loader.with_env_prefix(ENV_PREFIX);
        let loader = self.source.apply_overrides(loader);
        self.global.apply_overrides(loader)
    }

    /// Loads the settings for this invocation.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings layer cannot be read or merged.
    pub fn load_settings(&self) -> Result<Settings> {
        self.settings_loader().build()
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
