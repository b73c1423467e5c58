// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings for a config-shim run.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --settings FILE, or ./config-shim.toml if present
//! 3. CONFIG_SHIM_* env vars
//! 4. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! CONFIG_SHIM_APPCONFIG__APPLICATION=web  → appconfig.application = "web"
//! CONFIG_SHIM_PARAMETER_STORE__PATH=/app  → parameter_store.path = "/app"
//! CONFIG_SHIM_FAIL_ON_EMPTY=true          → fail_on_empty = true
//! ```
//!
//! # Source Selection
//!
//! ```text
//! parameter_store.path set  → ParameterStore { path + "/" }
//! otherwise                 → AppConfig { application, environment, profile }
//!                             (+ strategy when update = true)
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::logging::{LogConfig, Verbosity};
use crate::store::SourceParams;

use loader::ConfigLoader;
use types::{AppConfigSettings, LogSettings, ParameterStoreSettings};

/// Default settings file looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "config-shim.toml";

/// Environment variable prefix for settings.
pub const ENV_PREFIX: &str = "CONFIG_SHIM";

/// Complete run settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// `AppConfig` identifiers.
    pub appconfig: AppConfigSettings,
    /// Parameter Store settings.
    pub parameter_store: ParameterStoreSettings,
    /// Substitute `{update}`-marked values from the environment and deploy them.
    pub update: bool,
    /// Fail when the source yields no variables.
    pub fail_on_empty: bool,
    /// Verbose output (`-v`).
    pub verbose: bool,
    /// Debug output, including values (`-d`).
    pub debug: bool,
    /// Logging options.
    pub log: LogSettings,
}

impl Settings {
    /// Create a new settings loader.
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not match `Settings`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// `Settings`.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Verbosity selected by the `verbose` and `debug` switches.
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.debug)
    }

    /// Logging configuration for this run.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(
                self.log
                    .level
                    .unwrap_or_else(|| self.verbosity().console_level()),
            )
            .maybe_with_log_file(self.log.file.as_ref().map(|p| p.display().to_string()))
            .with_show_timestamps(self.log.timestamps)
            .build()
    }

    /// Validates the settings and selects the configuration source.
    ///
    /// A Parameter Store path takes precedence over `AppConfig` identifiers.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` when a required identifier is missing.
    pub fn source_params(&self) -> std::result::Result<SourceParams, ConfigError> {
        if let Some(path) = non_empty(self.parameter_store.path.as_deref()) {
            let path = if path.ends_with('/') {
                path.to_string()
            } else {
                format!("{path}/")
            };
            return Ok(SourceParams::ParameterStore { path });
        }

        let app = &self.appconfig;
        let application = required(
            app.application.as_deref(),
            "appconfig.application",
            "no application ID provided. Specify with --app flag",
        )?;
        let environment = required(
            app.environment.as_deref(),
            "appconfig.environment",
            "no environment ID provided. Specify with --env flag",
        )?;
        let profile = required(
            app.profile.as_deref(),
            "appconfig.profile",
            "no config profile ID provided. Specify with --config flag",
        )?;

        let strategy = non_empty(app.strategy.as_deref()).map(str::to_string);
        if self.update && strategy.is_none() {
            return Err(ConfigError::MissingKey {
                key: "appconfig.strategy".to_string(),
                message: "deployment strategy ID is required for update mode. Use --strategy flag"
                    .to_string(),
            });
        }

        Ok(SourceParams::AppConfig {
            application,
            environment,
            profile,
            strategy,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(
    value: Option<&str>,
    key: &str,
    message: &str,
) -> std::result::Result<String, ConfigError> {
    non_empty(value)
        .map(str::to_string)
        .ok_or_else(|| ConfigError::MissingKey {
            key: key.to_string(),
            message: message.to_string(),
        })
}
