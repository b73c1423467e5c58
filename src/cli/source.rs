// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration source options.
//!
//! ```text
//! --path P                            → Parameter Store (wins when given)
//! --app A --env E --config C          → AppConfig
//!   [--strategy S]                    → required with -u
//! ```

use clap::Args;

use crate::config::loader::ConfigLoader;

/// Identifiers of the configuration to read.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceOptions {
    /// AppConfig application identifier.
    #[arg(long = "app", value_name = "ID")]
    pub app: Option<String>,

    /// AppConfig environment identifier.
    #[arg(long = "env", value_name = "ID")]
    pub env: Option<String>,

    /// AppConfig config profile identifier.
    #[arg(long = "config", value_name = "ID")]
    pub config: Option<String>,

    /// AppConfig deployment strategy identifier.
    #[arg(long = "strategy", value_name = "ID")]
    pub strategy: Option<String>,

    /// Parameter Store base configuration path.
    #[arg(long = "path", value_name = "PATH")]
    pub path: Option<String>,
}

impl SourceOptions {
    /// Applies the given identifiers as overrides.
    #[must_use]
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> ConfigLoader {
        for (key, value) in [
            ("appconfig.application", &self.app),
            ("appconfig.environment", &self.env),
            ("appconfig.profile", &self.config),
            ("appconfig.strategy", &self.strategy),
            ("parameter_store.path", &self.path),
        ] {
            if let Some(value) = value {
                loader = loader.set(key, value.as_str());
            }
        }
        loader
    }
}
