// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote configuration stores.
//!
//! ```text
//! Settings::source_params()
//!        |
//!        v
//!   SourceParams ──from_params(&SdkConfig)──> ConfigSource
//!                                               |
//!                     +-------------------------+----------------------+
//!                     v                                                v
//!              AppConfigStore                                   ParameterStore
//!   fetch_latest()  StartConfigurationSession          list_parameters()  GetParametersByPath
//!                   GetLatestConfiguration                                (decrypted, paged)
//!   publish()       CreateHostedConfigurationVersion   vars_from_parameters()
//!                   StartDeployment                                       strip path prefix
//! ```
//!
//! Credentials and region come from the default AWS provider chain.

pub mod appconfig;
pub mod parameter_store;

#[cfg(test)]
mod tests;

use aws_config::{BehaviorVersion, SdkConfig};
use std::fmt;

pub use appconfig::AppConfigStore;
pub use parameter_store::{ParameterEntry, ParameterStore, vars_from_parameters};

/// Validated identifiers of the configuration source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceParams {
    /// An `AppConfig` configuration profile in env-file format.
    AppConfig {
        application: String,
        environment: String,
        profile: String,
        /// Deployment strategy, present when updates may be published.
        strategy: Option<String>,
    },
    /// Every parameter below a Parameter Store path; `path` ends with `/`.
    ParameterStore { path: String },
}

impl fmt::Display for SourceParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AppConfig {
                application,
                environment,
                profile,
                ..
            } => write!(
                f,
                "AppConfig app {application:?}, env {environment:?}, config profile {profile:?}"
            ),
            Self::ParameterStore { path } => write!(f, "Parameter Store path {path:?}"),
        }
    }
}

/// A configuration store with its SDK clients.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    AppConfig(AppConfigStore),
    ParameterStore(ParameterStore),
}

impl ConfigSource {
    /// Builds the store clients for `params`.
    #[must_use]
    pub fn from_params(params: SourceParams, sdk_config: &SdkConfig) -> Self {
        match params {
            SourceParams::AppConfig {
                application,
                environment,
                profile,
                strategy,
            } => Self::AppConfig(AppConfigStore::new(
                sdk_config,
                application,
                environment,
                profile,
                strategy,
            )),
            SourceParams::ParameterStore { path } => {
                Self::ParameterStore(ParameterStore::new(sdk_config, path))
            }
        }
    }
}

/// Loads region and credentials from the default AWS provider chain.
pub async fn load_sdk_config() -> SdkConfig {
    aws_config::load_defaults(BehaviorVersion::latest()).await
}
