// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! AWS `AppConfig` profile access.
//!
//! Reads go through the `AppConfigData` session API; writes create a hosted
//! configuration version and deploy it with the configured strategy.

use aws_config::SdkConfig;
use aws_sdk_appconfig::primitives::Blob;
use tracing::{debug, info};

use crate::error::StoreError;

/// Description attached to published versions and deployments.
pub const PUBLISH_DESCRIPTION: &str = "updated by config-shim";

/// Content type of published versions.
pub const CONTENT_TYPE: &str = "text/plain";

/// One `AppConfig` configuration profile in one environment.
#[derive(Debug, Clone)]
pub struct AppConfigStore {
    data: aws_sdk_appconfigdata::Client,
    admin: aws_sdk_appconfig::Client,
    application: String,
    environment: String,
    profile: String,
    strategy: Option<String>,
}

impl AppConfigStore {
    #[must_use]
    pub fn new(
        sdk_config: &SdkConfig,
        application: String,
        environment: String,
        profile: String,
        strategy: Option<String>,
    ) -> Self {
        Self {
            data: aws_sdk_appconfigdata::Client::new(sdk_config),
            admin: aws_sdk_appconfig::Client::new(sdk_config),
            application,
            environment,
            profile,
            strategy,
        }
    }

    #[must_use]
    pub fn application(&self) -> &str {
        &self.application
    }

    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    #[must_use]
    pub fn profile(&self) -> &str {
        &self.profile
    }

    #[must_use]
    pub fn strategy(&self) -> Option<&str> {
        self.strategy.as_deref()
    }

    /// Fetches the currently deployed configuration content.
    ///
    /// An empty profile yields an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fetch` if the session cannot be started or the
    /// configuration cannot be retrieved.
    pub async fn fetch_latest(&self) -> Result<Vec<u8>, StoreError> {
        let session = self
            .data
            .start_configuration_session()
            .application_identifier(&self.application)
            .environment_identifier(&self.environment)
            .configuration_profile_identifier(&self.profile)
            .send()
            .await
            .map_err(|e| fetch_error(&e))?;

        let token = session
            .initial_configuration_token
            .ok_or_else(|| StoreError::Fetch {
                message: "configuration session returned no token".to_string(),
            })?;

        let output = self
            .data
            .get_latest_configuration()
            .configuration_token(token)
            .send()
            .await
            .map_err(|e| fetch_error(&e))?;

        let content = output
            .configuration
            .map(aws_sdk_appconfigdata::primitives::Blob::into_inner)
            .unwrap_or_default();
        debug!(bytes = content.len(), "fetched configuration");
        Ok(content)
    }

    /// Creates a new hosted configuration version with `content` and starts
    /// its deployment.
    ///
    /// Returns the new version number.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Publish` if no strategy is configured or the
    /// version cannot be created, and `StoreError::Deploy` if the deployment
    /// cannot be started.
    pub async fn publish(&self, content: &str) -> Result<i32, StoreError> {
        let strategy = self.strategy.as_deref().ok_or_else(|| StoreError::Publish {
            message: "deployment strategy ID is required for update mode".to_string(),
        })?;

        let created = self
            .admin
            .create_hosted_configuration_version()
            .application_id(&self.application)
            .configuration_profile_id(&self.profile)
            .content(Blob::new(content.as_bytes()))
            .content_type(CONTENT_TYPE)
            .description(PUBLISH_DESCRIPTION)
            .send()
            .await
            .map_err(|e| StoreError::Publish {
                message: aws_sdk_appconfig::error::DisplayErrorContext(&e).to_string(),
            })?;
        let version = created.version_number();

        self.admin
            .start_deployment()
            .application_id(&self.application)
            .environment_id(&self.environment)
            .configuration_profile_id(&self.profile)
            .configuration_version(version.to_string())
            .deployment_strategy_id(strategy)
            .description(PUBLISH_DESCRIPTION)
            .send()
            .await
            .map_err(|e| StoreError::Deploy {
                version,
                message: aws_sdk_appconfig::error::DisplayErrorContext(&e).to_string(),
            })?;

        info!(version, strategy, "deployed updated configuration");
        Ok(version)
    }
}

fn fetch_error<E>(err: &E) -> StoreError
where
    E: std::error::Error,
{
    StoreError::Fetch {
        message: aws_sdk_appconfigdata::error::DisplayErrorContext(err).to_string(),
    }
}
