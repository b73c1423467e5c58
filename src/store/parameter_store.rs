// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! AWS Systems Manager Parameter Store access.
//!
//! ```text
//! path "/app/prod/"
//!   /app/prod/DB_HOST = db.internal   →  DB_HOST=db.internal
//!   /app/prod/DB_PASS = ****          →  DB_PASS=****   (decrypted)
//! ```
//!
//! Only direct children of the path are listed.

use aws_config::SdkConfig;
use aws_sdk_ssm::types::Parameter;
use tracing::{debug, warn};

use crate::envfile::VarMap;
use crate::error::StoreError;
use crate::logging::Verbosity;

/// A parameter as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterEntry {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl ParameterEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

impl From<Parameter> for ParameterEntry {
    fn from(parameter: Parameter) -> Self {
        Self {
            name: parameter.name,
            value: parameter.value,
        }
    }
}

/// Parameters below one path.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    client: aws_sdk_ssm::Client,
    path: String,
}

impl ParameterStore {
    #[must_use]
    pub fn new(sdk_config: &SdkConfig, path: String) -> Self {
        Self {
            client: aws_sdk_ssm::Client::new(sdk_config),
            path,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Lists every parameter below the path, with secure strings decrypted.
    ///
    /// Pages are requested until the service returns no continuation token
    /// or an empty page.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::List` if any page request fails.
    pub async fn list_parameters(&self) -> Result<Vec<ParameterEntry>, StoreError> {
        let mut entries = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let output = self
                .client
                .get_parameters_by_path()
                .path(&self.path)
                .with_decryption(true)
                .set_next_token(token.take())
                .send()
                .await
                .map_err(|e| StoreError::List {
                    path: self.path.clone(),
                    message: aws_sdk_ssm::error::DisplayErrorContext(&e).to_string(),
                })?;

            let page = output.parameters.unwrap_or_default();
            let page_len = page.len();
            entries.extend(page.into_iter().map(ParameterEntry::from));
            debug!(page_len, total = entries.len(), "listed parameter page");

            match output.next_token {
                Some(next) if page_len > 0 => token = Some(next),
                _ => break,
            }
        }

        Ok(entries)
    }
}

/// Converts listed parameters into variables named by their path suffix.
///
/// Entries without a name or value are skipped with a warning.
pub fn vars_from_parameters(
    path: &str,
    entries: Vec<ParameterEntry>,
    verbosity: Verbosity,
) -> VarMap {
    let mut vars = VarMap::new();

    for entry in entries {
        let Some(full_name) = entry.name else {
            warn!("SSM returned a parameter with no name");
            continue;
        };
        let name = full_name
            .strip_prefix(path)
            .unwrap_or(&full_name)
            .to_string();

        let Some(value) = entry.value else {
            warn!(name = %name, "SSM returned a parameter with no value");
            continue;
        };

        match verbosity {
            Verbosity::Debug => debug!(name = %name, value = %value, "read parameter"),
            Verbosity::Verbose => debug!(name = %name, "read parameter"),
            Verbosity::Normal => {}
        }
        vars.insert(name, value);
    }

    vars
}
