// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fetch, optionally update, then launch.
//!
//! ```text
//! run_command(settings, [program, args..])
//!   |
//!   +-- source_params()          validation, before any remote call
//!   +-- program present?         "must specify program to execute"
//!   |
//!   v
//! fetch_vars(source)
//!   AppConfig       fetch_latest -> UTF-8 -> [update: capture env, rewrite,
//!                   publish if changed] -> VarMap::parse
//!   ParameterStore  list_parameters -> vars_from_parameters
//!   fail_on_empty   no variables -> "no parameters found"
//!   |
//!   v
//! child_process(program, args, vars)
//!   inherited env + vars (vars win), stdio inherited
//!   |
//!   v
//! exit_status: 0 child ok | 2 child failed | 1 anything else
//! ```

use tracing::{debug, error, info, warn};

use crate::config::Settings;
use crate::core::env::{Env, EnvSnapshot};
use crate::core::process::{ProcessBuilder, ProcessOutcome};
use crate::envfile::{RewriteOutcome, VarMap, rewrite_from_environment};
use crate::error::{ParseError, ProcessError, Result, ShimError, ShimResult};
use crate::logging::Verbosity;
use crate::store::{self, AppConfigStore, ConfigSource, vars_from_parameters};

/// Exit status when the child could not complete successfully.
pub const CHILD_FAILURE_EXIT: u8 = 2;

/// Exit status for every failure before or around the child.
pub const SHIM_FAILURE_EXIT: u8 = 1;

/// Runs one config-shim invocation.
///
/// `command` is the child program followed by its arguments.
///
/// # Errors
///
/// Returns an error if the settings are incomplete, `command` is empty, the
/// configuration cannot be fetched, decoded or updated, or the child cannot
/// be started. A child that runs and fails is reported through the outcome.
pub async fn run_command(settings: &Settings, command: &[String]) -> Result<ProcessOutcome> {
    let verbosity = settings.verbosity();
    let params = settings.source_params()?;
    let (program, args) = command
        .split_first()
        .ok_or(ProcessError::MissingProgram)?;

    info!("reading from {params}");

    let sdk_config = store::load_sdk_config().await;
    let source = ConfigSource::from_params(params, &sdk_config);
    let vars = fetch_vars(&source, settings).await?;

    let outcome = child_process(program, args, &vars)?.run(verbosity).await?;
    if !outcome.success() {
        error!("command failed: {outcome}");
    }
    Ok(outcome)
}

/// Reads the variables of `source`, publishing marked updates first when
/// `settings.update` is set.
///
/// # Errors
///
/// Returns an error if the store fails, the content is not UTF-8, the
/// environment cannot be decoded for an update, or `fail_on_empty` is set
/// and nothing was found.
pub async fn fetch_vars(source: &ConfigSource, settings: &Settings) -> Result<VarMap> {
    let verbosity = settings.verbosity();

    let vars = match source {
        ConfigSource::AppConfig(store) => {
            let mut text = decode_text(store.fetch_latest().await?)?;
            if settings.update {
                text = apply_update(store, text, verbosity).await?;
            }

            let vars = VarMap::parse(&text);
            if verbosity.is_verbose() {
                debug!(count = vars.len(), "read variables from AppConfig");
            }
            if verbosity.is_debug() {
                debug!("vars:\n{}", vars.to_env_strings().join("\n"));
            }
            vars
        }
        ConfigSource::ParameterStore(store) => {
            if settings.update {
                warn!("update mode only applies to AppConfig, ignoring it for Parameter Store");
            }
            let entries = store.list_parameters().await?;
            vars_from_parameters(store.path(), entries, verbosity)
        }
    };

    if settings.fail_on_empty && vars.is_empty() {
        return Err(ShimError::other("no parameters found").into());
    }

    Ok(vars)
}

/// Decodes fetched configuration content.
///
/// # Errors
///
/// Returns [`ParseError::InvalidUtf8`] with the offset of the first bad byte.
pub fn decode_text(content: Vec<u8>) -> std::result::Result<String, ParseError> {
    String::from_utf8(content).map_err(|e| ParseError::InvalidUtf8 {
        offset: e.utf8_error().valid_up_to(),
    })
}

/// Rewrites marked lines of `text` from `snapshot` and logs what changed.
///
/// # Errors
///
/// Returns a [`ParseError`] if the environment does not decode.
pub fn prepare_update(
    text: &str,
    snapshot: &EnvSnapshot,
    verbosity: Verbosity,
) -> std::result::Result<RewriteOutcome, ParseError> {
    let outcome = rewrite_from_environment(text, snapshot)?;

    if verbosity.is_debug() {
        let rewritten = VarMap::parse(outcome.text());
        for key in outcome.updated() {
            let value = rewritten.get(key).unwrap_or_default();
            debug!("updated variable '{key}' to '{value}' in config file");
        }
    } else {
        for key in outcome.updated() {
            info!("updated variable '{key}' in config file");
        }
    }

    Ok(outcome)
}

async fn apply_update(
    store: &AppConfigStore,
    text: String,
    verbosity: Verbosity,
) -> Result<String> {
    let snapshot = EnvSnapshot::capture()?;
    let outcome = prepare_update(&text, &snapshot, verbosity)?;

    if !outcome.is_changed() {
        info!("no marked values changed, skipping deployment");
        return Ok(text);
    }

    let version = store.publish(outcome.text()).await?;
    if verbosity.is_debug() {
        debug!(version, "updated config:\n{}", outcome.text());
    }
    Ok(outcome.into_text())
}

/// Builds the child process: inherited environment plus `vars`.
///
/// Values from `vars` replace inherited variables of the same name.
///
/// # Errors
///
/// Returns `ProcessError::ExecutableNotFound` if `program` cannot be resolved.
pub fn child_process(
    program: &str,
    args: &[String],
    vars: &VarMap,
) -> ShimResult<ProcessBuilder> {
    let mut env = Env::inherit();
    env.extend_assignments(vars.to_env_strings());

    Ok(ProcessBuilder::which(program)?.args(args).env(env))
}

/// Maps a run result to the process exit status.
#[must_use]
pub fn exit_status(result: &Result<ProcessOutcome>) -> u8 {
    match result {
        Ok(outcome) if outcome.success() => 0,
        Ok(_) => CHILD_FAILURE_EXIT,
        Err(_) => SHIM_FAILURE_EXIT,
    }
}
