// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run(verbosity)
//!        |
//!        v
//!  build_command()
//!  args, env_clear + env, stdio inherited
//!        |
//!        v
//!     spawn()
//!        |
//!        v
//!  wait()  <-- Ctrl-C is ignored here,
//!        |     the child decides how to exit
//!        v
//!  ProcessOutcome { exit_code }
//! ```

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, trace};

use super::builder::{ProcessBuilder, ProcessOutcome};
use crate::error::{ProcessError, ShimResult};
use crate::logging::Verbosity;

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_name().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    #[must_use]
    pub fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process with inherited stdio and waits for it to finish.
    ///
    /// A non-zero exit is not an error here; inspect the returned outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    pub async fn run(self, verbosity: Verbosity) -> ShimResult<ProcessOutcome> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        match (verbosity, self.environment()) {
            (Verbosity::Debug, Some(env)) => {
                info!(cmd = %cmd_line, "running with env:\n{}", env.to_listing());
            }
            (Verbosity::Verbose | Verbosity::Debug, _) => info!(cmd = %cmd_line, "running"),
            (Verbosity::Normal, _) => {}
        }

        let mut command = self.build_command();
        let mut child = command
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;

        trace!(process = %name, pid = ?child.id(), "spawned");

        let status = tokio::select! {
            status = child.wait() => status,
            Ok(()) = tokio::signal::ctrl_c() => {
                debug!(process = %name, "interrupt received, waiting for child to exit");
                child.wait().await
            }
        }
        .map_err(|source| ProcessError::WaitFailed {
            command: cmd_line,
            source,
        })?;

        let outcome = ProcessOutcome::new(status.code());
        trace!(process = %name, %outcome, "completed");
        Ok(outcome)
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        if let Some(env) = self.environment() {
            command.env_clear();
            command.envs(env.iter());
        }

        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        command
    }
}
