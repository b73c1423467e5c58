// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> cmd::run --> exit status
//! ```

use std::process::ExitCode;

use config_shim::cli;
use config_shim::cmd::run::{SHIM_FAILURE_EXIT, exit_status, run_command};
use config_shim::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(SHIM_FAILURE_EXIT);
        }
    };

    let _log_guard = match init_logging(&settings.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::from(SHIM_FAILURE_EXIT);
        }
    };

    let result = run_command(&settings, &cli.command).await;
    if let Err(ref e) = result {
        tracing::error!("Error: {e:#}");
    }

    ExitCode::from(exit_status(&result))
}
