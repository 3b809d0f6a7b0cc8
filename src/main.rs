//! Jobapps CLI entrypoint.
//!
//! Runs the interactive viewer by default, or one of the one-shot modes
//! (`--list`, `--export`) selected by configuration.

use std::io::{self, Write};
use std::process::ExitCode;

use camino::Utf8Path;
use jobapps::logging::{self, LogTarget};
use jobapps::{JobAppsConfig, OperationMode, PlacementError};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), PlacementError> {
    let config = load_config()?;
    let mode = config.operation_mode();
    init_logging(&config, mode)?;

    match mode {
        OperationMode::ExportSpreadsheet => cli::export::run(&config).await,
        OperationMode::ListApplicants => cli::list::run(&config).await,
        OperationMode::Viewer => cli::viewer::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`PlacementError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<JobAppsConfig, PlacementError> {
    JobAppsConfig::load().map_err(|error| PlacementError::Configuration {
        message: error.to_string(),
    })
}

/// Installs the subscriber; the viewer only logs to a file so the terminal
/// stays clean.
fn init_logging(config: &JobAppsConfig, mode: OperationMode) -> Result<(), PlacementError> {
    let target = match (mode, config.log_file.as_deref()) {
        (OperationMode::Viewer, Some(path)) => LogTarget::File(Utf8Path::new(path)),
        (OperationMode::Viewer, None) => LogTarget::Disabled,
        (OperationMode::ListApplicants | OperationMode::ExportSpreadsheet, _) => LogTarget::Stderr,
    };
    logging::init(&config.log_level, target).map_err(|error| PlacementError::Configuration {
        message: error.to_string(),
    })
}
