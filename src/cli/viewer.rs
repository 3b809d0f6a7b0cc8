//! Interactive viewer mode.
//!
//! This module provides the entry point for the terminal user interface that
//! lists a job's applicants and records decisions.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use jobapps::tui::{ApplicationsApp, ViewerServices, set_viewer_context};
use jobapps::{JobAppsConfig, PlacementError};

use super::build_gateway;

/// Runs the viewer for the configured job.
///
/// The job is optional here: without one the viewer opens its job prompt.
///
/// # Errors
///
/// Returns an error if:
/// - The API base or token is missing or invalid
/// - The configured job identifier is malformed
/// - The TUI fails to initialise
pub async fn run(config: &JobAppsConfig) -> Result<(), PlacementError> {
    let job = config.job()?;
    let gateway = build_gateway(config)?;
    let services = ViewerServices::new(Arc::new(gateway), config.download_dir());

    // Store the context for Model::init() to retrieve. If already set (e.g.
    // re-running the TUI in the same process), the existing context remains.
    let _ = set_viewer_context(services, job);

    run_tui().await.map_err(|error| PlacementError::Configuration {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `ApplicationsApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // ApplicationsApp::init() will retrieve the context from module-level
    // storage.
    let program = Program::<ApplicationsApp>::builder()
        .alt_screen(true)
        .build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
