//! CLI operation mode handlers.
//!
//! This module contains the implementations for the operation modes:
//! - [`viewer`]: Interactive TUI for reviewing applicants
//! - [`list`]: Print one page of applicants
//! - [`export`]: Download the applications spreadsheet
//!
//! Output formatting utilities are in [`output`].

use jobapps::{HttpPlacementGateway, JobAppsConfig, PlacementError};

pub mod export;
pub mod list;
pub mod output;
pub mod viewer;

/// Builds the HTTP gateway from the configured session and timeout.
///
/// # Errors
///
/// Returns an error when the API base or token is missing or invalid.
pub fn build_gateway(config: &JobAppsConfig) -> Result<HttpPlacementGateway, PlacementError> {
    let session = config.api_session()?;
    HttpPlacementGateway::new(session, config.request_timeout())
}
