//! Jobapps library crate for reviewing placement job applications.
//!
//! The library talks to the placement API to load a job's applicants and
//! form fields, record accept/reject decisions, and download the
//! applications spreadsheet. It also provides the interactive terminal
//! viewer and the configuration and logging layers shared by the CLI.

pub mod config;
pub mod logging;
pub mod placement;
pub mod tui;

pub use config::{JobAppsConfig, OperationMode};
pub use placement::{
    ApiSession, Applicant, ApplicationId, ApplicationStatus, AuthToken, HttpPlacementGateway,
    JobId, PlacementError, PlacementGateway, Roster,
};
