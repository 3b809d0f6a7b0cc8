//! Placement-cell job application client.
//!
//! This module talks to the placement API: it loads the applicants and form
//! fields for a job, records accept/reject decisions, and downloads the
//! applications spreadsheet. Requests carry an explicitly injected
//! [`ApiSession`] rather than reading a credential from ambient state.

pub mod error;
pub mod export;
pub mod gateway;
pub mod ids;
pub mod loader;
pub mod models;
pub mod notification;
pub mod roster;
pub mod routes;
pub mod status;

pub use error::PlacementError;
pub use export::{
    ExportedSpreadsheet, SpreadsheetExporter, export_notification, log_export_outcome,
    spreadsheet_file_name,
};
pub use gateway::{HttpPlacementGateway, PlacementGateway};
pub use ids::{ApplicationId, AuthToken, JobId};
pub use loader::{JobLoader, JobSnapshot};
pub use models::{Applicant, ApplicationStatus, Cpi, FormField};
pub use notification::{Notification, NotificationTone};
pub use roster::{PAGE_SIZE, Roster};
pub use routes::{ApiSession, PlacementRoutes};
pub use status::{StatusChange, StatusUpdateOutcome, StatusUpdater};

#[cfg(test)]
pub use gateway::MockPlacementGateway;

#[cfg(test)]
mod tests;
