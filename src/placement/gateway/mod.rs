//! Gateways for talking to the placement API.
//!
//! The trait keeps the loader, updater, and exporter independent of the HTTP
//! stack so they can be exercised against mocks, while
//! [`HttpPlacementGateway`] performs the real requests with reqwest.

mod client;
mod error_mapping;
mod http_gateway;

pub use http_gateway::HttpPlacementGateway;

use async_trait::async_trait;

use crate::placement::error::PlacementError;
use crate::placement::ids::{ApplicationId, JobId};
use crate::placement::models::{Applicant, ApplicationStatus, FormField};

/// Operations the viewer needs from the placement API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlacementGateway: Send + Sync {
    /// Fetch every applicant for the job in a single call.
    async fn list_applications(&self, job: &JobId) -> Result<Vec<Applicant>, PlacementError>;

    /// Fetch the form-field descriptors configured for the job.
    async fn list_form_fields(&self, job: &JobId) -> Result<Vec<FormField>, PlacementError>;

    /// Record a new status for one application.
    ///
    /// Succeeds only when the server answers HTTP 200; any other success
    /// status is reported as [`PlacementError::UnexpectedStatus`].
    async fn update_status(
        &self,
        application: ApplicationId,
        status: &ApplicationStatus,
    ) -> Result<(), PlacementError>;

    /// Fetch the binary spreadsheet of the job's applications.
    async fn download_spreadsheet(&self, job: &JobId) -> Result<Vec<u8>, PlacementError>;
}
