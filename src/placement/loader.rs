//! Data loader: fetches a job's applicants and form fields together.

use super::error::PlacementError;
use super::gateway::PlacementGateway;
use super::ids::JobId;
use super::models::{Applicant, FormField};

/// Independent outcomes of the two fetches issued for a job.
///
/// Each fetch can fail without affecting the other.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSnapshot {
    /// Applicant list, or why it could not be fetched.
    pub applicants: Result<Vec<Applicant>, PlacementError>,
    /// Form-field descriptors, or why they could not be fetched.
    pub form_fields: Result<Vec<FormField>, PlacementError>,
}

/// Issues the applicant and form-field fetches for a job concurrently.
pub struct JobLoader<'client, Gateway>
where
    Gateway: PlacementGateway + ?Sized,
{
    client: &'client Gateway,
}

impl<'client, Gateway> JobLoader<'client, Gateway>
where
    Gateway: PlacementGateway + ?Sized,
{
    /// Create a loader using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Fetch applicants and form fields for `job` concurrently.
    pub async fn load(&self, job: &JobId) -> JobSnapshot {
        let (applicants, form_fields) = tokio::join!(
            self.client.list_applications(job),
            self.client.list_form_fields(job)
        );

        if let Err(error) = &applicants {
            tracing::warn!("fetching applications for job {job} failed: {error}");
        }
        if let Err(error) = &form_fields {
            tracing::warn!("fetching form fields for job {job} failed: {error}");
        }

        JobSnapshot {
            applicants,
            form_fields,
        }
    }
}
