//! Status updater: submits a decision and reconciles the local roster.

use super::error::PlacementError;
use super::gateway::PlacementGateway;
use super::ids::ApplicationId;
use super::models::ApplicationStatus;
use super::notification::Notification;
use super::roster::Roster;

/// A requested status change for one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    /// Application being decided.
    pub application_id: ApplicationId,
    /// New status.
    pub status: ApplicationStatus,
}

impl StatusChange {
    /// Creates a status change request.
    #[must_use]
    pub const fn new(application_id: ApplicationId, status: ApplicationStatus) -> Self {
        Self {
            application_id,
            status,
        }
    }
}

/// Result of submitting a [`StatusChange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdateOutcome {
    /// The change that was submitted.
    pub change: StatusChange,
    /// `Ok` only when the server answered HTTP 200.
    pub result: Result<(), PlacementError>,
}

impl StatusUpdateOutcome {
    /// Applies the outcome to the roster and returns the notification to
    /// show.
    ///
    /// On success exactly the matching applicant's status is replaced; on
    /// failure the roster is left untouched and the error is logged.
    pub fn reconcile(&self, roster: &mut Roster) -> Notification {
        match &self.result {
            Ok(()) => {
                let id = self.change.application_id;
                if !roster.apply_status(id, &self.change.status) {
                    tracing::debug!("application {id} confirmed but no longer in the roster");
                }
                Notification::status_updated()
            }
            Err(error) => {
                tracing::warn!(
                    "updating application {} to {} failed: {error}",
                    self.change.application_id,
                    self.change.status
                );
                Notification::status_update_failed()
            }
        }
    }
}

/// Sends status changes through a gateway.
pub struct StatusUpdater<'client, Gateway>
where
    Gateway: PlacementGateway + ?Sized,
{
    client: &'client Gateway,
}

impl<'client, Gateway> StatusUpdater<'client, Gateway>
where
    Gateway: PlacementGateway + ?Sized,
{
    /// Create an updater using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Submit the change without touching any local state.
    pub async fn submit(&self, change: StatusChange) -> StatusUpdateOutcome {
        let result = self
            .client
            .update_status(change.application_id, &change.status)
            .await;
        StatusUpdateOutcome { change, result }
    }

    /// Submit the change and reconcile `roster` with the outcome.
    pub async fn update(&self, roster: &mut Roster, change: StatusChange) -> Notification {
        self.submit(change).await.reconcile(roster)
    }
}
