//! Accept/reject handlers.
//!
//! A decision is sent only when it differs from the applicant's current
//! status, and only while the table is on screen. While a request is in flight its row is disabled, and the roster
//! changes only after the server confirms with HTTP 200.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::ApplicationsApp;
use crate::placement::{
    ApplicationStatus, Notification, StatusChange, StatusUpdateOutcome, StatusUpdater,
};
use crate::tui::messages::AppMsg;
use crate::tui::state::LoadState;

impl ApplicationsApp {
    /// Dispatches status messages to their handlers.
    pub(super) fn handle_status_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::AcceptSelected => self.request_status_change(ApplicationStatus::Accept),
            AppMsg::RejectSelected => self.request_status_change(ApplicationStatus::Reject),
            AppMsg::StatusUpdateFinished {
                generation,
                outcome,
            } => self.handle_status_update_finished(*generation, outcome),
            _ => {
                debug_assert!(false, "non-status message routed to handle_status_msg");
                None
            }
        }
    }

    fn request_status_change(&mut self, status: ApplicationStatus) -> Option<Cmd> {
        if self.load_state != LoadState::Loaded {
            tracing::debug!("ignoring status change: the applicant table is not shown");
            return None;
        }
        let (id, unchanged) = {
            let applicant = self.selected_applicant()?;
            (applicant.id, applicant.status == status)
        };

        if self.pending_updates.contains(&id) {
            tracing::debug!("ignoring change for application {id}: update in flight");
            return None;
        }
        if unchanged {
            return None;
        }

        let Some(services) = self.services.clone() else {
            tracing::warn!("cannot update application {id}: viewer services are not configured");
            return Some(self.notify(Notification::status_update_failed()));
        };

        self.pending_updates.insert(id);
        let generation = self.generation;
        let change = StatusChange::new(id, status);
        Some(Box::pin(async move {
            let outcome = StatusUpdater::new(services.gateway.as_ref())
                .submit(change)
                .await;
            Some(Box::new(AppMsg::StatusUpdateFinished {
                generation,
                outcome,
            }) as Box<dyn Any + Send>)
        }))
    }

    fn handle_status_update_finished(
        &mut self,
        generation: u64,
        outcome: &StatusUpdateOutcome,
    ) -> Option<Cmd> {
        if self.is_stale(generation, "status update") {
            return None;
        }
        self.pending_updates.remove(&outcome.change.application_id);
        let notification = outcome.reconcile(&mut self.roster);
        Some(self.notify(notification))
    }
}
