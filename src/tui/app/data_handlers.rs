//! Loading and spreadsheet export handlers.
//!
//! A load fetches applicants and form fields concurrently through
//! [`JobLoader`]; each half of the resulting snapshot is applied on its own,
//! so a form-field failure never hides the applicant table.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::ApplicationsApp;
use crate::placement::{
    Applicant, ExportedSpreadsheet, FormField, JobLoader, JobSnapshot, Notification,
    PlacementError, Roster, SpreadsheetExporter, export_notification, log_export_outcome,
};
use crate::tui::messages::AppMsg;
use crate::tui::state::LoadState;

fn services_unavailable() -> PlacementError {
    PlacementError::Configuration {
        message: "viewer services are not configured".to_owned(),
    }
}

impl ApplicationsApp {
    /// Dispatches load and export messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::LoadRequested => self.handle_load_requested(),
            AppMsg::SnapshotLoaded {
                generation,
                snapshot,
            } => self.handle_snapshot_loaded(*generation, snapshot),
            AppMsg::ExportRequested => self.handle_export_requested(),
            AppMsg::ExportFinished { generation, result } => {
                self.handle_export_finished(*generation, result)
            }
            _ => {
                debug_assert!(false, "non-data message routed to handle_data_msg");
                None
            }
        }
    }

    /// Handles a manual reload request.
    ///
    /// Without a job the prompt opens instead; a reload while a load is in
    /// flight is ignored.
    fn handle_load_requested(&mut self) -> Option<Cmd> {
        if self.job.is_none() {
            return self.open_job_prompt();
        }
        if self.load_state.is_loading() {
            return None;
        }
        self.start_load()
    }

    /// Enters the loading state and issues both fetches for the active job.
    pub(super) fn start_load(&mut self) -> Option<Cmd> {
        let job = self.job.clone()?;
        self.load_state = LoadState::Loading;

        let Some(services) = self.services.clone() else {
            let error = services_unavailable();
            tracing::warn!("cannot load job {job}: {error}");
            self.load_state = LoadState::Failed(error.to_string());
            return Some(self.notify(Notification::applications_fetch_failed()));
        };

        let generation = self.generation;
        Some(Box::pin(async move {
            let snapshot = JobLoader::new(services.gateway.as_ref()).load(&job).await;
            Some(Box::new(AppMsg::SnapshotLoaded {
                generation,
                snapshot,
            }) as Box<dyn Any + Send>)
        }))
    }

    fn handle_snapshot_loaded(&mut self, generation: u64, snapshot: &JobSnapshot) -> Option<Cmd> {
        if self.is_stale(generation, "job snapshot") {
            return None;
        }

        let fields_notification = self.apply_form_fields(&snapshot.form_fields);
        let applicants_notification = self.apply_applicants(&snapshot.applicants);

        // One notification slot: the applicant failure outranks the field
        // failure, which is still logged.
        match (applicants_notification, fields_notification) {
            (Some(applicants), Some(fields)) => {
                tracing::info!("not showing '{fields}': '{applicants}' takes priority");
                Some(self.notify(applicants))
            }
            (applicants, fields) => applicants
                .or(fields)
                .map(|notification| self.notify(notification)),
        }
    }

    fn apply_applicants(
        &mut self,
        result: &Result<Vec<Applicant>, PlacementError>,
    ) -> Option<Notification> {
        match result {
            Ok(applicants) => {
                self.roster = Roster::new(applicants.clone());
                self.load_state = LoadState::Loaded;
                self.clamp_table();
                tracing::info!("loaded {} applications", self.roster.len());
                None
            }
            Err(error) => {
                self.roster = Roster::default();
                self.load_state = LoadState::Failed(error.to_string());
                self.clamp_table();
                Some(Notification::applications_fetch_failed())
            }
        }
    }

    fn apply_form_fields(
        &mut self,
        result: &Result<Vec<FormField>, PlacementError>,
    ) -> Option<Notification> {
        match result {
            Ok(fields) => {
                self.form_fields.clone_from(fields);
                None
            }
            Err(_) => Some(Notification::fields_fetch_failed()),
        }
    }

    /// Starts a spreadsheet download unless one is already running or the
    /// job is still loading.
    fn handle_export_requested(&mut self) -> Option<Cmd> {
        let Some(job) = self.job.clone() else {
            return self.open_job_prompt();
        };
        if self.exporting || self.load_state.shows_indicator() {
            return None;
        }

        let Some(services) = self.services.clone() else {
            let error = services_unavailable();
            tracing::warn!("cannot export job {job}: {error}");
            return Some(self.notify(Notification::spreadsheet_download_failed()));
        };

        self.exporting = true;
        let generation = self.generation;
        Some(Box::pin(async move {
            let exporter =
                SpreadsheetExporter::new(services.gateway.as_ref(), services.download_dir.clone());
            let result = exporter.export(&job).await;
            Some(Box::new(AppMsg::ExportFinished { generation, result }) as Box<dyn Any + Send>)
        }))
    }

    fn handle_export_finished(
        &mut self,
        generation: u64,
        result: &Result<ExportedSpreadsheet, PlacementError>,
    ) -> Option<Cmd> {
        if self.is_stale(generation, "spreadsheet export") {
            return None;
        }
        self.exporting = false;
        log_export_outcome(result);
        Some(self.notify(export_notification(result)))
    }
}
