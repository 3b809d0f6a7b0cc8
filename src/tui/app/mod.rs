//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! job applications viewer. It owns the roster for the active job, tracks
//! in-flight requests, and turns their results into notifications.
//!
//! # Module Structure
//!
//! - `model_impl`: `bubbletea_rs::Model` implementation
//! - `rendering`: View rendering methods for terminal output
//! - `navigation`: Cursor and page movement handlers
//! - `data_handlers`: Loading and spreadsheet export
//! - `status_handlers`: Accept/reject requests and their outcomes
//! - `job_prompt_handlers`: Job identifier prompt and job switching
//! - `lifecycle_handlers`: Startup, resize, help, quit, and notifications
//!
//! # Generations
//!
//! Every load, status update, and export is tagged with the generation that
//! was current when it was issued. Switching jobs bumps the generation, so
//! results for the previous job are discarded when they arrive.

use std::any::Any;
use std::collections::HashSet;
use std::time::Duration;

use bubbletea_rs::Cmd;

use crate::placement::{Applicant, ApplicationId, FormField, JobId, Notification, Roster};

use super::messages::AppMsg;
use super::state::{JobPromptState, LoadState, TableState};
use super::storage::ViewerServices;

mod data_handlers;
mod job_prompt_handlers;
mod lifecycle_handlers;
mod model_impl;
mod navigation;
mod rendering;
mod status_handlers;

/// How long a notification stays in the status bar.
pub(crate) const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(4);

/// Main application model for the job applications viewer.
#[derive(Debug)]
pub struct ApplicationsApp {
    services: Option<ViewerServices>,
    pub(crate) job: Option<JobId>,
    pub(crate) generation: u64,
    pub(crate) roster: Roster,
    pub(crate) form_fields: Vec<FormField>,
    pub(crate) load_state: LoadState,
    pub(crate) table: TableState,
    pub(crate) pending_updates: HashSet<ApplicationId>,
    pub(crate) exporting: bool,
    pub(crate) notification: Option<Notification>,
    notification_seq: u64,
    pub(crate) job_prompt: Option<JobPromptState>,
    width: u16,
    height: u16,
    pub(crate) show_help: bool,
    has_initialized: bool,
}

impl ApplicationsApp {
    /// Creates a viewer for `job` issuing requests through `services`.
    ///
    /// Nothing is fetched until the `Initialized` message is handled.
    #[must_use]
    pub fn new(services: ViewerServices, job: Option<JobId>) -> Self {
        Self::with_services(Some(services), job)
    }

    /// Creates a viewer with no services; every request fails with a
    /// notification.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_services(None, None)
    }

    fn with_services(services: Option<ViewerServices>, job: Option<JobId>) -> Self {
        Self {
            services,
            job,
            generation: 0,
            roster: Roster::default(),
            form_fields: Vec::new(),
            load_state: LoadState::Idle,
            table: TableState::new(),
            pending_updates: HashSet::new(),
            exporting: false,
            notification: None,
            notification_seq: 0,
            job_prompt: None,
            width: 80,
            height: 24,
            show_help: false,
            has_initialized: false,
        }
    }

    /// Sets the initial terminal dimensions.
    #[must_use]
    pub const fn with_dimensions(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Active job, if one has been chosen.
    #[must_use]
    pub const fn job(&self) -> Option<&JobId> {
        self.job.as_ref()
    }

    /// Current load state.
    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Loaded applicants.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Form fields for the active job.
    #[must_use]
    pub fn form_fields(&self) -> &[FormField] {
        &self.form_fields
    }

    /// Current 1-based page.
    #[must_use]
    pub const fn active_page(&self) -> usize {
        self.table.active_page
    }

    /// Cursor row within the current page.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.table.cursor
    }

    /// Notification currently shown, if any.
    #[must_use]
    pub const fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Returns true while the applicant's status update is in flight.
    #[must_use]
    pub fn is_updating(&self, id: ApplicationId) -> bool {
        self.pending_updates.contains(&id)
    }

    /// Applicants on the current page.
    #[must_use]
    pub fn visible_applicants(&self) -> &[Applicant] {
        self.roster.page(self.table.active_page)
    }

    /// Applicant under the cursor.
    #[must_use]
    pub fn selected_applicant(&self) -> Option<&Applicant> {
        self.visible_applicants().get(self.table.cursor)
    }

    /// Handles a message and returns a command if needed.
    ///
    /// This is the main entry point for message processing; the
    /// `bubbletea_rs::Model::update` implementation delegates here.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_status() {
            return self.handle_status_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        if msg.is_job_prompt() {
            return self.handle_job_prompt_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Shows `notification` and returns the timer that dismisses it.
    pub(crate) fn notify(&mut self, notification: Notification) -> Cmd {
        self.notification_seq = self.notification_seq.wrapping_add(1);
        self.notification = Some(notification);
        Self::dismiss_after_timeout(self.notification_seq)
    }

    fn dismiss_after_timeout(seq: u64) -> Cmd {
        Box::pin(async move {
            tokio::time::sleep(NOTIFICATION_TIMEOUT).await;
            Some(Box::new(AppMsg::DismissNotification(seq)) as Box<dyn Any + Send>)
        })
    }

    /// Returns true when a result issued under `generation` is stale.
    fn is_stale(&self, generation: u64, what: &str) -> bool {
        let stale = generation != self.generation;
        if stale {
            tracing::debug!(
                "discarding {what} from generation {generation}; current is {}",
                self.generation
            );
        }
        stale
    }

    fn clamp_table(&mut self) {
        let roster = &self.roster;
        self.table
            .clamp(roster.page_count(), |page| roster.page(page).len());
    }
}
