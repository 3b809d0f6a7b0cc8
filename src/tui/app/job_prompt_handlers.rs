//! Job identifier prompt and job switching.
//!
//! Switching jobs bumps the generation and clears everything scoped to the
//! previous job before the new load starts.

use bubbletea_rs::Cmd;

use super::ApplicationsApp;
use crate::placement::{JobId, Roster};
use crate::tui::messages::AppMsg;
use crate::tui::state::{JobPromptState, LoadState, TableState};

impl ApplicationsApp {
    /// Dispatches job prompt messages to their handlers.
    pub(super) fn handle_job_prompt_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::OpenJobPrompt => self.open_job_prompt(),
            AppMsg::JobPromptInput(ch) => {
                if let Some(prompt) = self.job_prompt.as_mut() {
                    prompt.push(*ch);
                }
                None
            }
            AppMsg::JobPromptBackspace => {
                if let Some(prompt) = self.job_prompt.as_mut() {
                    prompt.backspace();
                }
                None
            }
            AppMsg::JobPromptSubmit => self.submit_job_prompt(),
            AppMsg::JobPromptCancel => {
                self.job_prompt = None;
                None
            }
            AppMsg::SwitchJob(job) => self.switch_job(job.clone()),
            _ => {
                debug_assert!(
                    false,
                    "non-prompt message routed to handle_job_prompt_msg"
                );
                None
            }
        }
    }

    /// Opens the prompt pre-filled with the active job.
    pub(super) fn open_job_prompt(&mut self) -> Option<Cmd> {
        let current = self.job.as_ref().map_or("", JobId::as_str);
        self.job_prompt = Some(JobPromptState::new(current));
        None
    }

    fn submit_job_prompt(&mut self) -> Option<Cmd> {
        let job = self.job_prompt.as_mut()?.submit().ok()?;
        self.job_prompt = None;
        self.switch_job(job)
    }

    /// Makes `job` the active job and loads it.
    ///
    /// Results still in flight for the previous job become stale. Choosing
    /// the active job again simply reloads it.
    fn switch_job(&mut self, job: JobId) -> Option<Cmd> {
        if self.job.as_ref() == Some(&job) && !self.load_state.is_loading() {
            return self.start_load();
        }

        tracing::info!("switching to job {job}");
        self.generation = self.generation.wrapping_add(1);
        self.job = Some(job);
        self.roster = Roster::default();
        self.form_fields.clear();
        self.pending_updates.clear();
        self.exporting = false;
        self.table = TableState::new();
        self.load_state = LoadState::Idle;
        self.start_load()
    }
}
