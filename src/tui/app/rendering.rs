//! Rendering logic for the viewer.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::ApplicationsApp;
use crate::tui::components::{ApplicantTableComponent, ApplicantTableViewContext};
use crate::tui::state::{JobPromptState, LoadState};

pub(crate) const LOADING_TEXT: &str = "Loading applications...";
pub(crate) const EMPTY_TEXT: &str = "No applications available";
const NO_JOB_TEXT: &str = "No job selected. Press o to choose a job.";

impl ApplicationsApp {
    /// Renders the title bar with the job, field count, and export action.
    ///
    /// The export action is hidden while the loading indicator is shown.
    pub(super) fn render_header(&self) -> String {
        let title = self.job.as_ref().map_or_else(
            || "Job Applications".to_owned(),
            |job| {
                format!(
                    "Job Applications - Job {job} ({} form fields)",
                    self.form_fields.len()
                )
            },
        );
        let action = if self.exporting {
            "  [Downloading...]"
        } else if self.load_state.shows_indicator() {
            ""
        } else {
            "  [d] Download spreadsheet"
        };
        format!("{title}{action}\n")
    }

    /// Renders the prompt, a state panel, or the applicant table.
    pub(super) fn render_body(&self) -> String {
        if let Some(prompt) = &self.job_prompt {
            return render_job_prompt(prompt);
        }

        match &self.load_state {
            LoadState::Idle if self.job.is_none() => format!("  {NO_JOB_TEXT}\n"),
            LoadState::Idle | LoadState::Loading => format!("  {LOADING_TEXT}\n"),
            LoadState::Failed(error) => {
                format!("  Failed to load applications: {error}\n  Press r to retry.\n")
            }
            LoadState::Loaded if self.roster.is_empty() => format!("  {EMPTY_TEXT}\n"),
            LoadState::Loaded => ApplicantTableComponent::view(&ApplicantTableViewContext {
                rows: self.visible_applicants(),
                cursor: self.table.cursor,
                pending: &self.pending_updates,
            }),
        }
    }

    /// Renders the page indicator under a loaded, non-empty table.
    pub(super) fn render_footer(&self) -> String {
        if self.load_state != LoadState::Loaded || self.roster.is_empty() {
            return String::new();
        }
        format!(
            "Page {}/{} - {} applicants\n",
            self.table.active_page,
            self.roster.page_count(),
            self.roster.len()
        )
    }

    /// Renders the notification, or key hints when there is none.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(notification) = &self.notification {
            return format!("{notification}\n");
        }

        let hints = if self.job_prompt.is_some() {
            "Enter:load  Esc:cancel"
        } else {
            "a:accept  x:reject  h/l:page  d:download  r:reload  o:job  ?:help  q:quit"
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down        Move cursor down
  k, Up          Move cursor up
  l, n, Right    Next page
  h, p, Left     Previous page
  Home, g        First page
  End, G         Last page

Decisions:
  a              Accept selected applicant
  x              Reject selected applicant

Other:
  d              Download applications spreadsheet
  r              Reload applications
  o              Choose another job
  ?              Toggle this help
  q              Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}

fn render_job_prompt(prompt: &JobPromptState) -> String {
    let mut output = format!("  Job ID: {}_\n", prompt.buffer());
    if let Some(error) = prompt.error() {
        output.push_str(&format!("  {error}\n"));
    }
    output
}
