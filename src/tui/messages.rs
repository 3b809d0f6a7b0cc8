//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::placement::{
    ExportedSpreadsheet, JobId, JobSnapshot, PlacementError, StatusUpdateOutcome,
};

/// Messages for the job applications viewer.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move the row cursor up within the page.
    CursorUp,
    /// Move the row cursor down within the page.
    CursorDown,
    /// Show the next page.
    NextPage,
    /// Show the previous page.
    PreviousPage,
    /// Show the first page.
    FirstPage,
    /// Show the last page.
    LastPage,

    // Status updates
    /// Set the selected applicant's status to accept.
    AcceptSelected,
    /// Set the selected applicant's status to reject.
    RejectSelected,
    /// A status update request finished.
    StatusUpdateFinished {
        /// Generation the request was issued under.
        generation: u64,
        /// Change and server result.
        outcome: StatusUpdateOutcome,
    },

    // Data loading
    /// Reload applicants and form fields for the current job.
    LoadRequested,
    /// Both fetches for a job finished.
    SnapshotLoaded {
        /// Generation the load was issued under.
        generation: u64,
        /// Independent applicant and form-field results.
        snapshot: JobSnapshot,
    },

    // Export
    /// Download the spreadsheet for the current job.
    ExportRequested,
    /// The spreadsheet download finished.
    ExportFinished {
        /// Generation the export was issued under.
        generation: u64,
        /// Saved file or failure.
        result: Result<ExportedSpreadsheet, PlacementError>,
    },

    // Job prompt
    /// Open the job identifier prompt.
    OpenJobPrompt,
    /// Append a character to the prompt.
    JobPromptInput(char),
    /// Delete the last prompt character.
    JobPromptBackspace,
    /// Confirm the prompt.
    JobPromptSubmit,
    /// Close the prompt without switching.
    JobPromptCancel,
    /// Switch to another job and reload.
    SwitchJob(JobId),

    // Notifications
    /// Hide the notification with the given sequence number.
    DismissNotification(u64),

    // Application lifecycle
    /// Synthetic startup message emitted by `init()`.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for cursor and page movement.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::NextPage
                | Self::PreviousPage
                | Self::FirstPage
                | Self::LastPage
        )
    }

    /// Returns true for status update requests and results.
    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(
            self,
            Self::AcceptSelected | Self::RejectSelected | Self::StatusUpdateFinished { .. }
        )
    }

    /// Returns true for load and export messages.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::LoadRequested
                | Self::SnapshotLoaded { .. }
                | Self::ExportRequested
                | Self::ExportFinished { .. }
        )
    }

    /// Returns true for job prompt messages.
    #[must_use]
    pub const fn is_job_prompt(&self) -> bool {
        matches!(
            self,
            Self::OpenJobPrompt
                | Self::JobPromptInput(_)
                | Self::JobPromptBackspace
                | Self::JobPromptSubmit
                | Self::JobPromptCancel
                | Self::SwitchJob(_)
        )
    }
}
