//! Text buffer for the job identifier prompt.

use crate::placement::ids::is_job_id_char;
use crate::placement::{JobId, PlacementError};

/// Input state of the job prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPromptState {
    buffer: String,
    error: Option<String>,
}

impl JobPromptState {
    /// Opens the prompt pre-filled with `initial`.
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self {
            buffer: initial.to_owned(),
            error: None,
        }
    }

    /// Current text.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Validation error from the last submit.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Appends `ch` when it can appear in a job identifier.
    pub fn push(&mut self, ch: char) {
        if is_job_id_char(ch) {
            self.buffer.push(ch);
            self.error = None;
        }
    }

    /// Removes the last character.
    pub fn backspace(&mut self) {
        self.buffer.pop();
        self.error = None;
    }

    /// Validates the buffer, recording the error for display on failure.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`JobId::new`].
    pub fn submit(&mut self) -> Result<JobId, PlacementError> {
        JobId::new(&self.buffer).inspect_err(|error| {
            self.error = Some(error.to_string());
        })
    }
}
