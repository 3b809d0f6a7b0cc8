//! User-visible notifications.
//!
//! Every call site has one fixed success text and one fixed failure text;
//! error detail goes to the log, never to the notification.

use std::fmt;

/// Colour of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTone {
    /// Green: the operation succeeded.
    Success,
    /// Red: the operation failed.
    Error,
}

/// A transient message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    /// Short heading.
    pub title: &'static str,
    /// Body text.
    pub message: &'static str,
    /// Success or error.
    pub tone: NotificationTone,
}

impl Notification {
    const fn success(message: &'static str) -> Self {
        Self {
            title: "Success",
            message,
            tone: NotificationTone::Success,
        }
    }

    const fn error(title: &'static str, message: &'static str) -> Self {
        Self {
            title,
            message,
            tone: NotificationTone::Error,
        }
    }

    /// Status update confirmed with HTTP 200.
    #[must_use]
    pub const fn status_updated() -> Self {
        Self::success("Application status updated successfully")
    }

    /// Status update failed or returned another status.
    #[must_use]
    pub const fn status_update_failed() -> Self {
        Self::error("Error", "Failed to update application status")
    }

    /// Spreadsheet saved.
    #[must_use]
    pub const fn spreadsheet_downloaded() -> Self {
        Self::success("Excel file downloaded successfully")
    }

    /// Spreadsheet download or save failed.
    #[must_use]
    pub const fn spreadsheet_download_failed() -> Self {
        Self::error("Error", "Failed to download Excel file")
    }

    /// Form-field fetch failed.
    #[must_use]
    pub const fn fields_fetch_failed() -> Self {
        Self::error("Failed to fetch data", "Failed to fetch fields list")
    }

    /// Applicant fetch failed.
    #[must_use]
    pub const fn applications_fetch_failed() -> Self {
        Self::error("Failed to fetch data", "Failed to fetch applications")
    }

    /// Returns true for error notifications.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.tone, NotificationTone::Error)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
