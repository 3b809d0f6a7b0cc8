//! Identity wrappers for jobs, applications, and credentials.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PlacementError;

/// Opaque job identifier scoping every fetch.
///
/// The value is restricted to ASCII alphanumerics, `-` and `_` so it can be
/// used verbatim as a URL path segment and inside the export file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    /// Validates and trims a job identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::MissingJobId`] when the value is blank and
    /// [`PlacementError::InvalidJobId`] when it contains other characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, PlacementError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PlacementError::MissingJobId);
        }
        if !trimmed.chars().all(is_job_id_char) {
            return Err(PlacementError::InvalidJobId(trimmed.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Returns true for characters accepted inside a [`JobId`].
#[must_use]
pub const fn is_job_id_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for JobId {
    type Err = PlacementError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

/// Application (applicant record) identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(u64);

impl ApplicationId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Auth token wrapper enforcing presence.
///
/// The value never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::MissingToken`] when the supplied string is
    /// blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, PlacementError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PlacementError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }

    /// Formats the `Authorization` header value (`Token <token>`).
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("Token {}", self.0)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}
