//! Data models representing applicants and job form fields.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::ids::ApplicationId;

/// Decision recorded against an application.
///
/// The server stores the raw string; anything other than the three known
/// values is preserved in [`ApplicationStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationStatus {
    /// The applicant was accepted.
    Accept,
    /// The applicant was rejected.
    Reject,
    /// No decision recorded yet.
    #[default]
    Pending,
    /// A server-side value this client does not model.
    Other(String),
}

impl ApplicationStatus {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
            Self::Pending => "pending",
            Self::Other(value) => value.as_str(),
        }
    }

    /// Human-readable label for the status column.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Accept => "Accept",
            Self::Reject => "Reject",
            Self::Pending => "Pending",
            Self::Other(value) => value.as_str(),
        }
    }
}

impl From<String> for ApplicationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "accept" => Self::Accept,
            "reject" => Self::Reject,
            "pending" => Self::Pending,
            _ => Self::Other(value),
        }
    }
}

impl From<ApplicationStatus> for String {
    fn from(value: ApplicationStatus) -> Self {
        match value {
            ApplicationStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cumulative performance index, kept in the server's textual form.
///
/// Servers send either a JSON number or a string; both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cpi(String);

impl Cpi {
    /// Wraps a textual CPI value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the textual value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl<'de> Deserialize<'de> for Cpi {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawCpi {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawCpi::deserialize(deserializer)? {
            RawCpi::Number(number) => Self(number.to_string()),
            RawCpi::Text(text) => Self(text),
        })
    }
}

/// A student's application to a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    /// Application identifier.
    pub id: ApplicationId,
    /// Student name.
    #[serde(default)]
    pub name: String,
    /// Institute roll number.
    #[serde(default)]
    pub roll_no: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Cumulative performance index, when reported.
    #[serde(default)]
    pub cpi: Option<Cpi>,
    /// Current decision.
    #[serde(default, deserialize_with = "status_or_pending")]
    pub status: ApplicationStatus,
}

fn status_or_pending<'de, D>(deserializer: D) -> Result<ApplicationStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(ApplicationStatus::from)
        .unwrap_or_default())
}

/// Server-defined field configured on a job's application form.
///
/// Only a handful of keys are modelled; the rest are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    /// Field identifier, when the server exposes one.
    #[serde(default)]
    pub id: Option<u64>,
    /// Field name or label.
    #[serde(default)]
    pub name: Option<String>,
    /// Input type (text, number, file, ...).
    #[serde(default, rename = "type")]
    pub field_type: Option<String>,
    /// Whether applicants must fill the field.
    #[serde(default)]
    pub required: bool,
    /// Remaining keys as sent by the server.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of the applications-by-job response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiApplicationsResponse {
    pub(crate) students: Vec<Applicant>,
}

/// Body of the status update request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ApiStatusUpdate<'a> {
    pub(crate) status: &'a ApplicationStatus,
}

#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    //! Builders for applicant fixtures.

    use super::{Applicant, ApplicationStatus, Cpi};
    use crate::placement::ids::ApplicationId;

    /// Builds an applicant with predictable contact details.
    #[must_use]
    pub fn applicant(id: u64, status: ApplicationStatus) -> Applicant {
        Applicant {
            id: ApplicationId::new(id),
            name: format!("Student {id}"),
            roll_no: format!("R{id:04}"),
            email: format!("student{id}@example.edu"),
            cpi: Some(Cpi::new("8.5")),
            status,
        }
    }

    /// Builds `count` pending applicants with ids `1..=count`.
    #[must_use]
    pub fn pending_applicants(count: u64) -> Vec<Applicant> {
        (1..=count)
            .map(|id| applicant(id, ApplicationStatus::Pending))
            .collect()
    }
}
