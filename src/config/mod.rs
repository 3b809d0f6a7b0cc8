//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.jobapps.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `JOBAPPS_API_BASE`, `JOBAPPS_JOB_ID`,
//!    `JOBAPPS_TOKEN` (or legacy `PLACEMENT_AUTH_TOKEN`), ...
//! 4. **Command-line arguments** – `--api-base`/`-b`, `--job-id`/`-j`,
//!    `--token`/`-t`, ...
//!
//! # Configuration File
//!
//! ```toml
//! api_base = "https://placement.example.edu/"
//! job_id = "42"
//! token = "0123456789abcdef"
//! download_dir = "exports"
//! status_route = "api/placement/update-status/"
//! ```

use std::env;
use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::placement::{ApiSession, AuthToken, JobId, PlacementError, PlacementRoutes};
use crate::placement::routes::{
    DEFAULT_APPLICATIONS_ROUTE, DEFAULT_DOWNLOAD_ROUTE, DEFAULT_FIELDS_ROUTE, DEFAULT_STATUS_ROUTE,
};

/// Environment variable consulted when no token is configured.
pub const LEGACY_TOKEN_ENV: &str = "PLACEMENT_AUTH_TOKEN";

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive TUI for reviewing applicants.
    Viewer,
    /// Print one page of applicants and exit.
    ListApplicants,
    /// Download the applications spreadsheet and exit.
    ExportSpreadsheet,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use jobapps::JobAppsConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = JobAppsConfig::load().expect("failed to load configuration");
/// let session = config.api_session().expect("API settings required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "JOBAPPS",
    discovery(
        dotfile_name = ".jobapps.toml",
        config_file_name = "jobapps.toml",
        app_name = "jobapps"
    )
)]
pub struct JobAppsConfig {
    /// Base URL of the placement API.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base <URL>` or `-b <URL>`
    /// - Environment: `JOBAPPS_API_BASE`
    /// - Config file: `api_base = "..."`
    #[ortho_config(cli_short = 'b')]
    pub api_base: Option<String>,

    /// Job whose applications are shown.
    ///
    /// Required by `--list` and `--export`; the viewer prompts for it when
    /// absent.
    #[ortho_config(cli_short = 'j')]
    pub job_id: Option<String>,

    /// Auth token sent as `Authorization: Token <token>`.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `JOBAPPS_TOKEN` or `PLACEMENT_AUTH_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Route listing applications by job.
    #[ortho_config(cli_short = 'A')]
    pub applications_route: String,

    /// Route listing a job's form fields.
    #[ortho_config(cli_short = 'F')]
    pub fields_route: String,

    /// Route updating an application's status.
    #[ortho_config(cli_short = 'S')]
    pub status_route: String,

    /// Route serving the applications spreadsheet.
    #[ortho_config(cli_short = 'D')]
    pub download_route: String,

    /// Directory receiving downloaded spreadsheets.
    #[ortho_config(cli_short = 'd')]
    pub download_dir: String,

    /// HTTP request timeout, in seconds.
    #[ortho_config(cli_short = 'T')]
    pub timeout_seconds: u64,

    /// Prints one page of applicants and exits.
    ///
    /// Note: boolean values are not read from the environment.
    #[ortho_config(cli_short = 'l')]
    pub list: bool,

    /// Page printed by `--list` (1-based).
    #[ortho_config(cli_short = 'p')]
    pub page: usize,

    /// Downloads the applications spreadsheet and exits.
    #[ortho_config(cli_short = 'e')]
    pub export: bool,

    /// Default `tracing` filter; `RUST_LOG` takes priority.
    #[ortho_config(cli_short = 'L')]
    pub log_level: String,

    /// File receiving logs while the viewer owns the terminal.
    #[ortho_config(cli_short = 'O')]
    pub log_file: Option<String>,
}

const DEFAULT_DOWNLOAD_DIR: &str = ".";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_LOG_LEVEL: &str = "info";

impl Default for JobAppsConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            job_id: None,
            token: None,
            applications_route: DEFAULT_APPLICATIONS_ROUTE.to_owned(),
            fields_route: DEFAULT_FIELDS_ROUTE.to_owned(),
            status_route: DEFAULT_STATUS_ROUTE.to_owned(),
            download_route: DEFAULT_DOWNLOAD_ROUTE.to_owned(),
            download_dir: DEFAULT_DOWNLOAD_DIR.to_owned(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            list: false,
            page: 1,
            export: false,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            log_file: None,
        }
    }
}

impl JobAppsConfig {
    /// Determines the operation mode; `--export` wins over `--list`.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.export {
            OperationMode::ExportSpreadsheet
        } else if self.list {
            OperationMode::ListApplicants
        } else {
            OperationMode::Viewer
        }
    }

    /// Resolves the token from configuration or the legacy
    /// `PLACEMENT_AUTH_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::MissingToken`] when no source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<AuthToken, PlacementError> {
        let raw = self
            .token
            .clone()
            .or_else(|| env::var(LEGACY_TOKEN_ENV).ok())
            .ok_or(PlacementError::MissingToken)?;
        AuthToken::new(raw)
    }

    /// Returns the configured job identifier, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidJobId`] when a value is present but
    /// malformed.
    pub fn job(&self) -> Result<Option<JobId>, PlacementError> {
        match self.job_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => JobId::new(raw).map(Some),
        }
    }

    /// Returns the job identifier or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::MissingJobId`] when no job is configured and
    /// [`PlacementError::InvalidJobId`] when it is malformed.
    pub fn require_job(&self) -> Result<JobId, PlacementError> {
        self.job()?.ok_or(PlacementError::MissingJobId)
    }

    /// Returns the API base URL or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::MissingApiBase`] when no base is configured.
    pub fn require_api_base(&self) -> Result<&str, PlacementError> {
        self.api_base
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(PlacementError::MissingApiBase)
    }

    /// Route table built from the configured route constants.
    #[must_use]
    pub fn routes(&self) -> PlacementRoutes {
        PlacementRoutes {
            applications: self.applications_route.clone(),
            fields: self.fields_route.clone(),
            status: self.status_route.clone(),
            download: self.download_route.clone(),
        }
    }

    /// Builds the request context injected into the gateway.
    ///
    /// # Errors
    ///
    /// Returns an error when the API base or token is missing or invalid.
    pub fn api_session(&self) -> Result<ApiSession, PlacementError> {
        let api_base = self.require_api_base()?;
        let token = self.resolve_token()?;
        ApiSession::new(api_base, self.routes(), token)
    }

    /// HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Directory receiving downloaded spreadsheets.
    #[must_use]
    pub fn download_dir(&self) -> Utf8PathBuf {
        let trimmed = self.download_dir.trim();
        if trimmed.is_empty() {
            Utf8PathBuf::from(DEFAULT_DOWNLOAD_DIR)
        } else {
            Utf8PathBuf::from(trimmed)
        }
    }

    /// Page printed by `--list`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidPage`] for page `0`.
    pub const fn require_page(&self) -> Result<usize, PlacementError> {
        if self.page == 0 {
            Err(PlacementError::InvalidPage)
        } else {
            Ok(self.page)
        }
    }
}

#[cfg(test)]
mod tests;
