//! Route constants and the injected request context.
//!
//! [`ApiSession`] bundles the API base URL, the route table, and the auth
//! token. It is built once at startup and handed to the gateway, which
//! attaches the credential to every request it sends.

use url::Url;

use super::error::PlacementError;
use super::ids::{ApplicationId, AuthToken, JobId};

/// Default route listing applications for a job.
pub const DEFAULT_APPLICATIONS_ROUTE: &str = "api/placement/applications/";
/// Default route listing form fields configured for a job.
pub const DEFAULT_FIELDS_ROUTE: &str = "api/placement/form-fields/";
/// Default route updating an application's status.
pub const DEFAULT_STATUS_ROUTE: &str = "api/placement/update-status/";
/// Default route serving the applications spreadsheet.
pub const DEFAULT_DOWNLOAD_ROUTE: &str = "api/placement/download-applications/";

/// Route constants relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRoutes {
    /// Applications-by-job route; the job identifier is appended.
    pub applications: String,
    /// Form-field route; the job identifier is sent as a query parameter.
    pub fields: String,
    /// Status-by-application route; the application identifier is appended.
    pub status: String,
    /// Spreadsheet route; the job identifier is appended.
    pub download: String,
}

impl Default for PlacementRoutes {
    fn default() -> Self {
        Self {
            applications: DEFAULT_APPLICATIONS_ROUTE.to_owned(),
            fields: DEFAULT_FIELDS_ROUTE.to_owned(),
            status: DEFAULT_STATUS_ROUTE.to_owned(),
            download: DEFAULT_DOWNLOAD_ROUTE.to_owned(),
        }
    }
}

/// Credential and endpoint context passed to every network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSession {
    base: Url,
    routes: PlacementRoutes,
    token: AuthToken,
}

impl ApiSession {
    /// Parses the base URL and builds a session.
    ///
    /// A trailing `/` is added to the base path so routes are resolved
    /// beneath it rather than replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidUrl`] when `api_base` is not an
    /// absolute URL.
    pub fn new(
        api_base: &str,
        routes: PlacementRoutes,
        token: AuthToken,
    ) -> Result<Self, PlacementError> {
        let mut base =
            Url::parse(api_base).map_err(|error| PlacementError::InvalidUrl(error.to_string()))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            base,
            routes,
            token,
        })
    }

    /// API base URL, always ending in `/`.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// Credential attached to every request.
    #[must_use]
    pub const fn token(&self) -> &AuthToken {
        &self.token
    }

    /// `GET <applicationsRoute>/<jobId>/`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidUrl`] when the route cannot be
    /// joined onto the base URL.
    pub fn applications_url(&self, job: &JobId) -> Result<Url, PlacementError> {
        self.segment_url(&self.routes.applications, job.as_str())
    }

    /// `GET <fieldsRoute>?jobId=<jobId>`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidUrl`] when the route cannot be
    /// joined onto the base URL.
    pub fn fields_url(&self, job: &JobId) -> Result<Url, PlacementError> {
        let mut url = self.join(&self.routes.fields)?;
        url.query_pairs_mut().append_pair("jobId", job.as_str());
        Ok(url)
    }

    /// `PUT <statusRoute>/<applicationId>/`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidUrl`] when the route cannot be
    /// joined onto the base URL.
    pub fn status_url(&self, application: ApplicationId) -> Result<Url, PlacementError> {
        self.segment_url(&self.routes.status, &application.to_string())
    }

    /// `GET <downloadRoute>/<jobId>/`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidUrl`] when the route cannot be
    /// joined onto the base URL.
    pub fn download_url(&self, job: &JobId) -> Result<Url, PlacementError> {
        self.segment_url(&self.routes.download, job.as_str())
    }

    fn segment_url(&self, route: &str, segment: &str) -> Result<Url, PlacementError> {
        let route = route.trim_matches('/');
        let path = if route.is_empty() {
            format!("{segment}/")
        } else {
            format!("{route}/{segment}/")
        };
        self.join(&path)
    }

    fn join(&self, route: &str) -> Result<Url, PlacementError> {
        self.base
            .join(route.trim_start_matches('/'))
            .map_err(|error| PlacementError::InvalidUrl(format!("{route}: {error}")))
    }
}
