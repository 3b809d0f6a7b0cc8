//! reqwest implementation of [`PlacementGateway`].

use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use http::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::PlacementGateway;
use super::client::{authorization_header, build_http_client};
use super::error_mapping::{map_decode_error, map_http_error, map_transport_error};
use crate::placement::error::PlacementError;
use crate::placement::ids::{ApplicationId, JobId};
use crate::placement::models::{
    ApiApplicationsResponse, ApiStatusUpdate, Applicant, ApplicationStatus, FormField,
};
use crate::placement::routes::ApiSession;

/// Gateway that performs real HTTP requests against the placement API.
#[derive(Debug, Clone)]
pub struct HttpPlacementGateway {
    client: Client,
    session: ApiSession,
}

impl HttpPlacementGateway {
    /// Creates a gateway for the session with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Configuration`] when the HTTP client cannot
    /// be constructed.
    pub fn new(session: ApiSession, timeout: Duration) -> Result<Self, PlacementError> {
        let client = build_http_client(timeout)?;
        Ok(Self { client, session })
    }

    fn authorised(&self, request: RequestBuilder) -> Result<RequestBuilder, PlacementError> {
        let header = authorization_header(self.session.token())?;
        Ok(request.header(AUTHORIZATION, header))
    }

    async fn send(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> Result<Response, PlacementError> {
        let response = self
            .authorised(request)?
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_http_error(operation, status, &body))
    }

    async fn get_json<T>(&self, operation: &str, url: Url) -> Result<T, PlacementError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(operation, self.client.get(url)).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;
        serde_json::from_slice(&bytes).map_err(|error| map_decode_error(operation, &error))
    }
}

#[async_trait]
impl PlacementGateway for HttpPlacementGateway {
    async fn list_applications(&self, job: &JobId) -> Result<Vec<Applicant>, PlacementError> {
        let url = self.session.applications_url(job)?;
        let body: ApiApplicationsResponse = self.get_json("list applications", url).await?;
        Ok(body.students)
    }

    async fn list_form_fields(&self, job: &JobId) -> Result<Vec<FormField>, PlacementError> {
        let url = self.session.fields_url(job)?;
        self.get_json("list form fields", url).await
    }

    async fn update_status(
        &self,
        application: ApplicationId,
        status: &ApplicationStatus,
    ) -> Result<(), PlacementError> {
        const OPERATION: &str = "update status";

        let url = self.session.status_url(application)?;
        let request = self.client.put(url).json(&ApiStatusUpdate { status });
        let response = self.send(OPERATION, request).await?;

        if response.status() == StatusCode::OK {
            Ok(())
        } else {
            Err(PlacementError::UnexpectedStatus {
                operation: OPERATION.to_owned(),
                status: response.status().as_u16(),
            })
        }
    }

    async fn download_spreadsheet(&self, job: &JobId) -> Result<Vec<u8>, PlacementError> {
        const OPERATION: &str = "download spreadsheet";

        let url = self.session.download_url(job)?;
        let response = self.send(OPERATION, self.client.get(url)).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|error| map_transport_error(OPERATION, &error))?;
        Ok(bytes.to_vec())
    }
}
