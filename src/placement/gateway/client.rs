//! reqwest client construction for the HTTP gateway.

use std::time::Duration;

use http::HeaderValue;
use reqwest::Client;

use crate::placement::error::PlacementError;
use crate::placement::ids::AuthToken;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the shared HTTP client.
///
/// The credential is deliberately not installed as a default header; the
/// gateway attaches it per request from the session.
///
/// # Errors
///
/// Returns [`PlacementError::Configuration`] when reqwest cannot build a
/// client (for example when the TLS backend fails to initialise).
pub(super) fn build_http_client(timeout: Duration) -> Result<Client, PlacementError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|error| PlacementError::Configuration {
            message: format!("failed to configure HTTP client: {error}"),
        })
}

/// Builds the sensitive `Authorization: Token <token>` header value.
pub(super) fn authorization_header(token: &AuthToken) -> Result<HeaderValue, PlacementError> {
    let mut value =
        HeaderValue::from_str(&token.authorization()).map_err(|_| PlacementError::MissingToken)?;
    value.set_sensitive(true);
    Ok(value)
}
