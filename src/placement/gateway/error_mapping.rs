//! Error mapping helpers for the HTTP gateway.

use http::StatusCode;

use crate::placement::error::PlacementError;

const MAX_MESSAGE_CHARS: usize = 160;

/// Checks if a status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Maps a reqwest failure that happened before or while reading a response.
pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> PlacementError {
    if error.is_decode() {
        return PlacementError::Decode {
            message: format!("{operation}: {error}"),
        };
    }

    PlacementError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

/// Maps a JSON decoding failure of a response body.
pub(super) fn map_decode_error(operation: &str, error: &serde_json::Error) -> PlacementError {
    PlacementError::Decode {
        message: format!("{operation}: {error}"),
    }
}

/// Maps a non-success status and its body into an error.
pub(super) fn map_http_error(operation: &str, status: StatusCode, body: &str) -> PlacementError {
    let extracted = extract_server_message(body)
        .unwrap_or_else(|| truncate_for_message(body.trim(), MAX_MESSAGE_CHARS));
    let message = if extracted.is_empty() {
        "no response body".to_owned()
    } else {
        extracted
    };

    if is_auth_failure(status) {
        PlacementError::Authentication {
            message: format!("{operation} failed: server returned {status} {message}"),
        }
    } else {
        PlacementError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

/// Pulls the human-readable message out of a JSON error body.
///
/// Django REST framework reports `detail`; other backends use `message` or
/// `error`.
pub(super) fn extract_server_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    ["detail", "message", "error"].iter().find_map(|key| {
        value
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(ToOwned::to_owned)
    })
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::unauthorised(StatusCode::UNAUTHORIZED)]
    #[case::forbidden(StatusCode::FORBIDDEN)]
    fn auth_statuses_map_to_authentication(#[case] status: StatusCode) {
        let error = map_http_error(
            "list applications",
            status,
            r#"{"detail":"Invalid token."}"#,
        );
        assert!(
            matches!(&error, PlacementError::Authentication { message } if message.contains("Invalid token.")),
            "expected Authentication error, got {error:?}"
        );
    }

    #[test]
    fn server_errors_map_to_api_with_truncated_body() {
        let body = "x".repeat(400);
        let error = map_http_error("download spreadsheet", StatusCode::BAD_GATEWAY, &body);
        let PlacementError::Api { message } = error else {
            panic!("expected Api error");
        };
        assert!(message.contains("502 Bad Gateway"));
        assert!(message.ends_with("..."));
    }

    #[rstest]
    #[case::detail(r#"{"detail":"Not found."}"#, Some("Not found."))]
    #[case::message(r#"{"message":"boom"}"#, Some("boom"))]
    #[case::error(r#"{"error":"bad job"}"#, Some("bad job"))]
    #[case::plain_text("Internal Server Error", None)]
    fn extracts_known_message_keys(#[case] body: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_server_message(body).as_deref(), expected);
    }

    #[test]
    fn empty_body_is_described() {
        let error = map_http_error("update status", StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(
            error,
            PlacementError::Api {
                message: "update status failed with status 500 Internal Server Error: no response body"
                    .to_owned(),
            }
        );
    }
}
