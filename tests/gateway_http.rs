//! HTTP contract tests for the placement gateway.

use std::net::TcpListener;

use jobapps::{ApplicationId, ApplicationStatus, JobId, PlacementError, PlacementGateway};
use rstest::{fixture, rstest};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;

use support::{TEST_TOKEN, applicant_json, gateway_for};

#[fixture]
fn job() -> JobId {
    JobId::new("42").expect("job id should be valid")
}

fn auth_header() -> String {
    format!("Token {TEST_TOKEN}")
}

#[rstest]
#[tokio::test]
async fn list_applications_sends_token_and_unwraps_students(job: JobId) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/placement/applications/42/"))
        .and(header("Authorization", auth_header().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "students": [applicant_json(1, "pending"), applicant_json(2, "accept")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let applicants = gateway_for(&server.uri())
        .list_applications(&job)
        .await
        .expect("applications should load");

    assert_eq!(applicants.len(), 2);
    assert_eq!(
        applicants.get(1).map(|applicant| &applicant.status),
        Some(&ApplicationStatus::Accept)
    );
    assert_eq!(
        applicants
            .first()
            .and_then(|applicant| applicant.cpi.as_ref())
            .map(|cpi| cpi.as_str()),
        Some("8.5")
    );
}

#[rstest]
#[tokio::test]
async fn list_form_fields_passes_job_as_query(job: JobId) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/placement/form-fields/"))
        .and(query_param("jobId", "42"))
        .and(header("Authorization", auth_header().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Resume", "type": "file", "required": true},
            {"id": 2, "name": "Portfolio", "type": "url", "placeholder": "https://"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let fields = gateway_for(&server.uri())
        .list_form_fields(&job)
        .await
        .expect("fields should load");

    assert_eq!(fields.len(), 2);
    assert_eq!(
        fields.first().and_then(|field| field.name.as_deref()),
        Some("Resume")
    );
}

#[tokio::test]
async fn update_status_puts_json_and_accepts_200() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/placement/update-status/7/"))
        .and(header("Authorization", auth_header().as_str()))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"status": "reject"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "reject"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = gateway_for(&server.uri())
        .update_status(ApplicationId::new(7), &ApplicationStatus::Reject)
        .await;

    assert_eq!(result, Ok(()));
}

#[tokio::test]
async fn update_status_treats_other_success_codes_as_failure() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/placement/update-status/7/"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let result = gateway_for(&server.uri())
        .update_status(ApplicationId::new(7), &ApplicationStatus::Accept)
        .await;

    assert_eq!(
        result,
        Err(PlacementError::UnexpectedStatus {
            operation: "update status".to_owned(),
            status: 202,
        })
    );
}

#[rstest]
#[case::server_error(500, "Api")]
#[case::unauthorised(401, "Authentication")]
#[case::forbidden(403, "Authentication")]
#[tokio::test]
async fn update_status_maps_error_responses(#[case] status: u16, #[case] variant: &str) {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/placement/update-status/7/"))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({"detail": "nope"})))
        .mount(&server)
        .await;

    let error = gateway_for(&server.uri())
        .update_status(ApplicationId::new(7), &ApplicationStatus::Accept)
        .await
        .expect_err("update should fail");

    let (actual, message) = match &error {
        PlacementError::Api { message } => ("Api", message),
        PlacementError::Authentication { message } => ("Authentication", message),
        other => panic!("unexpected error {other:?}"),
    };
    assert_eq!(actual, variant);
    assert!(message.contains("nope"), "server detail should be kept: {message}");
}

#[rstest]
#[tokio::test]
async fn download_returns_raw_bytes(job: JobId) {
    let payload = b"PK\x03\x04binary\x00sheet".to_vec();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/placement/download-applications/42/"))
        .and(header("Authorization", auth_header().as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Content-Type",
                    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                )
                .set_body_bytes(payload.clone()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let bytes = gateway_for(&server.uri())
        .download_spreadsheet(&job)
        .await
        .expect("download should succeed");

    assert_eq!(bytes, payload);
}

#[rstest]
#[case::not_json(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))]
#[case::missing_students(ResponseTemplate::new(200).set_body_json(json!({"items": []})))]
#[case::missing_id(ResponseTemplate::new(200).set_body_json(json!({"students": [{"name": "x"}]})))]
#[tokio::test]
async fn malformed_applications_map_to_decode_error(
    job: JobId,
    #[case] response: ResponseTemplate,
) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/placement/applications/42/"))
        .respond_with(response)
        .mount(&server)
        .await;

    let result = gateway_for(&server.uri()).list_applications(&job).await;

    assert!(
        matches!(result, Err(PlacementError::Decode { .. })),
        "expected decode error, got {result:?}"
    );
}

#[rstest]
#[tokio::test]
async fn unreachable_server_maps_to_network_error(job: JobId) {
    let result = gateway_for(&closed_address()).list_applications(&job).await;

    assert!(
        matches!(result, Err(PlacementError::Network { .. })),
        "expected network error, got {result:?}"
    );
}

/// A local address with no listener: the port is bound, read, then released.
fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("ephemeral port should bind");
    let address = listener
        .local_addr()
        .expect("bound listener should report its address");
    drop(listener);
    format!("http://{address}")
}
