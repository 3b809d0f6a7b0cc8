//! Tests for field resolution methods (`resolve_token`, `require_api_base`,
//! `job`, `require_job`, `download_dir`, `require_page`).

use rstest::rstest;

use crate::config::LEGACY_TOKEN_ENV;
use crate::placement::PlacementError;
use crate::JobAppsConfig;

#[rstest]
fn resolve_token_prefers_configured_value() {
    let _guard = env_lock::lock_env([(LEGACY_TOKEN_ENV, Some("legacy-token"))]);
    let config = JobAppsConfig {
        token: Some("my-token".to_owned()),
        ..Default::default()
    };

    let token = config.resolve_token().expect("token should resolve");
    assert_eq!(token.value(), "my-token");
}

#[rstest]
fn resolve_token_falls_back_to_legacy_variable() {
    let _guard = env_lock::lock_env([(LEGACY_TOKEN_ENV, Some("legacy-token"))]);
    let config = JobAppsConfig::default();

    let token = config.resolve_token().expect("legacy token should resolve");
    assert_eq!(token.value(), "legacy-token");
}

#[rstest]
fn resolve_token_returns_error_when_none() {
    let _guard = env_lock::lock_env([(LEGACY_TOKEN_ENV, None::<&str>)]);
    let config = JobAppsConfig::default();

    assert_eq!(config.resolve_token(), Err(PlacementError::MissingToken));
}

#[rstest]
#[case::missing(None)]
#[case::blank(Some("   "))]
fn require_api_base_rejects_missing_values(#[case] api_base: Option<&str>) {
    let config = JobAppsConfig {
        api_base: api_base.map(str::to_owned),
        ..Default::default()
    };

    assert_eq!(config.require_api_base(), Err(PlacementError::MissingApiBase));
}

#[rstest]
fn job_is_optional_for_the_viewer() {
    let config = JobAppsConfig::default();

    assert_eq!(config.job(), Ok(None));
    assert_eq!(config.require_job(), Err(PlacementError::MissingJobId));
}

#[rstest]
fn malformed_job_id_is_rejected() {
    let config = JobAppsConfig {
        job_id: Some("42/../admin".to_owned()),
        ..Default::default()
    };

    assert!(
        matches!(config.job(), Err(PlacementError::InvalidJobId(_))),
        "path characters must not reach the URL"
    );
}

#[rstest]
fn api_session_combines_base_routes_and_token() {
    let config = JobAppsConfig {
        api_base: Some("https://placement.example.edu".to_owned()),
        token: Some("abc".to_owned()),
        ..Default::default()
    };

    let session = config.api_session().expect("session should build");

    assert_eq!(session.base().as_str(), "https://placement.example.edu/");
    assert_eq!(session.token().authorization(), "Token abc");
}

#[rstest]
#[case::blank("  ", ".")]
#[case::relative("exports", "exports")]
fn download_dir_defaults_to_current_directory(#[case] raw: &str, #[case] expected: &str) {
    let config = JobAppsConfig {
        download_dir: raw.to_owned(),
        ..Default::default()
    };

    assert_eq!(config.download_dir().as_str(), expected);
}

#[rstest]
fn page_zero_is_rejected() {
    let config = JobAppsConfig {
        page: 0,
        ..Default::default()
    };

    assert_eq!(config.require_page(), Err(PlacementError::InvalidPage));
}
