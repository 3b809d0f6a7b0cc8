//! Unit tests for the loader and status updater.

use mockall::predicate::{always, eq};
use rstest::{fixture, rstest};

use super::models::test_support::{applicant, pending_applicants};
use super::{
    ApplicationId, ApplicationStatus, JobId, JobLoader, MockPlacementGateway, NotificationTone,
    PlacementError, Roster, StatusChange, StatusUpdater,
};

#[fixture]
fn job() -> JobId {
    JobId::new("314").expect("job id should be valid")
}

fn network_error() -> PlacementError {
    PlacementError::Network {
        message: "connection refused".to_owned(),
    }
}

#[rstest]
#[tokio::test]
async fn loader_returns_both_results(job: JobId) {
    let mut gateway = MockPlacementGateway::new();
    gateway
        .expect_list_applications()
        .with(eq(job.clone()))
        .times(1)
        .returning(|_| Ok(pending_applicants(3)));
    gateway
        .expect_list_form_fields()
        .with(eq(job.clone()))
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let snapshot = JobLoader::new(&gateway).load(&job).await;

    assert_eq!(snapshot.applicants, Ok(pending_applicants(3)));
    assert_eq!(snapshot.form_fields, Ok(Vec::new()));
}

#[rstest]
#[tokio::test]
async fn loader_keeps_field_failure_independent(job: JobId) {
    let mut gateway = MockPlacementGateway::new();
    gateway
        .expect_list_applications()
        .returning(|_| Ok(pending_applicants(1)));
    gateway
        .expect_list_form_fields()
        .returning(|_| Err(network_error()));

    let snapshot = JobLoader::new(&gateway).load(&job).await;

    assert_eq!(snapshot.applicants, Ok(pending_applicants(1)));
    assert_eq!(snapshot.form_fields, Err(network_error()));
}

#[rstest]
#[tokio::test]
async fn loader_surfaces_applicant_failure(job: JobId) {
    let mut gateway = MockPlacementGateway::new();
    gateway
        .expect_list_applications()
        .returning(|_| Err(network_error()));
    gateway
        .expect_list_form_fields()
        .returning(|_| Ok(Vec::new()));

    let snapshot = JobLoader::new(&gateway).load(&job).await;

    assert_eq!(snapshot.applicants, Err(network_error()));
}

#[tokio::test]
async fn confirmed_update_replaces_single_status() {
    let mut gateway = MockPlacementGateway::new();
    gateway
        .expect_update_status()
        .with(eq(ApplicationId::new(2)), eq(ApplicationStatus::Accept))
        .times(1)
        .returning(|_, _| Ok(()));
    let mut roster = Roster::new(pending_applicants(2));

    let notification = StatusUpdater::new(&gateway)
        .update(
            &mut roster,
            StatusChange::new(ApplicationId::new(2), ApplicationStatus::Accept),
        )
        .await;

    assert_eq!(notification.tone, NotificationTone::Success);
    assert_eq!(
        roster.applicants(),
        &[
            applicant(1, ApplicationStatus::Pending),
            applicant(2, ApplicationStatus::Accept),
        ]
    );
}

#[rstest]
#[case::transport(network_error())]
#[case::non_200_success(PlacementError::UnexpectedStatus {
    operation: "update status".to_owned(),
    status: 204,
})]
#[case::server_error(PlacementError::Api {
    message: "update status failed with status 500".to_owned(),
})]
#[tokio::test]
async fn failed_update_leaves_roster_unchanged(#[case] failure: PlacementError) {
    let mut gateway = MockPlacementGateway::new();
    gateway
        .expect_update_status()
        .with(always(), always())
        .times(1)
        .returning(move |_, _| Err(failure.clone()));
    let mut roster = Roster::new(pending_applicants(5));
    let before = roster.clone();

    let notification = StatusUpdater::new(&gateway)
        .update(
            &mut roster,
            StatusChange::new(ApplicationId::new(3), ApplicationStatus::Reject),
        )
        .await;

    assert!(notification.is_error());
    assert_eq!(roster, before);
}

#[tokio::test]
async fn submit_does_not_touch_local_state() {
    let mut gateway = MockPlacementGateway::new();
    gateway.expect_update_status().returning(|_, _| Ok(()));
    let change = StatusChange::new(ApplicationId::new(1), ApplicationStatus::Reject);

    let outcome = StatusUpdater::new(&gateway).submit(change.clone()).await;

    assert_eq!(outcome.change, change);
    assert_eq!(outcome.result, Ok(()));
}
