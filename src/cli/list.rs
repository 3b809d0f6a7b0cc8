//! Prints one page of a job's applicants.

use std::io;

use jobapps::placement::JobLoader;
use jobapps::{JobAppsConfig, PlacementError, Roster};

use super::build_gateway;
use super::output::{ApplicantPage, write_applicant_page};

/// Loads the configured job and prints the requested page.
///
/// A form-field failure is logged and the listing continues without them.
///
/// # Errors
///
/// Returns an error when configuration is incomplete, the page is out of
/// range, or the applicant fetch fails.
pub async fn run(config: &JobAppsConfig) -> Result<(), PlacementError> {
    let job = config.require_job()?;
    let page = config.require_page()?;
    let gateway = build_gateway(config)?;

    let snapshot = JobLoader::new(&gateway).load(&job).await;
    let roster = Roster::new(snapshot.applicants?);
    if page > roster.page_count() {
        return Err(PlacementError::InvalidPage);
    }
    let form_fields = snapshot.form_fields.unwrap_or_default();

    let mut stdout = io::stdout().lock();
    write_applicant_page(
        &mut stdout,
        &ApplicantPage {
            job: &job,
            roster: &roster,
            page,
            form_fields: &form_fields,
        },
    )
}
