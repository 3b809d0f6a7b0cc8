//! Downloads the applications spreadsheet without starting the viewer.

use std::io;

use jobapps::placement::{SpreadsheetExporter, log_export_outcome};
use jobapps::{JobAppsConfig, PlacementError};

use super::build_gateway;
use super::output::write_export_summary;

/// Saves the configured job's spreadsheet into the download directory.
///
/// # Errors
///
/// Returns an error when configuration is incomplete, the download fails,
/// or the file cannot be written. No file is left behind on failure.
pub async fn run(config: &JobAppsConfig) -> Result<(), PlacementError> {
    let job = config.require_job()?;
    let gateway = build_gateway(config)?;

    let exporter = SpreadsheetExporter::new(&gateway, config.download_dir());
    let result = exporter.export(&job).await;
    log_export_outcome(&result);

    let exported = result?;
    let mut stdout = io::stdout().lock();
    write_export_summary(&mut stdout, &exported)
}
