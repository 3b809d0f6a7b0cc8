//! Exporter: downloads the applications spreadsheet and saves it locally.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use super::error::PlacementError;
use super::gateway::PlacementGateway;
use super::ids::JobId;
use super::notification::Notification;

/// Spreadsheet written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedSpreadsheet {
    /// Location of the saved file.
    pub path: Utf8PathBuf,
    /// Size of the payload in bytes.
    pub bytes: usize,
}

/// Returns the download file name for a job: `applications_<jobId>.xlsx`.
#[must_use]
pub fn spreadsheet_file_name(job: &JobId) -> String {
    format!("applications_{job}.xlsx")
}

/// Notification shown for an export result.
#[must_use]
pub const fn export_notification(
    result: &Result<ExportedSpreadsheet, PlacementError>,
) -> Notification {
    match result {
        Ok(_) => Notification::spreadsheet_downloaded(),
        Err(_) => Notification::spreadsheet_download_failed(),
    }
}

/// Logs where the spreadsheet went, or why it could not be saved.
pub fn log_export_outcome(result: &Result<ExportedSpreadsheet, PlacementError>) {
    match result {
        Ok(exported) => tracing::info!(
            "saved {} bytes of applications to {}",
            exported.bytes,
            exported.path
        ),
        Err(error) => tracing::warn!("downloading the applications spreadsheet failed: {error}"),
    }
}

/// Downloads spreadsheets through a gateway into a directory.
pub struct SpreadsheetExporter<'client, Gateway>
where
    Gateway: PlacementGateway + ?Sized,
{
    client: &'client Gateway,
    download_dir: Utf8PathBuf,
}

impl<'client, Gateway> SpreadsheetExporter<'client, Gateway>
where
    Gateway: PlacementGateway + ?Sized,
{
    /// Create an exporter saving into `download_dir`.
    #[must_use]
    pub fn new(client: &'client Gateway, download_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            client,
            download_dir: download_dir.into(),
        }
    }

    /// Download the job's spreadsheet and save it as
    /// `<download_dir>/applications_<jobId>.xlsx`.
    ///
    /// The payload is fetched completely before the file is created, so a
    /// failed download never leaves a file behind.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures and returns [`PlacementError::Io`] when
    /// the directory or file cannot be written.
    pub async fn export(&self, job: &JobId) -> Result<ExportedSpreadsheet, PlacementError> {
        let payload = self.client.download_spreadsheet(job).await?;
        let path = self.download_dir.join(spreadsheet_file_name(job));
        write_file_with_parents(&path, &payload)?;
        Ok(ExportedSpreadsheet {
            path,
            bytes: payload.len(),
        })
    }
}

fn io_error(action: &str, target: &Utf8Path, error: &std::io::Error) -> PlacementError {
    PlacementError::Io {
        message: format!("failed to {action} '{target}': {error}"),
    }
}

/// Writes `payload` to `path`, creating parent directories first.
fn write_file_with_parents(path: &Utf8Path, payload: &[u8]) -> Result<(), PlacementError> {
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| PlacementError::Io {
        message: format!("invalid export path '{path}': no file name"),
    })?;

    let (root, relative_parent) = if parent.is_absolute() {
        let relative = parent.strip_prefix("/").map_err(|_| PlacementError::Io {
            message: format!("failed to normalise download directory '{parent}'"),
        })?;
        (
            Dir::open_ambient_dir("/", ambient_authority())
                .map_err(|error| io_error("open", Utf8Path::new("/"), &error))?,
            relative,
        )
    } else {
        (
            Dir::open_ambient_dir(".", ambient_authority())
                .map_err(|error| io_error("open", Utf8Path::new("."), &error))?,
            parent,
        )
    };

    let is_current_dir =
        relative_parent.as_str().is_empty() || relative_parent == Utf8Path::new(".");
    let target_dir = if is_current_dir {
        root
    } else {
        root.create_dir_all(relative_parent)
            .map_err(|error| io_error("create download directory", parent, &error))?;
        root.open_dir(relative_parent)
            .map_err(|error| io_error("open download directory", parent, &error))?
    };

    let mut file = target_dir
        .create(file_name)
        .map_err(|error| io_error("create", path, &error))?;
    file.write_all(payload)
        .map_err(|error| io_error("write", path, &error))?;
    file.flush().map_err(|error| io_error("flush", path, &error))
}
