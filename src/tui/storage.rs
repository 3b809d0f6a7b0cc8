//! Startup context storage for the viewer.
//!
//! This module owns the global `OnceLock` used during TUI bootstrapping and
//! provides the setter consumed by CLI wiring and the getter used by
//! `ApplicationsApp::init()`.

use std::fmt;
use std::sync::{Arc, OnceLock};

use camino::Utf8PathBuf;

use crate::placement::{JobId, PlacementGateway};

/// Global storage for the viewer's startup context.
static VIEWER_CONTEXT: OnceLock<ViewerContext> = OnceLock::new();

/// Collaborators the viewer issues requests through.
#[derive(Clone)]
pub struct ViewerServices {
    /// Gateway to the placement API.
    pub gateway: Arc<dyn PlacementGateway>,
    /// Directory receiving downloaded spreadsheets.
    pub download_dir: Utf8PathBuf,
}

impl ViewerServices {
    /// Bundles a gateway with the download directory.
    #[must_use]
    pub fn new(gateway: Arc<dyn PlacementGateway>, download_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            gateway,
            download_dir: download_dir.into(),
        }
    }
}

impl fmt::Debug for ViewerServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewerServices")
            .field("download_dir", &self.download_dir)
            .finish_non_exhaustive()
    }
}

/// Context read by `ApplicationsApp::init()`.
pub(crate) struct ViewerContext {
    pub(crate) services: ViewerServices,
    pub(crate) job: Option<JobId>,
}

/// Sets the services and initial job for the viewer.
///
/// This must be called before starting the bubbletea-rs program. Without a
/// job the viewer opens the job prompt on startup.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_viewer_context(services: ViewerServices, job: Option<JobId>) -> bool {
    VIEWER_CONTEXT
        .set(ViewerContext { services, job })
        .is_ok()
}

/// Returns the stored context, if any.
pub(crate) fn viewer_context() -> Option<&'static ViewerContext> {
    VIEWER_CONTEXT.get()
}
