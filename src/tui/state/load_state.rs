//! Lifecycle of the applicant list for the active job.

/// Load lifecycle: `Idle → Loading → Loaded | Failed`; a reload loops back
/// through `Loading`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No job has been loaded yet.
    #[default]
    Idle,
    /// Fetches are in flight.
    Loading,
    /// The applicant list arrived.
    Loaded,
    /// The applicant fetch failed; holds the logged error text.
    Failed(String),
}

impl LoadState {
    /// Returns true while the loading indicator should be shown.
    #[must_use]
    pub const fn shows_indicator(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    /// Returns true while a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
