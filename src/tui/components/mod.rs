//! Reusable UI components for the TUI application.
//!
//! Components are stateless renderers that receive everything they draw
//! through a view context.

mod applicant_table;
pub(crate) mod text_truncate;

pub use applicant_table::{ApplicantTableComponent, ApplicantTableViewContext, COLUMNS};
