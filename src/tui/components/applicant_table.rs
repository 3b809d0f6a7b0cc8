//! Applicant table component for one page of the roster.
//!
//! The table has fixed columns; every cell is truncated or padded to its
//! column width so rows line up regardless of content.

use std::collections::HashSet;

use crate::placement::{Applicant, ApplicationId};

use super::text_truncate::fit_to_width;

/// Column headings and their display widths.
pub const COLUMNS: [(&str, usize); 5] = [
    ("Name", 24),
    ("Roll No", 12),
    ("Email", 30),
    ("CPI", 6),
    ("Status", 10),
];

const UPDATING_LABEL: &str = "updating…";
const COLUMN_GAP: &str = " ";

/// Context for rendering the applicant table.
#[derive(Debug, Clone, Copy)]
pub struct ApplicantTableViewContext<'a> {
    /// Applicants on the visible page.
    pub rows: &'a [Applicant],
    /// Selected row within the page.
    pub cursor: usize,
    /// Applicants whose status update is in flight.
    pub pending: &'a HashSet<ApplicationId>,
}

/// Component rendering a page of applicants.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicantTableComponent;

impl ApplicantTableComponent {
    /// Renders the header row followed by one line per applicant.
    #[must_use]
    pub fn view(ctx: &ApplicantTableViewContext<'_>) -> String {
        let mut output = String::new();
        output.push_str("  ");
        output.push_str(&Self::format_cells(COLUMNS.map(|(heading, _)| heading)));
        output.push('\n');

        for (index, applicant) in ctx.rows.iter().enumerate() {
            let prefix = if index == ctx.cursor { "> " } else { "  " };
            output.push_str(prefix);
            output.push_str(&Self::format_row(applicant, ctx.pending));
            output.push('\n');
        }

        output
    }

    fn format_row(applicant: &Applicant, pending: &HashSet<ApplicationId>) -> String {
        let status = if pending.contains(&applicant.id) {
            UPDATING_LABEL
        } else {
            applicant.status.label()
        };
        let cpi = applicant.cpi.as_ref().map_or("-", |cpi| cpi.as_str());
        Self::format_cells([
            applicant.name.as_str(),
            applicant.roll_no.as_str(),
            applicant.email.as_str(),
            cpi,
            status,
        ])
    }

    fn format_cells(cells: [&str; 5]) -> String {
        cells
            .iter()
            .zip(COLUMNS)
            .map(|(cell, (_, width))| fit_to_width(cell, width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_owned()
    }
}

#[cfg(test)]
mod tests {
    use unicode_width::UnicodeWidthStr;

    use super::*;
    use crate::placement::ApplicationStatus;
    use crate::placement::models::test_support::{applicant, pending_applicants};

    #[test]
    fn header_lists_fixed_columns() {
        let pending = HashSet::new();
        let ctx = ApplicantTableViewContext {
            rows: &[],
            cursor: 0,
            pending: &pending,
        };

        let output = ApplicantTableComponent::view(&ctx);

        assert_eq!(output.lines().count(), 1);
        for heading in ["Name", "Roll No", "Email", "CPI", "Status"] {
            assert!(output.contains(heading), "missing heading {heading}");
        }
    }

    #[test]
    fn cursor_row_is_marked() {
        let rows = pending_applicants(3);
        let pending = HashSet::new();
        let ctx = ApplicantTableViewContext {
            rows: &rows,
            cursor: 1,
            pending: &pending,
        };

        let output = ApplicantTableComponent::view(&ctx);
        let selected: Vec<_> = output.lines().filter(|line| line.starts_with('>')).collect();

        assert_eq!(selected.len(), 1);
        assert!(selected.first().is_some_and(|line| line.contains("Student 2")));
    }

    #[test]
    fn pending_row_shows_updating_label() {
        let rows = vec![applicant(4, ApplicationStatus::Pending)];
        let pending = HashSet::from([ApplicationId::new(4)]);
        let ctx = ApplicantTableViewContext {
            rows: &rows,
            cursor: 0,
            pending: &pending,
        };

        let output = ApplicantTableComponent::view(&ctx);

        assert!(output.contains("updating…"));
        assert!(!output.contains("Pending"));
    }

    #[test]
    fn long_cells_are_truncated_to_column_width() {
        let mut row = applicant(1, ApplicationStatus::Accept);
        row.email = "a.student.with.a.remarkably.long.address@example.edu".to_owned();
        let rows = vec![row];
        let pending = HashSet::new();
        let ctx = ApplicantTableViewContext {
            rows: &rows,
            cursor: 0,
            pending: &pending,
        };

        let output = ApplicantTableComponent::view(&ctx);
        let line = output.lines().nth(1).expect("row should render");

        assert!(line.contains('…'));
        assert!(line.contains("Accept"));
        assert!(line.width() <= 2 + 24 + 12 + 30 + 6 + 10 + 4);
    }
}
