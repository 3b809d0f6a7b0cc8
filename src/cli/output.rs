//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use jobapps::placement::{ExportedSpreadsheet, FormField};
use jobapps::{Applicant, JobId, PlacementError, Roster};

fn io_error(error: &io::Error) -> PlacementError {
    PlacementError::Io {
        message: error.to_string(),
    }
}

/// One page of applicants for a job.
pub struct ApplicantPage<'a> {
    /// Job the applicants belong to.
    pub job: &'a JobId,
    /// Full roster.
    pub roster: &'a Roster,
    /// Page to print, starting at 1.
    pub page: usize,
    /// Form fields for the job.
    pub form_fields: &'a [FormField],
}

/// Writes one page of applicants to the given writer.
pub fn write_applicant_page<W: Write>(
    writer: &mut W,
    listing: &ApplicantPage<'_>,
) -> Result<(), PlacementError> {
    let ApplicantPage {
        job,
        roster,
        page,
        form_fields,
    } = listing;

    writeln!(
        writer,
        "Applications for job {job} ({} form fields):",
        form_fields.len()
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    if roster.is_empty() {
        writeln!(writer, "  No applications available").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    for applicant in roster.page(*page) {
        writeln!(writer, "  {}", format_applicant(applicant)).map_err(|e| io_error(&e))?;
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Page {page}/{} - {} applicants",
        roster.page_count(),
        roster.len()
    )
    .map_err(|e| io_error(&e))
}

fn format_applicant(applicant: &Applicant) -> String {
    let cpi = applicant.cpi.as_ref().map_or("-", |cpi| cpi.as_str());
    format!(
        "#{} {} [{}] {} CPI {cpi} - {}",
        applicant.id,
        applicant.name,
        applicant.roll_no,
        applicant.email,
        applicant.status.label()
    )
}

/// Writes where the spreadsheet was saved.
pub fn write_export_summary<W: Write>(
    writer: &mut W,
    exported: &ExportedSpreadsheet,
) -> Result<(), PlacementError> {
    writeln!(
        writer,
        "Saved {} bytes to {}",
        exported.bytes, exported.path
    )
    .map_err(|e| io_error(&e))
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use jobapps::ApplicationId;
    use jobapps::placement::Cpi;
    use rstest::rstest;

    use super::*;

    fn applicants(count: u64) -> Vec<Applicant> {
        (1..=count)
            .map(|id| Applicant {
                id: ApplicationId::new(id),
                name: format!("Student {id}"),
                roll_no: format!("R{id:04}"),
                email: format!("student{id}@example.edu"),
                cpi: Some(Cpi::new("8.5")),
                status: jobapps::ApplicationStatus::Pending,
            })
            .collect()
    }

    fn render(roster: &Roster, page: usize) -> String {
        let job = JobId::new("42").expect("job id should be valid");
        let mut buffer = Vec::new();
        write_applicant_page(
            &mut buffer,
            &ApplicantPage {
                job: &job,
                roster,
                page,
                form_fields: &[],
            },
        )
        .expect("write should succeed");
        String::from_utf8(buffer).expect("output should be UTF-8")
    }

    #[rstest]
    fn page_lists_only_its_slice() {
        let roster = Roster::new(applicants(25));

        let output = render(&roster, 3);

        assert!(output.contains("#21 Student 21 [R0021]"));
        assert!(output.contains("#25 Student 25"));
        assert!(!output.contains("#20 "));
        assert!(output.contains("Page 3/3 - 25 applicants"));
    }

    #[rstest]
    fn empty_roster_prints_empty_state() {
        let output = render(&Roster::default(), 1);

        assert!(output.contains("No applications available"));
        assert!(!output.contains("Page "));
    }

    #[rstest]
    fn export_summary_names_path_and_size() {
        let mut buffer = Vec::new();
        let exported = ExportedSpreadsheet {
            path: Utf8PathBuf::from("exports/applications_42.xlsx"),
            bytes: 2048,
        };

        write_export_summary(&mut buffer, &exported).expect("write should succeed");

        assert_eq!(
            String::from_utf8(buffer).expect("output should be UTF-8"),
            "Saved 2048 bytes to exports/applications_42.xlsx\n"
        );
    }
}
