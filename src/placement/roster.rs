//! Local applicant cache and client-side pagination.
//!
//! The roster mirrors the server's applicant list for one job. It only ever
//! changes by wholesale replacement after a fetch or by replacing a single
//! applicant's status after a confirmed update; order and length are
//! otherwise fixed.

use super::ids::ApplicationId;
use super::models::{Applicant, ApplicationStatus};

/// Number of applicants shown per page.
pub const PAGE_SIZE: usize = 10;

/// In-memory applicant list for the active job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    applicants: Vec<Applicant>,
}

impl Roster {
    /// Creates a roster from a fetched applicant list.
    #[must_use]
    pub const fn new(applicants: Vec<Applicant>) -> Self {
        Self { applicants }
    }

    /// All applicants in server order.
    #[must_use]
    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    /// Number of applicants.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.applicants.len()
    }

    /// Returns true when no applicants are loaded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.applicants.is_empty()
    }

    /// Replaces the status of the applicant matching `id`.
    ///
    /// Returns `false` and leaves the roster untouched when no applicant
    /// matches.
    pub fn apply_status(&mut self, id: ApplicationId, status: &ApplicationStatus) -> bool {
        let Some(applicant) = self
            .applicants
            .iter_mut()
            .find(|applicant| applicant.id == id)
        else {
            return false;
        };
        applicant.status = status.clone();
        true
    }

    /// Number of pages, never less than one.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        if self.applicants.is_empty() {
            1
        } else {
            self.applicants.len().div_ceil(PAGE_SIZE)
        }
    }

    /// Applicants on the 1-based `page`: `[(page-1)*10, page*10)` clipped to
    /// the roster length. Page `0` and pages past the end are empty.
    #[must_use]
    pub fn page(&self, page: usize) -> &[Applicant] {
        let Some(first_page_index) = page.checked_sub(1) else {
            return &[];
        };
        let len = self.applicants.len();
        let start = first_page_index.saturating_mul(PAGE_SIZE).min(len);
        let end = page.saturating_mul(PAGE_SIZE).min(len);
        self.applicants.get(start..end).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::placement::models::test_support::{applicant, pending_applicants};

    #[rstest]
    #[case::first_page(25, 1, 1..=10)]
    #[case::middle_page(25, 2, 11..=20)]
    #[case::last_partial_page(25, 3, 21..=25)]
    #[case::exact_multiple(20, 2, 11..=20)]
    #[case::short_list(4, 1, 1..=4)]
    fn page_slices_ten_records(
        #[case] total: u64,
        #[case] page: usize,
        #[case] expected: std::ops::RangeInclusive<u64>,
    ) {
        let roster = Roster::new(pending_applicants(total));

        let ids: Vec<u64> = roster.page(page).iter().map(|a| a.id.get()).collect();

        assert_eq!(ids, expected.collect::<Vec<_>>());
    }

    #[rstest]
    #[case::zero(0)]
    #[case::past_end(4)]
    fn out_of_range_pages_are_empty(#[case] page: usize) {
        let roster = Roster::new(pending_applicants(25));
        assert!(roster.page(page).is_empty());
    }

    #[rstest]
    #[case::empty(0, 1)]
    #[case::one(1, 1)]
    #[case::ten(10, 1)]
    #[case::eleven(11, 2)]
    #[case::twenty_five(25, 3)]
    fn page_count_rounds_up(#[case] total: u64, #[case] expected: usize) {
        assert_eq!(Roster::new(pending_applicants(total)).page_count(), expected);
    }

    #[test]
    fn apply_status_replaces_only_matching_status() {
        let mut roster = Roster::new(pending_applicants(2));

        assert!(roster.apply_status(ApplicationId::new(2), &ApplicationStatus::Accept));

        assert_eq!(
            roster.applicants(),
            &[
                applicant(1, ApplicationStatus::Pending),
                applicant(2, ApplicationStatus::Accept),
            ]
        );
    }

    #[test]
    fn apply_status_ignores_unknown_id() {
        let mut roster = Roster::new(pending_applicants(3));
        let before = roster.clone();

        assert!(!roster.apply_status(ApplicationId::new(99), &ApplicationStatus::Reject));
        assert_eq!(roster, before);
    }
}
