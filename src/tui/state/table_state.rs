//! Page and row cursor for the applicant table.

/// Active page (1-based) and the cursor row within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableState {
    /// Current page, starting at 1.
    pub active_page: usize,
    /// Selected row within the page, starting at 0.
    pub cursor: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}

impl TableState {
    /// Creates a state on page 1 with the first row selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active_page: 1,
            cursor: 0,
        }
    }

    /// Moves the cursor up one row.
    pub const fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one row, stopping at the last row of the page.
    pub const fn cursor_down(&mut self, rows_on_page: usize) {
        let last_row = rows_on_page.saturating_sub(1);
        self.cursor = if self.cursor < last_row {
            self.cursor.saturating_add(1)
        } else {
            last_row
        };
    }

    /// Moves to `page`, clamped to `1..=page_count`, and resets the cursor
    /// when the page changes.
    pub fn go_to_page(&mut self, page: usize, page_count: usize) {
        let target = page.clamp(1, page_count.max(1));
        if target != self.active_page {
            self.active_page = target;
            self.cursor = 0;
        }
    }

    /// Keeps the page and cursor valid after the roster changes.
    pub fn clamp(&mut self, page_count: usize, rows_on_page: impl Fn(usize) -> usize) {
        self.active_page = self.active_page.clamp(1, page_count.max(1));
        let last_row = rows_on_page(self.active_page).saturating_sub(1);
        self.cursor = self.cursor.min(last_row);
    }
}
