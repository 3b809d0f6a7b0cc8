//! Cursor and page navigation handlers.

use bubbletea_rs::Cmd;

use super::ApplicationsApp;
use crate::tui::messages::AppMsg;

impl ApplicationsApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let page_count = self.roster.page_count();
        match msg {
            AppMsg::CursorUp => self.table.cursor_up(),
            AppMsg::CursorDown => {
                let rows = self.visible_applicants().len();
                self.table.cursor_down(rows);
            }
            AppMsg::NextPage => self
                .table
                .go_to_page(self.table.active_page.saturating_add(1), page_count),
            AppMsg::PreviousPage => self
                .table
                .go_to_page(self.table.active_page.saturating_sub(1), page_count),
            AppMsg::FirstPage => self.table.go_to_page(1, page_count),
            AppMsg::LastPage => self.table.go_to_page(page_count, page_count),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
            }
        }
        None
    }
}
