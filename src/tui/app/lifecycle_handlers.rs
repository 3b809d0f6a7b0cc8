//! Lifecycle and window handlers for the viewer.
//!
//! This module handles startup initialisation, terminal resize events,
//! notification expiry, and high-level lifecycle messages such as quit and
//! help toggling.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::ApplicationsApp;
use crate::tui::messages::AppMsg;

impl ApplicationsApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            AppMsg::DismissNotification(seq) => {
                if *seq == self.notification_seq {
                    self.notification = None;
                }
                None
            }
            _ => {
                debug_assert!(false, "unhandled message routed to handle_lifecycle_msg");
                None
            }
        }
    }

    /// Handles the synthetic startup message.
    ///
    /// `Initialized` is a one-shot event: it starts the first load, or opens
    /// the job prompt when no job was configured. Repeats are ignored.
    fn handle_initialized(&mut self) -> Option<Cmd> {
        if self.has_initialized {
            return None;
        }
        self.has_initialized = true;

        if self.job.is_some() {
            self.start_load()
        } else {
            self.open_job_prompt()
        }
    }

    /// Creates a command that emits `Initialized` immediately.
    ///
    /// This synthetic startup event triggers the first render cycle without
    /// waiting for user input.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}
