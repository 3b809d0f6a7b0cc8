//! `Model` trait implementation for the viewer.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `ApplicationsApp`, handling initialisation, update dispatch, and view
//! rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use super::ApplicationsApp;
use crate::tui::components::text_truncate::clip_to_width;
use crate::tui::input::{InputContext, map_key_to_message_with_context};
use crate::tui::messages::AppMsg;

impl Model for ApplicationsApp {
    fn init() -> (Self, Option<Cmd>) {
        let model = crate::tui::storage::viewer_context().map_or_else(Self::empty, |context| {
            Self::new(context.services.clone(), context.job.clone())
        });

        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let mapped = map_key_to_message_with_context(key_msg, self.input_context());
            return mapped.and_then(|app_msg| self.handle_message(&app_msg));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push('\n');
        output.push_str(&self.render_body());
        output.push('\n');
        output.push_str(&self.render_footer());
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl ApplicationsApp {
    /// Returns the current input context for context-aware key mapping.
    pub(super) const fn input_context(&self) -> InputContext {
        if self.job_prompt.is_some() {
            InputContext::JobPrompt
        } else {
            InputContext::Table
        }
    }

    /// Pads or cuts every row to the terminal size.
    ///
    /// Rows stop one column short of the edge so the terminal never wraps.
    fn normalise_viewport(&self, output: &str) -> String {
        let row_width = usize::from(self.width).saturating_sub(1).max(1);
        let rows = usize::from(self.height.max(1));

        let mut frame = String::new();
        for line in output
            .lines()
            .chain(std::iter::repeat(""))
            .take(rows)
        {
            frame.push_str(&clip_to_width(line, row_width));
            frame.push('\n');
        }
        frame
    }
}
