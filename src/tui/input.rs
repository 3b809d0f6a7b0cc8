//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages.

use crossterm::event::KeyCode;

use super::messages::AppMsg;

/// Which part of the viewer receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The applicant table.
    Table,
    /// The job identifier prompt.
    JobPrompt,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    match context {
        InputContext::Table => map_key_to_message(key),
        InputContext::JobPrompt => map_job_prompt_key(key.key),
    }
}

/// Maps a key event in the table context.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Char('l' | 'n') | KeyCode::Right | KeyCode::PageDown => Some(AppMsg::NextPage),
        KeyCode::Char('h' | 'p') | KeyCode::Left | KeyCode::PageUp => {
            Some(AppMsg::PreviousPage)
        }
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::FirstPage),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::LastPage),
        KeyCode::Char('a') => Some(AppMsg::AcceptSelected),
        KeyCode::Char('x') => Some(AppMsg::RejectSelected),
        KeyCode::Char('d') => Some(AppMsg::ExportRequested),
        KeyCode::Char('r') => Some(AppMsg::LoadRequested),
        KeyCode::Char('o') => Some(AppMsg::OpenJobPrompt),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

const fn map_job_prompt_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Enter => Some(AppMsg::JobPromptSubmit),
        KeyCode::Esc => Some(AppMsg::JobPromptCancel),
        KeyCode::Backspace => Some(AppMsg::JobPromptBackspace),
        KeyCode::Char(ch) => Some(AppMsg::JobPromptInput(ch)),
        _ => None,
    }
}
