//! State management for the TUI application.
//!
//! This module provides the load lifecycle, page and cursor tracking, and
//! the job prompt buffer.

mod job_prompt;
mod load_state;
mod table_state;

pub use job_prompt::JobPromptState;
pub use load_state::LoadState;
pub use table_state::TableState;
