//! Terminal User Interface for reviewing a job's applicants.
//!
//! This module provides the interactive viewer: a paginated applicant table
//! with accept/reject actions, spreadsheet download, and a job prompt, built
//! on the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::ApplicationsApp`]
//! - **View**: Rendering logic in the app and its components
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the gateway and initial job are handed over through module-level
//! storage. Call [`set_viewer_context`] before starting the program and
//! `ApplicationsApp::init()` will pick it up.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::ApplicationsApp;
pub use storage::{ViewerServices, set_viewer_context};
