//! UI rendering module - screen-specific rendering functions
//!
//! This module contains the UI rendering logic organized by screen type.
//! Each screen has its own file for better maintainability.

mod assessment;
mod chat;
mod conversations;
mod dashboard;
mod helpers;
mod login;
mod profile;
mod register;
mod space_dashboard;
mod spaces;
mod suggestions;

use crate::tui::app::App;
use crate::tui::types::Screen;
use ratatui::Frame;

// Re-export render functions
pub use assessment::render_assessment;
pub use chat::render_chat;
pub use conversations::render_conversations;
pub use dashboard::render_dashboard;
pub use login::render_login;
pub use profile::render_profile;
pub use register::render_register;
pub use space_dashboard::render_space_dashboard;
pub use spaces::render_spaces;
pub use suggestions::render_suggestions;

// Re-export helper functions
pub use helpers::{format_relative_time, preview_text};

/// Main UI rendering function - dispatches to screen-specific render functions
pub fn ui(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Login => render_login(f, app),
        Screen::Register => render_register(f, app),
        Screen::Assessment => render_assessment(f, app),
        Screen::Dashboard => render_dashboard(f, app),
        Screen::Suggestions => render_suggestions(f, app),
        Screen::Conversations => render_conversations(f, app),
        Screen::Chat => render_chat(f, app),
        Screen::Spaces => render_spaces(f, app),
        Screen::SpaceDashboard => render_space_dashboard(f, app),
        Screen::Profile => render_profile(f, app),
    }
}
