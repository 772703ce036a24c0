//! TUI (Terminal User Interface) module
//!
//! All screen state and rendering logic lives here, separated from the binary
//! so the flows can be exercised in tests without a real terminal.

pub mod types;
pub mod screens;
pub mod app;
pub mod ui;

// Re-export main types for convenience
pub use types::{Screen, MenuItem};
pub use screens::*;
pub use app::App;
