//! Rendering functions for the TUI, one module per view.

mod detail;
mod header;
mod helpers;
mod home;
mod tools;

pub use detail::{render_detail, render_not_found};
pub use header::render_header_overlay;
pub use helpers::{render_help_bar, truncate};
pub use home::render_home;
pub use tools::render_tools;
