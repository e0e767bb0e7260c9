//! Reusable TUI widgets.

mod chip;

pub use chip::render_chip;
