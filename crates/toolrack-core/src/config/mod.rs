//! Configuration: XDG directories and the JSON settings file.

mod dirs;
mod settings;

pub use dirs::Directories;
pub use settings::Config;
