pub mod config;
pub mod nav;
pub mod registry;
pub mod search;
pub mod session;

mod error;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};

pub use toolrack_types::*;
