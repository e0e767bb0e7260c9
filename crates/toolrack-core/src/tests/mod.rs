//! Test module for toolrack-core
//!
//! This module contains scenario-level tests for:
//! - Match engine filtering over the built-in catalog
//! - Suggestion session transitions and commit cascades
//! - The end-to-end search scenarios (query, navigate, route)

mod session_tests;
