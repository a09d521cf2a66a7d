// ABOUTME: Library root for next-target-code - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod api;
pub mod config;
pub mod decide;
pub mod diagnostics;
pub mod error;
pub mod output;
pub mod resolve;
pub mod types;
