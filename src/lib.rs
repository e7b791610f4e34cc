// ABOUTME: Library root for kcloud - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod api;
pub mod auth;
pub mod commands;
pub mod error;
pub mod output;
