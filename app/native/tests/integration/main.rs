//! Integration tests for Curtain.
//!
//! These tests drive the public fullscreen API end to end through the headless
//! platform: windows, presentation options and the deferred animator all live
//! in memory, so no window server or permissions are needed.
//!
//! ## Running Integration Tests
//!
//! ```bash
//! # Run all integration tests
//! cargo test -p curtain --test integration
//!
//! # Run a specific module
//! cargo test -p curtain --test integration fullscreen__display_change
//! ```
//!
//! ## Test Organization
//!
//! Tests follow the naming convention `<module>__<test_name>` to allow filtering by module:
//! - `fullscreen__toggle` - Enter/leave transitions on a single display
//! - `fullscreen__display_change` - Restoration after the window changed displays

// Allow double-underscore naming for test modules (e.g., fullscreen__toggle)
#![allow(non_snake_case)]
// Relax clippy lints for integration tests - these are test utilities, not production code
#![allow(
    clippy::float_cmp,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_imports
)]

mod common;

mod fullscreen__display_change;
mod fullscreen__toggle;
