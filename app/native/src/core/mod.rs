//! Core infrastructure for Curtain.
//!
//! This module provides foundational types and utilities used throughout the application:
//!
//! - [`error`] - Unified error types
//! - [`constants`] - Application constants

pub mod constants;
pub mod error;

pub use error::{Error, Result};
