//! Command-line interface.
//!
//! Every command runs against the headless platform, so the mapping and the
//! controller can be inspected for any display arrangement described in a
//! layout file.

mod commands;

use clap::Parser;

pub use commands::{Cli, Commands};

use crate::core::Result;

/// Parses the process arguments and runs the selected command.
///
/// # Errors
///
/// Returns an error if the command fails.
pub fn run() -> Result<()> { Cli::parse().execute() }
