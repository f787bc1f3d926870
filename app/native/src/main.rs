#![allow(clippy::multiple_crate_versions)]

//! Curtain command-line entry point.
//!
//! Every subcommand runs against the headless platform; see `curtain --help`.

use colored::Colorize;

fn main() {
    curtain_lib::logging::init();

    if let Err(err) = curtain_lib::cli::run() {
        eprintln!("{} {err}", "curtain:".red().bold());
        std::process::exit(1);
    }
}
