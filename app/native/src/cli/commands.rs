//! CLI command definitions using Clap.
//!
//! This module defines the root parser and dispatches to the subcommand
//! modules.

mod displays;
mod map;
mod simulate;

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};
pub use displays::DisplaysArgs;
pub use map::MapArgs;
pub use simulate::SimulateArgs;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config;
use crate::core::constants::APP_VERSION;
use crate::core::{Error, Result};
use crate::geometry::{Display, DisplayId, DisplayLayout};

/// Curtain CLI - fake fullscreen geometry on the headless platform.
#[derive(Parser, Debug)]
#[command(name = "curtain")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file to use instead of the default locations.
    #[arg(long, short, global = true, env = "CURTAIN_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Map a saved frame from one display onto another.
    ///
    /// Prints where a window saved on the source display is restored when it
    /// leaves fullscreen on the target display.
    Map(MapArgs),

    /// Run a full enter/leave cycle on a simulated window.
    ///
    /// Enters fullscreen on one display, optionally moves the window to
    /// another display, then leaves fullscreen and prints every step.
    Simulate(SimulateArgs),

    /// List the displays of a layout file.
    Displays(DisplaysArgs),

    /// Output the configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// Curtain configuration file. Can be redirected to a file for use with
    /// editors that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    ///
    /// Usage:
    ///   eval "$(curtain completions --shell zsh)"
    ///   curtain completions --shell fish > ~/.config/fish/completions/curtain.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Map(args) => map::execute(args, self.config())?,
            Commands::Simulate(args) => simulate::execute(args, self.config())?,
            Commands::Displays(args) => displays::execute(args)?,

            Commands::Schema => {
                let schema = serde_json::to_string_pretty(&config::schema())?;
                println!("{schema}");
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
            }
        }

        Ok(())
    }

    fn config(&self) -> &'static config::CurtainConfig { config::init(self.config.as_deref()) }

    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        let name = cmd.get_name().to_string();
        generate(generator, &mut cmd, name, &mut io::stdout());
    }
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Looks up a display in `layout`.
fn find_display(layout: &DisplayLayout, id: DisplayId) -> Result<&Display> {
    layout.get(id).ok_or(Error::DisplayNotFound(id))
}

/// Prints `rows` as JSON or as a rounded table.
fn print_rows<T: Tabled + serde::Serialize>(rows: &[T], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
    }
    Ok(())
}
