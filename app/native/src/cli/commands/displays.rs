//! `curtain displays`: inspect a layout file.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use super::print_rows;
use crate::config::load_layout;
use crate::core::Result;
use crate::geometry::{Display, DisplayId, Rect};

/// Arguments of `curtain displays`.
#[derive(Args, Debug)]
pub struct DisplaysArgs {
    /// Display layout file (JSONC).
    #[arg(long, short, value_name = "PATH")]
    pub layout: PathBuf,

    /// Output in JSON format instead of table format.
    #[arg(long, short = 'j')]
    pub json: bool,
}

#[derive(Debug, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    #[tabled(rename = "ID")]
    pub id: DisplayId,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Frame")]
    pub frame: Rect,
    #[tabled(rename = "Visible Frame")]
    pub visible_frame: Rect,
    #[tabled(rename = "Menu Bar")]
    pub menu_bar_height: f64,
}

impl From<&Display> for DisplayRow {
    fn from(display: &Display) -> Self {
        Self {
            id: display.id,
            name: display.name.clone(),
            frame: display.frame,
            visible_frame: display.visible_frame,
            menu_bar_height: display.menu_bar_height(),
        }
    }
}

/// Execute `curtain displays`.
pub fn execute(args: &DisplaysArgs) -> Result<()> {
    let layout = load_layout(&args.layout)?;
    let rows: Vec<DisplayRow> = layout.displays.iter().map(DisplayRow::from).collect();
    print_rows(&rows, args.json)
}
