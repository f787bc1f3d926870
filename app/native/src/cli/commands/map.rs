//! `curtain map`: restoration frame for a display change.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use super::{find_display, print_rows};
use crate::config::{CurtainConfig, load_layout};
use crate::core::{Error, Result};
use crate::fullscreen::{MapOptions, map_frame};
use crate::geometry::{DisplayId, Rect};

/// Arguments of `curtain map`.
#[derive(Args, Debug)]
#[command(after_long_help = r#"Examples:
  curtain map -l layout.jsonc --from 1 --to 2 --frame 1112,300,400,500
  curtain map -l layout.jsonc --from 1 --to 2 --frame -200,100,800,600 --json"#)]
pub struct MapArgs {
    /// Display layout file (JSONC).
    #[arg(long, short, value_name = "PATH")]
    pub layout: PathBuf,

    /// Display the frame was saved on.
    #[arg(long)]
    pub from: DisplayId,

    /// Display the frame is restored on.
    #[arg(long)]
    pub to: DisplayId,

    /// Saved window frame as `x,y,width,height` (bottom-left origin).
    #[arg(long, short, allow_hyphen_values = true)]
    pub frame: Rect,

    /// Skip the menu bar adjustment regardless of the configuration.
    #[arg(long)]
    pub no_guard: bool,

    /// Output in JSON format instead of table format.
    #[arg(long, short = 'j')]
    pub json: bool,
}

/// One row of the mapping output.
#[derive(Debug, Serialize, Tabled)]
pub struct FrameRow {
    #[tabled(rename = "Frame")]
    pub label: &'static str,
    #[tabled(rename = "Display")]
    pub display: DisplayId,
    #[tabled(rename = "X")]
    pub x: f64,
    #[tabled(rename = "Y")]
    pub y: f64,
    #[tabled(rename = "Width")]
    pub width: f64,
    #[tabled(rename = "Height")]
    pub height: f64,
}

impl FrameRow {
    const fn new(label: &'static str, display: DisplayId, frame: Rect) -> Self {
        Self {
            label,
            display,
            x: frame.x,
            y: frame.y,
            width: frame.width,
            height: frame.height,
        }
    }
}

/// Computes the saved and mapped rows for `args`.
fn rows(args: &MapArgs, config: &CurtainConfig) -> Result<Vec<FrameRow>> {
    if args.frame.is_empty() {
        return Err(Error::invalid_args(format!("Frame {} has no area", args.frame)));
    }

    let layout = load_layout(&args.layout)?;
    let source = find_display(&layout, args.from)?;
    let target = find_display(&layout, args.to)?;

    let options = MapOptions {
        menu_bar_guard: config.fullscreen.menu_bar_guard && !args.no_guard,
    };
    let mapped = map_frame(args.frame, source, target, options);

    Ok(vec![
        FrameRow::new("saved", source.id, args.frame),
        FrameRow::new("mapped", target.id, mapped),
    ])
}

/// Execute `curtain map`.
pub fn execute(args: &MapArgs, config: &CurtainConfig) -> Result<()> {
    let rows = rows(args, config)?;
    print_rows(&rows, args.json)
}
