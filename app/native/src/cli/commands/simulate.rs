//! `curtain simulate`: a full fullscreen cycle on a headless window.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use super::{find_display, print_rows};
use crate::config::{CurtainConfig, load_layout};
use crate::core::{Error, Result};
use crate::fullscreen::{ControllerState, FullscreenController};
use crate::geometry::{DisplayId, DisplayLayout, Rect};
use crate::platform::{DeferredAnimator, HeadlessPresentation, HeadlessWindow, Window};

/// Arguments of `curtain simulate`.
#[derive(Args, Debug)]
#[command(after_long_help = r#"Examples:
  curtain simulate -l layout.jsonc --display 1 --frame 100,100,800,600
  curtain simulate -l layout.jsonc --display 1 --frame 100,100,800,600 --move-to 2"#)]
pub struct SimulateArgs {
    /// Display layout file (JSONC).
    #[arg(long, short, value_name = "PATH")]
    pub layout: PathBuf,

    /// Display the window starts on. Defaults to the display containing the
    /// frame's origin, then to the first display of the layout.
    #[arg(long, short)]
    pub display: Option<DisplayId>,

    /// Initial window frame as `x,y,width,height` (bottom-left origin).
    #[arg(long, short, allow_hyphen_values = true)]
    pub frame: Rect,

    /// Display to move the window to while it is fullscreen.
    #[arg(long, short)]
    pub move_to: Option<DisplayId>,

    /// Output in JSON format instead of table format.
    #[arg(long, short = 'j')]
    pub json: bool,
}

/// Window state after one step of the simulation.
#[derive(Debug, Serialize, Tabled)]
pub struct StepRow {
    #[tabled(rename = "Step")]
    pub step: &'static str,
    #[tabled(rename = "State")]
    pub state: ControllerState,
    #[tabled(rename = "Display")]
    pub display: DisplayId,
    #[tabled(rename = "Frame")]
    pub frame: Rect,
}

/// Records the controller and window state under `step`.
fn record(
    rows: &mut Vec<StepRow>,
    step: &'static str,
    controller: &FullscreenController,
    window: &HeadlessWindow,
) {
    rows.push(StepRow {
        step,
        state: controller.state(),
        display: window.current_display().map_or(0, |display| display.id),
        frame: window.frame(),
    });
}

/// Runs enter, the optional display change, and leave.
fn simulate(
    args: &SimulateArgs,
    layout: &DisplayLayout,
    config: &CurtainConfig,
) -> Result<Vec<StepRow>> {
    if args.frame.is_empty() {
        return Err(Error::invalid_args(format!("Frame {} has no area", args.frame)));
    }

    let start = match args.display {
        Some(id) => find_display(layout, id)?,
        None => layout
            .display_containing(args.frame.origin())
            .or_else(|| layout.main())
            .ok_or_else(|| Error::invalid_args("Layout has no displays"))?,
    };
    let target = args.move_to.map(|id| find_display(layout, id)).transpose()?;

    let animator = Arc::new(DeferredAnimator::new());
    let controller = FullscreenController::new(
        Arc::new(HeadlessPresentation::new()),
        animator.clone(),
        config.fullscreen,
    );
    let window = HeadlessWindow::new(args.frame, Some(start.clone()));

    let mut rows = Vec::with_capacity(6);
    record(&mut rows, "initial", &controller, &window);

    controller.try_toggle(&window)?;
    record(&mut rows, "enter", &controller, &window);
    animator.run_pending();
    record(&mut rows, "entered", &controller, &window);

    if let Some(target) = target {
        window.move_to_display(Some(target.clone()));
        window.set_frame(target.frame, true);
        record(&mut rows, "moved", &controller, &window);
    }

    controller.try_toggle(&window)?;
    record(&mut rows, "leave", &controller, &window);
    animator.run_pending();
    record(&mut rows, "restored", &controller, &window);

    Ok(rows)
}

/// Execute `curtain simulate`.
pub fn execute(args: &SimulateArgs, config: &CurtainConfig) -> Result<()> {
    let layout = load_layout(&args.layout)?;
    let rows = simulate(args, &layout, config)?;
    print_rows(&rows, args.json)
}
