//! Fake fullscreen for a single window.
//!
//! - [`controller`] - The enter/leave state machine
//! - [`mapper`] - Restoration geometry across displays
//! - [`state`] - Controller state and the saved snapshot
//! - [`error`] - Reasons a transition did not start
//!
//! # Example
//!
//! ```rust,ignore
//! let controller = FullscreenController::new(presentation, animator, config.fullscreen);
//!
//! // Bound to ⌘F by the application
//! controller.toggle(&window);
//! ```

pub mod controller;
pub mod error;
pub mod mapper;
pub mod state;


pub use controller::FullscreenController;
pub use error::{FullscreenError, FullscreenResult};
pub use mapper::{Anchor, AxisPlacement, GeometryMapper, MapOptions, Margins, clear_menu_bar, map_frame};
pub use state::{ControllerState, FullscreenSnapshot};
