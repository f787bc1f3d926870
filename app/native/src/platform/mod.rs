//! Window/Display service abstraction.
//!
//! - [`traits`] - The contract the fullscreen controller is written against
//! - [`style`] - Window style and presentation descriptors
//! - [`headless`] - In-memory implementation used by tests and the CLI

pub mod headless;
pub mod style;
pub mod traits;

pub use headless::{DeferredAnimator, HeadlessControlView, HeadlessPresentation, HeadlessWindow};
pub use style::{PresentationOptions, StyleDescriptor};
pub use traits::{Animator, Completion, ControlView, Mutation, Presentation, Window};
