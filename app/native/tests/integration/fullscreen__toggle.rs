//! Integration tests for entering and leaving fullscreen on one display.
//!
//! ## Test Coverage
//! - Window chrome, presentation options and frame while fullscreen
//! - Restoration of style, options and frame on leave
//! - Toggles dropped during a transition
//! - Windows without a display or title bar controls
//! - Configuration of presentation options and transition duration

use std::time::Duration;

use crate::assert_frame_approx_eq;
use crate::common::*;

fn windowed_frame() -> Rect { Rect::new(200.0, 150.0, 1024.0, 700.0) }

#[test]
fn test_enter_covers_display_and_hides_chrome() {
    let rig = Rig::new();
    let window = HeadlessWindow::new(windowed_frame(), Some(hd_display()));

    rig.controller.toggle(&window);

    assert_eq!(rig.controller.state(), ControllerState::EnteringFullscreen);
    assert_eq!(window.frame(), hd_display().frame);
    assert_eq!(window.content_size(), hd_display().frame.size());
    assert!(window.style().borderless);
    assert!(!window.is_movable());
    assert!(window.is_titlebar_transparent());
    assert_eq!(window.titlebar_alpha(), Some(0.0));
    assert_eq!(rig.presentation.options(), PresentationOptions::hide_menu_bar_and_dock());

    assert_eq!(rig.animator.run_pending(), 1);
    assert_eq!(rig.controller.state(), ControllerState::Fullscreen);
}

#[test]
fn test_leave_restores_window() {
    let rig = Rig::new();
    let window = HeadlessWindow::new(windowed_frame(), Some(hd_display()));

    rig.toggle_and_settle(&window);
    rig.controller.toggle(&window);

    assert_eq!(rig.controller.state(), ControllerState::LeavingFullscreen);
    assert_eq!(window.style(), StyleDescriptor::windowed());
    assert!(window.is_movable());
    assert!(!window.is_titlebar_transparent());
    assert_eq!(window.titlebar_alpha(), Some(1.0));
    assert!(rig.presentation.options().is_default());
    assert_frame_approx_eq!(window.frame(), windowed_frame());

    rig.animator.run_pending();
    assert_eq!(rig.controller.state(), ControllerState::Windowed);
    assert!(rig.controller.snapshot().is_none());
}

#[test]
fn test_repeated_cycles_are_stable() {
    let rig = Rig::default();
    let window = HeadlessWindow::new(windowed_frame(), Some(hd_display()));

    for _ in 0..5 {
        rig.toggle_and_settle(&window);
        assert!(rig.controller.is_fullscreen());
        rig.toggle_and_settle(&window);
        assert!(!rig.controller.is_fullscreen());
    }

    assert_frame_approx_eq!(window.frame(), windowed_frame());
    assert_eq!(window.frame_changes(), 10);
}

#[test]
fn test_toggle_during_transition_is_dropped() {
    let rig = Rig::new();
    let window = HeadlessWindow::new(windowed_frame(), Some(hd_display()));

    rig.controller.toggle(&window);
    rig.controller.toggle(&window);
    rig.controller.toggle(&window);

    assert_eq!(rig.animator.pending(), 1);
    assert_eq!(window.frame_changes(), 1);

    let err = rig.controller.try_toggle(&window).unwrap_err();
    assert_eq!(err, FullscreenError::Busy(ControllerState::EnteringFullscreen));

    rig.animator.run_pending();
    assert!(rig.controller.is_fullscreen());
}

#[test]
fn test_window_without_display_is_untouched() {
    let rig = Rig::new();
    let window = HeadlessWindow::new(windowed_frame(), None);

    rig.controller.toggle(&window);

    assert_eq!(rig.controller.state(), ControllerState::Windowed);
    assert_eq!(window.frame(), windowed_frame());
    assert_eq!(window.frame_changes(), 0);
    assert_eq!(rig.animator.pending(), 0);
    assert!(rig.presentation.options().is_default());
    assert_eq!(rig.controller.try_enter(&window), Err(FullscreenError::NoDisplay));
}

#[test]
fn test_window_without_titlebar_control_is_untouched() {
    let rig = Rig::new();
    let window =
        HeadlessWindow::new(windowed_frame(), Some(hd_display())).without_titlebar_control();

    rig.controller.toggle(&window);

    assert_eq!(rig.controller.state(), ControllerState::Windowed);
    assert_eq!(window.style(), StyleDescriptor::windowed());
    assert_eq!(window.frame_changes(), 0);
    assert_eq!(
        rig.controller.try_enter(&window),
        Err(FullscreenError::NoTitlebarControl)
    );
}

#[test]
fn test_configured_presentation_and_duration() {
    let rig = Rig::with_config(FullscreenConfig {
        hide_dock: false,
        transition_duration_ms: 250,
        ..FullscreenConfig::default()
    });
    let window = HeadlessWindow::new(windowed_frame(), Some(hd_display()));

    rig.controller.toggle(&window);

    let options = rig.presentation.options();
    assert!(options.auto_hide_menu_bar);
    assert!(!options.auto_hide_dock);
    assert_eq!(rig.animator.last_duration(), Some(Duration::from_millis(250)));
}

#[test]
fn test_completion_after_controller_dropped_is_ignored() {
    let rig = Rig::new();
    let window = HeadlessWindow::new(windowed_frame(), Some(hd_display()));

    rig.controller.toggle(&window);
    let Rig {
        controller,
        animator,
        ..
    } = rig;
    drop(controller);

    assert_eq!(animator.run_pending(), 1);
}

#[test]
fn test_borderless_window_restores_its_own_style() {
    let style = StyleDescriptor::windowed().with_borderless();
    let rig = Rig::new();
    let window = HeadlessWindow::new(windowed_frame(), Some(hd_display())).with_style(style);

    rig.toggle_and_settle(&window);
    rig.toggle_and_settle(&window);

    assert_eq!(window.style(), style);
    assert_frame_approx_eq!(window.frame(), windowed_frame());
}
