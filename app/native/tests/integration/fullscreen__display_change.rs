//! Integration tests for restoring a window on a different display.
//!
//! ## Test Coverage
//! - Edge anchoring across displays of different sizes
//! - Proportional placement of floating windows
//! - Menu bar clearance on the target display
//! - Displays disconnected while fullscreen
//! - Displays with negative origins

use crate::assert_frame_approx_eq;
use crate::common::*;

/// Enters fullscreen on the window's display, moves it to `target` and leaves.
fn cycle_to(rig: &Rig, window: &HeadlessWindow, target: Display) {
    rig.toggle_and_settle(window);
    window.move_to_display(Some(target.clone()));
    window.set_frame(target.frame, true);
    rig.toggle_and_settle(window);
}

#[test]
fn test_right_edge_window_stays_on_right_edge() {
    let rig = Rig::new();
    let window = HeadlessWindow::new(Rect::new(1120.0, 100.0, 800.0, 600.0), Some(hd_display()));

    cycle_to(&rig, &window, uhd_display_right());

    let restored = window.frame();
    assert_frame_approx_eq!(restored, Rect::new(4960.0, restored.y, 800.0, 600.0));
    assert!(uhd_display_right().frame.contains_rect(&restored));
}

#[test]
fn test_centered_window_stays_centered() {
    let rig = Rig::new();
    let window = HeadlessWindow::new(Rect::new(560.0, 240.0, 800.0, 600.0), Some(hd_display()));

    cycle_to(&rig, &window, uhd_display_right());

    let target = uhd_display_right().frame;
    let restored = window.frame();
    assert_frame_approx_eq!(
        restored,
        Rect::new(
            target.x + (target.width - 800.0) / 2.0,
            (target.height - 600.0) / 2.0,
            800.0,
            600.0
        )
    );
}

#[test]
fn test_restored_window_clears_larger_menu_bar() {
    let rig = Rig::new();
    // Top edge flush with the 25pt menu bar of the HD display.
    let window = HeadlessWindow::new(Rect::new(100.0, 455.0, 800.0, 600.0), Some(hd_display()));

    cycle_to(&rig, &window, notched_display());

    let restored = window.frame();
    let display = notched_display();
    assert_eq!(display.menu_bar_height(), 37.0);
    assert!((restored.max_y() - (display.frame.max_y() - 37.0)).abs() < FRAME_TOLERANCE);
    assert_eq!((restored.width, restored.height), (800.0, 600.0));
}

#[test]
fn test_menu_bar_guard_can_be_disabled() {
    let rig = Rig::with_config(FullscreenConfig {
        menu_bar_guard: false,
        ..FullscreenConfig::default()
    });
    let window = HeadlessWindow::new(Rect::new(100.0, 455.0, 800.0, 600.0), Some(hd_display()));

    cycle_to(&rig, &window, notched_display());

    let top_margin = notched_display().frame.max_y() - window.frame().max_y();
    assert!(top_margin < 37.0);
}

#[test]
fn test_disconnected_display_blocks_leave_until_reattached() {
    let rig = Rig::new();
    let window = HeadlessWindow::new(Rect::new(1120.0, 100.0, 800.0, 600.0), Some(hd_display()));

    rig.toggle_and_settle(&window);
    window.move_to_display(None);

    assert_eq!(rig.controller.try_leave(&window), Err(FullscreenError::NoDisplay));
    assert!(rig.controller.is_fullscreen());
    assert!(rig.controller.snapshot().is_some());

    window.move_to_display(Some(uhd_display_right()));
    rig.toggle_and_settle(&window);

    assert_eq!(rig.controller.state(), ControllerState::Windowed);
    assert!((window.frame().max_x() - 5760.0).abs() < FRAME_TOLERANCE);
}

#[test]
fn test_display_with_negative_origin() {
    let rig = Rig::new();
    let window = HeadlessWindow::new(Rect::new(0.0, 0.0, 960.0, 540.0), Some(hd_display()));

    cycle_to(&rig, &window, left_display());

    let restored = window.frame();
    assert_frame_approx_eq!(restored, Rect::new(-1440.0, -300.0, 960.0, 540.0));
}

#[test]
fn test_window_hanging_off_left_edge_keeps_overhang() {
    let rig = Rig::new();
    let window = HeadlessWindow::new(Rect::new(-200.0, 100.0, 800.0, 600.0), Some(hd_display()));

    cycle_to(&rig, &window, uhd_display_right());

    assert!((window.frame().x - 1720.0).abs() < FRAME_TOLERANCE);
}
