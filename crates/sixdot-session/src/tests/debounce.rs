//! Timing behavior through the virtual-clock host: coalescing inside the
//! debounce window, separation beyond it, and the toggle-off edge case.

use super::{dot, HeadlessHost};

#[test]
fn test_presses_within_window_coalesce() {
    let mut host = HeadlessHost::new();
    host.toggle();

    host.press(dot(1));
    host.wait(50);
    host.press(dot(2));
    host.settle();

    // Exactly one commit: dots 1+2 → ⠃
    assert_eq!(host.document, "\u{2803}");
}

#[test]
fn test_presses_beyond_window_commit_separately() {
    let mut host = HeadlessHost::new();
    host.toggle();

    host.press(dot(1));
    host.wait(200); // past the 150 ms window
    host.press(dot(2));
    host.wait(200);

    assert_eq!(host.document, "\u{2801}\u{2802}");
}

#[test]
fn test_each_press_restarts_the_window() {
    let mut host = HeadlessHost::new();
    host.toggle();

    // Three presses, each 100 ms apart: every one lands inside the window
    // restarted by the previous, so all coalesce.
    host.press(dot(1));
    host.wait(100);
    host.press(dot(2));
    host.wait(100);
    host.press(dot(4));
    host.settle();

    // Dots 1+2+4 → bits 0x0B → ⠋
    assert_eq!(host.document, "\u{280B}");
}

#[test]
fn test_press_exactly_at_window_boundary_commits_first() {
    let mut host = HeadlessHost::new();
    host.toggle();

    host.press(dot(1));
    host.wait(150); // timer due exactly now → fires
    host.press(dot(2));
    host.settle();

    assert_eq!(host.document, "\u{2801}\u{2802}");
}

#[test]
fn test_commit_fires_after_mode_off() {
    let mut host = HeadlessHost::new();
    host.toggle();
    host.press(dot(1));
    host.toggle(); // off before the window elapses; chord not cleared
    assert!(!host.session.is_active());
    assert!(!host.session.pending_chord().is_empty());

    host.settle();
    // The pending chord still commits after deactivation.
    assert_eq!(host.document, "\u{2801}");
    assert!(host.session.pending_chord().is_empty());
}

#[test]
fn test_no_commit_without_presses() {
    let mut host = HeadlessHost::new();
    host.toggle();
    host.settle();
    host.toggle();
    host.settle();
    assert_eq!(host.document, "");
    assert!(!host.has_pending_timer());
}

#[test]
fn test_custom_debounce_window() {
    let mut host = HeadlessHost::new();
    host.session = crate::InputSession::with_debounce_ms(40);
    host.toggle();

    host.press(dot(1));
    host.wait(50); // beyond the shorter window
    host.press(dot(2));
    host.settle();

    assert_eq!(host.document, "\u{2801}\u{2802}");
}
