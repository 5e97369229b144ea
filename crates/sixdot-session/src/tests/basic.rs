use sixdot_core::{Chord, Dot};

use super::{active_session, dot, HeadlessHost};
use crate::{Feedback, InputSession, SessionEvent};

// --- Mode toggling ---

#[test]
fn test_session_starts_inactive() {
    let session = InputSession::with_debounce_ms(150);
    assert!(!session.is_active());
    assert!(session.pending_chord().is_empty());
}

#[test]
fn test_toggle_reports_indicator_and_context_flag() {
    let mut session = InputSession::with_debounce_ms(150);

    let resp = session.toggle();
    assert!(session.is_active());
    assert_eq!(resp.indicator.unwrap().active, true);
    assert_eq!(resp.side_effects.set_context_flag, Some(true));

    let resp = session.toggle();
    assert!(!session.is_active());
    assert_eq!(resp.indicator.unwrap().active, false);
    assert_eq!(resp.side_effects.set_context_flag, Some(false));
}

#[test]
fn test_double_toggle_restores_gating() {
    let mut session = InputSession::with_debounce_ms(150);
    session.toggle();
    session.toggle();
    assert!(!session.is_active());
    // Gating behaves exactly as before the toggles: everything passes.
    assert!(!session.filter_text("a").consumed);
}

#[test]
fn test_feedback_only_when_enabled() {
    // with_debounce_ms leaves feedback disabled
    let mut session = InputSession::with_debounce_ms(150);
    let resp = session.toggle();
    assert_eq!(resp.side_effects.feedback, None);

    let mut session = InputSession::with_debounce_ms(150);
    session.feedback_enabled = true;
    let resp = session.toggle();
    assert_eq!(resp.side_effects.feedback, Some(Feedback::ModeOn));
    let resp = session.toggle();
    assert_eq!(resp.side_effects.feedback, Some(Feedback::ModeOff));
}

// --- Dot input ---

#[test]
fn test_dot_ignored_while_inactive() {
    let mut session = InputSession::with_debounce_ms(150);
    let resp = session.input_dot(Dot::Dot1);
    assert!(resp.consumed);
    assert_eq!(resp.timer, None);
    assert_eq!(resp.insert, None);
    assert!(session.pending_chord().is_empty());
}

#[test]
fn test_dot_accumulates_and_schedules() {
    let mut session = active_session();

    let resp = session.input_dot(Dot::Dot1);
    assert!(resp.consumed);
    let req = resp.timer.unwrap();
    assert_eq!(req.delay_ms, 150);
    assert_eq!(session.pending_chord().bits(), 0x01);

    let resp = session.input_dot(Dot::Dot2);
    let req2 = resp.timer.unwrap();
    // New press supersedes the previous schedule
    assert!(req2.generation > req.generation);
    assert_eq!(session.pending_chord().bits(), 0x03);
}

#[test]
fn test_duplicate_dot_is_idempotent() {
    let mut session = active_session();
    session.input_dot(Dot::Dot1);
    session.input_dot(Dot::Dot1);
    assert_eq!(session.pending_chord().bits(), 0x01);
}

#[test]
fn test_pending_preview() {
    let mut session = active_session();
    let resp = session.input_dot(dot(1));
    assert_eq!(resp.preview.as_deref(), Some("dots 1"));
    let resp = session.input_dot(dot(4));
    assert_eq!(resp.preview.as_deref(), Some("dots 1-4"));
}

// --- Commit ---

#[test]
fn test_commit_inserts_cell_and_resets() {
    let mut session = active_session();
    let req = session.input_dot(dot(1)).timer.unwrap();
    let resp = session.timer_fired(req.generation);
    assert_eq!(resp.insert.as_deref(), Some("\u{2801}"));
    assert_eq!(resp.preview.as_deref(), Some("")); // preview cleared
    assert!(session.pending_chord().is_empty());
}

#[test]
fn test_stale_generation_is_noop() {
    let mut session = active_session();
    let first = session.input_dot(dot(1)).timer.unwrap();
    let second = session.input_dot(dot(2)).timer.unwrap();

    // The superseded schedule fires late: nothing happens.
    let resp = session.timer_fired(first.generation);
    assert_eq!(resp.insert, None);
    assert_eq!(session.pending_chord().bits(), 0x03);

    // The live one commits the merged chord.
    let resp = session.timer_fired(second.generation);
    assert_eq!(resp.insert.as_deref(), Some("\u{2803}"));
}

#[test]
fn test_fired_generation_cannot_fire_twice() {
    let mut session = active_session();
    let req = session.input_dot(dot(1)).timer.unwrap();
    assert!(session.timer_fired(req.generation).insert.is_some());
    let resp = session.timer_fired(req.generation);
    assert_eq!(resp.insert, None);
}

#[test]
fn test_commit_with_empty_chord_inserts_nothing() {
    let mut session = active_session();
    // No press ever scheduled this generation; unreachable through the
    // public flow, but the engine still degrades to a silent no-op.
    let resp = session.timer_fired(42);
    assert_eq!(resp.insert, None);
    assert!(session.pending_chord().is_empty());
}

// --- handle() dispatch ---

#[test]
fn test_handle_dispatches_all_events() {
    let mut session = InputSession::with_debounce_ms(150);

    let resp = session.handle(SessionEvent::Toggle);
    assert!(resp.indicator.is_some());

    let resp = session.handle(SessionEvent::Dot(Dot::Dot3));
    let req = resp.timer.unwrap();
    assert_eq!(session.pending_chord(), Chord::EMPTY.with(Dot::Dot3));

    let resp = session.handle(SessionEvent::TimerFired {
        generation: req.generation,
    });
    assert_eq!(resp.insert.as_deref(), Some("\u{2804}"));

    let resp = session.handle(SessionEvent::Text("x".to_string()));
    assert!(resp.consumed);
}

// --- End-to-end through the headless host ---

#[test]
fn test_host_round_trip() {
    let mut host = HeadlessHost::new();
    host.toggle();
    host.press(dot(1));
    host.press(dot(2));
    assert_eq!(host.preview, "dots 1-2");
    host.settle();
    assert_eq!(host.preview, ""); // cleared by the commit
    host.type_text(" ");
    host.press(dot(1));
    host.settle();
    assert_eq!(host.document, "\u{2803} \u{2801}");
    assert_eq!(host.indicator_updates, vec![true]);
}
