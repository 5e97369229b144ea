mod basic;
mod debounce;

use sixdot_core::Dot;

use super::InputSession;

pub(super) use self::simulator::HeadlessHost;

/// Session with a fixed 150 ms window (the default), mode already on.
pub(super) fn active_session() -> InputSession {
    let mut session = InputSession::with_debounce_ms(150);
    session.toggle();
    assert!(session.is_active());
    session
}

pub(super) fn dot(number: u8) -> Dot {
    Dot::from_number(number).unwrap()
}
