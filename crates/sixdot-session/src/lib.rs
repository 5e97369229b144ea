//! Stateful Braille input session: chord accumulation, debounce commit, and
//! typed-text gating.
//!
//! `InputSession` owns the mode flag, the pending chord, and the commit-timer
//! handle, and processes each host event, returning responses that the host
//! translates into document insertions, indicator updates, and one-shot
//! timer schedules. The session itself owns no threads and no clocks; the
//! host delivers all events serially.

mod chord;
mod commit;
mod gate;
mod mode;
mod types;

#[cfg(test)]
mod tests;

use sixdot_core::settings::settings;
use sixdot_core::Chord;

pub use types::{Feedback, IndicatorState, Response, SessionEvent, SideEffects, TimerRequest};

use types::PendingTimer;

/// Stateful input session encapsulating all chord-entry logic.
pub struct InputSession {
    active: bool,
    chord: Chord,
    timer: PendingTimer,

    // Settings, copied at construction
    debounce_ms: u64,
    show_pending: bool,
    feedback_enabled: bool,
}

impl InputSession {
    /// Session configured from the global settings.
    pub fn new() -> Self {
        let s = settings();
        Self {
            active: false,
            chord: Chord::EMPTY,
            timer: PendingTimer::new(),
            debounce_ms: s.timing.debounce_ms,
            show_pending: s.indicator.show_pending,
            feedback_enabled: s.feedback.enabled,
        }
    }

    /// Session with an explicit debounce window, bypassing global settings.
    pub fn with_debounce_ms(debounce_ms: u64) -> Self {
        Self {
            active: false,
            chord: Chord::EMPTY,
            timer: PendingTimer::new(),
            debounce_ms,
            show_pending: true,
            feedback_enabled: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The chord accumulated since the last commit. Empty when idle.
    pub fn pending_chord(&self) -> Chord {
        self.chord
    }

    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    /// Static dispatch over the host-facing event type. The four named
    /// methods remain the primary API; this exists for hosts that funnel
    /// everything through one queue.
    pub fn handle(&mut self, event: SessionEvent) -> Response {
        match event {
            SessionEvent::Toggle => self.toggle(),
            SessionEvent::Dot(dot) => self.input_dot(dot),
            SessionEvent::Text(text) => self.filter_text(&text),
            SessionEvent::TimerFired { generation } => self.timer_fired(generation),
        }
    }
}

impl Default for InputSession {
    fn default() -> Self {
        Self::new()
    }
}
