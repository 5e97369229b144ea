use tracing::debug;

use super::types::{Feedback, IndicatorState, Response};
use super::InputSession;

impl InputSession {
    /// Flip the mode flag. The next call on this session observes the new
    /// value immediately.
    ///
    /// An in-progress chord is deliberately left alone: a chord begun while
    /// active still commits after deactivation when its timer fires. See
    /// DESIGN.md for the rationale.
    pub fn toggle(&mut self) -> Response {
        self.active = !self.active;
        debug!(active = self.active, "mode toggled");

        let mut resp = Response::consumed();
        resp.indicator = Some(IndicatorState {
            active: self.active,
        });
        resp.side_effects.set_context_flag = Some(self.active);
        if self.feedback_enabled {
            resp.side_effects.feedback = Some(if self.active {
                Feedback::ModeOn
            } else {
                Feedback::ModeOff
            });
        }
        resp
    }
}
