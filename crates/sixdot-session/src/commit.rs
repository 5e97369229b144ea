use tracing::{debug, debug_span};

use sixdot_core::Chord;

use super::types::Response;
use super::InputSession;

impl InputSession {
    /// Handle a commit-timer expiry from the host.
    ///
    /// A generation that no longer matches the live schedule was superseded
    /// by a later press and is ignored. A live generation commits the
    /// accumulated chord: the corresponding cell is handed to the host for
    /// insertion and the pending state is reset unconditionally, whether or
    /// not the host ends up having an insertion target.
    pub fn timer_fired(&mut self, generation: u64) -> Response {
        let _span = debug_span!("timer_fired", generation).entered();

        if !self.timer.matches(generation) {
            debug!("stale timer generation, ignoring");
            return Response::consumed();
        }

        let mut resp = Response::consumed();
        if let Some(cell) = self.chord.to_cell() {
            debug!(cell = %cell, "chord committed");
            resp.insert = Some(cell.to_string());
        }
        resp.preview = Some(String::new());
        self.reset_pending();
        resp
    }

    fn reset_pending(&mut self) {
        self.chord = Chord::EMPTY;
        self.timer.cancel();
    }
}
