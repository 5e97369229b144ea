use tracing::debug;

use sixdot_core::text::is_whitespace_only;

use super::types::Response;
use super::InputSession;

impl InputSession {
    /// Decide whether an intercepted typed-text event passes through.
    ///
    /// Mode inactive: everything passes. Mode active: only strings that are
    /// entirely whitespace pass (so navigation and paragraph breaks remain
    /// typable while composing); everything else is a stray key event
    /// belonging to a dot-press command and is dropped whole, including
    /// mixed strings and the empty string.
    pub fn filter_text(&self, text: &str) -> Response {
        if !self.active || is_whitespace_only(text) {
            return Response::not_consumed();
        }
        debug!(len = text.len(), "typed text dropped while mode active");
        Response::consumed()
    }
}
