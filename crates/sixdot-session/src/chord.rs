use tracing::{debug, debug_span};

use sixdot_core::Dot;

use super::types::{Response, TimerRequest};
use super::InputSession;

impl InputSession {
    /// Merge a dot press into the pending chord and (re)schedule the commit
    /// timer. Ignored while the mode is inactive.
    ///
    /// Every press supersedes the outstanding timer, so presses arriving
    /// within the debounce window of the most recent one coalesce into the
    /// same chord. Pressing a dot already in the chord is idempotent.
    pub fn input_dot(&mut self, dot: Dot) -> Response {
        let _span = debug_span!("input_dot", dot = dot.number()).entered();

        if !self.active {
            debug!("mode inactive, dot ignored");
            return Response::consumed();
        }

        self.chord = self.chord.with(dot);
        let generation = self.timer.reschedule();
        debug!(chord = %self.chord.dot_numbers(), generation, "chord updated");

        let mut resp = Response::consumed();
        resp.timer = Some(TimerRequest {
            generation,
            delay_ms: self.debounce_ms,
        });
        if self.show_pending {
            resp.preview = Some(pending_preview(&self.chord.dot_numbers()));
        }
        resp
    }
}

/// Human-readable pending display, e.g. "dots 1-2" for dot numbers "12".
fn pending_preview(dot_numbers: &str) -> String {
    let mut joined = String::new();
    for (i, c) in dot_numbers.chars().enumerate() {
        if i > 0 {
            joined.push('-');
        }
        joined.push(c);
    }
    format!("dots {}", joined)
}

#[cfg(test)]
mod tests {
    use super::pending_preview;

    #[test]
    fn test_pending_preview() {
        assert_eq!(pending_preview("12"), "dots 1-2");
        assert_eq!(pending_preview("145"), "dots 1-4-5");
        assert_eq!(pending_preview("3"), "dots 3");
    }
}
