//! Deterministic script replayer: parses an event script, drives a fresh
//! session through a virtual-clock host, and reports the resulting document
//! plus an event log.
//!
//! Script format, one directive per line (`#` starts a comment):
//!
//! ```text
//! toggle        # flip the input mode
//! dot 1         # press one dot (number 1-6)
//! wait 200      # advance the clock by 200 ms
//! text a        # deliver a typed-text event (rest of line)
//! text \s\n     # \s = space, \n = newline, \t = tab, \\ = backslash
//! ```
//!
//! The end of the script advances the clock past the debounce window, so a
//! trailing `wait` is not required to see the final commit.

use serde::Serialize;

use sixdot_core::Dot;
use sixdot_session::{InputSession, Response};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Toggle,
    Dot(Dot),
    Text(String),
    Wait(u64),
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown directive {found:?}")]
    UnknownDirective { line: usize, found: String },
    #[error("line {line}: invalid dot number {value:?} (expected 1-6)")]
    InvalidDot { line: usize, value: String },
    #[error("line {line}: invalid wait duration {value:?}")]
    InvalidWait { line: usize, value: String },
}

pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (directive, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((d, r)) => (d, r.trim()),
            None => (trimmed, ""),
        };
        let step = match directive {
            "toggle" => ScriptStep::Toggle,
            "dot" => {
                let dot = rest
                    .parse::<u8>()
                    .ok()
                    .and_then(Dot::from_number)
                    .ok_or_else(|| ScriptError::InvalidDot {
                        line,
                        value: rest.to_string(),
                    })?;
                ScriptStep::Dot(dot)
            }
            "wait" => {
                let ms = rest.parse::<u64>().map_err(|_| ScriptError::InvalidWait {
                    line,
                    value: rest.to_string(),
                })?;
                ScriptStep::Wait(ms)
            }
            // A bare `text` delivers the empty string. Whitespace payloads
            // survive the line trimming via escapes.
            "text" => ScriptStep::Text(unescape(rest)),
            other => {
                return Err(ScriptError::UnknownDirective {
                    line,
                    found: other.to_string(),
                })
            }
        };
        steps.push(step);
    }
    Ok(steps)
}

/// Expand `\s`, `\n`, `\t`, and `\\` in a text payload. Anything else after
/// a backslash is kept as-is.
fn unescape(payload: &str) -> String {
    let mut out = String::with_capacity(payload.len());
    let mut chars = payload.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('s') => out.push(' '),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[derive(Debug, Serialize)]
pub struct ReplayOutcome {
    pub document: String,
    pub events: Vec<String>,
    pub mode_active: bool,
}

/// Virtual-clock host: honors `TimerRequest`s, collects insertions, and logs
/// every observable effect.
struct ReplayHost {
    session: InputSession,
    now_ms: u64,
    pending: Option<(u64, u64)>,
    document: String,
    events: Vec<String>,
}

impl ReplayHost {
    fn new() -> Self {
        Self {
            session: InputSession::new(),
            now_ms: 0,
            pending: None,
            document: String::new(),
            events: Vec::new(),
        }
    }

    fn step(&mut self, step: &ScriptStep) {
        match step {
            ScriptStep::Toggle => {
                let resp = self.session.toggle();
                self.apply(resp);
            }
            ScriptStep::Dot(dot) => {
                let resp = self.session.input_dot(*dot);
                self.apply(resp);
            }
            ScriptStep::Text(text) => {
                let resp = self.session.filter_text(text);
                if resp.consumed {
                    self.events.push(format!("drop {text:?}"));
                } else {
                    self.document.push_str(text);
                    self.events.push(format!("forward {text:?}"));
                }
                self.apply(resp);
            }
            ScriptStep::Wait(ms) => self.advance(*ms),
        }
    }

    fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
        if let Some((generation, due)) = self.pending {
            if due <= self.now_ms {
                self.pending = None;
                let resp = self.session.timer_fired(generation);
                self.apply(resp);
            }
        }
    }

    fn apply(&mut self, resp: Response) {
        if let Some(req) = resp.timer {
            self.pending = Some((req.generation, self.now_ms + req.delay_ms));
        }
        if let Some(text) = resp.insert {
            self.events.push(format!("insert {text}"));
            self.document.push_str(&text);
        }
        if let Some(ind) = resp.indicator {
            self.events
                .push(format!("mode {}", if ind.active { "ON" } else { "OFF" }));
        }
    }
}

pub fn run_script(steps: &[ScriptStep]) -> ReplayOutcome {
    let mut host = ReplayHost::new();
    for step in steps {
        host.step(step);
    }
    // Flush: let any pending chord commit.
    host.advance(host.session.debounce_ms() + 1);
    ReplayOutcome {
        document: host.document,
        events: host.events,
        mode_active: host.session.is_active(),
    }
}
