//! Interactive host loop with a real debounce timer.
//!
//! A reader thread feeds stdin lines into an mpsc channel; the main loop
//! waits with `recv_timeout` against the pending commit deadline, which is
//! the session's single suspension point. Input lines:
//!
//! - digits `1`-`6` (any combination, e.g. `12`): press those dots as one
//!   burst — they land inside the same debounce window and form one chord
//! - `t` — toggle the input mode
//! - `q` — quit
//! - anything else — delivered as a typed-text event through the gate

use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use sixdot_core::Dot;
use sixdot_session::{InputSession, Response};

use crate::feedback::FeedbackPlayer;

enum LineEvent {
    Line(String),
    Eof,
}

struct LiveHost<'a> {
    session: InputSession,
    pending: Option<(u64, Instant)>,
    document: String,
    player: &'a dyn FeedbackPlayer,
}

impl<'a> LiveHost<'a> {
    fn new(player: &'a dyn FeedbackPlayer) -> Self {
        Self {
            session: InputSession::new(),
            pending: None,
            document: String::new(),
            player,
        }
    }

    fn apply(&mut self, resp: Response) {
        if let Some(req) = resp.timer {
            let due = Instant::now() + std::time::Duration::from_millis(req.delay_ms);
            self.pending = Some((req.generation, due));
        }
        if let Some(text) = resp.insert {
            self.document.push_str(&text);
            println!("document: {}", self.document);
        }
        if let Some(ind) = resp.indicator {
            println!("[mode {}]", if ind.active { "ON" } else { "OFF" });
        }
        if let Some(preview) = resp.preview {
            if !preview.is_empty() {
                println!("({})", preview);
            }
        }
        if let Some(feedback) = resp.side_effects.feedback {
            self.player.play(feedback);
        }
    }

    fn handle_line(&mut self, line: &str) {
        let trimmed = line.trim();
        match trimmed {
            "t" => {
                let resp = self.session.toggle();
                self.apply(resp);
            }
            _ if !trimmed.is_empty() && trimmed.bytes().all(|b| (b'1'..=b'6').contains(&b)) => {
                for b in trimmed.bytes() {
                    // Digits 1-6 always parse.
                    let dot = Dot::from_number(b - b'0').expect("digit range checked");
                    let resp = self.session.input_dot(dot);
                    self.apply(resp);
                }
            }
            _ => {
                let resp = self.session.filter_text(line);
                if !resp.consumed {
                    self.document.push_str(line);
                    println!("document: {}", self.document);
                }
                self.apply(resp);
            }
        }
    }

    fn fire_pending(&mut self, generation: u64) {
        self.pending = None;
        let resp = self.session.timer_fired(generation);
        self.apply(resp);
    }
}

pub fn run(player: &dyn FeedbackPlayer) -> io::Result<()> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("sixtool-stdin".into())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(LineEvent::Line(line)).is_err() {
                    return;
                }
            }
            let _ = tx.send(LineEvent::Eof);
        })
        .expect("failed to spawn stdin reader");

    println!("sixtool live mode — 1-6 press dots, t toggles, q quits");
    io::stdout().flush()?;

    let mut host = LiveHost::new(player);
    loop {
        let event = match host.pending {
            Some((generation, due)) => {
                let now = Instant::now();
                if due <= now {
                    host.fire_pending(generation);
                    continue;
                }
                match rx.recv_timeout(due - now) {
                    Ok(event) => event,
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        host.fire_pending(generation);
                        continue;
                    }
                    Err(mpsc::RecvTimeoutError::Disconnected) => break,
                }
            }
            None => match rx.recv() {
                Ok(event) => event,
                Err(_) => break,
            },
        };

        match event {
            LineEvent::Eof => break,
            LineEvent::Line(line) => {
                if line.trim() == "q" {
                    break;
                }
                host.handle_line(&line);
            }
        }
    }

    println!("final document: {}", host.document);
    Ok(())
}
