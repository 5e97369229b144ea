//! Audio feedback capability: "play a named feedback sound".
//!
//! The platform strategy is selected once at startup; hosts without a usable
//! player get the null strategy. Playback is fire-and-forget and entirely
//! decorative: a missing or failing player degrades to silence.

use std::process::{Command, Stdio};

use sixdot_session::Feedback;

pub trait FeedbackPlayer {
    fn play(&self, feedback: Feedback);
}

/// No-op strategy for platforms without a command-line sound player.
pub struct NullPlayer;

impl FeedbackPlayer for NullPlayer {
    fn play(&self, _feedback: Feedback) {}
}

/// Spawns an external sound player.
pub struct CommandPlayer {
    program: &'static str,
    sound_on: &'static str,
    sound_off: &'static str,
}

impl FeedbackPlayer for CommandPlayer {
    fn play(&self, feedback: Feedback) {
        let sound = match feedback {
            Feedback::ModeOn => self.sound_on,
            Feedback::ModeOff => self.sound_off,
        };
        let _ = Command::new(self.program)
            .arg(sound)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
    }
}

/// Pick the playback strategy for the current platform.
#[cfg(target_os = "macos")]
pub fn platform_player() -> Box<dyn FeedbackPlayer> {
    Box::new(CommandPlayer {
        program: "afplay",
        sound_on: "/System/Library/Sounds/Pop.aiff",
        sound_off: "/System/Library/Sounds/Bottle.aiff",
    })
}

#[cfg(target_os = "linux")]
pub fn platform_player() -> Box<dyn FeedbackPlayer> {
    Box::new(CommandPlayer {
        program: "paplay",
        sound_on: "/usr/share/sounds/freedesktop/stereo/device-added.oga",
        sound_off: "/usr/share/sounds/freedesktop/stereo/device-removed.oga",
    })
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
pub fn platform_player() -> Box<dyn FeedbackPlayer> {
    Box::new(NullPlayer)
}
