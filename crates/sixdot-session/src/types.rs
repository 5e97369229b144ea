use sixdot_core::Dot;

/// Host-facing command/event type. Replaces string-keyed command dispatch:
/// every operation the host can deliver is one variant, bound statically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The user's mode-toggle command.
    Toggle,
    /// A dot-press command. The wire value was validated at the boundary
    /// (`Dot::from_bit`), so an out-of-contract dot is unrepresentable here.
    Dot(Dot),
    /// An intercepted typed-text event the host would otherwise insert verbatim.
    Text(String),
    /// A previously requested one-shot commit timer elapsed.
    TimerFired { generation: u64 },
}

/// Request for a one-shot commit timer.
///
/// The host schedules a timer for `delay_ms` and calls
/// `InputSession::timer_fired(generation)` when it elapses. A later request
/// supersedes this one: firing a superseded generation is a silent no-op, so
/// the host never needs to cancel anything itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub generation: u64,
    pub delay_ms: u64,
}

/// Mode-changed notification for the host's ON/OFF affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorState {
    pub active: bool,
}

/// Decorative mode-change sound. Entirely ignorable by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    ModeOn,
    ModeOff,
}

/// Orthogonal side-effects that accompany a response.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SideEffects {
    /// New value for the host's keybinding context flag (the dot-press
    /// keybindings are only live while the mode is active).
    pub set_context_flag: Option<bool>,
    pub feedback: Option<Feedback>,
}

/// Response from the session, returned to the host loop.
#[derive(Debug, PartialEq, Eq)]
pub struct Response {
    /// `false` → the host performs its default handling (e.g. inserting the
    /// intercepted text unchanged).
    pub consumed: bool,
    /// Committed cell to insert at the active insertion point. If the host
    /// has no active target it drops this silently; the session has already
    /// reset either way.
    pub insert: Option<String>,
    pub indicator: Option<IndicatorState>,
    /// Pending-dots preview: `Some("")` = clear, `Some(text)` = show,
    /// `None` = no change.
    pub preview: Option<String>,
    pub timer: Option<TimerRequest>,
    pub side_effects: SideEffects,
}

impl Response {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            insert: None,
            indicator: None,
            preview: None,
            timer: None,
            side_effects: SideEffects::default(),
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }
}

/// The single pending commit schedule, as a cancellable/replaceable handle.
///
/// At most one schedule is live at a time. `reschedule` supersedes any
/// outstanding one by bumping the generation; a fired generation that no
/// longer matches is stale and must be ignored by the caller.
#[derive(Debug)]
pub(crate) struct PendingTimer {
    generation: u64,
    armed: bool,
}

impl PendingTimer {
    pub(crate) fn new() -> Self {
        Self {
            generation: 0,
            armed: false,
        }
    }

    /// Supersede any outstanding schedule and arm a new one.
    /// Returns the generation the host must echo back.
    pub(crate) fn reschedule(&mut self) -> u64 {
        self.generation += 1;
        self.armed = true;
        self.generation
    }

    pub(crate) fn cancel(&mut self) {
        self.armed = false;
    }

    /// True when `generation` identifies the live schedule.
    pub(crate) fn matches(&self, generation: u64) -> bool {
        self.armed && self.generation == generation
    }
}
