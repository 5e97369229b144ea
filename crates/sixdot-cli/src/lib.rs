//! Host glue and diagnostics for the sixdot engine: the `sixtool` binary,
//! the script replayer, the live stdin host loop, and audio feedback.

pub mod commands;
pub mod feedback;
pub mod live;
pub mod replay;
pub mod trace_init;
