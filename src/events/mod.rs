//! Structured game events and sinks.
//!
//! Replaces ad-hoc debug printing: battles and games report what happened
//! through [`EventSink`], and verbosity lives in the sink (or the logger
//! configuration behind it), not in the game code.

pub mod event;
pub mod sink;

pub use event::Event;
pub use sink::{EventSink, LogSink, NullSink, Recorder};
