//! Event sinks: where game events go.

use im::Vector;

use super::event::Event;

/// Receiver for game events.
///
/// Battles and games emit into a sink passed in by the caller; they never
/// decide themselves whether anyone is listening.
pub trait EventSink {
    /// Handle one event.
    fn emit(&mut self, event: Event);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: Event) {}
}

/// Forwards events to the `log` facade.
///
/// Per-turn events go to `trace`, battle and game results to `debug`, so
/// logger configuration controls verbosity.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: Event) {
        match event {
            Event::BattleStarted { leader } => log::trace!("battle starts, {} leads", leader),
            Event::CardPlayed { agent, card } => log::trace!("{} plays {}", agent, card),
            Event::Passed { agent, drew } => log::trace!("{} passes and draws {}", agent, drew),
            Event::BattleWon { winner } => log::debug!("{} wins the battle", winner),
            Event::GameWon { winner } => log::debug!("{} wins the game", winner),
        }
    }
}

/// Records every event in order.
///
/// Backed by a persistent vector, so recorded histories clone in O(1).
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    events: Vector<Event>,
}

impl Recorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events seen so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &Vector<Event> {
        &self.events
    }
}

impl EventSink for Recorder {
    fn emit(&mut self, event: Event) {
        self.events.push_back(event);
    }
}
