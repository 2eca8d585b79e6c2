//! # skirmish
//!
//! A multiplayer elimination card game engine and strategy simulator.
//!
//! N agents contest "battles": each agent in turn must play a card strictly
//! higher than the current table card, or pass, drawing a replacement card
//! and sitting out the rest of the battle. The last agent standing leads
//! the next battle, and the game ends the moment a play empties someone's
//! hand. The simulation driver plays many independent games and reports a
//! win fraction per agent.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every game runs on a seeded, forkable RNG stream;
//!    the same configuration always produces the same report.
//!
//! 2. **Explicit state machines**: battles expose their status instead of
//!    hiding it in loop variables, and passing agents leave an explicit
//!    rotation; nothing is ever removed from a list being iterated.
//!
//! 3. **Events over prints**: battles and games emit structured events into
//!    a sink chosen by the caller; verbosity is logger configuration, not
//!    module state.
//!
//! ## Modules
//!
//! - `core`: cards, hands, draw sources, RNG, agent identity
//! - `strategy`: the three scripted decision policies
//! - `game`: agents, the battle state machine, game orchestration
//! - `events`: structured events and sinks
//! - `sim`: simulation configuration, driver, and reporting

pub mod core;
pub mod events;
pub mod game;
pub mod sim;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    AgentId, AgentMap, Card, DrawSource, GameRng, GameRngState, Hand, ScriptedDeck, WeightedDeck,
};
pub use crate::events::{Event, EventSink, LogSink, NullSink, Recorder};
pub use crate::game::{Agent, Battle, BattleResult, BattleStatus, Game, HAND_SIZE};
pub use crate::sim::{
    run_tagged, ConfigError, SimulationConfig, SimulationReport, SimulationRunner,
};
pub use crate::strategy::{Strategy, UnknownStrategy};
