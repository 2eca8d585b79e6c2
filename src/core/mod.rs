//! Core building blocks: cards, hands, draw sources, RNG, agent identity.
//!
//! Everything here is game-logic-free; the `game` module combines these
//! pieces into battles and games.

pub mod agent;
pub mod card;
pub mod deck;
pub mod hand;
pub mod rng;

pub use agent::{AgentId, AgentMap};
pub use card::Card;
pub use deck::{DrawSource, ScriptedDeck, WeightedDeck};
pub use hand::Hand;
pub use rng::{GameRng, GameRngState};
