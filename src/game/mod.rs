//! Gameplay: agents, the battle state machine, and game orchestration.

pub mod agent;
pub mod battle;
pub mod game;

pub use agent::{Agent, HAND_SIZE};
pub use battle::{Battle, BattleResult, BattleStatus};
pub use game::Game;
