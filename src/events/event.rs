//! Everything observable that happens during a game.

use serde::{Deserialize, Serialize};

use crate::core::{AgentId, Card};

/// A structured game event.
///
/// Events flow from the battle and game loops into an [`EventSink`]
/// chosen by the caller; what to do with them (log, record, drop) is the
/// sink's business, never the game's.
///
/// [`EventSink`]: super::EventSink
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A new battle began with this agent leading the rotation.
    BattleStarted { leader: AgentId },
    /// An agent played a card onto the table.
    CardPlayed { agent: AgentId, card: Card },
    /// An agent had no playable card: it drew one and left the rotation.
    Passed { agent: AgentId, drew: Card },
    /// The battle ended with one agent still standing.
    BattleWon { winner: AgentId },
    /// A play emptied this agent's hand and ended the game.
    GameWon { winner: AgentId },
}
