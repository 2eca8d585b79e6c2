//! A playing agent: identity, strategy, and the hand it owns.

use serde::{Deserialize, Serialize};

use crate::core::{AgentId, Card, DrawSource, GameRng, Hand};
use crate::strategy::Strategy;

/// Cards dealt to every agent at the start of a game.
pub const HAND_SIZE: usize = 10;

/// One agent in a game.
///
/// Agents are created once per simulation; [`Agent::deal_hand`] replaces
/// the hand at the start of every game, and the agent persists across the
/// battles within it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    strategy: Strategy,
    hand: Hand,
}

impl Agent {
    /// Create an agent with an empty hand.
    #[must_use]
    pub fn new(id: AgentId, strategy: Strategy) -> Self {
        Self {
            id,
            strategy,
            hand: Hand::new(),
        }
    }

    /// This agent's identity.
    #[must_use]
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// This agent's decision policy.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The hand, read-only.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The hand, mutable. Battles draw into it; tests set it up.
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Replace the hand with a fresh deal.
    pub fn deal_hand(&mut self, deck: &mut dyn DrawSource, rng: &mut GameRng) {
        self.hand = Hand::from_cards(deck.deal(rng, HAND_SIZE));
    }

    /// Take one turn: play a card or return `None` to pass.
    ///
    /// Passing does not draw. The battle draws the replacement card, so the
    /// strategy contract stays select-and-remove only.
    pub fn play_turn(&mut self, table: Option<Card>, rng: &mut GameRng) -> Option<Card> {
        self.strategy.decide(&mut self.hand, table, rng)
    }

    /// Draw one card from the deck into the hand.
    pub fn draw(&mut self, deck: &mut dyn DrawSource, rng: &mut GameRng) -> Card {
        let card = deck.draw(rng);
        self.hand.add(card);
        card
    }
}
