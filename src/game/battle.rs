//! The battle state machine: one elimination sub-round.
//!
//! A battle walks a rotation of active agents. Each agent in turn either
//! plays a card strictly higher than the table card, or passes: it draws a
//! replacement card and leaves the rotation for the rest of the battle.
//! The last agent standing wins the battle; a play that empties a hand
//! wins the whole game on the spot.
//!
//! The rotation is an explicit list plus a cursor. Removing a passing agent
//! leaves the cursor on the slot the removal shifted into, which is exactly
//! the next agent in the original order, so nobody is skipped and the
//! round never restarts.

use crate::core::{AgentId, Card, DrawSource, GameRng};
use crate::events::{Event, EventSink};

use super::agent::Agent;

/// Where a battle currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleStatus {
    /// Two or more agents are still in the rotation.
    Active,
    /// The battle is over; this agent won it.
    Won(AgentId),
}

/// Outcome of a finished battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleResult {
    /// Winner of the battle; leads the next one.
    pub winner: AgentId,
    /// Set when a play emptied the winner's hand, ending the game.
    pub game_winner: Option<AgentId>,
}

/// One elimination sub-round among a set of agents.
#[derive(Clone, Debug)]
pub struct Battle {
    /// Still-active agents in turn order. Shrinks as agents pass.
    active: Vec<AgentId>,
    /// Index into `active` of the agent to act next.
    cursor: usize,
    /// Highest card played so far; `None` until the first play.
    table: Option<Card>,
    game_winner: Option<AgentId>,
}

impl Battle {
    /// Start a battle with the given turn order.
    #[must_use]
    pub fn new(turn_order: Vec<AgentId>) -> Self {
        assert!(turn_order.len() >= 2, "a battle needs at least two agents");
        Self {
            active: turn_order,
            cursor: 0,
            table: None,
            game_winner: None,
        }
    }

    /// The current table card; `None` until the first play.
    #[must_use]
    pub fn table(&self) -> Option<Card> {
        self.table
    }

    /// Still-active agents in turn order.
    #[must_use]
    pub fn active_agents(&self) -> &[AgentId] {
        &self.active
    }

    /// Current status.
    ///
    /// A battle is won as soon as a play empties a hand or the rotation
    /// shrinks to one agent; the lone survivor gets no further turn.
    #[must_use]
    pub fn status(&self) -> BattleStatus {
        if let Some(winner) = self.game_winner {
            BattleStatus::Won(winner)
        } else if self.active.len() == 1 {
            BattleStatus::Won(self.active[0])
        } else {
            BattleStatus::Active
        }
    }

    /// Give the next agent in the rotation its turn.
    ///
    /// Must only be called while the battle is [`BattleStatus::Active`].
    pub fn take_turn(
        &mut self,
        agents: &mut [Agent],
        deck: &mut dyn DrawSource,
        rng: &mut GameRng,
        sink: &mut dyn EventSink,
    ) {
        assert!(
            self.status() == BattleStatus::Active,
            "battle is already won"
        );

        let id = self.active[self.cursor];
        let agent = &mut agents[id.index()];

        match agent.play_turn(self.table, rng) {
            Some(card) => {
                debug_assert!(card.beats(self.table), "play must beat the table card");
                self.table = Some(card);
                sink.emit(Event::CardPlayed { agent: id, card });

                if agent.hand().is_empty() {
                    self.game_winner = Some(id);
                } else {
                    self.cursor = (self.cursor + 1) % self.active.len();
                }
            }
            None => {
                let drew = agent.draw(deck, rng);
                sink.emit(Event::Passed { agent: id, drew });

                self.active.remove(self.cursor);
                if self.cursor == self.active.len() {
                    self.cursor = 0;
                }
            }
        }
    }

    /// Run the battle to completion.
    pub fn run(
        &mut self,
        agents: &mut [Agent],
        deck: &mut dyn DrawSource,
        rng: &mut GameRng,
        sink: &mut dyn EventSink,
    ) -> BattleResult {
        while self.status() == BattleStatus::Active {
            self.take_turn(agents, deck, rng, sink);
        }

        let BattleStatus::Won(winner) = self.status() else {
            unreachable!("the loop exits only once the battle is won");
        };
        sink.emit(Event::BattleWon { winner });

        BattleResult {
            winner,
            game_winner: self.game_winner,
        }
    }
}
