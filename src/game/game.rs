//! Game orchestration: dealing, battle sequencing, and the win condition.

use crate::core::{AgentId, DrawSource, GameRng};
use crate::events::{Event, EventSink};
use crate::strategy::Strategy;

use super::agent::Agent;
use super::battle::Battle;

/// A full game: a fixed roster of agents playing battles until one of them
/// empties its hand.
///
/// The roster never changes across battles; only the battle rotation
/// shrinks as agents pass. The winner of each battle leads the next.
#[derive(Clone, Debug)]
pub struct Game {
    agents: Vec<Agent>,
}

impl Game {
    /// Create a game with one agent per strategy, in the given order.
    #[must_use]
    pub fn new(strategies: &[Strategy]) -> Self {
        assert!(strategies.len() >= 2, "a game needs at least two agents");
        assert!(strategies.len() <= 255, "at most 255 agents supported");

        let agents = strategies
            .iter()
            .enumerate()
            .map(|(i, &strategy)| Agent::new(AgentId::new(i as u8), strategy))
            .collect();

        Self { agents }
    }

    /// The agent roster, in input order.
    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Play one game to completion and return the winner.
    ///
    /// Deals every agent a fresh hand, then runs battles until a play
    /// empties someone's hand. The opening leader is drawn from the agents
    /// holding the highest dealt card; after that, each battle's winner
    /// leads the next.
    pub fn play(
        &mut self,
        deck: &mut dyn DrawSource,
        rng: &mut GameRng,
        sink: &mut dyn EventSink,
    ) -> AgentId {
        for agent in &mut self.agents {
            agent.deal_hand(deck, rng);
        }

        let mut leader = self.opening_leader(rng);
        loop {
            sink.emit(Event::BattleStarted { leader });

            let order = rotate_from(self.agents.len(), leader);
            let result = Battle::new(order).run(&mut self.agents, deck, rng, sink);

            if let Some(winner) = result.game_winner {
                sink.emit(Event::GameWon { winner });
                return winner;
            }
            leader = result.winner;
        }
    }

    /// The agent leading the first battle: a holder of the single highest
    /// dealt card, ties broken uniformly at random.
    fn opening_leader(&self, rng: &mut GameRng) -> AgentId {
        let best = self
            .agents
            .iter()
            .filter_map(|agent| agent.hand().highest())
            .max()
            .expect("hands were just dealt");

        let tied: Vec<AgentId> = self
            .agents
            .iter()
            .filter(|agent| agent.hand().highest() == Some(best))
            .map(|agent| agent.id())
            .collect();

        *rng.choose(&tied).expect("some agent holds the best card")
    }
}

/// The full roster rotated so `start` goes first.
fn rotate_from(agent_count: usize, start: AgentId) -> Vec<AgentId> {
    (0..agent_count)
        .map(|i| AgentId::new(((start.index() + i) % agent_count) as u8))
        .collect()
}
