//! Win tallies and fractions.

use serde::{Deserialize, Serialize};

use crate::core::{AgentId, AgentMap};

/// Outcome of a simulation: per-agent win counts over a number of rounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    rounds: u32,
    wins: AgentMap<u32>,
}

impl SimulationReport {
    /// Build a report from final tallies.
    ///
    /// Every game produces exactly one winner, so the tallies must sum to
    /// the round count.
    #[must_use]
    pub fn new(rounds: u32, wins: AgentMap<u32>) -> Self {
        let total: u32 = wins.iter().map(|(_, &w)| w).sum();
        assert_eq!(total, rounds, "win tallies must sum to the round count");
        Self { rounds, wins }
    }

    /// Number of games played.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Win count for one agent.
    #[must_use]
    pub fn wins(&self, agent: AgentId) -> u32 {
        self.wins[agent]
    }

    /// Win fraction per agent, in input agent order. Sums to 1.0.
    #[must_use]
    pub fn fractions(&self) -> Vec<f64> {
        self.wins
            .iter()
            .map(|(_, &w)| f64::from(w) / f64::from(self.rounds))
            .collect()
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (agent, &w) in self.wins.iter() {
            writeln!(f, "{}: {:.3}", agent, f64::from(w) / f64::from(self.rounds))?;
        }
        Ok(())
    }
}
