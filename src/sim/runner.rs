//! The simulation driver: many independent games, one report.

use crate::core::{AgentMap, GameRng, WeightedDeck};
use crate::events::{EventSink, LogSink};
use crate::game::Game;

use super::config::{ConfigError, SimulationConfig, AGENT_WARN_THRESHOLD};
use super::report::SimulationReport;

/// Runs a configured simulation.
///
/// Games share nothing but the agent roster: every round re-deals the
/// hands and plays on an RNG stream forked from the master seed, so rounds
/// are independent and the whole run reproduces from one seed.
#[derive(Clone, Debug)]
pub struct SimulationRunner {
    config: SimulationConfig,
}

impl SimulationRunner {
    /// Create a runner for a validated configuration.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The configuration this runner was built with.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play every round, routing events through the `log` facade.
    pub fn run(&self) -> SimulationReport {
        self.run_with_sink(&mut LogSink)
    }

    /// Play every round, emitting events into the given sink.
    pub fn run_with_sink(&self, sink: &mut dyn EventSink) -> SimulationReport {
        if self.config.agent_count() > AGENT_WARN_THRESHOLD {
            log::warn!(
                "{} agents configured; games with more than {} agents can take a very long time",
                self.config.agent_count(),
                AGENT_WARN_THRESHOLD
            );
        }

        let mut master = GameRng::new(self.config.seed);
        let mut deck = WeightedDeck;
        let mut game = Game::new(&self.config.strategies);
        let mut wins = AgentMap::with_value(self.config.agent_count(), 0u32);

        for _ in 0..self.config.rounds {
            let mut rng = master.fork();
            let winner = game.play(&mut deck, &mut rng, sink);
            wins[winner] += 1;
        }

        SimulationReport::new(self.config.rounds, wins)
    }
}

/// Parse tags, validate, and run: the whole pipeline in one call.
///
/// Configuration errors are returned before any game is played.
pub fn run_tagged<S: AsRef<str>>(
    rounds: u32,
    tags: &[S],
    seed: u64,
) -> Result<SimulationReport, ConfigError> {
    let config = SimulationConfig::from_tags(rounds, tags)?.with_seed(seed);
    Ok(SimulationRunner::new(config).run())
}
