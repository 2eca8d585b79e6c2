//! Simulation configuration and validation.

use serde::{Deserialize, Serialize};

use crate::strategy::{Strategy, UnknownStrategy};

/// Agent counts above this log a warning: battle duration grows rapidly
/// with more agents holding ever-larger hands.
pub const AGENT_WARN_THRESHOLD: usize = 6;

/// Configuration problems. All are fatal and reported before any game runs.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A strategy tag was not one of `h`, `l`, `r`.
    #[error(transparent)]
    UnknownStrategy(#[from] UnknownStrategy),
    /// Fewer than two agents: no battle can be fought, no winner can emerge.
    #[error("at least two agents are required, got {0}")]
    NotEnoughAgents(usize),
    /// More agents than `AgentId` can address.
    #[error("at most 255 agents are supported, got {0}")]
    TooManyAgents(usize),
    /// Zero rounds would make every win fraction undefined.
    #[error("round count must be positive")]
    ZeroRounds,
}

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub rounds: u32,
    /// One strategy per agent, in reporting order.
    pub strategies: Vec<Strategy>,
    /// Master seed; every game forks its own stream from it.
    pub seed: u64,
}

impl SimulationConfig {
    /// Create a validated configuration with the default seed.
    pub fn new(rounds: u32, strategies: Vec<Strategy>) -> Result<Self, ConfigError> {
        if rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if strategies.len() < 2 {
            return Err(ConfigError::NotEnoughAgents(strategies.len()));
        }
        if strategies.len() > 255 {
            return Err(ConfigError::TooManyAgents(strategies.len()));
        }

        Ok(Self {
            rounds,
            strategies,
            seed: 0,
        })
    }

    /// Parse one-letter strategy tags (`h`, `l`, `r`), one per agent.
    pub fn from_tags<S: AsRef<str>>(rounds: u32, tags: &[S]) -> Result<Self, ConfigError> {
        let strategies = tags
            .iter()
            .map(|tag| tag.as_ref().parse::<Strategy>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rounds, strategies)
    }

    /// Set the master seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of configured agents.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.strategies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tags_parses_in_order() {
        let config = SimulationConfig::from_tags(100, &["h", "l", "r"]).unwrap();

        assert_eq!(config.rounds, 100);
        assert_eq!(
            config.strategies,
            vec![Strategy::Highest, Strategy::Lowest, Strategy::Random]
        );
        assert_eq!(config.agent_count(), 3);
        assert_eq!(config.seed, 0);
    }

    #[test]
    fn test_unknown_tag_is_fatal() {
        let err = SimulationConfig::from_tags(10, &["h", "x"]).unwrap_err();
        match err {
            ConfigError::UnknownStrategy(inner) => assert_eq!(inner.tag, "x"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_too_few_agents() {
        assert_eq!(
            SimulationConfig::from_tags(10, &["h"]),
            Err(ConfigError::NotEnoughAgents(1))
        );
        let none: [&str; 0] = [];
        assert_eq!(
            SimulationConfig::from_tags(10, &none),
            Err(ConfigError::NotEnoughAgents(0))
        );
    }

    #[test]
    fn test_too_many_agents() {
        let strategies = vec![Strategy::Random; 256];
        assert_eq!(
            SimulationConfig::new(10, strategies),
            Err(ConfigError::TooManyAgents(256))
        );
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert_eq!(
            SimulationConfig::from_tags(0, &["h", "l"]),
            Err(ConfigError::ZeroRounds)
        );
    }

    #[test]
    fn test_with_seed() {
        let config = SimulationConfig::from_tags(1, &["h", "l"])
            .unwrap()
            .with_seed(99);
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn test_warn_threshold_is_not_an_error() {
        // Seven agents are slow, not invalid.
        let tags = ["h", "l", "r", "h", "l", "r", "h"];
        let config = SimulationConfig::from_tags(1, &tags).unwrap();
        assert!(config.agent_count() > AGENT_WARN_THRESHOLD);
    }

    #[test]
    fn test_error_messages() {
        let err = SimulationConfig::from_tags(5, &["q", "l"]).unwrap_err();
        assert!(err.to_string().contains("unknown strategy tag"));

        assert!(ConfigError::ZeroRounds.to_string().contains("positive"));
    }
}
