//! Agent identity and per-agent data storage.
//!
//! ## AgentId
//!
//! Type-safe agent identifier. Indices are 0-based positions in the
//! simulation's agent roster, which is also the order results are reported
//! in.
//!
//! ## AgentMap
//!
//! Per-agent data storage backed by `Vec` for O(1) access (win tallies and
//! the like). Supports iteration and indexing by `AgentId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Agent identifier supporting up to 255 agents.
///
/// Agent indices are 0-based: the first agent is `AgentId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u8);

impl AgentId {
    /// Create a new agent ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw agent index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all agent IDs for a roster of `agent_count` agents.
    pub fn all(agent_count: usize) -> impl Iterator<Item = AgentId> {
        (0..agent_count as u8).map(AgentId)
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "agent {}", self.0)
    }
}

/// Per-agent data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMap<T> {
    data: Vec<T>,
}

impl<T> AgentMap<T> {
    /// Create a new AgentMap with values from a factory function.
    ///
    /// The factory receives the `AgentId` for each agent.
    pub fn new(agent_count: usize, factory: impl Fn(AgentId) -> T) -> Self {
        assert!(agent_count > 0, "must have at least 1 agent");
        assert!(agent_count <= 255, "at most 255 agents supported");

        let data = (0..agent_count as u8).map(|i| factory(AgentId(i))).collect();

        Self { data }
    }

    /// Create a new AgentMap with all entries set to the same value.
    pub fn with_value(agent_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(agent_count, |_| value.clone())
    }

    /// Get the number of agents.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.data.len()
    }

    /// Iterate over (AgentId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (AgentId(i as u8), v))
    }
}

impl<T> Index<AgentId> for AgentMap<T> {
    type Output = T;

    fn index(&self, agent: AgentId) -> &Self::Output {
        &self.data[agent.index()]
    }
}

impl<T> IndexMut<AgentId> for AgentMap<T> {
    fn index_mut(&mut self, agent: AgentId) -> &mut Self::Output {
        &mut self.data[agent.index()]
    }
}
