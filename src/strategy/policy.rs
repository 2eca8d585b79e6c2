//! The three scripted decision policies.

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameRng, Hand};

/// Error for an unrecognized strategy tag.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown strategy tag {tag:?} (expected \"h\", \"l\", or \"r\")")]
pub struct UnknownStrategy {
    /// The tag that failed to parse.
    pub tag: String,
}

/// A scripted decision policy.
///
/// Kept as a tagged variant with one explicit dispatch rather than a trait
/// object: the set of policies is closed and the dispatch is a three-arm
/// match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Always play the highest playable card.
    Highest,
    /// Always play the lowest playable card, passing only when stuck.
    Lowest,
    /// Play a uniformly random playable card.
    Random,
}

impl Strategy {
    /// Pick a card to play on the given table card, or `None` to pass.
    ///
    /// The chosen card is removed from the hand before it is returned. On a
    /// pass the hand is left untouched; drawing the replacement card is the
    /// battle's job.
    ///
    /// `Random` selects uniformly among the playable *cards*, duplicates
    /// included: a hand with two 7s and one 9 plays a 7 twice as often as
    /// the 9.
    pub fn decide(self, hand: &mut Hand, table: Option<Card>, rng: &mut GameRng) -> Option<Card> {
        let playable = hand.playable(table);
        if playable.is_empty() {
            return None;
        }

        let card = match self {
            Strategy::Highest => playable[playable.len() - 1],
            Strategy::Lowest => playable[0],
            Strategy::Random => *rng.choose(playable).expect("playable set is non-empty"),
        };

        hand.remove_one(card);
        Some(card)
    }

    /// The one-letter tag used to configure this strategy.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Strategy::Highest => "h",
            Strategy::Lowest => "l",
            Strategy::Random => "r",
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" => Ok(Strategy::Highest),
            "l" => Ok(Strategy::Lowest),
            "r" => Ok(Strategy::Random),
            other => Err(UnknownStrategy {
                tag: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
