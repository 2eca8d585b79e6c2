//! Card ranks and draw weights.
//!
//! There are no suits: a card is just its rank. Ranks run from 2 up to the
//! Joker, with the face cards mapped onto the integers above 10. The deck is
//! an infinite supply, so the only per-card data the rest of the crate needs
//! is the rank's draw weight: every rank from 2 through Ace is equally
//! likely, and the Joker is half as likely as any single one of them.

use serde::{Deserialize, Serialize};

/// A single card, identified entirely by its rank.
///
/// Ranks 2-10 are the number cards; 11-15 are Jack, Queen, King, Ace and
/// Joker. `Card` is `Copy` and totally ordered by rank, which is the only
/// comparison the game ever makes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Lowest rank in the game.
    pub const MIN_RANK: u8 = 2;
    /// Highest rank in the game (the Joker).
    pub const MAX_RANK: u8 = 15;
    /// Number of distinct ranks.
    pub const RANK_COUNT: usize = (Self::MAX_RANK - Self::MIN_RANK + 1) as usize;

    pub const JACK: Card = Card(11);
    pub const QUEEN: Card = Card(12);
    pub const KING: Card = Card(13);
    pub const ACE: Card = Card(14);
    pub const JOKER: Card = Card(15);

    /// Create a card with the given rank.
    ///
    /// Panics if the rank is outside `2..=15`.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        assert!(
            Self::MIN_RANK <= rank && rank <= Self::MAX_RANK,
            "card rank out of range"
        );
        Self(rank)
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Relative draw weight of this rank.
    ///
    /// Every rank from 2 through Ace weighs 4; the Joker weighs 2, making it
    /// half as likely as any single other rank.
    #[must_use]
    pub const fn draw_weight(self) -> u32 {
        if self.0 == Self::MAX_RANK {
            2
        } else {
            4
        }
    }

    /// Whether this card may be played on the given table card.
    ///
    /// Any card beats an empty table; otherwise the play must be strictly
    /// higher.
    #[must_use]
    pub fn beats(self, table: Option<Card>) -> bool {
        table.map_or(true, |top| self > top)
    }

    /// All ranks in ascending order.
    pub fn all() -> impl Iterator<Item = Card> {
        (Self::MIN_RANK..=Self::MAX_RANK).map(Card)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Card::JACK => write!(f, "J"),
            Card::QUEEN => write!(f, "Q"),
            Card::KING => write!(f, "K"),
            Card::ACE => write!(f, "A"),
            Card::JOKER => write!(f, "Joker"),
            Card(rank) => write!(f, "{}", rank),
        }
    }
}
