//! An agent's hand: a sorted multiset of cards.
//!
//! The hand is kept sorted so min/max queries are O(1) and the playable
//! query is a suffix slice. Sortedness is an internal aid; callers only see
//! multiset semantics. Hands hold one owner's cards exclusively: a card is
//! inserted once when dealt or drawn and removed exactly once when played.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;

/// Hands start at 10 cards and grow by one per pass; 16 inline slots cover
/// the common case without heap allocation.
type CardVec = SmallVec<[Card; 16]>;

/// A sorted multiset of cards owned by one agent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: CardVec,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from cards in arbitrary order.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: CardVec = cards.into_iter().collect();
        cards.sort_unstable();
        Self { cards }
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in ascending rank order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Insert a card, keeping sorted order.
    pub fn add(&mut self, card: Card) {
        let at = self.cards.partition_point(|&c| c <= card);
        self.cards.insert(at, card);
    }

    /// Lowest card, if any.
    #[must_use]
    pub fn lowest(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Highest card, if any.
    #[must_use]
    pub fn highest(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// All cards strictly higher than the table card.
    ///
    /// An empty table makes every card playable. The result is ascending, so
    /// its first element is the lowest playable card and its last the
    /// highest.
    #[must_use]
    pub fn playable(&self, table: Option<Card>) -> &[Card] {
        match table {
            None => &self.cards,
            Some(top) => {
                let from = self.cards.partition_point(|&c| c <= top);
                &self.cards[from..]
            }
        }
    }

    /// Remove exactly one instance of the given card.
    ///
    /// The card must be present: the game only ever removes a card it just
    /// selected from this hand, so a miss is a broken invariant and panics.
    pub fn remove_one(&mut self, card: Card) {
        let at = self
            .cards
            .iter()
            .position(|&c| c == card)
            .unwrap_or_else(|| panic!("card {} not in hand", card));
        self.cards.remove(at);
    }
}
