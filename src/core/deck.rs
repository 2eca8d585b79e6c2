//! Draw sources: the weighted infinite deck and a scripted stand-in.

use std::collections::VecDeque;

use smallvec::SmallVec;

use super::card::Card;
use super::rng::GameRng;

/// Something cards can be drawn from.
///
/// The game only ever draws; there is no discard pile and no reshuffling.
/// Keeping the seam behind a trait lets tests and replays script the exact
/// cards a game will see.
pub trait DrawSource {
    /// Draw a single card.
    fn draw(&mut self, rng: &mut GameRng) -> Card;

    /// Draw `n` independent cards.
    fn deal(&mut self, rng: &mut GameRng, n: usize) -> SmallVec<[Card; 16]> {
        (0..n).map(|_| self.draw(rng)).collect()
    }
}

/// The standard infinite deck.
///
/// Stateless: every draw is an independent weighted sample over the rank
/// set, with the Joker at half the weight of any other rank.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeightedDeck;

impl WeightedDeck {
    const WEIGHTS: [u32; Card::RANK_COUNT] = {
        let mut weights = [0u32; Card::RANK_COUNT];
        let mut i = 0;
        while i < Card::RANK_COUNT {
            weights[i] = Card::new(Card::MIN_RANK + i as u8).draw_weight();
            i += 1;
        }
        weights
    };
}

impl DrawSource for WeightedDeck {
    fn draw(&mut self, rng: &mut GameRng) -> Card {
        let idx = rng
            .choose_weighted(&Self::WEIGHTS)
            .expect("rank weights are fixed and non-zero");
        Card::new(Card::MIN_RANK + idx as u8)
    }
}

/// Deterministic draw source that replays a fixed sequence.
///
/// Used by scenario tests and replays to pin down exactly which cards a
/// game sees. Draws panic once the script runs dry.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDeck {
    cards: VecDeque<Card>,
}

impl ScriptedDeck {
    /// Create a scripted deck serving cards in the given order.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Cards remaining in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl DrawSource for ScriptedDeck {
    fn draw(&mut self, _rng: &mut GameRng) -> Card {
        self.cards
            .pop_front()
            .expect("scripted deck ran out of cards")
    }
}
