use crate::card::{Card, DECK_SIZE, JOKER_A, JOKER_B};
use std::fmt;
use tracing::trace;

/// Index of the bottom card, which count cuts leave in place.
const BOTTOM: usize = DECK_SIZE - 1;

/// Ordered 54-card deck holding the whole cipher state.
///
/// The order is always a permutation of ranks `1..=54`. Every shuffle
/// operation rebuilds the order from sub-slices of the previous one, so
/// cards are only ever moved, never duplicated or dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Unkeyed deck: ranks 1..=52 in order, then joker A, then joker B.
    pub fn new() -> Self {
        let cards = (1..=DECK_SIZE as u8).filter_map(Card::new).collect();
        Self { cards }
    }

    /// Build a deck from an explicit order.
    /// Returns `None` unless `cards` is a permutation of all 54 ranks.
    pub fn from_cards(cards: Vec<Card>) -> Option<Self> {
        let deck = Self { cards };
        deck.is_permutation().then_some(deck)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Check that every rank appears exactly once.
    pub fn is_permutation(&self) -> bool {
        if self.cards.len() != DECK_SIZE {
            return false;
        }
        let mut seen = [false; DECK_SIZE + 1];
        for card in &self.cards {
            let rank = card.rank() as usize;
            if seen[rank] {
                return false;
            }
            seen[rank] = true;
        }
        true
    }

    /// Position of `target` in the deck.
    ///
    /// # Panics
    ///
    /// Panics if the card is missing, which means the permutation invariant
    /// has already been broken.
    pub fn locate(&self, target: Card) -> usize {
        match self.cards.iter().position(|&c| c == target) {
            Some(pos) => pos,
            None => panic!("card not found: {}", target),
        }
    }

    /// Rebuild the deck by concatenating the `(start, end)` slices in order.
    /// Pairs with `start > end` are skipped; callers make the ranges
    /// partition the deck.
    fn reorder(&mut self, ranges: &[(usize, usize)]) {
        let mut rebuilt = Vec::with_capacity(DECK_SIZE);
        for &(start, end) in ranges {
            if start <= end {
                rebuilt.extend_from_slice(&self.cards[start..end]);
            }
        }
        debug_assert_eq!(rebuilt.len(), DECK_SIZE, "reorder ranges must cover the deck");
        self.cards = rebuilt;
    }

    /// Move the card at `pos` down by `offset` places. A card at the bottom
    /// wraps to just below the top card rather than becoming the new top.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not a deck position.
    pub fn move_down(&mut self, mut pos: usize, offset: usize) {
        assert!(pos < DECK_SIZE, "position {} outside the deck", pos);
        for _ in 0..offset {
            if pos == BOTTOM {
                self.reorder(&[(0, 1), (BOTTOM, DECK_SIZE), (1, BOTTOM)]);
                pos = 1;
            } else {
                self.cards.swap(pos, pos + 1);
                pos += 1;
            }
        }
    }

    /// Joker A moves down one place, then joker B moves down two.
    pub fn move_jokers(&mut self) {
        let a = self.locate(JOKER_A);
        self.move_down(a, 1);

        let b = self.locate(JOKER_B);
        self.move_down(b, 2);
    }

    /// Swap the cards above the first joker with the cards below the second.
    pub fn triple_cut(&mut self) {
        let a = self.locate(JOKER_A);
        let b = self.locate(JOKER_B);
        let (lo, hi) = if a < b { (a, b + 1) } else { (b, a + 1) };
        self.reorder(&[(hi, DECK_SIZE), (lo, hi), (0, lo)]);
    }

    /// Move the top `count` cards to just above the bottom card.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds 53, since the bottom card never moves.
    pub fn count_cut(&mut self, count: usize) {
        assert!(count <= BOTTOM, "count cut of {} cards reaches the bottom card", count);
        self.reorder(&[(count, BOTTOM), (0, count), (BOTTOM, DECK_SIZE)]);
    }

    /// One full state transition: move jokers, triple cut, then count cut
    /// by the value of the bottom card.
    pub fn step(&mut self) {
        self.move_jokers();
        self.triple_cut();
        let count = self.cards[BOTTOM].value() as usize;
        self.count_cut(count);
        debug_assert!(self.is_permutation());
    }

    /// Advance the deck and return the next keystream value in `1..=52`.
    ///
    /// The top card's value counts down to the output card. A joker in that
    /// position produces nothing and the deck is stepped again.
    pub fn output(&mut self) -> u8 {
        loop {
            self.step();
            let count = self.cards[0].value() as usize;
            let card = self.cards[count];
            if !card.is_joker() {
                return card.value();
            }
            trace!(joker = %card, "skipping joker output");
        }
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
