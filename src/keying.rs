//! Passphrase key scheduling.

use crate::cipher::letter_index;
use crate::deck::Deck;
use crate::error::Result;
use tracing::debug;

impl Deck {
    /// Key a deck from `passphrase`.
    ///
    /// Starting from the ordered deck, each letter performs one full step
    /// followed by an extra count cut of `letter_index + 1` cards. The
    /// passphrase must be uppercase `A-Z` only; an empty passphrase leaves
    /// the deck ordered.
    pub fn from_passphrase(passphrase: &str) -> Result<Self> {
        let letters = passphrase
            .chars()
            .map(letter_index)
            .collect::<Result<Vec<u8>>>()?;

        let mut deck = Deck::new();
        for letter in letters {
            deck.step();
            deck.count_cut(letter as usize + 1);
        }

        debug!(passphrase_len = passphrase.len(), "keyed deck");
        Ok(deck)
    }
}
