use crate::deck::Deck;
use crate::error::Result;
use serde::Serialize;

/// Endless iterator over a deck's keystream values (`1..=52`).
///
/// Borrows the deck mutably; every item advances it.
pub struct Keystream<'a> {
    deck: &'a mut Deck,
}

impl Iterator for Keystream<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.deck.output())
    }
}

impl Deck {
    pub fn keystream(&mut self) -> Keystream<'_> {
        Keystream { deck: self }
    }
}

/// The first `count` keystream values for a passphrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeystreamReport {
    pub passphrase_length: usize,
    pub count: usize,
    pub values: Vec<u8>,
}

impl KeystreamReport {
    pub fn generate(passphrase: &str, count: usize) -> Result<Self> {
        let mut deck = Deck::from_passphrase(passphrase)?;
        let values = deck.keystream().take(count).collect();
        Ok(Self {
            passphrase_length: passphrase.chars().count(),
            count,
            values,
        })
    }

    /// Values as space-separated decimal numbers.
    pub fn to_plain(&self) -> String {
        self.values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
