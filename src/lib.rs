//! Solitaire - a card-deck keystream cipher
//!
//! An implementation of Bruce Schneier's Solitaire (Pontifex) cipher. The
//! whole cipher state is a 54-card deck: 52 suit cards and two jokers.
//! Each keystream value comes from shuffling the deck one step and
//! reading a card.
//!
//! ## Step
//!
//! ```text
//! Move jokers → Triple cut → Count cut → Read output card
//! ```
//!
//! - **Move jokers**: joker A down one place, joker B down two (wrapping)
//! - **Triple cut**: swap the cards above and below the jokers
//! - **Count cut**: cut by the value of the bottom card, keeping it last
//! - **Output**: the top card's value counts down to the output card;
//!   jokers are skipped
//!
//! A passphrase keys the deck by running one step plus an extra count cut
//! per letter. Letters are combined with the keystream modulo 26 and the
//! result is written in blocks of five.
//!
//! ## Example
//!
//! ```
//! use solitaire::Deck;
//!
//! let mut deck = Deck::from_passphrase("CRYPTONOMICON").unwrap();
//! assert_eq!(deck.encrypt("SOLITAIRE").unwrap(), "KIRAK SFJAN");
//!
//! let mut deck = Deck::from_passphrase("CRYPTONOMICON").unwrap();
//! assert_eq!(deck.decrypt("KIRAKSFJAN").unwrap(), "SOLIT AIREX");
//! ```

pub mod card;
pub mod cipher;
pub mod cli;
pub mod deck;
pub mod error;
pub mod keying;
pub mod keystream;

pub use card::{Card, DECK_SIZE, JOKER_A, JOKER_B};
pub use cipher::{decrypt, encrypt, pad, Mode};
pub use deck::Deck;
pub use error::{CipherError, Result};
pub use keystream::{Keystream, KeystreamReport};
