use crate::deck::Deck;
use crate::error::{CipherError, Result};
use tracing::trace;

/// Output letters are grouped in blocks of this size.
pub const BLOCK_LEN: usize = 5;

/// Letter appended to plaintext until it fills whole blocks.
pub const PAD_LETTER: char = 'X';

const ALPHABET_LEN: u8 = 26;

/// Direction in which the keystream is combined with the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Encrypt,
    Decrypt,
}

/// Zero-based alphabet position of an uppercase letter (`A` is 0).
pub fn letter_index(c: char) -> Result<u8> {
    if c.is_ascii_uppercase() {
        Ok(c as u8 - b'A')
    } else {
        Err(CipherError::InvalidCharacter(c))
    }
}

fn index_letter(index: u8) -> char {
    (b'A' + index % ALPHABET_LEN) as char
}

/// Pad `plaintext` with `X` up to a multiple of the block length.
pub fn pad(plaintext: &str) -> String {
    let mut padded = plaintext.to_string();
    let rem = padded.chars().count() % BLOCK_LEN;
    if rem != 0 {
        padded.extend(std::iter::repeat(PAD_LETTER).take(BLOCK_LEN - rem));
    }
    padded
}

impl Deck {
    /// Combine `message` with the deck's keystream.
    ///
    /// The whole message is validated before the deck is advanced, so an
    /// invalid character yields an error and no output. When decrypting,
    /// each keystream value `k` is replaced by `52 - k`, which is the
    /// additive inverse of `k` modulo 26. A space is inserted after every
    /// block of output letters.
    pub fn apply_keystream(&mut self, message: &str, mode: Mode) -> Result<String> {
        let letters = message
            .chars()
            .map(letter_index)
            .collect::<Result<Vec<u8>>>()?;
        trace!(?mode, len = letters.len(), "applying keystream");

        let mut keyed = String::with_capacity(letters.len() + letters.len() / BLOCK_LEN);
        for (i, letter) in letters.into_iter().enumerate() {
            if i > 0 && i % BLOCK_LEN == 0 {
                keyed.push(' ');
            }

            let mut output = self.output();
            if mode == Mode::Decrypt {
                output = 52 - output;
            }
            keyed.push(index_letter(letter + output));
        }
        Ok(keyed)
    }

    /// Pad and encrypt `plaintext`.
    pub fn encrypt(&mut self, plaintext: &str) -> Result<String> {
        self.apply_keystream(&pad(plaintext), Mode::Encrypt)
    }

    /// Decrypt `ciphertext`. Padding added on encryption is left in place.
    pub fn decrypt(&mut self, ciphertext: &str) -> Result<String> {
        self.apply_keystream(ciphertext, Mode::Decrypt)
    }
}

/// Key a fresh deck from `passphrase` and encrypt `plaintext` with it.
pub fn encrypt(passphrase: &str, plaintext: &str) -> Result<String> {
    Deck::from_passphrase(passphrase)?.encrypt(plaintext)
}

/// Key a fresh deck from `passphrase` and decrypt `ciphertext` with it.
pub fn decrypt(passphrase: &str, ciphertext: &str) -> Result<String> {
    Deck::from_passphrase(passphrase)?.decrypt(ciphertext)
}
