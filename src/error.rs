use thiserror::Error;

/// Errors surfaced by keying and keystream application.
///
/// Internal invariant violations (a card missing from the deck) are not
/// represented here; they panic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    #[error("invalid character: '{0}'")]
    InvalidCharacter(char),
}

pub type Result<T> = std::result::Result<T, CipherError>;
