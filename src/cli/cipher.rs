use crate::cipher::Mode;
use crate::cli::input::normalize;
use crate::deck::Deck;
use anyhow::{Context, Result};
use tracing::info;

/// Options for an encrypt or decrypt run.
#[derive(Debug, Clone, Default)]
pub struct CipherOptions {
    /// Passphrase as typed; normalized before keying
    pub passphrase: String,
    pub mode: Mode,
}

/// Key a deck from the options' passphrase and run `message` through it.
/// `message` is normalized first.
pub fn process_message(message: &str, options: &CipherOptions) -> Result<String> {
    let passphrase = normalize(&options.passphrase);
    let message = normalize(message);

    let mut deck =
        Deck::from_passphrase(&passphrase).context("failed to initialize deck")?;

    let result = match options.mode {
        Mode::Encrypt => deck.encrypt(&message).context("failed to encrypt")?,
        Mode::Decrypt => deck.decrypt(&message).context("failed to decrypt")?,
    };
    info!(mode = ?options.mode, letters = message.len(), "processed message");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_normalizes_inputs() {
        let opts = CipherOptions {
            passphrase: "crypto nomicon".into(),
            ..Default::default()
        };
        assert_eq!(process_message("solit aire", &opts).unwrap(), "KIRAK SFJAN");
    }

    #[test]
    fn test_decrypt_accepts_grouped_ciphertext() {
        let opts = CipherOptions {
            passphrase: "CRYPTONOMICON".into(),
            mode: Mode::Decrypt,
        };
        assert_eq!(process_message("KIRAK SFJAN", &opts).unwrap(), "SOLIT AIREX");
    }

    #[test]
    fn test_errors_carry_context() {
        let opts = CipherOptions {
            passphrase: "KEY1".into(),
            ..Default::default()
        };
        let err = process_message("HELLO", &opts).unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "failed to initialize deck: invalid character: '1'"
        );

        let opts = CipherOptions {
            passphrase: "KEY".into(),
            ..Default::default()
        };
        let err = process_message("HELLO!", &opts).unwrap_err();
        assert_eq!(format!("{:#}", err), "failed to encrypt: invalid character: '!'");
    }
}
