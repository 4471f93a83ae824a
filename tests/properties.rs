use proptest::prelude::*;
use solitaire::{pad, CipherError, Deck, Mode};

#[derive(Debug, Clone)]
enum Op {
    MoveJokers,
    TripleCut,
    CountCut(usize),
    Step,
    Output,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::MoveJokers),
        Just(Op::TripleCut),
        (0usize..=53).prop_map(Op::CountCut),
        Just(Op::Step),
        Just(Op::Output),
    ]
}

/// Any string containing at least one character outside A-Z.
fn arb_invalid_text() -> impl Strategy<Value = String> {
    ("[A-Z]{0,8}", "[a-z0-9 !?.é]", "[A-Z]{0,8}")
        .prop_map(|(head, bad, tail)| format!("{}{}{}", head, bad, tail))
}

proptest! {
    #[test]
    fn prop_shuffle_ops_preserve_permutation(
        passphrase in "[A-Z]{0,6}",
        ops in proptest::collection::vec(arb_op(), 1..64),
    ) {
        let mut deck = Deck::from_passphrase(&passphrase).unwrap();
        for op in ops {
            match &op {
                Op::MoveJokers => deck.move_jokers(),
                Op::TripleCut => deck.triple_cut(),
                Op::CountCut(n) => deck.count_cut(*n),
                Op::Step => deck.step(),
                Op::Output => {
                    let value = deck.output();
                    prop_assert!((1..=52).contains(&value), "output {} out of range", value);
                }
            }
            prop_assert!(deck.is_permutation(), "deck broke after {:?}: {}", op, deck);
        }
    }

    #[test]
    fn prop_decrypt_inverts_encrypt(
        passphrase in "[A-Z]{0,16}",
        plaintext in "[A-Z]{0,40}",
    ) {
        let ciphertext = Deck::from_passphrase(&passphrase).unwrap().encrypt(&plaintext).unwrap();
        let recovered = Deck::from_passphrase(&passphrase)
            .unwrap()
            .decrypt(&ciphertext.replace(' ', ""))
            .unwrap();
        prop_assert_eq!(recovered.replace(' ', ""), pad(&plaintext));
    }

    #[test]
    fn prop_encryption_is_deterministic(
        passphrase in "[A-Z]{0,16}",
        plaintext in "[A-Z]{1,40}",
    ) {
        let first = Deck::from_passphrase(&passphrase).unwrap().encrypt(&plaintext).unwrap();
        let second = Deck::from_passphrase(&passphrase).unwrap().encrypt(&plaintext).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_ciphertext_is_grouped_uppercase(
        passphrase in "[A-Z]{0,8}",
        plaintext in "[A-Z]{1,40}",
    ) {
        let ciphertext = Deck::from_passphrase(&passphrase).unwrap().encrypt(&plaintext).unwrap();
        let blocks: Vec<&str> = ciphertext.split(' ').collect();
        prop_assert_eq!(blocks.len(), (plaintext.len() + 4) / 5);
        for block in blocks {
            prop_assert_eq!(block.len(), 5);
            prop_assert!(block.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn prop_invalid_passphrase_is_rejected(passphrase in arb_invalid_text()) {
        let err = Deck::from_passphrase(&passphrase).unwrap_err();
        let CipherError::InvalidCharacter(c) = err;
        prop_assert!(!c.is_ascii_uppercase());
    }

    #[test]
    fn prop_invalid_message_is_rejected(
        passphrase in "[A-Z]{0,8}",
        message in arb_invalid_text(),
        decrypting in any::<bool>(),
    ) {
        let mode = if decrypting { Mode::Decrypt } else { Mode::Encrypt };
        let mut deck = Deck::from_passphrase(&passphrase).unwrap();
        let before = deck.clone();
        let result = deck.apply_keystream(&message, mode);
        prop_assert!(matches!(result, Err(CipherError::InvalidCharacter(_))));
        prop_assert_eq!(deck, before);
    }
}
