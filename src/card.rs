use std::fmt;

/// Number of cards in a deck: 52 suit cards plus two jokers.
pub const DECK_SIZE: usize = 54;

/// A single card, identified by its rank in `1..=54`.
///
/// Ranks 53 and 54 are the two jokers. They count the same (53) but keep
/// separate identities so each can be located while shuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

pub const JOKER_A: Card = Card(53);
pub const JOKER_B: Card = Card(54);

impl Card {
    /// Build a card from its rank, returning `None` outside `1..=54`.
    pub fn new(rank: u8) -> Option<Self> {
        if (1..=DECK_SIZE as u8).contains(&rank) {
            Some(Self(rank))
        } else {
            None
        }
    }

    /// The card's identity rank (53 and 54 for the jokers).
    pub fn rank(self) -> u8 {
        self.0
    }

    pub fn is_joker(self) -> bool {
        self == JOKER_A || self == JOKER_B
    }

    /// Effective rank used for counting: both jokers are worth 53.
    pub fn value(self) -> u8 {
        if self.is_joker() {
            JOKER_A.0
        } else {
            self.0
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            JOKER_A => write!(f, "A"),
            JOKER_B => write!(f, "B"),
            Card(rank) => write!(f, "{}", rank),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jokers_share_value() {
        assert!(JOKER_A.is_joker());
        assert!(JOKER_B.is_joker());
        assert_ne!(JOKER_A, JOKER_B);
        assert_eq!(JOKER_A.value(), 53);
        assert_eq!(JOKER_B.value(), 53);
    }

    #[test]
    fn test_suit_cards_keep_their_rank() {
        for rank in 1..=52u8 {
            let card = Card::new(rank).unwrap();
            assert!(!card.is_joker());
            assert_eq!(card.value(), rank);
            assert_eq!(card.rank(), rank);
        }
    }

    #[test]
    fn test_rank_bounds() {
        assert!(Card::new(0).is_none());
        assert!(Card::new(55).is_none());
        assert_eq!(Card::new(54), Some(JOKER_B));
    }

    #[test]
    fn test_display() {
        assert_eq!(JOKER_A.to_string(), "A");
        assert_eq!(JOKER_B.to_string(), "B");
        assert_eq!(Card::new(7).unwrap().to_string(), "7");
    }
}
