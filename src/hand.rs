use std::fmt;

use crate::deck::Card;

pub const BLACKJACK: u8 = 21;

/// Scores a hand. Aces count 11 unless that would bust the hand, in which
/// case every Ace drops to 1 together (no partial demotion).
/// Totals past `u8::MAX` saturate.
pub fn hand_total(cards: &[Card]) -> u8 {
    let mut base: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        } else {
            base += u32::from(card.rank.value());
        }
    }

    let total = if base + 11 * aces <= u32::from(BLACKJACK) {
        base + 11 * aces
    } else {
        base + aces
    };
    u8::try_from(total).unwrap_or(u8::MAX)
}

#[derive(Clone, Debug, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn total(&self) -> u8 {
        hand_total(&self.cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
