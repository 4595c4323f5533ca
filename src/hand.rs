//! Player hand representation.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::card::{Card, Color};

/// A player's hand.
///
/// Cards are kept as a set ordered by the card total order, so iteration is
/// always sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: BTreeSet<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: BTreeSet::new(),
        }
    }

    /// Adds a card to the hand.
    ///
    /// Returns `false` if the card was already present.
    pub fn add_card(&mut self, card: Card) -> bool {
        self.cards.insert(card)
    }

    /// Removes a card from the hand.
    ///
    /// Returns `false` if the card was not present.
    pub fn remove_card(&mut self, card: Card) -> bool {
        self.cards.remove(&card)
    }

    /// Returns whether the hand holds the given card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns whether the hand holds any card of the given color.
    #[must_use]
    pub fn contains_color(&self, color: Color) -> bool {
        self.cards.iter().any(|card| card.color() == color)
    }

    /// Returns the cards in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Returns the cards in sorted order as a vector.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.iter().collect()
    }

    /// Returns the total point value of the hand.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.cards.iter().map(Card::points).sum()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns every card in the hand.
    pub fn clear(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards).into_iter().collect()
    }
}
