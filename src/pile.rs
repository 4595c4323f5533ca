//! Draw and discard piles.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Color, is_playable};

/// The face-down stock cards are drawn from.
#[derive(Debug, Clone, Default)]
pub struct DrawPile {
    /// Cards in the pile, the last element is drawn next.
    cards: Vec<Card>,
}

impl DrawPile {
    /// Creates an empty draw pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a draw pile holding the given cards, the last one on top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the pile holds the given card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Shuffles the pile.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Adds cards to the pile. Callers shuffle afterwards if needed.
    pub fn add_all<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Returns a card to the bottom of the pile.
    pub fn put_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Moves the given cards to the top so that `top[0]` is drawn first.
    ///
    /// Returns `false` and leaves the pile untouched if any card is missing
    /// or listed twice.
    pub fn arrange(&mut self, top: &[Card]) -> bool {
        let all_present = top.iter().enumerate().all(|(i, card)| {
            self.cards.contains(card) && !top[..i].contains(card)
        });
        if !all_present {
            return false;
        }

        self.cards.retain(|card| !top.contains(card));
        self.cards.extend(top.iter().rev().copied());
        true
    }

    /// Removes and returns every card in the pile.
    pub fn take_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }
}

/// The face-up pile of played cards.
#[derive(Debug, Clone, Default)]
pub struct DiscardPile {
    /// Played cards, the last element is the top.
    cards: Vec<Card>,
    /// Color nominated for a wild top card.
    active_color: Option<Color>,
    /// Color in effect right before the most recent wild card.
    pre_wild_color: Option<Color>,
}

impl DiscardPile {
    /// Creates an empty discard pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            active_color: None,
            pre_wild_color: None,
        }
    }

    /// Returns the top card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns all cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the nominated color while the top card is wild.
    #[must_use]
    pub fn active_color(&self) -> Option<Color> {
        self.top()
            .filter(Card::is_wild)
            .and(self.active_color)
    }

    /// Returns the color that was in effect before the most recent wild card.
    #[must_use]
    pub const fn pre_wild_color(&self) -> Option<Color> {
        self.pre_wild_color
    }

    /// Returns the color a non-wild card must match right now.
    #[must_use]
    pub fn effective_color(&self) -> Option<Color> {
        match self.top() {
            Some(top) if top.is_wild() => self.active_color,
            Some(top) => Some(top.color()),
            None => None,
        }
    }

    /// Returns whether `card` may be played on the current top card.
    #[must_use]
    pub fn is_playable(&self, card: Card) -> bool {
        self.top()
            .is_some_and(|top| is_playable(card, top, self.active_color()))
    }

    /// Pushes a card onto the pile.
    ///
    /// A wild card snapshots the color in effect beforehand and clears the
    /// active color until one is nominated.
    pub fn push(&mut self, card: Card) {
        if card.is_wild() {
            self.pre_wild_color = self.effective_color();
            self.active_color = None;
        }
        self.cards.push(card);
    }

    /// Nominates the active color for a wild top card.
    ///
    /// Returns `false` if the top card is not wild or `color` is the wild
    /// marker.
    pub fn set_active_color(&mut self, color: Color) -> bool {
        if color.is_wild() || !self.top().is_some_and(|top| top.is_wild()) {
            return false;
        }
        self.active_color = Some(color);
        true
    }

    /// Removes every card except the top one, keeping the active color.
    pub fn take_all_but_top(&mut self) -> Vec<Card> {
        let Some(top) = self.cards.pop() else {
            return Vec::new();
        };
        let rest = core::mem::take(&mut self.cards);
        self.cards.push(top);
        rest
    }

    /// Removes every card and clears the tracked colors.
    pub fn take_all(&mut self) -> Vec<Card> {
        self.active_color = None;
        self.pre_wild_color = None;
        core::mem::take(&mut self.cards)
    }
}
