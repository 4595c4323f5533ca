//! Card types and deck utilities.

use alloc::vec::Vec;
use core::fmt;

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// Marker color carried by wild cards.
    Wild,
}

impl Color {
    /// The four colors a player may nominate or match.
    pub const PLAYABLE: [Self; 4] = [Self::Blue, Self::Green, Self::Red, Self::Yellow];

    /// Returns whether this is the wild marker rather than a playable color.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Self::Wild)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Wild => "Wild",
        })
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Numeral card, 0 through 9.
    Number(u8),
    /// Skips the next player.
    Skip,
    /// Reverses the direction of play.
    Reverse,
    /// Next player draws two and is skipped.
    DrawTwo,
    /// Wild card, the player nominates the active color.
    Wild,
    /// Wild card that also makes the next player draw four.
    WildDrawFour,
}

impl Rank {
    /// Point value of the rank when left in a hand at round end.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Number(n) => n as u32,
            Self::Skip | Self::Reverse | Self::DrawTwo => 20,
            Self::Wild | Self::WildDrawFour => 50,
        }
    }

    /// Returns whether cards of this rank are wild.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Self::Wild | Self::WildDrawFour)
    }

    /// Number of copies per color in a full deck.
    const fn copies(self) -> u8 {
        match self {
            Self::Number(0) => 1,
            Self::Wild | Self::WildDrawFour => 4,
            _ => 2,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Skip => f.write_str("Skip"),
            Self::Reverse => f.write_str("Reverse"),
            Self::DrawTwo => f.write_str("Draw Two"),
            Self::Wild => f.write_str("Wild"),
            Self::WildDrawFour => f.write_str("Wild Draw Four"),
        }
    }
}

/// A playing card.
///
/// A color and rank pair recurs up to four times in the deck, so every card
/// also carries an instance id. Equality and ordering cover all three fields,
/// ordered by color, then rank, then id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    color: Color,
    rank: Rank,
    id: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the combination. Cards that do
    /// not appear in [`deck`] are never accepted by the game.
    #[must_use]
    pub const fn new(color: Color, rank: Rank, id: u8) -> Self {
        Self { color, rank, id }
    }

    /// Returns the color of the card.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the instance id distinguishing identical color and rank pairs.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns whether the card is wild.
    #[must_use]
    pub const fn is_wild(&self) -> bool {
        self.rank.is_wild()
    }

    /// Returns the point value of the card.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.rank.points()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wild() {
            write!(f, "{}", self.rank)
        } else {
            write!(f, "{} {}", self.color, self.rank)
        }
    }
}

/// Returns whether `candidate` may be played on `top`.
///
/// Wild candidates are always playable. On a wild top card only the
/// `active_color` matches; with no color nominated yet nothing but another
/// wild does. Otherwise the color or the rank has to match.
#[must_use]
pub fn is_playable(candidate: Card, top: Card, active_color: Option<Color>) -> bool {
    if candidate.is_wild() {
        return true;
    }
    if top.is_wild() {
        return active_color == Some(candidate.color);
    }
    candidate.color == top.color || candidate.rank == top.rank
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 108;

/// Builds the full deck in sorted order.
#[must_use]
pub fn deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for color in Color::PLAYABLE {
        let ranks = (0..=9)
            .map(Rank::Number)
            .chain([Rank::Skip, Rank::Reverse, Rank::DrawTwo]);
        for rank in ranks {
            for id in 0..rank.copies() {
                cards.push(Card::new(color, rank, id));
            }
        }
    }

    for rank in [Rank::Wild, Rank::WildDrawFour] {
        for id in 0..rank.copies() {
            cards.push(Card::new(Color::Wild, rank, id));
        }
    }

    cards
}
