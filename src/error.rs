//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when creating a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Player count outside the supported range.
    #[error("unsupported player count {0}")]
    PlayerCount(usize),
    /// First player index is not a seat at the table.
    #[error("first player {0} is not seated")]
    FirstPlayer(usize),
}

/// Errors that can occur when starting or resetting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for this operation.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// Not enough cards in the stock to deal.
    #[error("not enough cards in the stock")]
    NotEnoughCards,
    /// A card to arrange is not in the stock or is listed twice.
    #[error("card is not in the stock")]
    CardNotInStock,
}

/// Errors that can occur during a player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The active player does not hold the card.
    #[error("card is not in the active player's hand")]
    CardNotInHand,
    /// The card does not match the discard pile.
    #[error("card cannot be played on the discard pile")]
    NotPlayable,
    /// The wild marker cannot be nominated as a color.
    #[error("wild is not a color that can be chosen")]
    WildColor,
}

/// Errors that can occur when calling or challenging a last card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnoError {
    /// Invalid game state for this call.
    #[error("invalid game state for this call")]
    InvalidState,
    /// The active player may not call a last card now.
    #[error("last card cannot be called now")]
    CannotCall,
    /// No player can be challenged.
    #[error("no player can be challenged")]
    NoChallenge,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Players cannot challenge themselves.
    #[error("players cannot challenge themselves")]
    SelfChallenge,
    /// Only the player holding the undeclared last card may call it late.
    #[error("player is not holding an undeclared last card")]
    NotOffender,
}
