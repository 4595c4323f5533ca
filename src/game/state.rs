//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for the round to be dealt.
    RoundStart,
    /// Waiting for the active player to play or draw.
    PlayCard,
    /// Waiting for the active player to play or keep the card just drawn.
    PlayDrawnCard,
    /// Waiting for the active player to nominate a color for a wild card.
    ChangeColor,
    /// Waiting for the active player to accept or challenge a wild draw four.
    ChallengeDrawFour,
    /// A player emptied their hand and the round has been scored.
    RoundOver,
}

impl GameState {
    /// Returns whether a round is being played.
    #[must_use]
    pub const fn in_round(self) -> bool {
        !matches!(self, Self::RoundStart | Self::RoundOver)
    }
}

/// The most recent move, kept for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Move {
    /// Nothing has happened this round.
    #[default]
    None,
    /// A card without a turn effect was played.
    PlayCard,
    /// A card was drawn.
    DrawCard,
    /// A drawn card was kept.
    KeepCard,
    /// A player called their last card.
    CallLastCard,
    /// A player called their last card after the fact.
    LateCall,
    /// A player was caught not calling their last card.
    Challenge,
    /// A skip was played.
    Skip,
    /// A reverse was played.
    Reverse,
    /// A draw two was played.
    DrawTwo,
    /// A wild draw four was accepted.
    DrawFour,
    /// A color was nominated for a wild card.
    ChangeColor,
    /// A wild draw four was challenged and the challenge succeeded.
    DrawFourChallengeSuccess,
    /// A wild draw four was challenged and the challenge failed.
    DrawFourChallengeFail,
}
