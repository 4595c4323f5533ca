//! Game configuration options.

use crate::error::ConfigError;

/// Fewest players a table supports.
pub const MIN_PLAYERS: usize = 2;

/// Most players a table supports.
pub const MAX_PLAYERS: usize = 10;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use unors::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(3)
///     .with_first_player(Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of players.
    pub players: usize,
    /// Player who starts every round.
    /// `None` to pick one at random each round.
    pub first_player: Option<usize>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 4,
            first_player: None,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(2);
    /// assert_eq!(options.players, 2);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the player who starts every round.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::GameOptions;
    ///
    /// let options = GameOptions::default().with_first_player(Some(0));
    /// assert_eq!(options.first_player, Some(0));
    /// ```
    #[must_use]
    pub const fn with_first_player(mut self, first_player: Option<usize>) -> Self {
        self.first_player = first_player;
        self
    }

    /// Checks the options.
    ///
    /// # Errors
    ///
    /// Returns an error if the player count is outside
    /// [`MIN_PLAYERS`]..=[`MAX_PLAYERS`] or the first player is not seated.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.players < MIN_PLAYERS || self.players > MAX_PLAYERS {
            return Err(ConfigError::PlayerCount(self.players));
        }
        if let Some(first) = self.first_player {
            if first >= self.players {
                return Err(ConfigError::FirstPlayer(first));
            }
        }
        Ok(())
    }
}
