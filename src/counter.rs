//! Turn order tracking.

/// Direction of play around the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Increasing player index.
    #[default]
    Forward,
    /// Decreasing player index.
    Backward,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Active player index and direction of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCounter {
    players: usize,
    active: usize,
    direction: Direction,
}

impl PlayerCounter {
    /// Creates a counter for `players` seats, starting at player 0 going
    /// forward.
    ///
    /// # Panics
    ///
    /// Panics if `players` is zero.
    #[must_use]
    pub const fn new(players: usize) -> Self {
        assert!(players > 0, "a table needs at least one player");
        Self {
            players,
            active: 0,
            direction: Direction::Forward,
        }
    }

    /// Returns the number of seats.
    #[must_use]
    pub const fn players(&self) -> usize {
        self.players
    }

    /// Returns the active player.
    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    /// Returns the direction of play.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Sets the active player and restores forward play.
    pub const fn reset(&mut self, player: usize) {
        self.active = player % self.players;
        self.direction = Direction::Forward;
    }

    /// Returns the `n`th next player in the direction of play without
    /// moving.
    #[must_use]
    pub const fn next(&self, n: usize) -> usize {
        let step = n % self.players;
        match self.direction {
            Direction::Forward => (self.active + step) % self.players,
            Direction::Backward => (self.active + self.players - step) % self.players,
        }
    }

    /// Moves the active player `n` seats in the direction of play.
    pub const fn advance(&mut self, n: usize) {
        self.active = self.next(n);
    }

    /// Flips the direction of play.
    pub const fn reverse(&mut self) {
        self.direction = self.direction.opposite();
    }
}
