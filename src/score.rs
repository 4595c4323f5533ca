//! Round and game scoring.

use alloc::vec;
use alloc::vec::Vec;

/// Cumulative score that ends the game.
pub const GOAL_SCORE: u32 = 500;

/// One player's row on the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreLine {
    /// Cumulative score before the current round.
    pub previous: u32,
    /// Points this player's hand gave to the winner this round.
    pub contributed: u32,
    /// Points this player collected this round.
    pub gained: u32,
    /// Cumulative score including the current round.
    pub total: u32,
}

/// Cumulative and per-round scores for every player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    lines: Vec<ScoreLine>,
    goal_reached: bool,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard for `players` seats.
    #[must_use]
    pub fn new(players: usize) -> Self {
        Self {
            lines: vec![ScoreLine::default(); players],
            goal_reached: false,
        }
    }

    /// Zeroes every score and clears the goal flag.
    pub fn reset(&mut self) {
        self.lines.fill(ScoreLine::default());
        self.goal_reached = false;
    }

    /// Moves `points` from `loser`'s hand onto `winner`.
    ///
    /// Out-of-range indices are ignored.
    pub fn add_score(&mut self, winner: usize, loser: usize, points: u32) {
        if winner >= self.lines.len() || loser >= self.lines.len() {
            return;
        }

        self.lines[loser].contributed += points;
        let line = &mut self.lines[winner];
        line.gained += points;
        line.total += points;
        if line.total >= GOAL_SCORE {
            self.goal_reached = true;
        }
    }

    /// Carries the totals forward and clears the per-round columns.
    pub fn new_round(&mut self) {
        for line in &mut self.lines {
            line.previous = line.total;
            line.contributed = 0;
            line.gained = 0;
        }
    }

    /// Returns every player's row.
    #[must_use]
    pub fn lines(&self) -> &[ScoreLine] {
        &self.lines
    }

    /// Returns a player's row.
    #[must_use]
    pub fn line(&self, player: usize) -> Option<ScoreLine> {
        self.lines.get(player).copied()
    }

    /// Returns whether any player has reached [`GOAL_SCORE`].
    ///
    /// Once set, only [`Scoreboard::reset`] clears it.
    #[must_use]
    pub const fn is_goal_reached(&self) -> bool {
        self.goal_reached
    }
}
