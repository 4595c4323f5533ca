use alloc::vec::Vec;

use rand::Rng;
use tracing::debug;

use crate::error::UnoError;

use super::{Game, GameState, Move, Table};

/// Cards drawn by a player caught holding an undeclared last card.
const MISSED_CALL_PENALTY: usize = 2;

impl<R> Game<R> {
    /// Returns whether the active player may call their last card now.
    ///
    /// This holds once per turn while the active hand has exactly two cards.
    pub fn can_call_uno(&self) -> bool {
        self.table.with(|t| t.can_call_uno())
    }

    /// Returns whether a player holding an undeclared last card can be
    /// challenged.
    pub fn can_challenge_uno(&self) -> bool {
        self.table.with(|t| t.uno_offender.is_some())
    }

    /// Returns the player who can be challenged for not calling their last
    /// card.
    pub fn uno_offender(&self) -> Option<usize> {
        self.table.with(|t| t.uno_offender)
    }

    /// Active player calls their last card ahead of playing down to it.
    ///
    /// # Errors
    ///
    /// Returns an error if no turn is in progress or the call is not
    /// available (see [`Game::can_call_uno`]).
    pub fn call_uno(&self) -> Result<(), UnoError> {
        self.table.with(|t| {
            if !matches!(t.state, GameState::PlayCard | GameState::PlayDrawnCard) {
                return Err(UnoError::InvalidState);
            }
            if !t.can_call_uno() {
                return Err(UnoError::CannotCall);
            }

            let player = t.counter.active();
            t.close_window_for(player);
            t.uno_callable = false;
            t.uno_called = true;
            debug!(player, "last card called");
            t.record(Move::CallLastCard, Some(player), None, Vec::new());
            Ok(())
        })
    }

    /// `player`, holding an undeclared last card, calls it late and escapes
    /// the penalty.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, the player is not
    /// seated, nobody can be challenged, or `player` is not the one who
    /// can be.
    pub fn call_late_uno(&self, player: usize) -> Result<(), UnoError> {
        self.table.with(|t| {
            if !t.state.in_round() {
                return Err(UnoError::InvalidState);
            }
            if player >= t.hands.len() {
                return Err(UnoError::PlayerNotFound);
            }
            let offender = t.uno_offender.ok_or(UnoError::NoChallenge)?;
            if player != offender {
                return Err(UnoError::NotOffender);
            }

            t.uno_offender = None;
            debug!(player, "last card called late");
            t.record(Move::LateCall, Some(player), None, Vec::new());
            Ok(())
        })
    }
}

impl<R: Rng> Game<R> {
    /// `challenger` catches the player holding an undeclared last card, who
    /// draws two cards.
    ///
    /// Any seated player other than the offender may challenge, whoever's
    /// turn it is. The turn does not change.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, the challenger is not
    /// seated or is the offender, or nobody can be challenged.
    pub fn challenge_uno(&self, challenger: usize) -> Result<(), UnoError> {
        self.table.with(|t| {
            if !t.state.in_round() {
                return Err(UnoError::InvalidState);
            }
            if challenger >= t.hands.len() {
                return Err(UnoError::PlayerNotFound);
            }
            let offender = t.uno_offender.ok_or(UnoError::NoChallenge)?;
            if challenger == offender {
                return Err(UnoError::SelfChallenge);
            }

            t.uno_offender = None;
            let drawn = t.draw_into(offender, MISSED_CALL_PENALTY);
            debug!(challenger, offender, "missed last card caught");
            t.record(Move::Challenge, Some(challenger), Some(offender), drawn);
            Ok(())
        })
    }
}

impl<R> Table<R> {
    fn can_call_uno(&self) -> bool {
        matches!(self.state, GameState::PlayCard | GameState::PlayDrawnCard)
            && self.uno_callable
            && self.hands[self.counter.active()].len() == 2
    }
}
