use alloc::vec::Vec;

use rand::Rng;
use tracing::debug;

use crate::card::{Card, Color, Rank};
use crate::error::ActionError;

use super::{Game, GameState, Move, Table};

impl<R: Rng> Game<R> {
    /// Plays a card from the active player's hand.
    ///
    /// Emptying the hand ends and scores the round. Otherwise the card's
    /// effect is applied: the turn passes, a player is skipped or made to
    /// draw, or a wild card waits for [`Game::choose_color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a play, the active
    /// player does not hold the card, or the card does not match the discard
    /// pile.
    pub fn play_card(&self, card: Card) -> Result<(), ActionError> {
        self.table.with(|t| t.play_card(card))
    }

    /// Draws a card for the active player.
    ///
    /// If the drawn card can be played the game moves to
    /// [`GameState::PlayDrawnCard`]; otherwise the turn passes. Returns the
    /// drawn card, or `None` if the stock and discard pile are exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a play.
    pub fn draw_card(&self) -> Result<Option<Card>, ActionError> {
        self.table.with(Table::draw_card)
    }

    /// Plays the card just drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if no drawn card is waiting.
    pub fn play_drawn_card(&self) -> Result<(), ActionError> {
        self.table.with(Table::play_drawn_card)
    }

    /// Keeps the card just drawn and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no drawn card is waiting.
    pub fn keep_drawn_card(&self) -> Result<(), ActionError> {
        self.table.with(Table::keep_drawn_card)
    }

    /// Nominates the active color after a wild card.
    ///
    /// After a wild draw four the next player is asked to accept or
    /// challenge it; after a plain wild the turn passes.
    ///
    /// # Errors
    ///
    /// Returns an error if no color is being chosen or `color` is
    /// [`Color::Wild`].
    pub fn choose_color(&self, color: Color) -> Result<(), ActionError> {
        self.table.with(|t| t.choose_color(color))
    }

    /// Accepts or challenges a wild draw four.
    ///
    /// The challenge succeeds if the accused player held a card of the
    /// color that was in effect before the wild draw four when playing it. Then the accused
    /// draws four and the challenger takes the turn. Otherwise the
    /// challenger draws six and loses the turn. Accepting draws four and
    /// loses the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no wild draw four awaits a decision.
    pub fn resolve_draw_four(&self, challenge: bool) -> Result<(), ActionError> {
        self.table.with(|t| t.resolve_draw_four(challenge))
    }
}

impl<R: Rng> Table<R> {
    fn play_card(&mut self, card: Card) -> Result<(), ActionError> {
        if self.state != GameState::PlayCard {
            return Err(ActionError::InvalidState);
        }

        let player = self.counter.active();
        if !self.hands[player].contains(card) {
            return Err(ActionError::CardNotInHand);
        }
        if !self.discard_pile.is_playable(card) {
            return Err(ActionError::NotPlayable);
        }

        self.close_window_for(player);
        self.play(player, card);
        Ok(())
    }

    fn draw_card(&mut self) -> Result<Option<Card>, ActionError> {
        if self.state != GameState::PlayCard {
            return Err(ActionError::InvalidState);
        }

        let player = self.counter.active();
        self.close_window_for(player);

        let drawn = self.draw_into(player, 1);
        let card = drawn.first().copied();
        debug!(player, card = ?card, "card drawn");
        self.record(Move::DrawCard, Some(player), None, drawn);

        match card {
            Some(card) if self.discard_pile.is_playable(card) => {
                self.drawn_card = Some(card);
                self.state = GameState::PlayDrawnCard;
            }
            _ => {
                self.counter.advance(1);
                self.begin_turn();
            }
        }
        Ok(card)
    }

    fn play_drawn_card(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::PlayDrawnCard {
            return Err(ActionError::InvalidState);
        }
        let Some(card) = self.drawn_card.take() else {
            return Err(ActionError::InvalidState);
        };

        let player = self.counter.active();
        self.close_window_for(player);
        self.play(player, card);
        Ok(())
    }

    fn keep_drawn_card(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::PlayDrawnCard {
            return Err(ActionError::InvalidState);
        }

        let player = self.counter.active();
        self.close_window_for(player);
        debug!(player, "drawn card kept");
        self.record(Move::KeepCard, Some(player), None, Vec::new());
        self.counter.advance(1);
        self.begin_turn();
        Ok(())
    }

    fn choose_color(&mut self, color: Color) -> Result<(), ActionError> {
        if self.state != GameState::ChangeColor {
            return Err(ActionError::InvalidState);
        }
        if color.is_wild() {
            return Err(ActionError::WildColor);
        }
        if !self.discard_pile.set_active_color(color) {
            return Err(ActionError::InvalidState);
        }

        let player = self.counter.active();
        self.close_window_for(player);
        debug!(player, %color, "color chosen");
        self.record(Move::ChangeColor, Some(player), None, Vec::new());
        self.counter.advance(1);

        if self.draw_four_pending {
            self.draw_four_pending = false;
            self.uno_callable = false;
            self.state = GameState::ChallengeDrawFour;
        } else {
            self.begin_turn();
        }
        Ok(())
    }

    fn resolve_draw_four(&mut self, challenge: bool) -> Result<(), ActionError> {
        if self.state != GameState::ChallengeDrawFour {
            return Err(ActionError::InvalidState);
        }

        let victim = self.counter.active();
        self.close_window_for(victim);
        let accused = self.draw_four_player.take();
        let illegal = core::mem::take(&mut self.draw_four_illegal);

        if !challenge {
            let drawn = self.draw_into(victim, 4);
            debug!(victim, "wild draw four accepted");
            self.record(Move::DrawFour, accused, Some(victim), drawn);
            self.counter.advance(1);
            self.begin_turn();
            return Ok(());
        }

        if let Some(accused) = accused.filter(|_| illegal) {
            let drawn = self.draw_into(accused, 4);
            debug!(victim, accused, "wild draw four challenge succeeded");
            self.record(
                Move::DrawFourChallengeSuccess,
                Some(accused),
                Some(victim),
                drawn,
            );
        } else {
            let drawn = self.draw_into(victim, 6);
            debug!(victim, "wild draw four challenge failed");
            self.record(Move::DrawFourChallengeFail, accused, Some(victim), drawn);
            self.counter.advance(1);
        }
        self.begin_turn();
        Ok(())
    }

    /// Moves a validated card from a hand onto the discard pile.
    fn play(&mut self, player: usize, card: Card) {
        self.hands[player].remove_card(card);
        self.discard_pile.push(card);
        debug!(player, %card, "card played");

        if self.hands[player].is_empty() {
            self.record(Move::PlayCard, Some(player), None, Vec::new());
            self.finish_round(player);
            return;
        }
        if self.hands[player].len() == 1 && !self.uno_called {
            self.uno_offender = Some(player);
        }
        self.uno_callable = false;
        self.apply_top_card(Some(player));
    }

    /// Applies the effect of the top card of the discard pile.
    ///
    /// `actor` is the player who played it, or `None` for the starting card.
    /// A numeral starting card leaves the starting player to begin; every
    /// other starting card acts as if the starting player had played it.
    pub(super) fn apply_top_card(&mut self, actor: Option<usize>) {
        let Some(top) = self.discard_pile.top() else {
            return;
        };

        match top.rank() {
            Rank::Number(_) => {
                if actor.is_some() {
                    self.record(Move::PlayCard, actor, None, Vec::new());
                    self.counter.advance(1);
                }
                self.begin_turn();
            }
            Rank::Skip => {
                let skipped = self.counter.next(1);
                self.record(Move::Skip, actor, Some(skipped), Vec::new());
                self.counter.advance(2);
                self.begin_turn();
            }
            Rank::Reverse if self.counter.players() == 2 => {
                let skipped = self.counter.next(1);
                self.record(Move::Reverse, actor, Some(skipped), Vec::new());
                self.counter.advance(2);
                self.begin_turn();
            }
            Rank::Reverse => {
                self.counter.reverse();
                self.record(Move::Reverse, actor, None, Vec::new());
                self.counter.advance(1);
                self.begin_turn();
            }
            Rank::DrawTwo => {
                let victim = self.counter.next(1);
                let drawn = self.draw_into(victim, 2);
                self.record(Move::DrawTwo, actor, Some(victim), drawn);
                self.counter.advance(2);
                self.begin_turn();
            }
            Rank::Wild | Rank::WildDrawFour => {
                self.draw_four_pending = top.rank() == Rank::WildDrawFour;
                self.draw_four_player = if self.draw_four_pending {
                    actor
                } else {
                    None
                };
                // Judged against the hand at play time, which no longer
                // holds the colorless wild draw four.
                let prior = self.discard_pile.pre_wild_color();
                self.draw_four_illegal = self.draw_four_player.is_some_and(|player| {
                    prior.is_some_and(|color| self.hands[player].contains_color(color))
                });
                self.record(Move::PlayCard, actor, None, Vec::new());
                self.state = GameState::ChangeColor;
            }
        }
    }
}
