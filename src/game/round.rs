use alloc::vec::Vec;

use rand::Rng;
use tracing::debug;

use crate::card::{Card, Rank};
use crate::error::RoundError;

use super::{Game, GameState, HAND_SIZE, Move, Table};

impl<R: Rng> Game<R> {
    /// Deals a new round and flips the starting card.
    ///
    /// Every player receives [`HAND_SIZE`] cards, player 0 first. A wild draw
    /// four flipped as the starting card goes back under the stock and the
    /// next card is flipped instead. The starting card's effect is applied
    /// before the first turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round start state or the stock
    /// cannot deal every hand plus the starting card.
    pub fn start_round(&self) -> Result<(), RoundError> {
        self.table.with(Table::start_round)
    }

    /// Moves the given stock cards to the top of the stock.
    ///
    /// `top[0]` is the next card dealt. Only the order of the stock changes,
    /// which makes deals reproducible for tests and replays.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round start state or a card is
    /// not in the stock or listed twice.
    pub fn arrange_stock(&self, top: &[Card]) -> Result<(), RoundError> {
        self.table.with(|t| {
            if t.state != GameState::RoundStart {
                return Err(RoundError::InvalidState);
            }
            if t.draw_pile.arrange(top) {
                Ok(())
            } else {
                Err(RoundError::CardNotInStock)
            }
        })
    }

    /// Collects every card and prepares the next round, keeping scores.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn reset_round(&self) -> Result<(), RoundError> {
        self.table.with(|t| {
            if t.state != GameState::RoundOver {
                return Err(RoundError::InvalidState);
            }
            t.collect_cards();
            t.scoreboard.new_round();
            debug!("round reset");
            Ok(())
        })
    }

    /// Collects every card and zeroes all scores.
    ///
    /// Accepted in any state; calling it repeatedly has no further effect.
    pub fn reset_game(&self) {
        self.table.with(|t| {
            t.collect_cards();
            t.scoreboard.reset();
            debug!("game reset");
        });
    }
}

impl<R: Rng> Table<R> {
    fn start_round(&mut self) -> Result<(), RoundError> {
        if self.state != GameState::RoundStart {
            return Err(RoundError::InvalidState);
        }

        let players = self.hands.len();
        if self.draw_pile.len() <= players * HAND_SIZE {
            return Err(RoundError::NotEnoughCards);
        }

        self.clear_round_flags();
        for player in 0..players {
            for _ in 0..HAND_SIZE {
                if let Some(card) = self.draw_pile.draw() {
                    self.hands[player].add_card(card);
                }
            }
        }

        let Some(mut starter) = self.draw_pile.draw() else {
            return Err(RoundError::NotEnoughCards);
        };
        for _ in 0..self.draw_pile.len() {
            if starter.rank() != Rank::WildDrawFour {
                break;
            }
            self.draw_pile.put_bottom(starter);
            match self.draw_pile.draw() {
                Some(card) => starter = card,
                None => break,
            }
        }

        let first = self
            .first_player
            .unwrap_or_else(|| self.rng.random_range(0..players));
        self.counter.reset(first);
        self.discard_pile.push(starter);
        debug!(first, %starter, "round started");

        self.apply_top_card(None);
        Ok(())
    }

    /// Ends the round and scores every other hand onto the winner.
    pub(super) fn finish_round(&mut self, winner: usize) {
        self.state = GameState::RoundOver;
        self.round_winner = Some(winner);
        self.uno_offender = None;
        self.uno_callable = false;
        self.drawn_card = None;
        self.draw_four_pending = false;
        self.draw_four_player = None;
        self.draw_four_illegal = false;

        for (loser, hand) in self.hands.iter().enumerate() {
            if loser != winner {
                self.scoreboard.add_score(winner, loser, hand.value());
            }
        }
        debug!(
            winner,
            goal_reached = self.scoreboard.is_goal_reached(),
            "round over"
        );
    }

    /// Returns every card to the stock and shuffles it.
    fn collect_cards(&mut self) {
        let hands: Vec<Card> = self.hands.iter_mut().flat_map(|hand| hand.clear()).collect();
        self.draw_pile.add_all(hands);
        let discards = self.discard_pile.take_all();
        self.draw_pile.add_all(discards);
        self.draw_pile.shuffle(&mut self.rng);

        self.counter.reset(0);
        self.clear_round_flags();
        self.state = GameState::RoundStart;
    }

    fn clear_round_flags(&mut self) {
        self.draw_four_pending = false;
        self.draw_four_player = None;
        self.draw_four_illegal = false;
        self.uno_callable = false;
        self.uno_called = false;
        self.uno_offender = None;
        self.drawn_card = None;
        self.round_winner = None;
        self.record(Move::None, None, None, Vec::new());
    }
}
