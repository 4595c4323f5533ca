//! Game engine and state management.

use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::card::{Card, Color, deck};
use crate::counter::{Direction, PlayerCounter};
use crate::error::ConfigError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::pile::{DiscardPile, DrawPile};
use crate::score::{ScoreLine, Scoreboard};
use crate::sync::Mutex;

mod actions;
mod round;
pub mod state;
mod uno;

pub use state::{GameState, Move};

/// Number of cards dealt to every player at the start of a round.
pub const HAND_SIZE: usize = 7;

/// A shedding card game engine that enforces the rules of play.
///
/// The game owns every card for its whole lifetime; cards only move between
/// the stock, the discard pile, and the players' hands. Commands take `&self`
/// and run one at a time behind an internal lock, so a game can be shared
/// with a transport layer. A rejected command returns an error and leaves
/// the game untouched.
///
/// The random source decides the shuffle order and, unless
/// [`GameOptions::first_player`] is set, the starting player of each round.
pub struct Game<R = ChaCha8Rng> {
    /// Game options.
    options: GameOptions,
    /// All mutable state.
    table: Mutex<Table<R>>,
}

/// Everything a command mutates.
pub(crate) struct Table<R> {
    state: GameState,
    draw_pile: DrawPile,
    discard_pile: DiscardPile,
    hands: Vec<Hand>,
    scoreboard: Scoreboard,
    counter: PlayerCounter,
    rng: R,
    first_player: Option<usize>,
    /// A wild draw four awaits its color before the challenge decision.
    draw_four_pending: bool,
    /// Player who played the wild draw four under challenge.
    draw_four_player: Option<usize>,
    /// The wild draw four was played while holding the prior color.
    draw_four_illegal: bool,
    /// The active player may still call a last card this turn.
    uno_callable: bool,
    /// The active player called a last card this turn.
    uno_called: bool,
    /// Player holding one card without having called it.
    uno_offender: Option<usize>,
    /// Card drawn in `PlayDrawnCard`.
    drawn_card: Option<Card>,
    round_winner: Option<usize>,
    last_move: Move,
    last_actor: Option<usize>,
    last_target: Option<usize>,
    last_drawn: Vec<Card>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default().with_players(3), 42).unwrap();
    /// assert_eq!(game.state(), GameState::RoundStart);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new game drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn with_rng(options: GameOptions, mut rng: R) -> Result<Self, ConfigError> {
        options.validate()?;

        let mut draw_pile = DrawPile::from_cards(deck());
        draw_pile.shuffle(&mut rng);

        let table = Table {
            state: GameState::RoundStart,
            draw_pile,
            discard_pile: DiscardPile::new(),
            hands: (0..options.players).map(|_| Hand::new()).collect(),
            scoreboard: Scoreboard::new(options.players),
            counter: PlayerCounter::new(options.players),
            rng,
            first_player: options.first_player,
            draw_four_pending: false,
            draw_four_player: None,
            draw_four_illegal: false,
            uno_callable: false,
            uno_called: false,
            uno_offender: None,
            drawn_card: None,
            round_winner: None,
            last_move: Move::None,
            last_actor: None,
            last_target: None,
            last_drawn: Vec::new(),
        };

        Ok(Self {
            options,
            table: Mutex::new(table),
        })
    }
}

impl<R> Game<R> {
    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of players.
    pub const fn player_count(&self) -> usize {
        self.options.players
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.table.with(|t| t.state)
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> usize {
        self.table.with(|t| t.counter.active())
    }

    /// Returns the direction of play.
    pub fn direction(&self) -> Direction {
        self.table.with(|t| t.counter.direction())
    }

    /// Returns the top card of the discard pile.
    pub fn top_card(&self) -> Option<Card> {
        self.table.with(|t| t.discard_pile.top())
    }

    /// Returns the color nominated for a wild top card.
    ///
    /// Returns `None` while the top card is not wild or no color has been
    /// chosen yet.
    pub fn active_color(&self) -> Option<Color> {
        self.table.with(|t| t.discard_pile.active_color())
    }

    /// Returns the color that was in effect before the most recent wild card.
    pub fn pre_wild_color(&self) -> Option<Color> {
        self.table.with(|t| t.discard_pile.pre_wild_color())
    }

    /// Returns the discard pile, bottom first.
    pub fn discard_cards(&self) -> Vec<Card> {
        self.table.with(|t| t.discard_pile.cards().to_vec())
    }

    /// Returns the number of cards remaining in the stock.
    pub fn cards_remaining(&self) -> usize {
        self.table.with(|t| t.draw_pile.len())
    }

    /// Returns a player's cards in sorted order.
    ///
    /// Returns `None` if the player is not seated.
    pub fn hand(&self, player: usize) -> Option<Vec<Card>> {
        self.table.with(|t| t.hands.get(player).map(Hand::cards))
    }

    /// Returns every player's cards in sorted order.
    pub fn hands(&self) -> Vec<Vec<Card>> {
        self.table.with(|t| t.hands.iter().map(Hand::cards).collect())
    }

    /// Returns the cards the active player may legally play right now.
    pub fn playable_cards(&self) -> Vec<Card> {
        self.table.with(|t| t.playable_cards())
    }

    /// Returns the card waiting to be played or kept.
    pub fn drawn_card(&self) -> Option<Card> {
        self.table.with(|t| t.drawn_card)
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Move {
        self.table.with(|t| t.last_move)
    }

    /// Returns the player who made the most recent move.
    ///
    /// Returns `None` for effects of the starting card.
    pub fn last_actor(&self) -> Option<usize> {
        self.table.with(|t| t.last_actor)
    }

    /// Returns the player affected by the most recent move.
    pub fn last_target(&self) -> Option<usize> {
        self.table.with(|t| t.last_target)
    }

    /// Returns the cards drawn by the most recent move.
    pub fn last_drawn(&self) -> Vec<Card> {
        self.table.with(|t| t.last_drawn.clone())
    }

    /// Returns every player's score line.
    pub fn scores(&self) -> Vec<ScoreLine> {
        self.table.with(|t| t.scoreboard.lines().to_vec())
    }

    /// Returns a copy of the scoreboard.
    pub fn scoreboard(&self) -> Scoreboard {
        self.table.with(|t| t.scoreboard.clone())
    }

    /// Returns the winner of the round once it is over.
    pub fn round_winner(&self) -> Option<usize> {
        self.table.with(|t| t.round_winner)
    }

    /// Returns whether a player has reached the goal score.
    pub fn is_game_over(&self) -> bool {
        self.table.with(|t| t.scoreboard.is_goal_reached())
    }
}

impl<R> Table<R> {
    fn playable_cards(&self) -> Vec<Card> {
        match self.state {
            GameState::PlayCard => self.hands[self.counter.active()]
                .iter()
                .filter(|&card| self.discard_pile.is_playable(card))
                .collect(),
            GameState::PlayDrawnCard => self.drawn_card.into_iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Hands the turn to the active player.
    fn begin_turn(&mut self) {
        self.state = GameState::PlayCard;
        self.uno_callable = true;
        self.uno_called = false;
        self.drawn_card = None;
    }

    /// Closes the challenge window when someone other than the offender acts.
    fn close_window_for(&mut self, player: usize) {
        if self.uno_offender.is_some_and(|offender| offender != player) {
            self.uno_offender = None;
        }
    }

    fn record(&mut self, mv: Move, actor: Option<usize>, target: Option<usize>, drawn: Vec<Card>) {
        self.last_move = mv;
        self.last_actor = actor;
        self.last_target = target;
        self.last_drawn = drawn;
    }
}

impl<R: Rng> Table<R> {
    /// Draws one card, recycling the discard pile into the stock if needed.
    fn draw(&mut self) -> Option<Card> {
        if self.draw_pile.is_empty() {
            let recycled = self.discard_pile.take_all_but_top();
            if recycled.is_empty() {
                return None;
            }
            trace!(cards = recycled.len(), "recycling discard pile into stock");
            self.draw_pile.add_all(recycled);
            self.draw_pile.shuffle(&mut self.rng);
        }
        self.draw_pile.draw()
    }

    /// Draws up to `count` cards into a player's hand.
    ///
    /// Fewer cards are returned when the stock cannot be replenished.
    fn draw_into(&mut self, player: usize, count: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(card) = self.draw() else {
                break;
            };
            self.hands[player].add_card(card);
            drawn.push(card);
        }

        if !drawn.is_empty() && self.uno_offender == Some(player) {
            self.uno_offender = None;
        }
        drawn
    }
}
