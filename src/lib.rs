//! A rules engine for shedding card games with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that enforces legal plays, keeps the
//! stock and discard pile, tracks turn order and direction, applies action
//! card effects, handles last-card calls and wild draw four challenges, and
//! scores rounds until a player reaches [`GOAL_SCORE`].
//!
//! The engine performs no I/O. A transport or presentation layer calls its
//! commands one at a time and reads its queries in between.
//!
//! # Example
//!
//! ```
//! use unors::{Game, GameOptions, GameState};
//!
//! let options = GameOptions::default().with_players(2);
//! let game = Game::new(options, 42).unwrap();
//! game.start_round().unwrap();
//! assert_ne!(game.state(), GameState::RoundStart);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod counter;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pile;
pub mod score;
mod sync;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, deck, is_playable};
pub use counter::{Direction, PlayerCounter};
pub use error::{ActionError, ConfigError, RoundError, UnoError};
pub use game::{Game, GameState, HAND_SIZE, Move};
pub use hand::Hand;
pub use options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};
pub use pile::{DiscardPile, DrawPile};
pub use score::{GOAL_SCORE, ScoreLine, Scoreboard};
