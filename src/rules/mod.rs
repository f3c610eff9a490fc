//! Rules engine trait and the generic game built on it.
//!
//! Games implement `RulesEngine` to define:
//! - Legal cards for each kind of move
//! - Deck composition and dealing
//! - Round and game lifecycle
//!
//! `Game<R>` runs any rule set: it owns the players, deck, and table, and
//! routes moves through the rules.

pub mod engine;
pub mod game;

pub use engine::{
    give_card_by_player_to_player, put_card_by_player, put_card_in_pile_by_player, GameResult,
    RoundResult, RulesEngine,
};
pub use game::{Game, GameCore, Seat};
