//! # rust-cardgame
//!
//! A turn-based card game engine with War as its reference rule set.
//!
//! ## Design Principles
//!
//! 1. **Cards Are Owned**: A `Card` is not `Clone`. Every move collects a
//!    card out of one collection and appends it to another, so a game
//!    always holds exactly the cards it was dealt.
//!
//! 2. **Rules Are Pluggable**: The engine knows players, a deck, and a
//!    table. Which cards may move where, and what ends a round, live in a
//!    `RulesEngine` implementation.
//!
//! 3. **Deterministic**: All shuffling goes through a seeded `GameRng`.
//!    Same seed and same moves, same game.
//!
//! ## Modules
//!
//! - `core`: Identities, players, RNG, configuration, errors
//! - `cards`: Figures, suits, rank orders, and card instances
//! - `zones`: Card collections and the game table
//! - `rules`: RulesEngine trait and the generic `Game`
//! - `games`: Concrete rule sets (War)

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    CardId, GameId,
    Player, PlayerId,
    GameRng, GameConfig,
    CardError, CollectionError, ErrorKind, GameError, PlayerError, TableError,
};

pub use crate::cards::{Card, Figure, RankOrder, Suit, SuitColor};

pub use crate::zones::{CardCollection, CardIds, GameTable};

pub use crate::rules::{Game, GameCore, GameResult, RoundResult, RulesEngine, Seat};

pub use crate::games::war::{DeckOrder, WarGameBuilder, WarRules};
