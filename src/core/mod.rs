//! Core engine types: identities, players, RNG, configuration, errors.
//!
//! This module contains the building blocks that are game-agnostic.
//! Rule sets plug in through `rules::RulesEngine` rather than modifying
//! the core.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{CardId, GameId};
pub use player::{check_different_players, Player, PlayerId, MAX_PLAYERS};
pub use rng::GameRng;
pub use config::GameConfig;
pub use error::{CardError, CollectionError, ErrorKind, GameError, PlayerError, TableError};
