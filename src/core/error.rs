//! Error types for every layer of the engine.
//!
//! Each layer has its own enum; `GameError` wraps them and adds the rule
//! violations raised by game engines. Every error is raised before any
//! mutation takes place, so a failed call leaves the game untouched.
//!
//! `ErrorKind` groups errors the way callers usually care about them:
//! malformed input, a missing/invalid state, or a move the rules forbid.

use thiserror::Error;

use super::entity::CardId;
use super::player::PlayerId;

/// Broad classification of an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed card construction.
    Validation,
    /// Empty collection, missing card or player, duplicate binding.
    State,
    /// A move the current game state does not allow.
    RuleViolation,
}

/// Card construction and validation failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("incorrect figure '{0}'")]
    InvalidFigure(String),
    #[error("incorrect suit '{0}'")]
    InvalidSuit(String),
    #[error("joker can not have a suit, got '{0}'")]
    JokerWithSuit(String),
}

impl CardError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("{0} is not in the collection")]
    CardNotFound(CardId),
    #[error("card collection is empty")]
    EmptyCollection,
}

impl CollectionError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::State
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("game is not set for player {0}")]
    GameNotBound(String),
    #[error("game is already set for player {0}")]
    AlreadyBound(String),
    #[error("player {player} does not have {card}")]
    DoesNotHaveCard { player: String, card: CardId },
    #[error("player {player} already has {card}")]
    AlreadyHasCard { player: String, card: CardId },
    #[error("these players are the same: {0}")]
    SamePlayer(String),
}

impl PlayerError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlayerError::SamePlayer(_) => ErrorKind::RuleViolation,
            _ => ErrorKind::State,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("{0} is not at the table")]
    UnknownPlayer(PlayerId),
    #[error("no player has placed {0}")]
    NoPlayerHasPlacedCard(CardId),
    #[error("not all players placed cards")]
    NotAllPlayersPlacedCards,
}

impl TableError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::State
    }
}

/// Errors raised by the game engine and its rule sets.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    Collection(#[from] CollectionError),
    #[error(transparent)]
    Player(#[from] PlayerError),
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("{0} is not part of this game")]
    UnknownPlayer(PlayerId),
    #[error("incorrect number of players: {count}, allowed counts are {allowed:?}")]
    WrongPlayerCount { count: usize, allowed: Vec<usize> },
    #[error("{player} can not put {card}")]
    CannotPutCard { player: PlayerId, card: CardId },
    #[error("{player} can not put {card} in pile")]
    CannotPutCardInPile { player: PlayerId, card: CardId },
    #[error("{from} can not give {card} to {to}")]
    CannotGiveCard {
        from: PlayerId,
        to: PlayerId,
        card: CardId,
    },
    #[error("{0} is an unsupported move in this game")]
    UnsupportedMove(&'static str),
    #[error("more than one highest-rank card is placed")]
    MoreThanOneHighestCard,
    #[error("the game is over")]
    GameOver,
}

impl GameError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::Card(e) => e.kind(),
            GameError::Collection(e) => e.kind(),
            GameError::Player(e) => e.kind(),
            GameError::Table(e) => e.kind(),
            GameError::UnknownPlayer(_) => ErrorKind::State,
            GameError::WrongPlayerCount { .. }
            | GameError::CannotPutCard { .. }
            | GameError::CannotPutCardInPile { .. }
            | GameError::CannotGiveCard { .. }
            | GameError::UnsupportedMove(_)
            | GameError::MoreThanOneHighestCard
            | GameError::GameOver => ErrorKind::RuleViolation,
        }
    }

    /// Shorthand for `kind() == ErrorKind::RuleViolation`.
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        self.kind() == ErrorKind::RuleViolation
    }
}
