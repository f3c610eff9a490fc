//! Identity keys for cards and games.
//!
//! Every `Card` receives a `CardId` when it is constructed, and every `Game`
//! receives a `GameId`. Both are allocated from process-wide counters, so two
//! cards with the same figure and suit are still told apart by their key.
//!
//! ## Usage
//!
//! ```
//! use rust_cardgame::core::CardId;
//!
//! let a = CardId::next();
//! let b = CardId::next();
//! assert_ne!(a, b);
//! assert!(b.raw() > a.raw());
//! ```

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

static NEXT_CARD_ID: AtomicU32 = AtomicU32::new(0);
static NEXT_GAME_ID: AtomicU64 = AtomicU64::new(0);

/// Unique identity of a card.
///
/// Collections key membership on this value, never on figure/suit equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub(crate) u32);

impl CardId {
    /// Allocate a fresh card identity.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_CARD_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Unique identity of a game instance.
///
/// Players remember the `GameId` they were bound to instead of holding a
/// reference to the game itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub(crate) u64);

impl GameId {
    /// Allocate a fresh game identity.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_GAME_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}
