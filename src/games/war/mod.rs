//! War, the classic two-to-three player card game.
//!
//! - The whole deck is dealt round-robin, face down
//! - Each round every player reveals their top card; the unique highest
//!   rank takes every staged card to the bottom of their hand
//! - A tie for highest rank is a war: the tied players stage two more
//!   cards (one face down, one face up), then every player's top staged
//!   card is compared again
//! - A player who can't stage the cards a phase demands is eliminated
//! - Last player standing wins

mod game;

pub use game::{DeckOrder, WarGameBuilder, WarRules, WAR_MOVES};
