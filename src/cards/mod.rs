//! Card system: figures, suits, rank orders, and card instances.
//!
//! ## Key Types
//!
//! - `Figure`, `Suit`: closed enumerations with their display symbols
//! - `RankOrder`: per-game total order over figures
//! - `Card`: a unique card with a face-up flag

pub mod definition;
pub mod instance;

pub use definition::{check_figure, check_suit, Figure, RankOrder, Suit, SuitColor};
pub use instance::Card;
