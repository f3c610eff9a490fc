//! Card locations.
//!
//! ## Key Types
//!
//! - `CardCollection`: ordered, owning container (deck, hand, staged cards, pile)
//! - `GameTable`: per-player staged collections plus the shared pile
//! - `CardIds`: identities returned by availability queries

pub mod collection;
pub mod table;

pub use collection::{CardCollection, CardIds};
pub use table::GameTable;
