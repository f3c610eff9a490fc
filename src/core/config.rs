//! Game configuration.
//!
//! Every game is created from a `GameConfig`. Rule sets read the parts they
//! care about (War reads `shuffle_deck` when building its deck); the engine
//! itself only uses the seed.

use serde::{Deserialize, Serialize};

/// Engine configuration shared by every rule set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for every shuffle the game performs.
    pub seed: u64,

    /// Shuffle the deck after building it. Turn off for scripted deals.
    #[serde(default = "default_shuffle_deck")]
    pub shuffle_deck: bool,
}

fn default_shuffle_deck() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            shuffle_deck: true,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_shuffle_deck(mut self, shuffle_deck: bool) -> Self {
        self.shuffle_deck = shuffle_deck;
        self
    }
}
