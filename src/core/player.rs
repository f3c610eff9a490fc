//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Seat index of a player inside one game. Seats are assigned in the order
//! the players were handed to the game and never change, even after a
//! player is eliminated.
//!
//! ## Player
//!
//! A named participant owning a hand of cards. A player is created before
//! any game exists and is bound to exactly one game when that game is
//! constructed. The binding is a `GameId`, not a reference, so the game
//! can own its players without a cycle.

use serde::{Deserialize, Serialize};

use super::entity::{CardId, GameId};
use super::error::PlayerError;
use crate::zones::CardCollection;

/// Most players one game can seat: one per `PlayerId` value.
pub const MAX_PLAYERS: usize = u8::MAX as usize + 1;

/// Player seat identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_cardgame::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    ///
    /// Yields at most `MAX_PLAYERS` ids.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..=u8::MAX).take(player_count).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant of a game.
///
/// ```
/// use rust_cardgame::core::Player;
///
/// let player = Player::new("Alice");
/// assert_eq!(player.name(), "Alice");
/// assert!(player.hand().is_empty());
/// assert!(player.game().is_err());
/// ```
#[derive(Debug)]
pub struct Player {
    name: String,
    hand: CardCollection,
    game: Option<GameId>,
}

impl Player {
    /// Create an unbound player with an empty hand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: CardCollection::new(),
            game: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards the player holds. The last card is the top of the hand.
    #[must_use]
    pub fn hand(&self) -> &CardCollection {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut CardCollection {
        &mut self.hand
    }

    /// The game this player is bound to.
    pub fn game(&self) -> Result<GameId, PlayerError> {
        self.game
            .ok_or_else(|| PlayerError::GameNotBound(self.name.clone()))
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.game.is_some()
    }

    /// Bind the player to a game. A player can be bound only once.
    pub fn bind(&mut self, game: GameId) -> Result<(), PlayerError> {
        self.check_not_bound()?;
        self.game = Some(game);
        Ok(())
    }

    pub fn check_not_bound(&self) -> Result<(), PlayerError> {
        if self.game.is_some() {
            return Err(PlayerError::AlreadyBound(self.name.clone()));
        }
        Ok(())
    }

    pub fn check_has_card(&self, card: CardId) -> Result<(), PlayerError> {
        if !self.hand.has(card) {
            return Err(PlayerError::DoesNotHaveCard {
                player: self.name.clone(),
                card,
            });
        }
        Ok(())
    }

    pub fn check_has_not_card(&self, card: CardId) -> Result<(), PlayerError> {
        if self.hand.has(card) {
            return Err(PlayerError::AlreadyHasCard {
                player: self.name.clone(),
                card,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Fail with `SamePlayer` when both seats are the same.
pub fn check_different_players(
    first: PlayerId,
    second: PlayerId,
    name: &str,
) -> Result<(), PlayerError> {
    if first == second {
        return Err(PlayerError::SamePlayer(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Figure, Suit};

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_all_stops_at_last_seat_id() {
        assert_eq!(PlayerId::all(3).collect::<Vec<_>>(), vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
        assert_eq!(PlayerId::all(MAX_PLAYERS + 10).count(), MAX_PLAYERS);
        assert_eq!(PlayerId::all(MAX_PLAYERS).last(), Some(PlayerId(u8::MAX)));
    }

    #[test]
    fn test_bind_once() {
        let mut player = Player::new("Bob");
        let game = GameId::next();

        assert!(!player.is_bound());
        assert!(matches!(player.game(), Err(PlayerError::GameNotBound(_))));
        player.bind(game).unwrap();
        assert!(player.is_bound());
        assert_eq!(player.game(), Ok(game));

        let err = player.bind(GameId::next()).unwrap_err();
        assert_eq!(err, PlayerError::AlreadyBound("Bob".to_string()));
        assert_eq!(player.game(), Ok(game));
    }

    #[test]
    fn test_card_checks() {
        let mut player = Player::new("Carol");
        let card = Card::new(Figure::Ace, Some(Suit::Spade)).unwrap();
        let id = card.id();

        assert!(player.check_has_card(id).is_err());
        assert!(player.check_has_not_card(id).is_ok());

        player.hand_mut().append(card);
        assert!(player.check_has_card(id).is_ok());
        assert!(matches!(
            player.check_has_not_card(id),
            Err(PlayerError::AlreadyHasCard { .. })
        ));
    }

    #[test]
    fn test_check_different_players() {
        assert!(check_different_players(PlayerId::new(0), PlayerId::new(1), "x").is_ok());
        assert_eq!(
            check_different_players(PlayerId::new(1), PlayerId::new(1), "x"),
            Err(PlayerError::SamePlayer("x".to_string()))
        );
    }
}
