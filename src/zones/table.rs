//! The game table: where moves in progress are visible to the rules.
//!
//! Every active player has one staged collection (the cards they placed as
//! their own), and everyone shares one pile. The roster and the staged
//! collections are kept as two parallel vectors and always stay the same
//! length and index-aligned.

use serde::Serialize;

use super::collection::CardCollection;
use crate::core::entity::CardId;
use crate::core::error::TableError;
use crate::core::player::PlayerId;

#[derive(Debug, Default, Serialize)]
pub struct GameTable {
    players: Vec<PlayerId>,
    staged: Vec<CardCollection>,
    pile: CardCollection,
}

impl GameTable {
    /// Create a table seating `players` in order.
    #[must_use]
    pub fn new(players: &[PlayerId]) -> Self {
        let mut table = Self::default();
        for &player in players {
            table.add_player(player);
        }
        table
    }

    pub fn add_player(&mut self, player: PlayerId) {
        self.players.push(player);
        self.staged.push(CardCollection::new());
    }

    /// Remove a player from the table, handing back their staged cards.
    pub fn unset_player(&mut self, player: PlayerId) -> Result<CardCollection, TableError> {
        let index = self.player_index(player)?;
        self.players.remove(index);
        Ok(self.staged.remove(index))
    }

    /// Seated players, in seating order.
    #[must_use]
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// Cards `player` placed as their own.
    pub fn player_cards(&self, player: PlayerId) -> Result<&CardCollection, TableError> {
        let index = self.player_index(player)?;
        Ok(&self.staged[index])
    }

    pub fn player_cards_mut(&mut self, player: PlayerId) -> Result<&mut CardCollection, TableError> {
        let index = self.player_index(player)?;
        Ok(&mut self.staged[index])
    }

    #[must_use]
    pub fn pile(&self) -> &CardCollection {
        &self.pile
    }

    pub fn pile_mut(&mut self) -> &mut CardCollection {
        &mut self.pile
    }

    pub fn count_situated_by_player(&self, player: PlayerId) -> Result<usize, TableError> {
        Ok(self.player_cards(player)?.len())
    }

    #[must_use]
    pub fn count_situated_by_all_players(&self) -> usize {
        self.staged.iter().map(CardCollection::len).sum()
    }

    #[must_use]
    pub fn count_situated_in_pile(&self) -> usize {
        self.pile.len()
    }

    #[must_use]
    pub fn count_all_situated(&self) -> usize {
        self.count_situated_by_all_players() + self.count_situated_in_pile()
    }

    pub fn has_player_cards_situated(&self, player: PlayerId) -> Result<bool, TableError> {
        Ok(!self.player_cards(player)?.is_empty())
    }

    #[must_use]
    pub fn has_every_player_cards_situated(&self) -> bool {
        self.staged.iter().all(|cards| !cards.is_empty())
    }

    /// True when all staged counts are equal. Vacuously true with no players.
    #[must_use]
    pub fn has_every_player_same_situated_count(&self) -> bool {
        match self.staged.first() {
            Some(first) => self.staged.iter().all(|cards| cards.len() == first.len()),
            None => true,
        }
    }

    pub fn is_card_situated_by_player(&self, card: CardId, player: PlayerId) -> Result<bool, TableError> {
        Ok(self.player_cards(player)?.has(card))
    }

    #[must_use]
    pub fn is_card_situated_by_any_player(&self, card: CardId) -> bool {
        self.staged.iter().any(|cards| cards.has(card))
    }

    #[must_use]
    pub fn is_card_situated_in_pile(&self, card: CardId) -> bool {
        self.pile.has(card)
    }

    /// The player whose staged cards contain `card`.
    pub fn player_who_situated_card(&self, card: CardId) -> Result<PlayerId, TableError> {
        self.players
            .iter()
            .zip(&self.staged)
            .find(|(_, cards)| cards.has(card))
            .map(|(&player, _)| player)
            .ok_or(TableError::NoPlayerHasPlacedCard(card))
    }

    pub fn check_is_situated_card(&self, card: CardId) -> Result<(), TableError> {
        if !self.is_card_situated_by_any_player(card) {
            return Err(TableError::NoPlayerHasPlacedCard(card));
        }
        Ok(())
    }

    pub fn check_every_player_has_situated_cards(&self) -> Result<(), TableError> {
        if !self.has_every_player_cards_situated() {
            return Err(TableError::NotAllPlayersPlacedCards);
        }
        Ok(())
    }

    fn player_index(&self, player: PlayerId) -> Result<usize, TableError> {
        self.players
            .iter()
            .position(|&p| p == player)
            .ok_or(TableError::UnknownPlayer(player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Figure, Suit};

    fn card(figure: Figure) -> Card {
        Card::new(figure, Some(Suit::Spade)).unwrap()
    }

    fn table() -> GameTable {
        GameTable::new(&[PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)])
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = table();

        assert_eq!(table.players().len(), 3);
        assert_eq!(table.count_all_situated(), 0);
        assert!(!table.has_every_player_cards_situated());
        assert!(table.has_every_player_same_situated_count());
        assert!(table.check_every_player_has_situated_cards().is_err());
    }

    #[test]
    fn test_counts() {
        let mut table = table();
        let p0 = PlayerId::new(0);
        let p2 = PlayerId::new(2);

        table.player_cards_mut(p0).unwrap().append(card(Figure::Two));
        table.player_cards_mut(p0).unwrap().append(card(Figure::Three));
        table.player_cards_mut(p2).unwrap().append(card(Figure::Four));
        table.pile_mut().append(card(Figure::Five));

        assert_eq!(table.count_situated_by_player(p0), Ok(2));
        assert_eq!(table.count_situated_by_all_players(), 3);
        assert_eq!(table.count_situated_in_pile(), 1);
        assert_eq!(table.count_all_situated(), 4);
        assert_eq!(table.has_player_cards_situated(PlayerId::new(1)), Ok(false));
        assert!(!table.has_every_player_same_situated_count());
    }

    #[test]
    fn test_every_player_situated() {
        let mut table = table();
        for player in PlayerId::all(3) {
            table.player_cards_mut(player).unwrap().append(card(Figure::Ace));
        }

        assert!(table.has_every_player_cards_situated());
        assert!(table.has_every_player_same_situated_count());
        assert!(table.check_every_player_has_situated_cards().is_ok());
    }

    #[test]
    fn test_card_lookup() {
        let mut table = table();
        let staged = card(Figure::King);
        let staged_id = staged.id();
        let piled = card(Figure::Queen);
        let piled_id = piled.id();

        table.player_cards_mut(PlayerId::new(1)).unwrap().append(staged);
        table.pile_mut().append(piled);

        assert_eq!(table.is_card_situated_by_player(staged_id, PlayerId::new(1)), Ok(true));
        assert_eq!(table.is_card_situated_by_player(staged_id, PlayerId::new(0)), Ok(false));
        assert!(table.is_card_situated_by_any_player(staged_id));
        assert!(!table.is_card_situated_by_any_player(piled_id));
        assert!(table.is_card_situated_in_pile(piled_id));

        assert_eq!(table.player_who_situated_card(staged_id), Ok(PlayerId::new(1)));
        assert_eq!(
            table.player_who_situated_card(piled_id),
            Err(TableError::NoPlayerHasPlacedCard(piled_id))
        );
        assert!(table.check_is_situated_card(staged_id).is_ok());
        assert!(table.check_is_situated_card(piled_id).is_err());
    }

    #[test]
    fn test_unset_player_keeps_alignment() {
        let mut table = table();
        let p1 = PlayerId::new(1);
        let p2 = PlayerId::new(2);
        table.player_cards_mut(p1).unwrap().append(card(Figure::Seven));
        table.player_cards_mut(p2).unwrap().append(card(Figure::Eight));

        let returned = table.unset_player(p1).unwrap();
        assert_eq!(returned.len(), 1);
        assert_eq!(table.players(), &[PlayerId::new(0), p2]);
        assert_eq!(table.player_cards(p2).unwrap().first().unwrap().figure(), Figure::Eight);

        assert_eq!(table.unset_player(p1).unwrap_err(), TableError::UnknownPlayer(p1));
        assert_eq!(table.player_cards(p1).unwrap_err(), TableError::UnknownPlayer(p1));
    }

    #[test]
    fn test_empty_table_same_count_is_vacuous() {
        let table = GameTable::new(&[]);
        assert!(table.has_every_player_same_situated_count());
        assert!(table.has_every_player_cards_situated());
    }
}
