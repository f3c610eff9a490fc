//! Ordered card collections.
//!
//! A `CardCollection` is used for every place a card can be: the deck, a
//! hand, a player's staged cards, and the shared pile. It behaves as a queue
//! and a stack at the same time:
//! - first card = bottom of the pile (oldest)
//! - last card = top of the pile (most recent)
//!
//! Collections own their cards. Moving a card is a `collect` from one
//! collection followed by an `append`/`prepend` into another.

use serde::Serialize;
use smallvec::SmallVec;
use std::collections::VecDeque;

use crate::cards::{Card, Figure, Suit};
use crate::core::entity::CardId;
use crate::core::error::CollectionError;
use crate::core::rng::GameRng;

/// Card identities returned by availability queries.
///
/// Most queries yield zero or one card, so these stay on the stack.
pub type CardIds = SmallVec<[CardId; 4]>;

/// Ordered, duplicate-free collection of cards.
///
/// ```
/// use rust_cardgame::cards::{Card, Figure, Suit};
/// use rust_cardgame::zones::CardCollection;
///
/// let mut pile = CardCollection::new();
/// pile.append(Card::new(Figure::Two, Some(Suit::Heart)).unwrap());
/// pile.append(Card::new(Figure::Ace, Some(Suit::Spade)).unwrap());
///
/// assert_eq!(pile.first().unwrap().figure(), Figure::Two);
/// assert_eq!(pile.last().unwrap().figure(), Figure::Ace);
///
/// let top = pile.collect_last().unwrap();
/// assert_eq!(top.figure(), Figure::Ace);
/// assert_eq!(pile.len(), 1);
/// ```
#[derive(Debug, Default, Serialize)]
pub struct CardCollection {
    cards: VecDeque<Card>,
}

impl CardCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card on top (end).
    pub fn append(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Add a card at the bottom (start).
    pub fn prepend(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    /// Append each card in input order.
    pub fn append_many(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.append(card);
        }
    }

    /// Prepend each card in input order.
    ///
    /// The last input card ends up first in the collection.
    pub fn prepend_many(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.prepend(card);
        }
    }

    #[must_use]
    pub fn has(&self, card: CardId) -> bool {
        self.position(card).is_some()
    }

    #[must_use]
    pub fn get(&self, card: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == card)
    }

    pub fn get_mut(&mut self, card: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id() == card)
    }

    /// Remove and return a card, keeping the order of the rest.
    pub fn collect(&mut self, card: CardId) -> Result<Card, CollectionError> {
        let index = self
            .position(card)
            .ok_or(CollectionError::CardNotFound(card))?;
        self.cards
            .remove(index)
            .ok_or(CollectionError::CardNotFound(card))
    }

    /// Remove every card, front to back.
    pub fn collect_all(&mut self) -> Vec<Card> {
        self.cards.drain(..).collect()
    }

    /// Remove and return the bottom card.
    pub fn collect_first(&mut self) -> Result<Card, CollectionError> {
        self.cards
            .pop_front()
            .ok_or(CollectionError::EmptyCollection)
    }

    /// Remove and return the top card.
    pub fn collect_last(&mut self) -> Result<Card, CollectionError> {
        self.cards
            .pop_back()
            .ok_or(CollectionError::EmptyCollection)
    }

    /// The bottom card.
    pub fn first(&self) -> Result<&Card, CollectionError> {
        self.cards.front().ok_or(CollectionError::EmptyCollection)
    }

    /// The top card.
    pub fn last(&self) -> Result<&Card, CollectionError> {
        self.cards.back().ok_or(CollectionError::EmptyCollection)
    }

    pub fn last_mut(&mut self) -> Result<&mut Card, CollectionError> {
        self.cards
            .back_mut()
            .ok_or(CollectionError::EmptyCollection)
    }

    #[must_use]
    pub fn has_card_with_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|c| c.suit() == Some(suit))
    }

    #[must_use]
    pub fn has_card_with_figure(&self, figure: Figure) -> bool {
        self.cards.iter().any(|c| c.figure() == figure)
    }

    pub fn set_all_visible(&mut self, visible: bool) {
        for card in &mut self.cards {
            card.set_visible(visible);
        }
    }

    /// Discard every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Shuffle in place with the given RNG.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card identities, bottom to top.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(Card::id)
    }

    pub fn check_not_empty(&self) -> Result<(), CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::EmptyCollection);
        }
        Ok(())
    }

    pub fn check_has_card(&self, card: CardId) -> Result<(), CollectionError> {
        if !self.has(card) {
            return Err(CollectionError::CardNotFound(card));
        }
        Ok(())
    }

    fn position(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == card)
    }
}

impl FromIterator<Card> for CardCollection {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.append_many(iter);
        collection
    }
}

impl<'a> IntoIterator for &'a CardCollection {
    type Item = &'a Card;
    type IntoIter = std::collections::vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
