//! Card instances.
//!
//! A `Card` is a unique physical card: figure and suit are fixed at
//! construction, only the face-up flag changes afterwards. Cards are not
//! `Clone`; moving a card between collections moves the value, so a card can
//! never be in two places at once.

use serde::Serialize;

use super::definition::{check_figure, check_suit, Figure, Suit};
use crate::core::entity::CardId;
use crate::core::error::CardError;

/// A single playing card.
///
/// ```
/// use rust_cardgame::cards::{Card, Figure, Suit};
///
/// let card = Card::new(Figure::Queen, Some(Suit::Heart)).unwrap();
/// assert_eq!(card.to_string(), "Q♥");
/// assert!(!card.is_visible());
///
/// let joker = Card::new(Figure::Joker, None).unwrap();
/// assert_eq!(joker.suit(), None);
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    id: CardId,
    figure: Figure,
    suit: Option<Suit>,
    visible: bool,
}

impl Card {
    /// Create a card from the full figure and suit enumerations.
    pub fn new(figure: Figure, suit: Option<Suit>) -> Result<Self, CardError> {
        Self::new_in(figure, suit, &Figure::ALL, &Suit::ALL)
    }

    /// Create a card, accepting only the given figures and suits.
    ///
    /// A joker must come without a suit; every other figure needs one.
    pub fn new_in(
        figure: Figure,
        suit: Option<Suit>,
        figures: &[Figure],
        suits: &[Suit],
    ) -> Result<Self, CardError> {
        check_figure(figure, figures)?;
        match (figure.is_joker(), suit) {
            (true, Some(suit)) => return Err(CardError::JokerWithSuit(suit.symbol().to_string())),
            (true, None) => {}
            (false, Some(suit)) => check_suit(suit, suits)?,
            (false, None) => return Err(CardError::InvalidSuit(String::new())),
        }

        Ok(Self {
            id: CardId::next(),
            figure,
            suit,
            visible: false,
        })
    }

    /// Create a card from its figure and suit symbols.
    pub fn parse(figure: &str, suit: Option<&str>) -> Result<Self, CardError> {
        let figure: Figure = figure.parse()?;
        let suit = suit.map(str::parse::<Suit>).transpose()?;
        Self::new(figure, suit)
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn figure(&self) -> Figure {
        self.figure
    }

    /// `None` for jokers.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Is the card face up for other players?
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{}{}", self.figure, suit),
            None => write!(f, "{}", self.figure),
        }
    }
}
