//! Card definitions: figures, suits, and per-game figure ordering.
//!
//! `Figure` and `Suit` are closed enumerations. Which of them a game accepts,
//! and in what order figures rank, is game data: the validation helpers take
//! the allowed set as a parameter and `RankOrder` belongs to the rule set,
//! not to the card.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::CardError;

/// Card rank symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Figure {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    /// Has no suit.
    Joker,
}

impl Figure {
    /// Every figure, jokers included.
    pub const ALL: [Figure; 14] = [
        Figure::Two,
        Figure::Three,
        Figure::Four,
        Figure::Five,
        Figure::Six,
        Figure::Seven,
        Figure::Eight,
        Figure::Nine,
        Figure::Ten,
        Figure::Jack,
        Figure::Queen,
        Figure::King,
        Figure::Ace,
        Figure::Joker,
    ];

    /// The thirteen figures of a standard deck, 2 to Ace.
    pub const STANDARD: [Figure; 13] = [
        Figure::Two,
        Figure::Three,
        Figure::Four,
        Figure::Five,
        Figure::Six,
        Figure::Seven,
        Figure::Eight,
        Figure::Nine,
        Figure::Ten,
        Figure::Jack,
        Figure::Queen,
        Figure::King,
        Figure::Ace,
    ];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Figure::Two => "2",
            Figure::Three => "3",
            Figure::Four => "4",
            Figure::Five => "5",
            Figure::Six => "6",
            Figure::Seven => "7",
            Figure::Eight => "8",
            Figure::Nine => "9",
            Figure::Ten => "10",
            Figure::Jack => "J",
            Figure::Queen => "Q",
            Figure::King => "K",
            Figure::Ace => "A",
            Figure::Joker => "★",
        }
    }

    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Figure::Joker)
    }
}

impl std::fmt::Display for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Figure {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Figure::ALL
            .into_iter()
            .find(|figure| figure.symbol() == s)
            .ok_or_else(|| CardError::InvalidFigure(s.to_string()))
    }
}

/// Color of a suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuitColor {
    Red,
    Black,
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Heart => "♥",
            Suit::Diamond => "♦",
            Suit::Club => "♣",
            Suit::Spade => "♠",
        }
    }

    #[must_use]
    pub const fn color(self) -> SuitColor {
        match self {
            Suit::Heart | Suit::Diamond => SuitColor::Red,
            Suit::Club | Suit::Spade => SuitColor::Black,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.symbol() == s)
            .ok_or_else(|| CardError::InvalidSuit(s.to_string()))
    }
}

/// Fail with `InvalidFigure` unless `figure` is one of `allowed`.
pub fn check_figure(figure: Figure, allowed: &[Figure]) -> Result<(), CardError> {
    if !allowed.contains(&figure) {
        return Err(CardError::InvalidFigure(figure.symbol().to_string()));
    }
    Ok(())
}

/// Fail with `InvalidSuit` unless `suit` is one of `allowed`.
pub fn check_suit(suit: Suit, allowed: &[Suit]) -> Result<(), CardError> {
    if !allowed.contains(&suit) {
        return Err(CardError::InvalidSuit(suit.symbol().to_string()));
    }
    Ok(())
}

/// Total order over the figures a game ranks, lowest first.
///
/// ```
/// use rust_cardgame::cards::{Figure, RankOrder};
///
/// let order = RankOrder::standard();
/// assert!(order.rank(Figure::Ace).unwrap() > order.rank(Figure::King).unwrap());
/// assert!(order.rank(Figure::Joker).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankOrder {
    figures: Vec<Figure>,
}

impl RankOrder {
    /// Build an order from figures listed lowest to highest.
    #[must_use]
    pub fn new(figures: impl Into<Vec<Figure>>) -> Self {
        Self {
            figures: figures.into(),
        }
    }

    /// 2 lowest, Ace highest, no joker.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Figure::STANDARD)
    }

    /// Ranked figures, lowest first.
    #[must_use]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Position of `figure` in the order; higher is stronger.
    pub fn rank(&self, figure: Figure) -> Result<usize, CardError> {
        self.figures
            .iter()
            .position(|&f| f == figure)
            .ok_or_else(|| CardError::InvalidFigure(figure.symbol().to_string()))
    }
}

impl Default for RankOrder {
    fn default() -> Self {
        Self::standard()
    }
}
