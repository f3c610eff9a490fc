//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - Which cards a player may put, put in the pile, or give away
//! - How the deck is built and dealt
//! - What happens when a round starts and ends, and who wins
//!
//! The generic `Game` calls into the rules but never interprets
//! game-specific concepts directly. The move executors have defaults that
//! validate against the availability queries before mutating anything; a
//! rule set overrides them to add its own bookkeeping.

use crate::core::config::GameConfig;
use crate::core::entity::CardId;
use crate::core::error::GameError;
use crate::core::player::{check_different_players, PlayerId};
use crate::core::rng::GameRng;
use crate::zones::{CardCollection, CardIds};

use super::game::GameCore;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Everyone was eliminated at once.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Outcome of one resolved round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundResult {
    /// 1-based round number.
    pub round: u32,
    /// `None` when the round ended in elimination without a winner.
    pub winner: Option<PlayerId>,
    /// Cards the winner collected from the table.
    pub cards_won: usize,
    /// Players eliminated at the end of this round, in elimination order.
    pub eliminated: Vec<PlayerId>,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - Availability queries are read-only and return an empty set when the
///   player can't act
/// - `start_game` runs once, after the deck is built and the table is set
/// - Overrides of `lose_player` must call through to `GameCore::lose_player`
pub trait RulesEngine {
    /// Player counts this game can be played with.
    fn allowed_player_counts(&self) -> &[usize];

    /// Build the initial deck.
    fn build_deck(&self, config: &GameConfig, rng: &mut GameRng) -> Result<CardCollection, GameError>;

    /// Cards `player` may currently put on the table as their own.
    fn available_cards_to_put(&self, core: &GameCore, player: PlayerId) -> Result<CardIds, GameError>;

    /// Cards `player` may currently put in the shared pile.
    fn available_cards_to_put_in_pile(
        &self,
        core: &GameCore,
        player: PlayerId,
    ) -> Result<CardIds, GameError>;

    /// Cards `from` may currently give to `to`.
    fn available_cards_to_give(
        &self,
        core: &GameCore,
        from: PlayerId,
        to: PlayerId,
    ) -> Result<CardIds, GameError>;

    fn start_game(&mut self, core: &mut GameCore) -> Result<(), GameError>;

    fn end_game(&mut self, core: &GameCore) -> GameResult;

    fn start_round(&mut self, core: &mut GameCore) -> Result<(), GameError>;

    fn end_round(&mut self, core: &mut GameCore) -> Result<RoundResult, GameError>;

    // === Move Execution ===

    fn put_card(&mut self, core: &mut GameCore, card: CardId, player: PlayerId) -> Result<(), GameError> {
        put_card_by_player(&*self, core, card, player)
    }

    fn put_card_in_pile(
        &mut self,
        core: &mut GameCore,
        card: CardId,
        player: PlayerId,
    ) -> Result<(), GameError> {
        put_card_in_pile_by_player(&*self, core, card, player)
    }

    fn give_card(
        &mut self,
        core: &mut GameCore,
        card: CardId,
        from: PlayerId,
        to: PlayerId,
    ) -> Result<(), GameError> {
        give_card_by_player_to_player(&*self, core, card, from, to)
    }

    /// Eliminate a player.
    fn lose_player(&mut self, core: &mut GameCore, player: PlayerId) -> Result<(), GameError> {
        core.lose_player(player)
    }

    // === Convenience Methods ===

    /// Can `player` make any move at all?
    ///
    /// True if they can put a card, put one in the pile, or give one to
    /// another active player.
    fn has_available_move(&self, core: &GameCore, player: PlayerId) -> Result<bool, GameError> {
        if !self.available_cards_to_put(core, player)?.is_empty()
            || !self.available_cards_to_put_in_pile(core, player)?.is_empty()
        {
            return Ok(true);
        }

        for &other in core.players() {
            if other != player && !self.available_cards_to_give(core, player, other)?.is_empty() {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

/// Default put: hand -> the player's staged cards.
pub fn put_card_by_player<R: RulesEngine + ?Sized>(
    rules: &R,
    core: &mut GameCore,
    card: CardId,
    player: PlayerId,
) -> Result<(), GameError> {
    core.player(player)?.check_has_card(card)?;
    if !rules.available_cards_to_put(core, player)?.contains(&card) {
        return Err(GameError::CannotPutCard { player, card });
    }
    core.stage_card(card, player)
}

/// Default pile put: hand -> the shared pile.
pub fn put_card_in_pile_by_player<R: RulesEngine + ?Sized>(
    rules: &R,
    core: &mut GameCore,
    card: CardId,
    player: PlayerId,
) -> Result<(), GameError> {
    core.player(player)?.check_has_card(card)?;
    if !rules.available_cards_to_put_in_pile(core, player)?.contains(&card) {
        return Err(GameError::CannotPutCardInPile { player, card });
    }
    core.pile_card(card, player)
}

/// Default give: hand -> another player's hand.
pub fn give_card_by_player_to_player<R: RulesEngine + ?Sized>(
    rules: &R,
    core: &mut GameCore,
    card: CardId,
    from: PlayerId,
    to: PlayerId,
) -> Result<(), GameError> {
    let giver = core.player(from)?;
    giver.check_has_card(card)?;
    check_different_players(from, to, giver.name())?;
    core.player(to)?.check_has_not_card(card)?;
    if !rules.available_cards_to_give(core, from, to)?.contains(&card) {
        return Err(GameError::CannotGiveCard { from, to, card });
    }
    core.give_card(card, from, to)
}
