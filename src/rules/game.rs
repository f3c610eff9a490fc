//! The generic game engine.
//!
//! `Game<R>` owns everything a game is made of: the players and their hands,
//! the deck, the table, and the rule set `R`. Rule hooks see the mutable
//! state through `GameCore`, which only offers whole-card transfers (collect
//! from one collection, append to another), so a card is never lost or
//! duplicated between collections.
//!
//! Players act through a `Seat`, a borrowed view of one player inside the
//! game:
//!
//! ```
//! use rust_cardgame::games::war::WarGameBuilder;
//!
//! let mut game = WarGameBuilder::new()
//!     .players(["Alice", "Bob"])
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let alice = game.players()[0];
//! let mut seat = game.seat(alice).unwrap();
//! let top = seat.available_cards_to_put().unwrap()[0];
//! seat.put_card(top).unwrap();
//! ```

use tracing::{debug, info};

use super::engine::{GameResult, RoundResult, RulesEngine};
use crate::core::config::GameConfig;
use crate::core::entity::{CardId, GameId};
use crate::core::error::{GameError, PlayerError};
use crate::core::player::{Player, PlayerId, MAX_PLAYERS};
use crate::core::rng::GameRng;
use crate::zones::{CardCollection, CardIds, GameTable};

/// Engine state visible to rule hooks.
#[derive(Debug)]
pub struct GameCore {
    id: GameId,
    config: GameConfig,
    /// Every player ever seated, indexed by `PlayerId`.
    players: Vec<Player>,
    /// Active players, in seating order.
    roster: Vec<PlayerId>,
    /// Eliminated players, in elimination order.
    lose_players: Vec<PlayerId>,
    deck: CardCollection,
    table: GameTable,
    rng: GameRng,
    round_number: u32,
    last_round: Option<RoundResult>,
    result: Option<GameResult>,
}

impl GameCore {
    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Active players, in seating order.
    #[must_use]
    pub fn players(&self) -> &[PlayerId] {
        &self.roster
    }

    /// Eliminated players, in elimination order.
    #[must_use]
    pub fn lose_players(&self) -> &[PlayerId] {
        &self.lose_players
    }

    /// Every seated player, eliminated ones included.
    #[must_use]
    pub fn all_players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player: PlayerId) -> Result<&Player, GameError> {
        self.players
            .get(player.index())
            .ok_or(GameError::UnknownPlayer(player))
    }

    pub fn player_mut(&mut self, player: PlayerId) -> Result<&mut Player, GameError> {
        self.players
            .get_mut(player.index())
            .ok_or(GameError::UnknownPlayer(player))
    }

    /// Find a player by name.
    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        let index = self.players.iter().position(|p| p.name() == name)?;
        u8::try_from(index).ok().map(PlayerId::new)
    }

    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.roster.contains(&player)
    }

    #[must_use]
    pub fn is_one_player_left(&self) -> bool {
        self.roster.len() == 1
    }

    #[must_use]
    pub fn deck(&self) -> &CardCollection {
        &self.deck
    }

    #[must_use]
    pub fn table(&self) -> &GameTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut GameTable {
        &mut self.table
    }

    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    /// Number of rounds resolved so far.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn last_round(&self) -> Option<&RoundResult> {
        self.last_round.as_ref()
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Cards anywhere in the game: deck, hands (eliminated players
    /// included), staged cards, and pile.
    #[must_use]
    pub fn count_all_cards(&self) -> usize {
        self.deck.len()
            + self.players.iter().map(|p| p.hand().len()).sum::<usize>()
            + self.table.count_all_situated()
    }

    // === Card Transfers ===

    /// Move the bottom card of the deck onto the top of `player`'s hand.
    pub fn deal_card(&mut self, player: PlayerId) -> Result<(), GameError> {
        self.player(player)?;
        let card = self.deck.collect_first()?;
        debug!(player = %player, card = %card, "dealt card");
        self.player_mut(player)?.hand_mut().append(card);
        Ok(())
    }

    /// Move a card from `player`'s hand to their staged cards.
    pub fn stage_card(&mut self, card: CardId, player: PlayerId) -> Result<(), GameError> {
        self.table.player_cards(player)?;
        let card = self.player_mut(player)?.hand_mut().collect(card)?;
        self.table.player_cards_mut(player)?.append(card);
        Ok(())
    }

    /// Move a card from `player`'s hand to the shared pile.
    pub fn pile_card(&mut self, card: CardId, player: PlayerId) -> Result<(), GameError> {
        let card = self.player_mut(player)?.hand_mut().collect(card)?;
        self.table.pile_mut().append(card);
        Ok(())
    }

    /// Move a card from one hand to another.
    pub fn give_card(&mut self, card: CardId, from: PlayerId, to: PlayerId) -> Result<(), GameError> {
        self.player(to)?;
        let card = self.player_mut(from)?.hand_mut().collect(card)?;
        self.player_mut(to)?.hand_mut().append(card);
        Ok(())
    }

    /// Move every staged card of `player` face down to the bottom of their hand.
    pub fn return_staged_cards(&mut self, player: PlayerId) -> Result<(), GameError> {
        let staged = self.table.player_cards_mut(player)?;
        staged.set_all_visible(false);
        let cards = staged.collect_all();
        self.player_mut(player)?.hand_mut().prepend_many(cards);
        Ok(())
    }

    /// Collect every staged card on the table, in seating order.
    pub fn collect_all_staged(&mut self) -> Result<CardCollection, GameError> {
        let mut pool = CardCollection::new();
        for player in self.roster.clone() {
            pool.append_many(self.table.player_cards_mut(player)?.collect_all());
        }
        Ok(pool)
    }

    /// Remove a player from the game.
    ///
    /// The player is recorded as lost, leaves the roster and the table, and
    /// any staged cards go face down to the bottom of their own hand, which
    /// stays with the player.
    pub fn lose_player(&mut self, player: PlayerId) -> Result<(), GameError> {
        let mut staged = self.table.unset_player(player)?;
        staged.set_all_visible(false);
        let hand = self.player_mut(player)?.hand_mut();
        hand.prepend_many(staged.collect_all());

        self.roster.retain(|&p| p != player);
        self.lose_players.push(player);

        info!(
            player = %player,
            name = self.players[player.index()].name(),
            remaining = self.roster.len(),
            "player eliminated"
        );
        Ok(())
    }

    // === Lifecycle ===

    /// Record a resolved round.
    pub fn record_round(&mut self, mut round: RoundResult) {
        self.round_number += 1;
        round.round = self.round_number;
        self.last_round = Some(round);
    }

    /// Mark the game as over.
    pub fn finish(&mut self, result: GameResult) {
        info!(result = ?result, rounds = self.round_number, "game over");
        self.result = Some(result);
    }
}

/// A game: one engine, one rule set.
#[derive(Debug)]
pub struct Game<R: RulesEngine> {
    core: GameCore,
    rules: R,
}

impl<R: RulesEngine> Game<R> {
    /// Create a game and start it.
    ///
    /// Fails before anything is bound or built when a player is already
    /// bound to a game, or the player count is not allowed by the rules or
    /// exceeds `MAX_PLAYERS`.
    pub fn new(players: Vec<Player>, mut rules: R, config: GameConfig) -> Result<Self, GameError> {
        for player in &players {
            player.check_not_bound()?;
        }

        let allowed: Vec<usize> = rules
            .allowed_player_counts()
            .iter()
            .copied()
            .filter(|&count| count <= MAX_PLAYERS)
            .collect();
        if !allowed.contains(&players.len()) {
            return Err(GameError::WrongPlayerCount {
                count: players.len(),
                allowed,
            });
        }

        let id = GameId::next();
        let mut players = players;
        for player in &mut players {
            player.bind(id)?;
            player.hand_mut().clear();
        }

        let roster: Vec<_> = PlayerId::all(players.len()).collect();
        let table = GameTable::new(&roster);
        let root = GameRng::new(config.seed);
        let deck = rules.build_deck(&config, &mut root.for_context("deck"))?;

        let mut core = GameCore {
            id,
            config,
            players,
            roster,
            lose_players: Vec::new(),
            deck,
            table,
            rng: root.for_context("pool"),
            round_number: 0,
            last_round: None,
            result: None,
        };

        info!(game = %id, players = core.roster.len(), deck = core.deck.len(), "starting game");
        rules.start_game(&mut core)?;

        Ok(Self { core, rules })
    }

    #[must_use]
    pub fn core(&self) -> &GameCore {
        &self.core
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn id(&self) -> GameId {
        self.core.id
    }

    /// Active players, in seating order.
    #[must_use]
    pub fn players(&self) -> &[PlayerId] {
        self.core.players()
    }

    /// Eliminated players, in elimination order.
    #[must_use]
    pub fn lose_players(&self) -> &[PlayerId] {
        self.core.lose_players()
    }

    pub fn player(&self, player: PlayerId) -> Result<&Player, GameError> {
        self.core.player(player)
    }

    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.core.player_id(name)
    }

    #[must_use]
    pub fn table(&self) -> &GameTable {
        self.core.table()
    }

    #[must_use]
    pub fn deck(&self) -> &CardCollection {
        self.core.deck()
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.core.result()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.core.is_over()
    }

    #[must_use]
    pub fn is_one_player_left(&self) -> bool {
        self.core.is_one_player_left()
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.core.round_number()
    }

    #[must_use]
    pub fn last_round(&self) -> Option<&RoundResult> {
        self.core.last_round()
    }

    /// A player acting inside this game.
    pub fn seat(&mut self, player: PlayerId) -> Result<Seat<'_, R>, GameError> {
        let bound = self.core.player(player)?;
        if bound.game()? != self.core.id {
            return Err(PlayerError::GameNotBound(bound.name().to_string()).into());
        }
        Ok(Seat { game: self, player })
    }

    // === Moves ===

    pub fn put_card_by_player(&mut self, card: CardId, player: PlayerId) -> Result<(), GameError> {
        self.check_not_over()?;
        self.rules.put_card(&mut self.core, card, player)
    }

    pub fn put_card_in_pile_by_player(&mut self, card: CardId, player: PlayerId) -> Result<(), GameError> {
        self.check_not_over()?;
        self.rules.put_card_in_pile(&mut self.core, card, player)
    }

    pub fn give_card_by_player_to_player(
        &mut self,
        card: CardId,
        from: PlayerId,
        to: PlayerId,
    ) -> Result<(), GameError> {
        self.check_not_over()?;
        self.rules.give_card(&mut self.core, card, from, to)
    }

    // === Queries ===

    pub fn available_cards_to_put_by_player(&self, player: PlayerId) -> Result<CardIds, GameError> {
        self.rules.available_cards_to_put(&self.core, player)
    }

    pub fn available_cards_to_put_in_pile_by_player(&self, player: PlayerId) -> Result<CardIds, GameError> {
        self.rules.available_cards_to_put_in_pile(&self.core, player)
    }

    pub fn available_cards_to_give_by_player_to_player(
        &self,
        from: PlayerId,
        to: PlayerId,
    ) -> Result<CardIds, GameError> {
        self.rules.available_cards_to_give(&self.core, from, to)
    }

    pub fn has_available_cards_to_put_by_player(&self, player: PlayerId) -> Result<bool, GameError> {
        Ok(!self.available_cards_to_put_by_player(player)?.is_empty())
    }

    pub fn has_available_cards_to_put_in_pile_by_player(&self, player: PlayerId) -> Result<bool, GameError> {
        Ok(!self.available_cards_to_put_in_pile_by_player(player)?.is_empty())
    }

    pub fn has_available_cards_to_give_by_player_to_player(
        &self,
        from: PlayerId,
        to: PlayerId,
    ) -> Result<bool, GameError> {
        Ok(!self.available_cards_to_give_by_player_to_player(from, to)?.is_empty())
    }

    pub fn has_available_move_by_player(&self, player: PlayerId) -> Result<bool, GameError> {
        self.rules.has_available_move(&self.core, player)
    }

    /// Hand the players back. They stay bound to this game.
    #[must_use]
    pub fn into_players(self) -> Vec<Player> {
        self.core.players
    }

    fn check_not_over(&self) -> Result<(), GameError> {
        if self.core.is_over() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }
}

/// One player acting inside a game.
pub struct Seat<'g, R: RulesEngine> {
    game: &'g mut Game<R>,
    player: PlayerId,
}

impl<R: RulesEngine> Seat<'_, R> {
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.player
    }

    pub fn player(&self) -> Result<&Player, GameError> {
        self.game.player(self.player)
    }

    pub fn put_card(&mut self, card: CardId) -> Result<(), GameError> {
        self.game.put_card_by_player(card, self.player)
    }

    pub fn put_card_in_pile(&mut self, card: CardId) -> Result<(), GameError> {
        self.game.put_card_in_pile_by_player(card, self.player)
    }

    pub fn give_card_to_player(&mut self, card: CardId, to: PlayerId) -> Result<(), GameError> {
        self.game.give_card_by_player_to_player(card, self.player, to)
    }

    pub fn available_cards_to_put(&self) -> Result<CardIds, GameError> {
        self.game.available_cards_to_put_by_player(self.player)
    }

    pub fn available_cards_to_put_in_pile(&self) -> Result<CardIds, GameError> {
        self.game.available_cards_to_put_in_pile_by_player(self.player)
    }

    pub fn available_cards_to_give_to(&self, to: PlayerId) -> Result<CardIds, GameError> {
        self.game.available_cards_to_give_by_player_to_player(self.player, to)
    }

    pub fn has_available_move(&self) -> Result<bool, GameError> {
        self.game.has_available_move_by_player(self.player)
    }
}
