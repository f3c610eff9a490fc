//! War rules and the builder that sets up a War game.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::cards::{Card, Figure, RankOrder, Suit};
use crate::core::config::GameConfig;
use crate::core::entity::CardId;
use crate::core::error::GameError;
use crate::core::player::{Player, PlayerId};
use crate::core::rng::GameRng;
use crate::rules::engine::{put_card_by_player, GameResult, RoundResult, RulesEngine};
use crate::rules::game::{Game, GameCore};
use crate::zones::{CardCollection, CardIds};

/// Moves granted to each player tied for the highest card in a war.
pub const WAR_MOVES: u32 = 2;

/// How the deck is put together before dealing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeckOrder {
    /// 52 cards, suit-major, 2 to Ace within each suit.
    #[default]
    Standard,
    /// Exactly these cards, bottom of the deck first.
    ///
    /// Dealing takes from the bottom, so the first card goes to the first
    /// seat. Combine with `shuffle_deck(false)` for scripted games.
    Stacked(Vec<(Figure, Suit)>),
}

/// War rule set.
#[derive(Clone, Debug, Default)]
pub struct WarRules {
    /// Stage actions each active player has left in the current phase.
    moves_remaining: FxHashMap<PlayerId, u32>,
    /// Players granted war moves in the latest escalation.
    at_war: Vec<PlayerId>,
    /// Wars fought so far in the current round.
    escalations: u32,
    rank_order: RankOrder,
    deck_order: DeckOrder,
}

impl WarRules {
    #[must_use]
    pub fn new(deck_order: DeckOrder) -> Self {
        Self {
            deck_order,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn rank_order(&self) -> &RankOrder {
        &self.rank_order
    }

    /// Moves `player` has left in the current phase; 0 for eliminated players.
    #[must_use]
    pub fn moves_remaining(&self, player: PlayerId) -> u32 {
        self.moves_remaining.get(&player).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn can_player_put_next_card(&self, player: PlayerId) -> bool {
        self.moves_remaining(player) > 0
    }

    /// Players who tied in the latest war and owe its extra moves.
    ///
    /// Empty outside a war. Everyone else's staged top card still takes part
    /// in the next comparison.
    #[must_use]
    pub fn at_war(&self) -> &[PlayerId] {
        &self.at_war
    }

    /// Is the current round in a war?
    #[must_use]
    pub fn is_war(&self) -> bool {
        self.escalations > 0
    }

    #[must_use]
    pub fn escalations(&self) -> u32 {
        self.escalations
    }

    /// The single highest-ranked staged top card on the table.
    pub fn highest_staged_card(&self, core: &GameCore) -> Result<CardId, GameError> {
        match self.leaders(core)?.as_slice() {
            [(_, card)] => Ok(*card),
            _ => Err(GameError::MoreThanOneHighestCard),
        }
    }

    fn has_player_with_moves(&self) -> bool {
        self.moves_remaining.values().any(|&moves| moves > 0)
    }

    fn set_moves_for_all(&mut self, core: &GameCore, moves: u32) {
        self.moves_remaining = core.players().iter().map(|&p| (p, moves)).collect();
    }

    /// Active players holding the highest-ranked staged top card.
    fn leaders(&self, core: &GameCore) -> Result<Vec<(PlayerId, CardId)>, GameError> {
        let mut best = None;
        let mut leaders = Vec::new();

        for &player in core.players() {
            let top = core.table().player_cards(player)?.last()?;
            let rank = self.rank_order.rank(top.figure())?;
            match best {
                Some(highest) if rank < highest => {}
                Some(highest) if rank == highest => leaders.push((player, top.id())),
                _ => {
                    best = Some(rank);
                    leaders.clear();
                    leaders.push((player, top.id()));
                }
            }
        }

        Ok(leaders)
    }

    /// Can't stage what the phase demands, or has nothing left at all.
    fn is_player_loser(&self, core: &GameCore, player: PlayerId) -> Result<bool, GameError> {
        let hand = core.player(player)?.hand().len();
        Ok(self.moves_remaining(player) as usize > hand || hand == 0)
    }

    fn losers(&self, core: &GameCore) -> Result<Vec<PlayerId>, GameError> {
        let mut losers = Vec::new();
        for &player in core.players() {
            if self.is_player_loser(core, player)? {
                losers.push(player);
            }
        }
        Ok(losers)
    }

    /// Pool every staged card face down, shuffle, and slide it under the
    /// winner's hand. Returns the number of cards won.
    fn collect_cards_by_winner(&self, core: &mut GameCore, winner: PlayerId) -> Result<usize, GameError> {
        let mut pool = core.collect_all_staged()?;
        pool.set_all_visible(false);
        pool.shuffle(core.rng_mut());

        let won = pool.len();
        core.player_mut(winner)?.hand_mut().prepend_many(pool.collect_all());
        Ok(won)
    }

    /// Called once nobody has moves left.
    fn resolve(&mut self, core: &mut GameCore) -> Result<(), GameError> {
        let leaders = self.leaders(core)?;
        if leaders.len() > 1 {
            let tied: Vec<_> = leaders.iter().map(|&(player, _)| player).collect();
            self.escalations += 1;
            info!(players = ?tied, escalation = self.escalations, "war");
            for &player in &tied {
                self.moves_remaining.insert(player, WAR_MOVES);
            }
            self.at_war = tied;

            if self.losers(core)?.is_empty() {
                return Ok(());
            }
        }

        self.end_and_start_round(core)
    }

    fn end_and_start_round(&mut self, core: &mut GameCore) -> Result<(), GameError> {
        let round = self.end_round(core)?;
        core.record_round(round);

        if core.players().len() <= 1 {
            let result = self.end_game(core);
            core.finish(result);
            self.moves_remaining.clear();
            self.at_war.clear();
            return Ok(());
        }

        self.start_round(core)
    }
}

impl RulesEngine for WarRules {
    fn allowed_player_counts(&self) -> &[usize] {
        &[2, 3]
    }

    fn build_deck(&self, config: &GameConfig, rng: &mut GameRng) -> Result<CardCollection, GameError> {
        let mut deck = match &self.deck_order {
            DeckOrder::Standard => Suit::ALL
                .into_iter()
                .flat_map(|suit| self.rank_order.figures().iter().map(move |&figure| (figure, suit)))
                .map(|(figure, suit)| Card::new(figure, Some(suit)).map_err(GameError::from))
                .collect::<Result<CardCollection, _>>()?,
            DeckOrder::Stacked(cards) => cards
                .iter()
                .map(|&(figure, suit)| Card::new(figure, Some(suit)).map_err(GameError::from))
                .collect::<Result<CardCollection, _>>()?,
        };

        if config.shuffle_deck {
            deck.shuffle(rng);
        }
        Ok(deck)
    }

    /// Only the top card of the hand, and only while the player has moves.
    fn available_cards_to_put(&self, core: &GameCore, player: PlayerId) -> Result<CardIds, GameError> {
        let hand = core.player(player)?.hand();
        let mut cards = CardIds::new();
        if self.can_player_put_next_card(player) {
            if let Ok(top) = hand.last() {
                cards.push(top.id());
            }
        }
        Ok(cards)
    }

    fn available_cards_to_put_in_pile(&self, core: &GameCore, player: PlayerId) -> Result<CardIds, GameError> {
        core.player(player)?;
        Ok(CardIds::new())
    }

    fn available_cards_to_give(
        &self,
        core: &GameCore,
        from: PlayerId,
        to: PlayerId,
    ) -> Result<CardIds, GameError> {
        core.player(from)?;
        core.player(to)?;
        Ok(CardIds::new())
    }

    fn start_game(&mut self, core: &mut GameCore) -> Result<(), GameError> {
        let roster = core.players().to_vec();
        let deals: Vec<_> = roster.iter().cycle().take(core.deck().len()).copied().collect();
        for player in deals {
            core.deal_card(player)?;
        }

        // A short stacked deck can leave seats empty-handed.
        for player in roster {
            if core.player(player)?.hand().is_empty() {
                self.lose_player(core, player)?;
            }
        }
        if core.players().len() <= 1 {
            let result = self.end_game(core);
            core.finish(result);
            return Ok(());
        }

        self.start_round(core)
    }

    fn end_game(&mut self, core: &GameCore) -> GameResult {
        match core.players() {
            [winner] => GameResult::Winner(*winner),
            _ => GameResult::Draw,
        }
    }

    fn start_round(&mut self, core: &mut GameCore) -> Result<(), GameError> {
        self.set_moves_for_all(core, 1);
        self.at_war.clear();
        self.escalations = 0;
        debug!(round = core.round_number() + 1, players = core.players().len(), "round started");
        Ok(())
    }

    /// Pay out a unique winner, eliminate losers, and hand any staged cards
    /// left on the table back to their owners.
    fn end_round(&mut self, core: &mut GameCore) -> Result<RoundResult, GameError> {
        let mut round = RoundResult::default();

        if let [(winner, card)] = self.leaders(core)?.as_slice() {
            let winner = *winner;
            round.cards_won = self.collect_cards_by_winner(core, winner)?;
            round.winner = Some(winner);
            info!(winner = %winner, card = %card, cards = round.cards_won, "round won");
        }

        for player in self.losers(core)? {
            self.lose_player(core, player)?;
            round.eliminated.push(player);
        }

        for player in core.players().to_vec() {
            core.return_staged_cards(player)?;
        }

        self.set_moves_for_all(core, 0);
        Ok(round)
    }

    /// Stage the top card, flip it face up on odd positions, and resolve
    /// once every move of the phase is spent.
    fn put_card(&mut self, core: &mut GameCore, card: CardId, player: PlayerId) -> Result<(), GameError> {
        put_card_by_player(&*self, core, card, player)?;

        let staged = core.table_mut().player_cards_mut(player)?;
        let visible = staged.len() % 2 == 1;
        staged.last_mut()?.set_visible(visible);

        if let Some(moves) = self.moves_remaining.get_mut(&player) {
            *moves = moves.saturating_sub(1);
        }
        debug!(player = %player, card = %card, visible, "staged card");

        if self.has_player_with_moves() {
            return Ok(());
        }
        self.resolve(core)
    }

    fn put_card_in_pile(
        &mut self,
        _core: &mut GameCore,
        _card: CardId,
        _player: PlayerId,
    ) -> Result<(), GameError> {
        Err(GameError::UnsupportedMove("put card in pile"))
    }

    fn give_card(
        &mut self,
        _core: &mut GameCore,
        _card: CardId,
        _from: PlayerId,
        _to: PlayerId,
    ) -> Result<(), GameError> {
        Err(GameError::UnsupportedMove("give card"))
    }

    fn lose_player(&mut self, core: &mut GameCore, player: PlayerId) -> Result<(), GameError> {
        self.moves_remaining.remove(&player);
        self.at_war.retain(|&p| p != player);
        core.lose_player(player)
    }
}

/// Builder for creating a War game.
///
/// ```
/// use rust_cardgame::games::war::WarGameBuilder;
///
/// let game = WarGameBuilder::new()
///     .player("Alice")
///     .player("Bob")
///     .player("Carol")
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let hands: Vec<_> = game
///     .players()
///     .iter()
///     .map(|&p| game.player(p).unwrap().hand().len())
///     .collect();
/// assert_eq!(hands, vec![18, 17, 17]);
/// ```
#[derive(Debug, Default)]
pub struct WarGameBuilder {
    players: Vec<Player>,
    config: GameConfig,
    deck_order: DeckOrder,
}

impl WarGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a new player with the given name.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.players.push(Player::new(name));
        self
    }

    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players.extend(names.into_iter().map(Player::new));
        self
    }

    /// Seat an existing player. Fails at `build` if they are already bound.
    pub fn seat(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn shuffle_deck(mut self, shuffle: bool) -> Self {
        self.config.shuffle_deck = shuffle;
        self
    }

    pub fn deck_order(mut self, order: DeckOrder) -> Self {
        self.deck_order = order;
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the game, deal, and start the first round.
    pub fn build(self) -> Result<Game<WarRules>, GameError> {
        Game::new(self.players, WarRules::new(self.deck_order), self.config)
    }
}
