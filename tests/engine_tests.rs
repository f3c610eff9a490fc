//! Generic engine tests.
//!
//! A small "discard" rule set exercises the parts of the engine War never
//! touches: the shared pile, giving cards between players, and custom
//! availability rules running through the default move executors.

use rust_cardgame::cards::{Card, Figure, Suit};
use rust_cardgame::core::{CardId, ErrorKind, GameConfig, GameError, GameRng, Player, PlayerError, PlayerId};
use rust_cardgame::rules::{Game, GameCore, GameResult, RoundResult, RulesEngine};
use rust_cardgame::zones::{CardCollection, CardIds};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);
const P2: PlayerId = PlayerId::new(2);

/// Hearts may be discarded to the pile, spades given to a neighbour, and
/// any card put on the table. Emptying your hand knocks you out.
#[derive(Debug, Default)]
struct DiscardRules {
    rounds_ended: u32,
}

impl DiscardRules {
    fn matching(core: &GameCore, player: PlayerId, suit: Suit) -> Result<CardIds, GameError> {
        Ok(core
            .player(player)?
            .hand()
            .iter()
            .filter(|c| c.suit() == Some(suit))
            .map(Card::id)
            .collect())
    }
}

impl RulesEngine for DiscardRules {
    fn allowed_player_counts(&self) -> &[usize] {
        &[2, 3]
    }

    fn build_deck(&self, config: &GameConfig, rng: &mut GameRng) -> Result<CardCollection, GameError> {
        let mut deck = CardCollection::new();
        for suit in [Suit::Heart, Suit::Spade] {
            for figure in &Figure::STANDARD[..3] {
                deck.append(Card::new(*figure, Some(suit))?);
            }
        }
        if config.shuffle_deck {
            deck.shuffle(rng);
        }
        Ok(deck)
    }

    fn available_cards_to_put(&self, core: &GameCore, player: PlayerId) -> Result<CardIds, GameError> {
        Ok(core.player(player)?.hand().ids().collect())
    }

    fn available_cards_to_put_in_pile(&self, core: &GameCore, player: PlayerId) -> Result<CardIds, GameError> {
        Self::matching(core, player, Suit::Heart)
    }

    fn available_cards_to_give(
        &self,
        core: &GameCore,
        from: PlayerId,
        to: PlayerId,
    ) -> Result<CardIds, GameError> {
        if !core.is_active(to) {
            return Ok(CardIds::new());
        }
        Self::matching(core, from, Suit::Spade)
    }

    fn start_game(&mut self, core: &mut GameCore) -> Result<(), GameError> {
        let roster = core.players().to_vec();
        let deals: Vec<_> = roster.iter().cycle().take(core.deck().len()).copied().collect();
        for player in deals {
            core.deal_card(player)?;
        }
        self.start_round(core)
    }

    fn end_game(&mut self, core: &GameCore) -> GameResult {
        match core.players() {
            [winner] => GameResult::Winner(*winner),
            _ => GameResult::Draw,
        }
    }

    fn start_round(&mut self, _core: &mut GameCore) -> Result<(), GameError> {
        Ok(())
    }

    fn end_round(&mut self, core: &mut GameCore) -> Result<RoundResult, GameError> {
        self.rounds_ended += 1;
        let mut round = RoundResult::default();
        for player in core.players().to_vec() {
            if core.player(player)?.hand().is_empty() {
                self.lose_player(core, player)?;
                round.eliminated.push(player);
            }
        }
        Ok(round)
    }

    fn put_card_in_pile(&mut self, core: &mut GameCore, card: CardId, player: PlayerId) -> Result<(), GameError> {
        rust_cardgame::rules::put_card_in_pile_by_player(&*self, core, card, player)?;
        let round = self.end_round(core)?;
        core.record_round(round);
        if core.players().len() <= 1 {
            let result = self.end_game(core);
            core.finish(result);
        }
        Ok(())
    }
}

fn discard_game(names: &[&str]) -> Game<DiscardRules> {
    let players = names.iter().map(|n| Player::new(*n)).collect();
    Game::new(players, DiscardRules::default(), GameConfig::new(8).with_shuffle_deck(false)).unwrap()
}

fn first_with_suit(game: &Game<DiscardRules>, player: PlayerId, suit: Suit) -> Option<CardId> {
    game.player(player)
        .unwrap()
        .hand()
        .iter()
        .find(|c| c.suit() == Some(suit))
        .map(Card::id)
}

#[test]
fn test_deal_round_robin() {
    let game = discard_game(&["a", "b", "c"]);

    for player in [P0, P1, P2] {
        assert_eq!(game.player(player).unwrap().hand().len(), 2);
    }
    // unshuffled: 2♥ 3♥ 4♥ 2♠ 3♠ 4♠
    let hand: Vec<String> = game.player(P0).unwrap().hand().iter().map(ToString::to_string).collect();
    assert_eq!(hand, vec!["2♥", "2♠"]);
}

#[test]
fn test_pile_accepts_only_allowed_cards() {
    let mut game = discard_game(&["a", "b"]);
    let heart = first_with_suit(&game, P0, Suit::Heart).unwrap();
    let spade = first_with_suit(&game, P0, Suit::Spade).unwrap();

    let err = game.put_card_in_pile_by_player(spade, P0).unwrap_err();
    assert_eq!(err, GameError::CannotPutCardInPile { player: P0, card: spade });
    assert_eq!(err.kind(), ErrorKind::RuleViolation);
    assert_eq!(err.to_string(), format!("Player 0 can not put {spade} in pile"));

    game.put_card_in_pile_by_player(heart, P0).unwrap();
    assert!(game.table().is_card_situated_in_pile(heart));
    assert_eq!(game.round_number(), 1);
    assert_eq!(game.core().count_all_cards(), 6);
}

#[test]
fn test_give_moves_card_between_hands() {
    let mut game = discard_game(&["a", "b"]);
    let spade = first_with_suit(&game, P0, Suit::Spade).unwrap();

    assert!(game.has_available_cards_to_give_by_player_to_player(P0, P1).unwrap());
    game.seat(P0).unwrap().give_card_to_player(spade, P1).unwrap();

    assert!(game.player(P1).unwrap().hand().has(spade));
    assert!(!game.player(P0).unwrap().hand().has(spade));
    assert_eq!(game.player(P0).unwrap().hand().len(), 2);
    assert_eq!(game.player(P1).unwrap().hand().len(), 4);
}

#[test]
fn test_give_rejects_bad_transfers() {
    let mut game = discard_game(&["a", "b"]);
    let heart = first_with_suit(&game, P0, Suit::Heart).unwrap();
    let spade = first_with_suit(&game, P0, Suit::Spade).unwrap();
    let theirs = first_with_suit(&game, P1, Suit::Spade).unwrap();

    let err = game.give_card_by_player_to_player(heart, P0, P1).unwrap_err();
    assert_eq!(err, GameError::CannotGiveCard { from: P0, to: P1, card: heart });

    let err = game.give_card_by_player_to_player(spade, P0, P0).unwrap_err();
    assert!(matches!(err, GameError::Player(PlayerError::SamePlayer(_))));

    let err = game.give_card_by_player_to_player(theirs, P0, P1).unwrap_err();
    assert!(matches!(err, GameError::Player(PlayerError::DoesNotHaveCard { .. })));

    let err = game.give_card_by_player_to_player(spade, P0, PlayerId::new(7)).unwrap_err();
    assert_eq!(err, GameError::UnknownPlayer(PlayerId::new(7)));
}

#[test]
fn test_emptied_hand_is_eliminated() {
    let mut game = discard_game(&["a", "b", "c"]);

    // a holds 2♥ 2♠: give the spade away, discard the heart
    let spade = first_with_suit(&game, P0, Suit::Spade).unwrap();
    game.give_card_by_player_to_player(spade, P0, P2).unwrap();
    let heart = first_with_suit(&game, P0, Suit::Heart).unwrap();
    game.put_card_in_pile_by_player(heart, P0).unwrap();

    assert_eq!(game.players(), &[P1, P2]);
    assert_eq!(game.lose_players(), &[P0]);
    assert_eq!(game.last_round().unwrap().eliminated, vec![P0]);
    assert!(!game.is_over());

    // the eliminated player is no longer a valid recipient
    let spade = first_with_suit(&game, P1, Suit::Spade).unwrap();
    assert!(game.available_cards_to_give_by_player_to_player(P1, P0).unwrap().is_empty());
    assert!(game.give_card_by_player_to_player(spade, P1, P0).is_err());
}

#[test]
fn test_last_player_standing_wins() {
    let mut game = discard_game(&["a", "b"]);

    // a: 2♥ 4♥ 3♠, b: 3♥ 2♠ 4♠
    while let Some(spade) = first_with_suit(&game, P0, Suit::Spade) {
        game.give_card_by_player_to_player(spade, P0, P1).unwrap();
    }
    while let Some(heart) = first_with_suit(&game, P0, Suit::Heart) {
        game.put_card_in_pile_by_player(heart, P0).unwrap();
    }

    assert_eq!(game.result(), Some(&GameResult::Winner(P1)));
    assert!(game.result().unwrap().is_winner(P1));
    assert_eq!(game.core().count_all_cards(), 6);

    let card = first_with_suit(&game, P1, Suit::Heart).unwrap();
    assert_eq!(game.put_card_in_pile_by_player(card, P1), Err(GameError::GameOver));
}

#[test]
fn test_seat_views_one_player() {
    let mut game = discard_game(&["a", "b"]);
    let mut seat = game.seat(P1).unwrap();

    assert_eq!(seat.id(), P1);
    assert_eq!(seat.player().unwrap().name(), "b");
    assert!(seat.has_available_move().unwrap());

    let card = seat.available_cards_to_put().unwrap()[0];
    seat.put_card(card).unwrap();

    assert_eq!(game.table().player_who_situated_card(card), Ok(P1));
    assert!(game.table().has_player_cards_situated(P1).unwrap());
    assert!(!game.table().has_every_player_cards_situated());
}

#[test]
fn test_queries_are_idempotent() {
    let game = discard_game(&["a", "b", "c"]);

    for player in [P0, P1, P2] {
        assert_eq!(
            game.available_cards_to_put_by_player(player).unwrap(),
            game.available_cards_to_put_by_player(player).unwrap()
        );
        assert_eq!(
            game.available_cards_to_put_in_pile_by_player(player).unwrap(),
            game.available_cards_to_put_in_pile_by_player(player).unwrap()
        );
    }
}

#[test]
fn test_players_outlive_their_game() {
    let game = discard_game(&["a", "b"]);
    let id = game.id();
    let players = game.into_players();

    assert_eq!(players.len(), 2);
    assert!(players.iter().all(|p| p.game() == Ok(id)));
    assert_eq!(players[0].to_string(), "a");

    let err = Game::new(players, DiscardRules::default(), GameConfig::default()).unwrap_err();
    assert_eq!(err, GameError::Player(PlayerError::AlreadyBound("a".into())));
}

#[test]
fn test_unbound_player_has_no_game() {
    let player = Player::new("loner");
    let err = player.game().unwrap_err();

    assert_eq!(err, PlayerError::GameNotBound("loner".into()));
    assert_eq!(err.kind(), ErrorKind::State);
}
