//! Gameplay tests.
//!
//! These tests drive a full game through the public API the way a
//! presentation layer would: read `cards()`, pick by id, re-read.

use flower_pairs::{Card, CardId, ChooseOutcome, GameConfig, GameRng, MemoryGame, Selection};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn distinct_game(pairs: usize, seed: u64) -> MemoryGame {
    MemoryGame::with_rng(pairs, |i| format!("c{}", i), GameRng::new(seed))
}

/// Ids of the two cards showing `content`.
fn pair_of(game: &MemoryGame, content: &str) -> (CardId, CardId) {
    let ids: Vec<CardId> = game
        .cards()
        .iter()
        .filter(|c| c.content() == content)
        .map(Card::id)
        .collect();
    assert_eq!(ids.len(), 2, "content {} should appear twice", content);
    (ids[0], ids[1])
}

fn card(game: &MemoryGame, id: CardId) -> &Card {
    game.card(id).expect("card should exist")
}

/// Six distinct flowers: match one pair, miss with two others, then clear
/// the miss with a third card.
#[test]
fn test_six_pair_scenario() {
    init_logging();
    let mut game = distinct_game(6, 42);

    // Match c2
    let (a, b) = pair_of(&game, "c2");
    game.choose(a);
    game.choose(b);

    assert_eq!(game.match_progress(), 1.0);
    assert!(card(&game, a).is_matched());
    assert!(card(&game, b).is_matched());
    assert_eq!(game.index_of_first_face_up(), None);
    assert_eq!(game.index_of_second_face_up(), None);

    // Miss with c0 then c1
    let (c0, _) = pair_of(&game, "c0");
    let (c1, _) = pair_of(&game, "c1");
    game.choose(c0);
    game.choose(c1);

    for id in [c0, c1] {
        assert!(card(&game, id).is_face_up());
        assert!(!card(&game, id).is_matched());
    }
    assert_eq!(game.index_of_first_face_up(), game.position_of(c0));
    assert_eq!(game.index_of_second_face_up(), game.position_of(c1));
    assert_eq!(game.match_progress(), 1.0);

    // c3 clears the miss and starts a new turn
    let (c3, _) = pair_of(&game, "c3");
    game.choose(c3);

    for id in [c0, c1] {
        assert!(!card(&game, id).is_face_up());
        assert!(!card(&game, id).is_matched());
    }
    assert!(card(&game, c3).is_face_up());
    assert_eq!(game.index_of_first_face_up(), game.position_of(c3));
    assert_eq!(game.index_of_second_face_up(), None);
    assert_eq!(game.match_progress(), 1.0);

    // The matched c2 pair is untouched by the clear
    assert!(card(&game, a).is_face_up() && card(&game, a).is_matched());
    assert!(card(&game, b).is_face_up() && card(&game, b).is_matched());
}

/// Play a whole game by always matching the first face-down card.
#[test]
fn test_play_to_completion() {
    init_logging();
    let mut game = distinct_game(6, 7);
    let mut last_progress = game.match_progress();

    while !game.is_complete() {
        let next = game
            .cards()
            .iter()
            .find(|c| !c.is_face_up())
            .map(Card::id)
            .expect("a face-down card while incomplete");
        let twin = next.twin();

        game.choose(next);
        game.choose(twin);

        assert_eq!(game.match_progress(), last_progress + 1.0);
        last_progress = game.match_progress();
    }

    assert_eq!(game.match_progress(), 6.0);
    assert!(game.cards().iter().all(|c| c.is_face_up() && c.is_matched()));
    assert!(game.selection().is_empty());
}

/// Twin ids share content even after shuffling.
#[test]
fn test_twins_share_content() {
    let game = distinct_game(6, 3);

    for card in game.cards() {
        let twin = game.card(card.id().twin()).unwrap();
        assert!(card.same_content(twin));
        assert_ne!(card.id(), twin.id());
    }
}

/// Outcomes mirror the selection transitions.
#[test]
fn test_outcome_sequence() {
    let mut game = distinct_game(3, 11);
    let (a, _) = pair_of(&game, "c0");
    let (b, _) = pair_of(&game, "c1");
    let (c, _) = pair_of(&game, "c2");

    assert!(matches!(game.try_choose(a), ChooseOutcome::Revealed { .. }));
    assert!(matches!(game.try_choose(b), ChooseOutcome::Mismatched { .. }));
    assert!(matches!(game.try_choose(c), ChooseOutcome::Cleared { .. }));
    assert!(game.try_choose(c).is_ignored());
    assert!(matches!(game.selection(), Selection::One(_)));
}

/// Restart after a mixed sequence returns to a fresh game.
#[test]
fn test_restart_mid_turn() {
    let mut game = distinct_game(6, 5);
    let (a, b) = pair_of(&game, "c4");
    let (c, _) = pair_of(&game, "c5");
    game.choose(a);
    game.choose(b);
    game.choose(c);

    game.restart();

    assert_eq!(game.match_progress(), 0.0);
    assert!(game.selection().is_empty());
    assert!(game.cards().iter().all(|c| !c.is_face_up() && !c.is_matched()));

    let mut ids: Vec<u32> = game.cards().iter().map(|c| c.id().raw()).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..12).collect::<Vec<_>>());

    // The restarted game plays normally
    let (x, y) = pair_of(&game, "c0");
    game.choose(x);
    game.choose(y);
    assert_eq!(game.match_progress(), 1.0);
}

/// Same seed, same layouts, including after restart.
#[test]
fn test_seeded_games_replay() {
    let layout = |g: &MemoryGame| g.cards().iter().map(Card::id).collect::<Vec<_>>();

    let mut a = distinct_game(6, 99);
    let mut b = distinct_game(6, 99);
    assert_eq!(layout(&a), layout(&b));

    a.restart();
    b.restart();
    assert_eq!(layout(&a), layout(&b));
}

/// Duplicate content across indices makes larger matchable groups.
#[test]
fn test_duplicate_content_is_accepted() {
    let mut game = MemoryGame::with_rng(2, |_| "rose".to_string(), GameRng::new(1));

    assert_eq!(game.deck().content_counts().get("rose"), Some(&4));

    // Any two roses match, even across pair indices
    game.choose(CardId(0));
    game.choose(CardId(2));
    assert_eq!(game.match_progress(), 1.0);
    game.choose(CardId(1));
    game.choose(CardId(3));
    assert!(game.is_complete());
}

/// The default configuration deals the six-flower deck.
#[test]
fn test_default_config_game() {
    let game = MemoryGame::from_config(&GameConfig::default().with_seed(2)).unwrap();

    assert_eq!(game.number_of_pairs(), 6);
    let counts = game.deck().content_counts();
    for flower in flower_pairs::DEFAULT_CONTENTS {
        assert_eq!(counts.get(flower), Some(&2));
    }
}

/// Snapshots serialize for a presentation layer.
#[test]
fn test_snapshot_json() {
    let mut game = distinct_game(2, 4);
    let (a, _) = pair_of(&game, "c1");
    game.choose(a);

    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["number_of_pairs"], 2);
    assert_eq!(json["match_progress"], 0.0);
    assert_eq!(json["cards"].as_array().unwrap().len(), 4);

    let position = game.position_of(a).unwrap();
    assert_eq!(json["cards"][position]["is_face_up"], true);
    assert_eq!(json["selection"]["One"], position);
}
