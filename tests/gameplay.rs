//! End-to-end games through the public API

use wordle_mates::core::{LetterStatus, Word};
use wordle_mates::game::{Game, GameState};
use wordle_mates::profile::Profiles;
use wordle_mates::stats::{Achievement, GameOutcome, GameRecord, PlayerStatistics};
use wordle_mates::store::{FileStore, MemoryStore, ProfileStore, UserId};
use wordle_mates::wordlists::loader::build_dictionary;
use wordle_mates::wordlists::{Dictionary, TargetSelection, WordSource};

fn plane_dictionary() -> Dictionary {
    build_dictionary(
        None,
        TargetSelection::Fixed(Word::new("plane").unwrap()),
    )
    .unwrap()
}

fn play(game: &mut Game, words: &Dictionary, guesses: &[&str]) {
    for guess in guesses {
        game.submit(guess, words).unwrap();
    }
}

#[test]
fn plane_in_three_updates_statistics() {
    let words = plane_dictionary();
    let mut game = Game::from_source(&words, false);
    play(&mut game, &words, &["slate", "place", "plane"]);

    assert_eq!(game.state(), GameState::Won);
    let outcome = game.outcome().unwrap();
    assert_eq!(outcome, GameOutcome::win(3));

    let keyboard = game.keyboard();
    assert_eq!(keyboard.status(b'P'), LetterStatus::Correct);
    assert_eq!(keyboard.status(b'N'), LetterStatus::Correct);
    assert_eq!(keyboard.status(b'S'), LetterStatus::Absent);
    assert_eq!(keyboard.status(b'C'), LetterStatus::Absent);

    let profiles = Profiles::new(Box::new(MemoryStore::new()));
    let user = UserId::new("mate").unwrap();
    let recorded = profiles.record_game(&user, &game.record().unwrap()).unwrap();

    let stats = recorded.stats;
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.wins, 1);
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.max_streak, 1);
    assert_eq!(stats.guess_distribution, [0, 0, 1, 0, 0, 0]);
    assert_eq!(stats.total_guesses, 3);
    assert!((stats.average_guesses - 3.0).abs() < f64::EPSILON);
    assert!(stats.has_achievement(Achievement::FirstVictory));

    let history = profiles.games(&user).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].word, "PLANE");
    assert_eq!(history[0].attempts, ["SLATE", "PLACE", "PLANE"]);
    assert_eq!(history[0].guesses, 3);
}

#[test]
fn loss_after_win_breaks_streak() {
    let words = plane_dictionary();
    let profiles = Profiles::new(Box::new(MemoryStore::new()));
    let user = UserId::new("mate").unwrap();

    let mut won = Game::from_source(&words, false);
    play(&mut won, &words, &["slate", "place", "plane"]);
    profiles.record_game(&user, &won.record().unwrap()).unwrap();

    let mut lost = Game::from_source(&words, false);
    play(
        &mut lost,
        &words,
        &["slate", "crane", "audio", "lemon", "robot", "steam"],
    );
    assert_eq!(lost.state(), GameState::Lost);
    let stats = profiles
        .record_game(&user, &lost.record().unwrap())
        .unwrap()
        .stats;

    assert_eq!(stats.games_played, 2);
    assert_eq!(stats.wins, 1);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.max_streak, 1);
    assert_eq!(stats.total_guesses, 3);
    assert!((stats.average_guesses - 3.0).abs() < f64::EPSILON);
    assert_eq!(stats.win_percentage(), 50);
}

#[test]
fn file_store_keeps_statistics_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let user = UserId::new("returning").unwrap();

    {
        let profiles = Profiles::new(Box::new(FileStore::new(dir.path())));
        profiles.initialize(&user).unwrap();
        let game = GameRecord::new("PLANE", vec!["SLATE".into(), "PLANE".into()], true);
        profiles.record_game(&user, &game).unwrap();
    }

    let store = FileStore::new(dir.path());
    let stats = store.load(&user).unwrap();
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.guess_distribution, [0, 1, 0, 0, 0, 0]);
    assert!(stats.has_achievement(Achievement::WordWizard));
    assert!(stats.last_played.is_some());
    assert_eq!(store.games(&user).unwrap().len(), 1);

    let profiles = Profiles::new(Box::new(store));
    assert_eq!(profiles.reset(&user).unwrap(), PlayerStatistics::default());
    assert_eq!(
        FileStore::new(dir.path()).load(&user).unwrap(),
        PlayerStatistics::default()
    );
}

#[test]
fn every_embedded_answer_is_playable() {
    let words = build_dictionary(None, TargetSelection::Daily).unwrap();
    for answer in words.answers() {
        assert!(words.is_valid_guess(answer));
    }
    let mut game = Game::from_source(&words, true);
    let target = words.current_target().text().to_string();
    game.submit(&target, &words).unwrap();
    assert_eq!(game.outcome(), Some(GameOutcome::win(1)));
}
