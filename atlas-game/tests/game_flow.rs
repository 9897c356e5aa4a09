//! End-to-end rounds against the built-in dictionary, driven the way a shell
//! drives the engine: countdown steps, timer ticks, and opponent resolutions
//! delivered explicitly.

use atlas_game::{
    GameEvent, GamePhase, MemoryIdentity, MemoryStore, OpponentResolution, PlaceRegistry,
    PlayerKind, SubmitOutcome, TickOutcome, TurnEngine, last_letter, normalize,
};

type Engine = TurnEngine<MemoryStore, MemoryIdentity>;

fn new_engine(seed: u64) -> Engine {
    let _ = env_logger::builder().is_test(true).try_init();
    TurnEngine::new(
        PlaceRegistry::builtin(),
        MemoryStore::new(),
        MemoryIdentity::new(),
        seed,
    )
}

fn start_round(engine: &mut Engine, name: &str) {
    assert!(engine.submit_name(name));
    while engine.phase() == GamePhase::Countdown {
        assert!(engine.advance_countdown());
    }
    assert_eq!(engine.phase(), GamePhase::PlayerTurn);
}

/// A player move the engine will accept for the current expected letter,
/// drawn from the engine's own hint pool.
fn pick_move(engine: &mut Engine) -> Option<String> {
    engine.request_hint()?.into_iter().next()
}

#[test]
fn full_round_alternates_player_and_opponent() {
    let mut engine = new_engine(0xA71A5);
    start_round(&mut engine, "Ada");
    assert_eq!(engine.session().expected_letter, 'S');

    let mut player_moves = 0;
    for _ in 0..20 {
        if engine.phase() != GamePhase::PlayerTurn {
            break;
        }
        let Some(candidate) = pick_move(&mut engine) else {
            break;
        };
        let outcome = engine.submit_move(&candidate);
        let SubmitOutcome::Accepted { name, next_letter } = outcome else {
            panic!("hint-sourced move should be accepted, got {outcome:?}");
        };
        player_moves += 1;
        assert_eq!(last_letter(&name), Some(next_letter));
        assert_eq!(engine.phase(), GamePhase::LoadingNextTurn);
        assert_eq!(engine.session().current_player, PlayerKind::Opponent);

        // A rising score sets a new record each move; the celebration
        // overlay defers the opponent until dismissed.
        engine.dismiss_overlay();
        match engine.resolve_opponent_turn() {
            OpponentResolution::Moved { name, next_letter } => {
                assert_eq!(last_letter(&name), Some(next_letter));
                assert_eq!(engine.session().expected_letter, next_letter);
                assert_eq!(engine.phase(), GamePhase::PlayerTurn);
            }
            OpponentResolution::PlayerWon { .. } => {
                assert_eq!(engine.phase(), GamePhase::GameOver);
                assert!(engine.session().player_won);
                break;
            }
            other => panic!("unexpected opponent resolution {other:?}"),
        }
    }

    assert!(player_moves > 0, "at least one accepted move");
    let session = engine.session();
    assert_eq!(session.stats.score, player_moves);
    assert_eq!(session.stats.coins, player_moves * 5);
    // Every chain entry is tracked in the used set under its normalized form.
    for entry in &session.chain {
        assert!(session.used.contains(&normalize(entry)));
    }
    // Chain links: each entry starts with the previous entry's last letter.
    for pair in session.chain.windows(2) {
        let expected = last_letter(&pair[0]).unwrap();
        let first = normalize(&pair[1]).chars().next().unwrap().to_ascii_uppercase();
        assert_eq!(first, expected);
    }
}

#[test]
fn identical_seeds_replay_identically() {
    let run = |seed: u64| -> Vec<String> {
        let mut engine = new_engine(seed);
        start_round(&mut engine, "Ada");
        for _ in 0..6 {
            if engine.phase() != GamePhase::PlayerTurn {
                break;
            }
            let Some(candidate) = pick_move(&mut engine) else {
                break;
            };
            engine.submit_move(&candidate);
            engine.dismiss_overlay();
            engine.resolve_opponent_turn();
        }
        engine.session().chain.clone()
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn rejection_messages_surface_exact_text() {
    let mut engine = new_engine(7);
    start_round(&mut engine, "Ada");

    let outcome = engine.submit_move("Norway");
    let SubmitOutcome::Rejected { failure, retries_left } = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(
        failure.to_string(),
        "Location must start with the letter 'S'."
    );
    assert_eq!(retries_left, 0);

    let outcome = engine.submit_move("Atlantis");
    let SubmitOutcome::Ended { message } = outcome else {
        panic!("expected game over");
    };
    assert_eq!(
        message,
        "Only continents, countries, states, and famous cities are allowed. \
         'Atlantis' is not recognized. No retries left."
    );
    assert_eq!(engine.phase(), GamePhase::GameOver);
    assert!(!engine.session().player_won);
}

#[test]
fn submissions_are_canonicalized_for_display() {
    let mut engine = new_engine(8);
    start_round(&mut engine, "Ada");
    let outcome = engine.submit_move("  sWeDeN ");
    let SubmitOutcome::Accepted { name, next_letter } = outcome else {
        panic!("expected acceptance");
    };
    assert_eq!(name, "Sweden");
    assert_eq!(next_letter, 'N');
    assert_eq!(engine.session().chain, vec!["Sweden"]);
}

#[test]
fn timeout_ends_the_round_with_times_up() {
    let mut engine = new_engine(9);
    start_round(&mut engine, "Ada");
    let token = engine.timer_token().expect("turn timer running");
    loop {
        match engine.tick_timer(token) {
            TickOutcome::Running { .. } => {}
            TickOutcome::Expired => break,
            TickOutcome::Ignored => panic!("live token must not be ignored"),
        }
    }
    assert_eq!(engine.phase(), GamePhase::GameOver);
    assert_eq!(
        engine.session().game_over_message.as_deref(),
        Some("Time's up!")
    );
    let events = engine.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::GameOver { message, player_won: false } if message == "Time's up!"
    )));
}

#[test]
fn hints_start_with_the_expected_letter_and_burn_budget() {
    let mut engine = new_engine(10);
    start_round(&mut engine, "Ada");
    let hints = engine.request_hint().expect("hints available");
    assert!(!hints.is_empty() && hints.len() <= 3);
    for hint in &hints {
        assert!(normalize(hint).starts_with('s'));
        assert!(engine.registry().is_known_place(hint));
    }
    assert_eq!(engine.session().hints_left, 4);
}

#[test]
fn restart_after_game_over_reruns_the_countdown() {
    let mut engine = new_engine(11);
    start_round(&mut engine, "Ada");
    engine.submit_move("Atlantis");
    engine.submit_move("Atlantis");
    assert_eq!(engine.phase(), GamePhase::GameOver);

    engine.restart();
    assert_eq!(engine.phase(), GamePhase::Countdown);
    // Old round values survive until the countdown completes.
    while engine.phase() == GamePhase::Countdown {
        engine.advance_countdown();
    }
    let session = engine.session();
    assert_eq!(session.phase, GamePhase::PlayerTurn);
    assert!(session.chain.is_empty());
    assert_eq!(session.stats.score, 0);
    assert_eq!(session.expected_letter, 'S');
    assert_eq!(session.game_over_message, None);
}

#[test]
fn exit_returns_to_name_input_and_forgets_identity() {
    let mut engine = new_engine(12);
    start_round(&mut engine, "Ada");
    engine.submit_move("Spain");
    engine.exit_to_name_input();
    assert_eq!(engine.phase(), GamePhase::NameInput);
    assert_eq!(engine.player_name(), None);
    assert!(engine.session().chain.is_empty());
    // A fresh name starts over from the countdown.
    assert!(engine.submit_name("Grace"));
    assert_eq!(engine.phase(), GamePhase::Countdown);
}
