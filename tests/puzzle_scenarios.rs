//! End-to-end puzzle scenarios through the public API

use birthday_gate::config::GameConfig;
use birthday_gate::core::{Feedback, LetterState, MAX_GUESSES, WORD_LENGTH, Word};
use birthday_gate::puzzle::{Effect, Key, Phase, Puzzle, PuzzleError};
use birthday_gate::schedule::Scheduler;
use birthday_gate::screen::{Confirmation, Screen, ScreenController};
use std::time::{Duration, Instant};

fn submit(puzzle: &mut Puzzle, word: &str) -> Vec<Effect> {
    for ch in word.chars() {
        puzzle.handle_key(Key::Letter(ch));
    }
    let mut effects = puzzle.handle_key(Key::Submit);
    effects.sort_by_key(|s| s.delay);
    let effects: Vec<Effect> = effects.into_iter().map(|s| s.effect).collect();
    if effects.contains(&Effect::Settle) {
        puzzle.settle();
    }
    effects
}

#[test]
fn win_on_fifth_guess() {
    let mut puzzle = Puzzle::new(&GameConfig::default());
    for guess in ["ABCDEFG", "HIJKLMN", "OPQRSTU", "VWXYZAB"] {
        submit(&mut puzzle, guess);
        assert_eq!(puzzle.phase(), Phase::Entering);
    }
    let effects = submit(&mut puzzle, "COBBLER");

    assert_eq!(puzzle.phase(), Phase::Won);
    assert!(puzzle.is_game_over());
    assert_eq!(puzzle.current_row(), 4);
    assert_eq!(puzzle.guesses().len(), MAX_GUESSES);
    assert_eq!(
        effects.last(),
        Some(&Effect::RevealMainContent { disclosed: None })
    );
}

#[test]
fn five_misses_lose_and_disclose() {
    let mut puzzle = Puzzle::new(&GameConfig::default());
    for guess in ["ROBBERS", "LOBBERS", "BOBBLES", "COBBLES", "GOBBLER"] {
        submit(&mut puzzle, guess);
    }

    assert_eq!(puzzle.phase(), Phase::Lost);
    assert_eq!(puzzle.current_row(), MAX_GUESSES - 1);
    assert_eq!(puzzle.disclosed_target(), Some("COBBLER"));
}

#[test]
fn incomplete_guess_changes_nothing() {
    let mut puzzle = Puzzle::new(&GameConfig::default());
    for ch in "COBB".chars() {
        puzzle.handle_key(Key::Letter(ch));
    }
    let grid = puzzle.grid().clone();

    assert_eq!(puzzle.submit_guess(), Err(PuzzleError::IncompleteGuess));
    assert_eq!(puzzle.current_row(), 0);
    assert_eq!(puzzle.current_tile(), 4);
    assert_eq!(puzzle.grid(), &grid);
}

#[test]
fn keyboard_never_regresses_across_a_game() {
    let mut puzzle = Puzzle::new(&GameConfig::default());
    let mut best = [LetterState::Unset; 26];
    for guess in ["ROBBERS", "XXXXXXR", "RXXXXXX", "CXXXXXX", "XCXXXXX"] {
        submit(&mut puzzle, guess);
        for (i, letter) in (b'A'..=b'Z').enumerate() {
            let state = puzzle.keyboard().get(letter);
            assert!(state >= best[i], "{} regressed", char::from(letter));
            best[i] = state;
        }
    }
    assert_eq!(puzzle.keyboard().get(b'R'), LetterState::Correct);
    assert_eq!(puzzle.keyboard().get(b'C'), LetterState::Correct);
}

#[test]
fn grid_rows_match_evaluator() {
    let mut puzzle = Puzzle::new(&GameConfig::default());
    let guesses = ["ROBBERS", "BOBBLES"];
    for guess in guesses {
        submit(&mut puzzle, guess);
    }
    for (row, guess) in guesses.iter().enumerate() {
        let expected = Feedback::evaluate(&Word::new(*guess).unwrap(), &Word::target());
        let states: Vec<LetterState> = puzzle.grid().row(row).iter().map(|t| t.state).collect();
        assert_eq!(states, expected.states().to_vec());
    }
    assert!(
        puzzle
            .grid()
            .row(2)
            .iter()
            .all(|t| t.letter.is_none() && t.state == LetterState::Unset)
    );
}

fn run_until(controller: &mut ScreenController, scheduler: &mut Scheduler, at: Instant) {
    for effect in scheduler.drain_due(at) {
        match effect {
            Effect::EnterPuzzle => {
                controller.enter_puzzle();
            }
            Effect::Settle => controller.settle(),
            Effect::RevealMainContent { disclosed } => {
                controller.reveal_main_content(disclosed);
            }
            _ => {}
        }
    }
}

#[test]
fn full_session_driven_by_the_scheduler() {
    let start = Instant::now();
    let ms = Duration::from_millis;
    let mut controller = ScreenController::new(GameConfig::default());
    let mut scheduler = Scheduler::new();

    scheduler.schedule(start, controller.confirm(Confirmation::Definitely));
    run_until(&mut controller, &mut scheduler, start + ms(800));
    assert_eq!(controller.screen(), Screen::Puzzle);

    let typed = start + ms(1000);
    for ch in "ROBBERS".chars() {
        scheduler.schedule(typed, controller.handle_key(Key::Letter(ch)));
    }
    scheduler.schedule(typed, controller.handle_key(Key::Submit));

    // Still revealing: typing is ignored
    controller.handle_key(Key::Letter('C'));
    assert_eq!(controller.puzzle().map(Puzzle::current_tile), Some(0));

    run_until(&mut controller, &mut scheduler, typed + ms(300 * WORD_LENGTH as u64));
    let won = typed + ms(3000);
    for ch in "COBBLER".chars() {
        scheduler.schedule(won, controller.handle_key(Key::Letter(ch)));
    }
    scheduler.schedule(won, controller.handle_key(Key::Submit));

    run_until(&mut controller, &mut scheduler, won + ms(4499));
    assert_eq!(controller.screen(), Screen::Puzzle);
    run_until(&mut controller, &mut scheduler, won + ms(4500));
    assert_eq!(controller.screen(), Screen::MainContent);
    assert!(scheduler.is_empty());
}
