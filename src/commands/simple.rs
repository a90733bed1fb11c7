//! Simple line-based mode
//!
//! Plays the whole greeting without a TUI: each line typed is fed to the
//! puzzle key by key, and the resulting effects are applied immediately in
//! delay order.

use crate::config::GameConfig;
use crate::core::{Feedback, MAX_GUESSES, WORD_LENGTH};
use crate::output::{
    print_guess, print_keyboard, print_main_content, print_surprise, print_welcome,
};
use crate::puzzle::{Effect, Key, KeyboardState, Scheduled};
use crate::screen::{Confirmation, Screen, ScreenController};
use std::io::{self, BufRead, Write};

/// What applying a batch of effects produced for display
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Applied {
    pub messages: Vec<String>,
    pub keyboard: Option<KeyboardState>,
    pub shaken_row: Option<usize>,
}

/// Apply effects right away, in the order their delays would fire them
pub fn apply_effects(controller: &mut ScreenController, mut effects: Vec<Scheduled>) -> Applied {
    effects.sort_by_key(|s| s.delay);

    let mut applied = Applied::default();
    for Scheduled { effect, .. } in effects {
        match effect {
            Effect::EnterPuzzle => {
                controller.enter_puzzle();
            }
            Effect::Settle => controller.settle(),
            Effect::RevealKeyboard(keyboard) => applied.keyboard = Some(keyboard),
            Effect::ShowMessage { text, .. } => applied.messages.push(text),
            Effect::Shake { row, .. } => applied.shaken_row = Some(row),
            Effect::RevealMainContent { disclosed } => {
                controller.reveal_main_content(disclosed);
            }
            // Tiles are printed as a whole row once the guess is in
            Effect::RevealTile { .. } | Effect::Celebrate { .. } => {}
        }
    }
    applied
}

/// Type a line into the puzzle and submit it
pub fn play_line(controller: &mut ScreenController, line: &str) -> Applied {
    let mut effects = Vec::new();
    for ch in line.chars() {
        effects.extend(controller.handle_key(Key::Letter(ch)));
    }
    effects.extend(controller.handle_key(Key::Submit));
    let applied = apply_effects(controller, effects);

    // A rejected row is wiped so the next line starts clean
    if applied.shaken_row.is_some() {
        for _ in 0..WORD_LENGTH {
            controller.handle_key(Key::Delete);
        }
    }
    applied
}

/// Run the simple interactive mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(config: GameConfig) -> Result<(), String> {
    run_simple_with(config, &mut io::stdin().lock())
}

/// Play the simple mode reading lines from `input`
///
/// Ends quietly when the input runs out.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple_with(config: GameConfig, input: &mut impl BufRead) -> Result<(), String> {
    let mut controller = ScreenController::new(config);

    print_welcome();
    loop {
        let Some(line) = get_user_input(input, "Type 'yes' or 'definitely'")? else {
            return Ok(());
        };
        let confirmation = match line.to_lowercase().as_str() {
            "yes" | "y" => Confirmation::Yes,
            "definitely" | "d" => Confirmation::Definitely,
            "quit" | "q" => return Ok(()),
            _ => continue,
        };
        let effects = controller.confirm(confirmation);
        apply_effects(&mut controller, effects);
        break;
    }

    println!("\nGuess the {WORD_LENGTH}-letter word in {MAX_GUESSES} tries. Type 'quit' to leave.\n");

    while controller.screen() == Screen::Puzzle {
        let row = controller.puzzle().map_or(0, |p| p.current_row());
        let prompt = format!("Guess {}/{MAX_GUESSES}", row + 1);
        let Some(line) = get_user_input(input, &prompt)? else {
            return Ok(());
        };
        if line.eq_ignore_ascii_case("quit") {
            return Ok(());
        }

        let before = controller.puzzle().map_or(0, |p| p.guesses().len());
        let applied = play_line(&mut controller, &line);

        if let Some(puzzle) = controller.puzzle()
            && puzzle.guesses().len() > before
        {
            let guess = &puzzle.guesses()[before];
            let states = puzzle.grid().row(before).map(|t| t.state);
            print_guess(before + 1, guess, &Feedback::new(states));
        }
        if let Some(keyboard) = applied.keyboard {
            print_keyboard(&keyboard);
        }
        for message in &applied.messages {
            println!("\n  {message}");
        }
        println!();
    }

    print_main_content(controller.disclosed());
    if get_user_input(input, "Press Enter for your surprise")?.is_some()
        && controller.reveal_surprise()
    {
        print_surprise();
    }

    Ok(())
}

/// Get user input with a prompt; `None` once the input is exhausted
fn get_user_input(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        println!();
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use crate::puzzle::INCOMPLETE_MESSAGE;

    fn started() -> ScreenController {
        let mut controller = ScreenController::new(GameConfig::default());
        let effects = controller.confirm(Confirmation::Yes);
        apply_effects(&mut controller, effects);
        controller
    }

    #[test]
    fn confirmation_enters_puzzle() {
        assert_eq!(started().screen(), Screen::Puzzle);
    }

    #[test]
    fn short_line_is_rejected_and_cleared() {
        let mut controller = started();
        let applied = play_line(&mut controller, "cob");

        assert_eq!(applied.messages, vec![INCOMPLETE_MESSAGE.to_string()]);
        assert_eq!(applied.shaken_row, Some(0));
        let puzzle = controller.puzzle().unwrap();
        assert_eq!(puzzle.current_tile(), 0);
        assert!(puzzle.guesses().is_empty());
    }

    #[test]
    fn wrong_guess_settles_for_the_next_line() {
        let mut controller = started();
        let applied = play_line(&mut controller, "rebbolz");

        let keyboard = applied.keyboard.unwrap();
        assert_eq!(keyboard.get(b'B'), LetterState::Correct);
        assert!(applied.messages.is_empty());

        play_line(&mut controller, "bobbles");
        assert_eq!(controller.puzzle().unwrap().guesses().len(), 2);
    }

    #[test]
    fn win_reaches_main_content() {
        let mut controller = started();
        let applied = play_line(&mut controller, "cobbler");

        assert_eq!(controller.screen(), Screen::MainContent);
        assert_eq!(controller.disclosed(), None);
        assert!(applied.messages[0].contains("You got it"));
    }

    #[test]
    fn loss_discloses_target() {
        let mut controller = started();
        for line in ["abcdefg", "hijklmn", "opqrstu", "vwxyzab", "bobbles"] {
            play_line(&mut controller, line);
        }
        assert_eq!(controller.screen(), Screen::MainContent);
        assert_eq!(controller.disclosed(), Some("COBBLER"));
    }

    #[test]
    fn exhausted_input_ends_the_session() {
        let mut input = "yes\n".as_bytes();
        assert_eq!(run_simple_with(GameConfig::with_speed(0.0), &mut input), Ok(()));

        let mut empty = "".as_bytes();
        assert_eq!(run_simple_with(GameConfig::with_speed(0.0), &mut empty), Ok(()));
    }

    #[test]
    fn unrecognized_welcome_lines_until_eof() {
        let mut input = "maybe\nnope\n".as_bytes();
        assert_eq!(run_simple_with(GameConfig::default(), &mut input), Ok(()));
    }

    #[test]
    fn scripted_game_plays_to_the_end() {
        let mut input = "d\ncob\nrebbolz\ncobbler\n\n".as_bytes();
        assert_eq!(run_simple_with(GameConfig::with_speed(0.0), &mut input), Ok(()));
        assert!(input.is_empty());
    }
}
