//! Display functions for the line-oriented modes

use super::formatters::{colored_guess, colored_keyboard};
use crate::core::{Feedback, Word};
use crate::greeting;
use crate::puzzle::KeyboardState;
use colored::Colorize;

/// Print the welcome screen
pub fn print_welcome() {
    println!("\n{}", "═".repeat(60).magenta());
    println!("  {}", greeting::WELCOME_TITLE.bright_magenta().bold());
    println!("  {}", greeting::WELCOME_PROMPT);
    println!("{}", "═".repeat(60).magenta());
}

/// Print one evaluated guess with its turn number
pub fn print_guess(turn: usize, guess: &Word, feedback: &Feedback) {
    println!(
        "  {}. {}  {}",
        turn.to_string().bright_black(),
        colored_guess(guess, feedback),
        feedback.to_emoji()
    );
}

/// Print the on-screen keyboard
pub fn print_keyboard(keyboard: &KeyboardState) {
    for (indent, row) in colored_keyboard(keyboard).iter().enumerate() {
        println!("  {}{row}", " ".repeat(indent * 2));
    }
}

/// Print the result of checking a single guess
pub fn print_check_result(guess: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    print_guess(1, guess, feedback);
    println!("{}", "─".repeat(40).cyan());
    println!(
        "  Correct: {}  Present: {}",
        feedback.count_correct().to_string().green().bold(),
        feedback.count_present().to_string().yellow().bold()
    );
}

/// Print the main content
pub fn print_main_content(disclosed: Option<&str>) {
    println!("\n{}", "═".repeat(60).bright_magenta());
    println!("  {}", greeting::HERO_TITLE.bright_magenta().bold());
    println!("{}", "═".repeat(60).bright_magenta());
    if let Some(word) = disclosed {
        println!("  (The word was {})", word.bright_yellow().bold());
    }
    println!();
    for paragraph in greeting::MESSAGE {
        println!("  {paragraph}");
    }
    println!();
}

pub fn print_surprise() {
    println!("  {}", greeting::SURPRISE.bright_yellow().bold());
    println!("\n  {}\n", greeting::SIGNATURE.bright_black());
}
