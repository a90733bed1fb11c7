//! Greeting text shown around the puzzle

/// Welcome screen title
pub const WELCOME_TITLE: &str = "Hey you! 💝";

/// Welcome screen question
pub const WELCOME_PROMPT: &str = "Ready for a little birthday surprise?";

pub const YES_LABEL: &str = "Yes!";
pub const DEFINITELY_LABEL: &str = "Definitely!";

/// Puzzle screen heading
pub const PUZZLE_TITLE: &str = "Guess the word to unlock your surprise";

/// Main content heading
pub const HERO_TITLE: &str = "❤️ Happy Birthday! ❤️";

/// Main content message, one paragraph per entry
pub const MESSAGE: &[&str] = &[
    "Another trip around the sun, and every one of them better with you in it.",
    "Thank you for the laughs, the late nights and the terrible puns.",
    "Here's to the best year yet.",
];

/// Shown once the surprise has been revealed
pub const SURPRISE: &str = "🎊 Dinner is booked. Wear something nice! 🎊";

pub const SIGNATURE: &str = "Made with love 💕";
