//! Terminal output formatting
//!
//! Display utilities for the line-oriented modes.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_guess, print_keyboard, print_main_content, print_surprise,
    print_welcome,
};
