//! Command implementations

pub mod check;
pub mod simple;

pub use check::{check_guess, verify_expected};
pub use simple::run_simple;
