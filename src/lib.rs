pub mod cli;
pub mod counter;
pub mod error;
pub mod language;
pub mod output;
pub mod scanner;

pub use error::{LinetallyError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_SCAN_ERROR: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
