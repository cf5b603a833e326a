/// The number of letters in every playable word.
pub const WORD_LENGTH: usize = 5;
/// The number of guesses the game allows.
pub const GUESS_LIMIT: usize = 6;
/// How many suggested words to show at a time.
pub const SUGGESTION_COUNT: usize = 5;

mod constraints;
mod data;
mod engine;
mod results;

pub use data::sample_words;
pub use data::WordBank;
pub use engine::*;
pub use results::*;
