//! Configuration constants for the game
//!
//! This module contains the prize ladder and the limits used when
//! validating quiz content, so that every part of the crate agrees on
//! the same boundaries.

/// Prize ladder constants
pub mod ladder {
    /// Number of questions (and prize levels) in a single session
    pub const LEVEL_COUNT: usize = 15;
    /// Prize money for each level, indexed by `level - 1`
    pub const PRIZE_LADDER: [u32; LEVEL_COUNT] = [
        1_000, 2_000, 3_000, 4_000, 5_000, 8_000, 12_000, 20_000, 32_000, 50_000, 75_000, 125_000,
        250_000, 500_000, 1_000_000,
    ];
    /// Levels whose prize is banked once answered correctly
    pub const CHECKPOINT_LEVELS: [u8; 2] = [5, 10];
}

/// Lifeline simulation constants
pub mod lifeline {
    /// Number of votes cast when asking the audience
    pub const AUDIENCE_SIZE: u8 = 100;
    /// Number of wrong answers removed by fifty-fifty
    pub const FIFTY_FIFTY_REMOVED: usize = 2;
}

/// Quiz content configuration constants
pub mod quiz {
    /// Minimum number of questions in a quiz file
    pub const MIN_QUESTION_COUNT: usize = 1;
    /// Minimum length of question and answer texts
    pub const MIN_TEXT_LENGTH: usize = 1;
}
