//! Structural contract shared by the quiz question banks.

use super::levels::LevelTableError;

/// Read-only positional view over an ordered question bank, enough for the
/// answer codec to validate letters without knowing choice payloads.
pub trait Bank {
    fn question_count(&self) -> usize;

    /// Number of choices offered by the question at `index`.
    fn choice_count(&self, index: usize) -> usize;
}

/// Defects caught while loading a question bank. Banks never silently accept
/// data that would make the derived category maximums wrong.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,
    #[error("question {index} ({category}) tops out at {found} points, every scored question must offer a {expected}-point choice")]
    MaxChoiceScore {
        index: usize,
        category: &'static str,
        found: u8,
        expected: u8,
    },
    #[error("question {index} ({category}) carries no scored choices")]
    UnscoredQuestion {
        index: usize,
        category: &'static str,
    },
    #[error("{context} level table invalid: {source}")]
    Levels {
        context: &'static str,
        #[source]
        source: LevelTableError,
    },
}

/// Highest score a single choice may carry; category maximums are derived as
/// question count times this value.
pub const MAX_CHOICE_SCORE: u8 = 3;
