//! Letter codec turning a completed answer sheet into a shareable code.
//!
//! Position `i` of the code is the letter for the choice index picked on
//! question `i` (`a` = 0, `b` = 1, ...). Decoding fails closed: any defect in
//! the code yields an error the caller treats the same as "no code present".

use serde::{Deserialize, Serialize};

use super::bank::Bank;

/// Ordered record of chosen choice indexes, one entry per answered question.
///
/// Choices are tracked by index from the moment of selection, so encoding
/// never has to look an answer up by identity and cannot emit an invalid
/// letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    picks: Vec<u8>,
}

/// Rejected selection while filling in a sheet.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("all {0} questions are already answered")]
    AlreadyComplete(usize),
    #[error("question {question} offers {available} choices, got index {choice}")]
    ChoiceOutOfRange {
        question: usize,
        choice: usize,
        available: usize,
    },
}

/// Encoding is only defined for complete sheets.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("answer sheet covers {answered} of {expected} questions")]
    Incomplete { answered: usize, expected: usize },
}

/// Why a share code was rejected. Callers fall back to the intro flow; none
/// of these surface to the user.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("code is {found} characters, bank expects {expected}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("position {position}: {found:?} is not a choice letter")]
    InvalidLetter { position: usize, found: char },
    #[error("position {position}: letter {letter:?} exceeds the {available} choices offered")]
    ChoiceOutOfRange {
        position: usize,
        letter: char,
        available: usize,
    },
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Choice index per answered question, in question order.
    pub fn picks(&self) -> &[u8] {
        &self.picks
    }

    pub fn is_complete(&self, bank: &impl Bank) -> bool {
        self.picks.len() == bank.question_count()
    }

    /// Records the choice picked for the next unanswered question.
    pub fn select(&mut self, bank: &impl Bank, choice: usize) -> Result<(), SelectError> {
        let question = self.picks.len();
        if question >= bank.question_count() {
            return Err(SelectError::AlreadyComplete(bank.question_count()));
        }
        let available = bank.choice_count(question);
        if choice >= available {
            return Err(SelectError::ChoiceOutOfRange {
                question,
                choice,
                available,
            });
        }
        self.picks.push(choice as u8);
        Ok(())
    }

    /// Builds a sheet from pre-recorded choice indexes, validating each
    /// position against the bank.
    pub fn from_picks(bank: &impl Bank, picks: &[u8]) -> Result<Self, SelectError> {
        let mut sheet = Self::new();
        for &pick in picks {
            sheet.select(bank, pick as usize)?;
        }
        Ok(sheet)
    }

    /// Serializes a complete sheet into its letter code.
    pub fn encode(&self, bank: &impl Bank) -> Result<String, EncodeError> {
        if !self.is_complete(bank) {
            return Err(EncodeError::Incomplete {
                answered: self.picks.len(),
                expected: bank.question_count(),
            });
        }
        Ok(self
            .picks
            .iter()
            .map(|&pick| (b'a' + pick) as char)
            .collect())
    }

    /// Reconstructs a sheet from a share code, failing closed on any defect.
    pub fn decode(bank: &impl Bank, code: &str) -> Result<Self, DecodeError> {
        let expected = bank.question_count();
        let found = code.chars().count();
        if found != expected {
            return Err(DecodeError::LengthMismatch { expected, found });
        }

        let mut picks = Vec::with_capacity(expected);
        for (position, letter) in code.chars().enumerate() {
            if !letter.is_ascii_lowercase() {
                return Err(DecodeError::InvalidLetter {
                    position,
                    found: letter,
                });
            }
            let index = (letter as u8 - b'a') as usize;
            let available = bank.choice_count(position);
            if index >= available {
                return Err(DecodeError::ChoiceOutOfRange {
                    position,
                    letter,
                    available,
                });
            }
            picks.push(index as u8);
        }

        Ok(Self { picks })
    }
}
