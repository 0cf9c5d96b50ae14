use serde::Serialize;

use crate::engine::bank::{Bank, BankError, MAX_CHOICE_SCORE};
use crate::engine::levels;

use super::bank::standard_questions;
use super::catalog::level_bands;

/// Discrete AI usage levels, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AiLevel {
    Observer,
    Experimenter,
    Practitioner,
    PowerUser,
    Architect,
}

impl AiLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Observer,
            Self::Experimenter,
            Self::Practitioner,
            Self::PowerUser,
            Self::Architect,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Observer => "Observer",
            Self::Experimenter => "Experimenter",
            Self::Practitioner => "Practitioner",
            Self::PowerUser => "Power user",
            Self::Architect => "Architect",
        }
    }
}

/// The four analysis axes of the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AiCategory {
    Usage,
    Prompt,
    Integration,
    Output,
}

impl AiCategory {
    /// Declaration order; highest/lowest tie-breaks resolve toward earlier
    /// entries.
    pub const fn ordered() -> [Self; 4] {
        [Self::Usage, Self::Prompt, Self::Integration, Self::Output]
    }
}

/// One selectable option: text plus its score contribution (0..=3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub text: &'static str,
    pub score: u8,
}

impl Choice {
    pub(crate) const fn new(text: &'static str, score: u8) -> Self {
        Self { text, score }
    }
}

/// A prompt with exactly four ordered choices; order matters only for the
/// letter codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub category: AiCategory,
    pub prompt: &'static str,
    pub choices: [Choice; 4],
}

/// Immutable, validated question bank for the AI quiz.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// The production 20-question bank.
    pub fn standard() -> Result<Self, BankError> {
        Self::from_questions(standard_questions())
    }

    /// Validates and wraps a question list: every question must offer a
    /// 3-point choice, and the level table must cover 0..=total exactly.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        for (index, question) in questions.iter().enumerate() {
            let top = question
                .choices
                .iter()
                .map(|choice| choice.score)
                .max()
                .unwrap_or(0);
            if top != MAX_CHOICE_SCORE {
                return Err(BankError::MaxChoiceScore {
                    index,
                    category: "AI",
                    found: top,
                    expected: MAX_CHOICE_SCORE,
                });
            }
        }

        let bank = Self { questions };
        levels::validate(&level_bands(), bank.max_total_score()).map_err(|source| {
            BankError::Levels {
                context: "AI level",
                source,
            }
        })?;

        Ok(bank)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn category_count(&self, category: AiCategory) -> usize {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .count()
    }

    /// Theoretical maximum raw score for one category.
    pub fn category_max_score(&self, category: AiCategory) -> u32 {
        self.category_count(category) as u32 * MAX_CHOICE_SCORE as u32
    }

    /// Theoretical maximum total score across the bank.
    pub fn max_total_score(&self) -> u32 {
        self.questions.len() as u32 * MAX_CHOICE_SCORE as u32
    }
}

impl Bank for QuestionBank {
    fn question_count(&self) -> usize {
        self.questions.len()
    }

    fn choice_count(&self, index: usize) -> usize {
        self.questions
            .get(index)
            .map(|question| question.choices.len())
            .unwrap_or(0)
    }
}
