use serde::Serialize;

use crate::engine::bank::{Bank, BankError, MAX_CHOICE_SCORE};
use crate::engine::levels;

use super::bank::{classic_questions, standard_questions};
use super::catalog::{AI_USAGE_LEVELS, MATURITY_LEVELS};

/// The four recording styles the quiz classifies people into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingStyle {
    Architect,
    Gardener,
    Student,
    Librarian,
}

impl RecordingStyle {
    /// Declaration order; ranking tie-breaks resolve toward earlier entries.
    pub const fn ordered() -> [Self; 4] {
        [Self::Architect, Self::Gardener, Self::Student, Self::Librarian]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Architect => "Architect",
            Self::Gardener => "Gardener",
            Self::Student => "Student",
            Self::Librarian => "Librarian",
        }
    }
}

/// Where finished notes tend to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputStyle {
    Inner,
    Sharer,
    Practical,
    Hybrid,
}

impl OutputStyle {
    pub const fn ordered() -> [Self; 4] {
        [Self::Inner, Self::Sharer, Self::Practical, Self::Hybrid]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Inner => "Inner processor",
            Self::Sharer => "Sharer",
            Self::Practical => "Practitioner",
            Self::Hybrid => "Hybrid",
        }
    }

    /// Fixed radar-chart height for the output axis; outward-facing styles
    /// sit higher on the bar.
    pub const fn radar_weight(self) -> u8 {
        match self {
            Self::Inner => 40,
            Self::Sharer => 90,
            Self::Practical => 80,
            Self::Hybrid => 65,
        }
    }
}

/// Stage of the recording habit loop the respondent struggles with most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bottleneck {
    Start,
    Sustain,
    Organize,
    Apply,
}

impl Bottleneck {
    pub const fn ordered() -> [Self; 4] {
        [Self::Start, Self::Sustain, Self::Organize, Self::Apply]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "Getting started",
            Self::Sustain => "Keeping it up",
            Self::Organize => "Organizing",
            Self::Apply => "Putting it to use",
        }
    }

    /// Later-loop bottlenecks indicate a more mature habit, so they chart
    /// higher.
    pub const fn radar_weight(self) -> u8 {
        match self {
            Self::Start => 25,
            Self::Sustain => 45,
            Self::Organize => 65,
            Self::Apply => 85,
        }
    }
}

/// Which scoring pass a question feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Style,
    Maturity,
    AiUsage,
    Output,
    Bottleneck,
}

impl QuestionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Style => "Recording style",
            Self::Maturity => "Recording maturity",
            Self::AiUsage => "AI usage",
            Self::Output => "Output style",
            Self::Bottleneck => "Bottleneck",
        }
    }
}

/// One selectable option. Attributes are optional and may be combined; each
/// scoring pass only reads the attribute kind it cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<RecordingStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottleneck: Option<Bottleneck>,
}

impl Choice {
    pub(crate) const fn styled(text: &'static str, style: RecordingStyle) -> Self {
        Self {
            text,
            style: Some(style),
            score: None,
            output: None,
            bottleneck: None,
        }
    }

    pub(crate) const fn scored(text: &'static str, score: u8) -> Self {
        Self {
            text,
            style: None,
            score: Some(score),
            output: None,
            bottleneck: None,
        }
    }

    pub(crate) const fn scored_with_bottleneck(
        text: &'static str,
        score: u8,
        bottleneck: Bottleneck,
    ) -> Self {
        Self {
            text,
            style: None,
            score: Some(score),
            output: None,
            bottleneck: Some(bottleneck),
        }
    }

    pub(crate) const fn output(text: &'static str, output: OutputStyle) -> Self {
        Self {
            text,
            style: None,
            score: None,
            output: Some(output),
            bottleneck: None,
        }
    }

    pub(crate) const fn bottleneck(text: &'static str, bottleneck: Bottleneck) -> Self {
        Self {
            text,
            style: None,
            score: None,
            output: None,
            bottleneck: Some(bottleneck),
        }
    }
}

/// A prompt with exactly four ordered choices. Choice order matters only for
/// the letter codec; it carries no classification meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub category: QuestionCategory,
    pub prompt: &'static str,
    pub choices: [Choice; 4],
}

/// Immutable, validated question bank. Loaded once, never mutated.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// The combined 17-question bank behind the full report.
    pub fn standard() -> Result<Self, BankError> {
        Self::from_questions(standard_questions())
    }

    /// The legacy 7-question style-only variant.
    pub fn classic() -> Result<Self, BankError> {
        Self::from_questions(classic_questions())
    }

    /// Validates and wraps a question list. Every scored question must offer
    /// a 3-point choice (category maximums are derived as count x 3), and the
    /// discrete level tables must cover the derived maximums exactly.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        for (index, question) in questions.iter().enumerate() {
            let scored = matches!(
                question.category,
                QuestionCategory::Maturity | QuestionCategory::AiUsage
            );
            if !scored {
                continue;
            }
            let top = question
                .choices
                .iter()
                .filter_map(|choice| choice.score)
                .max();
            match top {
                None => {
                    return Err(BankError::UnscoredQuestion {
                        index,
                        category: question.category.label(),
                    })
                }
                Some(found) if found != MAX_CHOICE_SCORE => {
                    return Err(BankError::MaxChoiceScore {
                        index,
                        category: question.category.label(),
                        found,
                        expected: MAX_CHOICE_SCORE,
                    })
                }
                Some(_) => {}
            }
        }

        let bank = Self { questions };

        // Level tables only apply to banks that actually carry the category;
        // the classic style-only bank has neither.
        let maturity_max = bank.category_max_score(QuestionCategory::Maturity);
        if maturity_max > 0 {
            levels::validate(&MATURITY_LEVELS, maturity_max).map_err(|source| {
                BankError::Levels {
                    context: "maturity",
                    source,
                }
            })?;
        }
        let ai_max = bank.category_max_score(QuestionCategory::AiUsage);
        if ai_max > 0 {
            levels::validate(&AI_USAGE_LEVELS, ai_max).map_err(|source| BankError::Levels {
                context: "AI usage",
                source,
            })?;
        }

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

    pub fn category_count(&self, category: QuestionCategory) -> usize {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .count()
    }

    /// Theoretical maximum raw score for a category.
    pub fn category_max_score(&self, category: QuestionCategory) -> u32 {
        self.category_count(category) as u32 * MAX_CHOICE_SCORE as u32
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bank_loads_and_validates() {
        let bank = QuestionBank::standard().expect("standard bank is well-formed");
        assert_eq!(bank.len(), 17);
        assert_eq!(bank.category_count(QuestionCategory::Style), 7);
        assert_eq!(bank.category_count(QuestionCategory::Maturity), 4);
        assert_eq!(bank.category_count(QuestionCategory::AiUsage), 4);
        assert_eq!(bank.category_max_score(QuestionCategory::Maturity), 12);
        assert_eq!(bank.category_max_score(QuestionCategory::AiUsage), 12);
    }

    #[test]
    fn classic_bank_is_style_only() {
        let bank = QuestionBank::classic().expect("classic bank is well-formed");
        assert_eq!(bank.len(), 7);
        assert_eq!(bank.category_count(QuestionCategory::Style), 7);
        assert_eq!(bank.category_max_score(QuestionCategory::Maturity), 0);
    }

    #[test]
    fn rejects_scored_question_without_three_point_choice() {
        let mut questions = standard_questions();
        let index = questions
            .iter()
            .position(|question| question.category == QuestionCategory::Maturity)
            .expect("standard bank has maturity questions");
        for choice in &mut questions[index].choices {
            if choice.score == Some(3) {
                choice.score = Some(2);
            }
        }

        match QuestionBank::from_questions(questions) {
            Err(BankError::MaxChoiceScore { found, expected, .. }) => {
                assert_eq!(found, 2);
                assert_eq!(expected, 3);
            }
            other => panic!("expected MaxChoiceScore error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_bank() {
        assert!(matches!(
            QuestionBank::from_questions(Vec::new()),
            Err(BankError::Empty)
        ));
    }
}
