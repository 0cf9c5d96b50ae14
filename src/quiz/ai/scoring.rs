//! Pure transform from an answer sheet to the AI quiz result: one total with
//! a level, plus per-category raw scores, percentages, and labels.

use serde::Serialize;

use crate::engine::codec::AnswerSheet;
use crate::engine::{levels, percent};

use super::catalog::{category_label, level_bands, level_profile, LevelProfile};
use super::domain::{AiCategory, AiLevel, QuestionBank};

/// Raw per-category sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    pub usage: u32,
    pub prompt: u32,
    pub integration: u32,
    pub output: u32,
}

impl CategoryScores {
    fn bump(&mut self, category: AiCategory, points: u8) {
        match category {
            AiCategory::Usage => self.usage += points as u32,
            AiCategory::Prompt => self.prompt += points as u32,
            AiCategory::Integration => self.integration += points as u32,
            AiCategory::Output => self.output += points as u32,
        }
    }

    pub fn get(&self, category: AiCategory) -> u32 {
        match category {
            AiCategory::Usage => self.usage,
            AiCategory::Prompt => self.prompt,
            AiCategory::Integration => self.integration,
            AiCategory::Output => self.output,
        }
    }
}

/// Per-category percentages, 0..=100 each. Radar chart input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryPercents {
    pub usage: u8,
    pub prompt: u8,
    pub integration: u8,
    pub output: u8,
}

impl CategoryPercents {
    pub fn get(&self, category: AiCategory) -> u8 {
        match category {
            AiCategory::Usage => self.usage,
            AiCategory::Prompt => self.prompt,
            AiCategory::Integration => self.integration,
            AiCategory::Output => self.output,
        }
    }
}

/// Per-category vocabulary labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryLabels {
    pub usage: &'static str,
    pub prompt: &'static str,
    pub integration: &'static str,
    pub output: &'static str,
}

impl CategoryLabels {
    pub fn get(&self, category: AiCategory) -> &'static str {
        match category {
            AiCategory::Usage => self.usage,
            AiCategory::Prompt => self.prompt,
            AiCategory::Integration => self.integration,
            AiCategory::Output => self.output,
        }
    }
}

/// Full AI quiz result. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiResult {
    pub total_score: u32,
    pub level: AiLevel,
    pub profile: &'static LevelProfile,
    pub category_scores: CategoryScores,
    pub category_percents: CategoryPercents,
    pub category_labels: CategoryLabels,
}

/// Scores a sheet against the bank. Deterministic and total: short or empty
/// sheets degenerate to zeros and the lowest level.
pub fn score(bank: &QuestionBank, sheet: &AnswerSheet) -> AiResult {
    let mut total_score = 0u32;
    let mut category_scores = CategoryScores::default();

    // An out-of-range pick (possible only on a deserialized sheet) counts as
    // unanswered.
    for (question, &pick) in bank.questions().iter().zip(sheet.picks()) {
        let Some(choice) = question.choices.get(pick as usize) else {
            continue;
        };
        total_score += choice.score as u32;
        category_scores.bump(question.category, choice.score);
    }

    let bands = level_bands();
    let level = levels::resolve(&bands, total_score).level;

    let percents = |category: AiCategory| {
        percent(
            category_scores.get(category),
            bank.category_max_score(category),
        )
    };
    let category_percents = CategoryPercents {
        usage: percents(AiCategory::Usage),
        prompt: percents(AiCategory::Prompt),
        integration: percents(AiCategory::Integration),
        output: percents(AiCategory::Output),
    };

    let category_labels = CategoryLabels {
        usage: category_label(AiCategory::Usage, category_percents.usage),
        prompt: category_label(AiCategory::Prompt, category_percents.prompt),
        integration: category_label(AiCategory::Integration, category_percents.integration),
        output: category_label(AiCategory::Output, category_percents.output),
    };

    AiResult {
        total_score,
        level,
        profile: level_profile(level),
        category_scores,
        category_percents,
        category_labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_for(bank: &QuestionBank, picks: &[u8]) -> AnswerSheet {
        AnswerSheet::from_picks(bank, picks).expect("picks fit the bank")
    }

    fn best_picks(bank: &QuestionBank) -> Vec<u8> {
        bank.questions()
            .iter()
            .map(|question| {
                question
                    .choices
                    .iter()
                    .position(|choice| choice.score == 3)
                    .expect("validated banks always carry a 3-point choice") as u8
            })
            .collect()
    }

    #[test]
    fn perfect_sheet_reaches_the_top_level() {
        let bank = QuestionBank::standard().expect("standard bank loads");
        let picks = best_picks(&bank);
        let result = score(&bank, &sheet_for(&bank, &picks));

        assert_eq!(result.total_score, 60);
        assert_eq!(result.level, AiLevel::Architect);
        assert_eq!(result.profile.name, "AI Architect");
        assert_eq!(result.category_scores.usage, 18);
        assert_eq!(result.category_percents.usage, 100);
        assert_eq!(result.category_labels.usage, "Designer");
        assert_eq!(result.category_labels.output, "Creating");
    }

    #[test]
    fn deserialized_sheet_with_out_of_range_pick_scores_as_unanswered() {
        let bank = QuestionBank::standard().expect("standard bank loads");
        // Deserialization bypasses select()'s range check; scoring must stay
        // total anyway.
        let sheet: AnswerSheet =
            serde_json::from_str(r#"{"picks":[9,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0]}"#)
                .expect("sheet shape deserializes");

        let forged = score(&bank, &sheet);

        // Same sheet with question 1's zero-score choice instead of the
        // forged pick; the two must score identically.
        let mut picks = vec![0u8; 20];
        picks[0] = bank.questions()[0]
            .choices
            .iter()
            .position(|choice| choice.score == 0)
            .expect("question 1 has a zero-score choice") as u8;
        let baseline = score(&bank, &sheet_for(&bank, &picks));
        assert_eq!(forged.total_score, baseline.total_score);
        assert_eq!(forged.category_scores, baseline.category_scores);
        assert_eq!(forged.level, baseline.level);
    }

    #[test]
    fn empty_sheet_degenerates_to_observer() {
        let bank = QuestionBank::standard().expect("standard bank loads");
        let result = score(&bank, &AnswerSheet::new());

        assert_eq!(result.total_score, 0);
        assert_eq!(result.level, AiLevel::Observer);
        assert_eq!(result.category_percents, CategoryPercents::default());
        assert_eq!(result.category_labels.usage, "Watcher");
    }

    #[test]
    fn level_boundaries_follow_the_band_table() {
        let bank = QuestionBank::standard().expect("standard bank loads");
        let best = best_picks(&bank);

        // 15 points: five 3-point answers, the rest at zero-score choices.
        let mut picks: Vec<u8> = bank
            .questions()
            .iter()
            .map(|question| {
                question
                    .choices
                    .iter()
                    .position(|choice| choice.score == 0)
                    .expect("every question has a zero-score choice") as u8
            })
            .collect();
        for index in 0..5 {
            picks[index] = best[index];
        }
        let result = score(&bank, &sheet_for(&bank, &picks));
        assert_eq!(result.total_score, 15);
        assert_eq!(result.level, AiLevel::Observer);

        // One more 3-point answer tips into the next band.
        picks[5] = best[5];
        let result = score(&bank, &sheet_for(&bank, &picks));
        assert_eq!(result.total_score, 18);
        assert_eq!(result.level, AiLevel::Experimenter);
    }

    #[test]
    fn category_sums_split_by_axis() {
        let bank = QuestionBank::standard().expect("standard bank loads");
        // Best answers on usage questions only.
        let best = best_picks(&bank);
        let picks: Vec<u8> = bank
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| {
                if question.category == AiCategory::Usage {
                    best[index]
                } else {
                    question
                        .choices
                        .iter()
                        .position(|choice| choice.score == 0)
                        .expect("every question has a zero-score choice") as u8
                }
            })
            .collect();

        let result = score(&bank, &sheet_for(&bank, &picks));
        assert_eq!(result.category_scores.usage, 18);
        assert_eq!(result.category_scores.prompt, 0);
        assert_eq!(result.category_scores.integration, 0);
        assert_eq!(result.category_scores.output, 0);
        assert_eq!(result.total_score, 18);
        assert_eq!(result.category_labels.usage, "Designer");
        assert_eq!(result.category_labels.prompt, "One-liner");
    }
}
