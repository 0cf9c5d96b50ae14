//! Pure transform from an answer sheet to the combined quiz result.

use serde::Serialize;

use crate::engine::codec::AnswerSheet;
use crate::engine::{levels, percent, rank_tags};

use super::catalog::{HabitLevel, AI_USAGE_LEVELS, MATURITY_LEVELS};
use super::domain::{
    Bottleneck, Choice, OutputStyle, Question, QuestionBank, QuestionCategory, RecordingStyle,
};

/// Occurrences of each style tag across the sheet, in declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StyleCounts {
    pub architect: u32,
    pub gardener: u32,
    pub student: u32,
    pub librarian: u32,
}

impl StyleCounts {
    fn bump(&mut self, style: RecordingStyle) {
        match style {
            RecordingStyle::Architect => self.architect += 1,
            RecordingStyle::Gardener => self.gardener += 1,
            RecordingStyle::Student => self.student += 1,
            RecordingStyle::Librarian => self.librarian += 1,
        }
    }

    pub fn get(&self, style: RecordingStyle) -> u32 {
        match style {
            RecordingStyle::Architect => self.architect,
            RecordingStyle::Gardener => self.gardener,
            RecordingStyle::Student => self.student,
            RecordingStyle::Librarian => self.librarian,
        }
    }

    fn ordered(&self) -> [(RecordingStyle, u32); 4] {
        RecordingStyle::ordered().map(|style| (style, self.get(style)))
    }
}

/// Five radar axes, all 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RadarScores {
    pub style: u8,
    pub maturity: u8,
    pub ai: u8,
    pub output: u8,
    pub bottleneck: u8,
}

/// Full result record. Derived, never stored; recomputed from scratch for
/// every completed or decoded sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub primary_style: RecordingStyle,
    pub secondary_style: Option<RecordingStyle>,
    pub style_counts: StyleCounts,

    pub maturity_score: u32,
    pub maturity: HabitLevel,

    pub ai_score: u32,
    pub ai_usage: HabitLevel,

    pub output_style: OutputStyle,
    pub bottleneck: Bottleneck,

    pub radar: RadarScores,
}

fn answered<'a>(
    bank: &'a QuestionBank,
    sheet: &'a AnswerSheet,
) -> impl Iterator<Item = (&'a Question, &'a Choice)> + 'a {
    // Sheets built through select()/decode() are always in range, but a sheet
    // can also arrive through deserialization; out-of-range picks count as
    // unanswered rather than indexing past the choices.
    bank.questions()
        .iter()
        .zip(sheet.picks())
        .filter_map(|(question, &pick)| {
            question
                .choices
                .get(pick as usize)
                .map(|choice| (question, choice))
        })
}

/// Scores a sheet against the bank. Deterministic and total: short or empty
/// sheets degenerate to zero counts rather than failing.
pub fn score(bank: &QuestionBank, sheet: &AnswerSheet) -> QuizResult {
    let mut style_counts = StyleCounts::default();
    let mut maturity_score = 0;
    let mut ai_score = 0;
    let mut output_counts = OutputStyle::ordered().map(|style| (style, 0u32));
    let mut bottleneck_counts = Bottleneck::ordered().map(|stage| (stage, 0u32));

    for (question, choice) in answered(bank, sheet) {
        if let Some(style) = choice.style {
            style_counts.bump(style);
        }
        if let Some(points) = choice.score {
            match question.category {
                QuestionCategory::Maturity => maturity_score += points as u32,
                QuestionCategory::AiUsage => ai_score += points as u32,
                _ => {}
            }
        }
        if let Some(output) = choice.output {
            for entry in &mut output_counts {
                if entry.0 == output {
                    entry.1 += 1;
                }
            }
        }
        if let Some(stage) = choice.bottleneck {
            for entry in &mut bottleneck_counts {
                if entry.0 == stage {
                    entry.1 += 1;
                }
            }
        }
    }

    let styles = rank_tags(&style_counts.ordered());
    let output = rank_tags(&output_counts).primary;
    let bottleneck = rank_tags(&bottleneck_counts).primary;

    let maturity = levels::resolve(&MATURITY_LEVELS, maturity_score).level;
    let ai_usage = levels::resolve(&AI_USAGE_LEVELS, ai_score).level;

    let style_questions = bank.category_count(QuestionCategory::Style) as u32;
    let radar = RadarScores {
        style: percent(style_counts.get(styles.primary), style_questions),
        maturity: percent(
            maturity_score,
            bank.category_max_score(QuestionCategory::Maturity),
        ),
        ai: percent(ai_score, bank.category_max_score(QuestionCategory::AiUsage)),
        output: output.radar_weight(),
        bottleneck: bottleneck.radar_weight(),
    };

    QuizResult {
        primary_style: styles.primary,
        secondary_style: styles.secondary,
        style_counts,
        maturity_score,
        maturity,
        ai_score,
        ai_usage,
        output_style: output,
        bottleneck,
        radar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::codec::AnswerSheet;

    fn classic_sheet(bank: &QuestionBank, picks: &[u8]) -> AnswerSheet {
        AnswerSheet::from_picks(bank, picks).expect("picks fit the bank")
    }

    #[test]
    fn classic_scenario_architect_with_gardener_secondary() {
        let bank = QuestionBank::classic().expect("classic bank loads");
        // architect x3, gardener x2, student, librarian
        let sheet = classic_sheet(&bank, &[0, 0, 0, 1, 1, 2, 3]);

        let result = score(&bank, &sheet);
        assert_eq!(result.primary_style, RecordingStyle::Architect);
        assert_eq!(result.secondary_style, Some(RecordingStyle::Gardener));
        assert_eq!(result.style_counts.architect, 3);
        assert_eq!(result.style_counts.gardener, 2);
        assert_eq!(result.radar.style, 43); // round(3/7 * 100)

        let code = sheet.encode(&bank).expect("complete sheet encodes");
        assert_eq!(code.len(), 7);
        assert_eq!(AnswerSheet::decode(&bank, &code), Ok(sheet));
    }

    #[test]
    fn all_identical_answers_have_no_secondary() {
        let bank = QuestionBank::classic().expect("classic bank loads");
        let sheet = classic_sheet(&bank, &[0; 7]);

        let result = score(&bank, &sheet);
        assert_eq!(result.primary_style, RecordingStyle::Architect);
        assert_eq!(result.secondary_style, None);
        assert_eq!(result.radar.style, 100);
    }

    #[test]
    fn deserialized_sheet_with_out_of_range_picks_scores_as_unanswered() {
        let bank = QuestionBank::classic().expect("classic bank loads");
        // Deserialization bypasses select()'s range check; the out-of-range
        // entries must count as unanswered, not index past the choices.
        let sheet: AnswerSheet = serde_json::from_str(r#"{"picks":[9,0,0,200,1,2,3]}"#)
            .expect("sheet shape deserializes");

        let result = score(&bank, &sheet);
        // Remaining in-range picks: architect x2, gardener, student, librarian.
        assert_eq!(result.primary_style, RecordingStyle::Architect);
        assert_eq!(result.style_counts.architect, 2);
        assert_eq!(
            result.style_counts.architect
                + result.style_counts.gardener
                + result.style_counts.student
                + result.style_counts.librarian,
            5
        );
    }

    #[test]
    fn empty_sheet_degenerates_without_panicking() {
        let bank = QuestionBank::standard().expect("standard bank loads");
        let result = score(&bank, &AnswerSheet::new());

        assert_eq!(result.primary_style, RecordingStyle::Architect);
        assert_eq!(result.secondary_style, None);
        assert_eq!(result.maturity_score, 0);
        assert_eq!(result.maturity.rank, 1);
        assert_eq!(result.ai_score, 0);
        assert_eq!(result.ai_usage.rank, 1);
        assert_eq!(result.radar.style, 0);
    }

    #[test]
    fn maturity_and_ai_scores_accumulate_per_category() {
        let bank = QuestionBank::standard().expect("standard bank loads");
        // Style answers arbitrary; pick the 3-point choice on every scored
        // question, then output=sharer, bottleneck=apply.
        let mut picks = vec![0u8; 7];
        for question in &bank.questions()[7..] {
            let best = question
                .choices
                .iter()
                .position(|choice| choice.score == Some(3))
                .or_else(|| {
                    question.choices.iter().position(|choice| {
                        choice.output == Some(OutputStyle::Sharer)
                            || choice.bottleneck == Some(Bottleneck::Apply)
                    })
                })
                .expect("every non-style question has a target choice");
            picks.push(best as u8);
        }
        let sheet = classic_sheet(&bank, &picks);

        let result = score(&bank, &sheet);
        assert_eq!(result.maturity_score, 12);
        assert_eq!(result.maturity.rank, 5);
        assert_eq!(result.ai_score, 12);
        assert_eq!(result.ai_usage.rank, 4);
        assert_eq!(result.radar.maturity, 100);
        assert_eq!(result.radar.ai, 100);
        assert_eq!(result.output_style, OutputStyle::Sharer);
        assert_eq!(result.radar.output, 90);
        assert_eq!(result.bottleneck, Bottleneck::Apply);
        assert_eq!(result.radar.bottleneck, 85);
    }

    #[test]
    fn bottleneck_tags_on_scored_choices_count_too() {
        let bank = QuestionBank::standard().expect("standard bank loads");
        // Pick the start-tagged maturity choice (question 8, choice b) and a
        // sustain answer on the dedicated bottleneck question: start and
        // sustain tie at 1, declaration order prefers start.
        let mut picks = vec![0u8; 7];
        picks.extend([1, 0, 3, 1]); // maturity answers; first carries Start
        picks.extend([0, 0, 3, 0]); // ai answers
        picks.push(0); // output
        picks.push(1); // bottleneck question: Sustain
        let sheet = classic_sheet(&bank, &picks);

        let result = score(&bank, &sheet);
        assert_eq!(result.bottleneck, Bottleneck::Start);
    }
}
