use record_dna::engine::codec::AnswerSheet;
use record_dna::quiz::ai::catalog::{category_label, level_profile, LEVEL_PROFILES};
use record_dna::quiz::ai::{insights, score, AiCategory, AiLevel, QuestionBank};

fn sheet_with_total(bank: &QuestionBank, total: u32) -> AnswerSheet {
    // Greedy fill: take points question by question until the target is met.
    let mut remaining = total;
    let picks: Vec<u8> = bank
        .questions()
        .iter()
        .map(|question| {
            let take = remaining.min(3) as u8;
            remaining -= take as u32;
            question
                .choices
                .iter()
                .position(|choice| choice.score == take)
                .expect("every question spans scores 0..=3") as u8
        })
        .collect();
    assert_eq!(remaining, 0, "target total {total} not reachable");
    AnswerSheet::from_picks(bank, &picks).expect("picks fit the bank")
}

#[test]
fn perfect_run_is_an_architect_across_the_board() {
    let bank = QuestionBank::standard().expect("standard bank loads");
    let result = score(&bank, &sheet_with_total(&bank, 60));

    assert_eq!(result.total_score, 60);
    assert_eq!(result.level, AiLevel::Architect);
    assert_eq!(result.profile.emoji, "\u{1f3d7}\u{fe0f}");
    for category in AiCategory::ordered() {
        assert_eq!(result.category_percents.get(category), 100);
    }
    assert_eq!(result.category_labels.usage, "Designer");
    assert_eq!(result.category_labels.prompt, "Systematic");
    assert_eq!(result.category_labels.integration, "Embedded");
    assert_eq!(result.category_labels.output, "Creating");
}

#[test]
fn every_total_resolves_to_its_band() {
    let bank = QuestionBank::standard().expect("standard bank loads");
    for total in 0..=60u32 {
        let result = score(&bank, &sheet_with_total(&bank, total));
        assert_eq!(result.total_score, total);

        let profile = level_profile(result.level);
        assert!(
            (profile.min_score..=profile.max_score).contains(&total),
            "total {total} resolved outside band {:?}",
            result.level
        );
    }
}

#[test]
fn band_edges_sit_where_the_catalog_says() {
    let bank = QuestionBank::standard().expect("standard bank loads");
    for profile in &LEVEL_PROFILES {
        let low = score(&bank, &sheet_with_total(&bank, profile.min_score));
        let high = score(&bank, &sheet_with_total(&bank, profile.max_score));
        assert_eq!(low.level, profile.level);
        assert_eq!(high.level, profile.level);
    }
}

#[test]
fn usage_axis_carries_five_labels_the_rest_four() {
    let mut usage_labels: Vec<&str> = (0..=100u8)
        .map(|percent| category_label(AiCategory::Usage, percent))
        .collect();
    usage_labels.dedup();
    assert_eq!(
        usage_labels,
        ["Watcher", "Sampler", "Regular", "Power user", "Designer"]
    );

    for category in [AiCategory::Prompt, AiCategory::Integration, AiCategory::Output] {
        let mut labels: Vec<&str> = (0..=100u8)
            .map(|percent| category_label(category, percent))
            .collect();
        labels.dedup();
        assert_eq!(labels.len(), 4, "{category:?}");
    }
}

#[test]
fn raising_one_answer_never_lowers_its_category_percent() {
    let bank = QuestionBank::standard().expect("standard bank loads");
    let base: Vec<u8> = bank
        .questions()
        .iter()
        .map(|question| {
            question
                .choices
                .iter()
                .position(|choice| choice.score == 1)
                .expect("every question has a 1-point choice") as u8
        })
        .collect();

    for (index, question) in bank.questions().iter().enumerate() {
        let before = score(
            &bank,
            &AnswerSheet::from_picks(&bank, &base).expect("picks fit the bank"),
        );

        let mut raised = base.clone();
        raised[index] = question
            .choices
            .iter()
            .position(|choice| choice.score == 3)
            .expect("every question has a 3-point choice") as u8;
        let after = score(
            &bank,
            &AnswerSheet::from_picks(&bank, &raised).expect("picks fit the bank"),
        );

        let category = question.category;
        assert!(after.category_percents.get(category) >= before.category_percents.get(category));
        assert!(after.total_score > before.total_score);
    }
}

#[test]
fn insights_and_actions_come_back_nonempty() {
    let bank = QuestionBank::standard().expect("standard bank loads");
    for total in [0, 17, 35, 48, 60] {
        let result = score(&bank, &sheet_with_total(&bank, total));
        assert!(!insights::insight(&result).is_empty());
        assert_eq!(insights::actions(&result).len(), 3);
    }
}

#[test]
fn restored_code_reproduces_the_level() {
    let bank = QuestionBank::standard().expect("standard bank loads");
    let sheet = sheet_with_total(&bank, 45);
    let code = sheet.encode(&bank).expect("complete sheet encodes");

    let restored = AnswerSheet::decode(&bank, &code).expect("own code decodes");
    let result = score(&bank, &restored);
    assert_eq!(result.level, AiLevel::PowerUser);
    assert_eq!(result.profile.nickname, "AI is a teammate");
}
