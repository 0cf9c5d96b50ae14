//! Derived result copy: the one-line insight and the three next actions.

use super::catalog::category_meta;
use super::domain::{AiCategory, AiLevel};
use super::scoring::AiResult;

/// One-line insight built from the spread between the strongest and weakest
/// axes. First-match-wins; the final branch is the default. Ties sort stably,
/// so equal axes resolve toward declaration order.
pub fn insight(result: &AiResult) -> String {
    let mut ranked: Vec<(AiCategory, u8)> = AiCategory::ordered()
        .map(|category| (category, result.category_percents.get(category)))
        .to_vec();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    let highest = ranked[0].0;
    let lowest = ranked[3].0;

    if lowest == AiCategory::Integration {
        return format!(
            "{} is strong, but the link back to your records is weak. That link is the \
             key to the next level.",
            category_meta(highest).label
        );
    }

    if lowest == AiCategory::Prompt {
        return "You use AI often, but prompt design is where opportunity is still being \
            left on the table."
            .to_string();
    }

    match result.level {
        AiLevel::Architect => "AI and your records already run as one system. The next step \
            is teaching that system to someone else."
            .to_string(),
        AiLevel::PowerUser => "Your AI usage is advanced. Strengthen the link to your records \
            and repeat work shrinks while quality climbs."
            .to_string(),
        _ => "You use AI steadily. Strengthening the connection to your records is what \
            moves you up a level."
            .to_string(),
    }
}

/// Three concrete actions, one per weak-or-strong fork on integration,
/// prompting, and output.
pub fn actions(result: &AiResult) -> Vec<String> {
    let percents = &result.category_percents;
    let mut actions = Vec::with_capacity(3);

    actions.push(
        if percents.integration < 50 {
            "This week, paste one recent note into an AI session and let it work with \
             your context."
        } else {
            "Turn the context you reuse into templates and stop retyping it."
        }
        .to_string(),
    );

    actions.push(
        if percents.prompt < 50 {
            "State role, background, and output format when you ask. The results change."
        } else {
            "Collect your frequent prompts into a notes page and build a library."
        }
        .to_string(),
    );

    actions.push(
        if percents.output < 50 {
            "Don't ship AI output as-is; rework it once through your own point of view."
        } else {
            "Save the good AI results into your note system and reuse them."
        }
        .to_string(),
    );

    actions
}
