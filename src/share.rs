//! Share surface: radar chart data, share URLs, and the copy-to-clipboard
//! share text for both quizzes.

use serde::Serialize;

use crate::quiz::ai::catalog::category_meta;
use crate::quiz::ai::{AiCategory, AiResult};
use crate::quiz::pkm::catalog::style_profile;
use crate::quiz::pkm::QuizResult;

/// One radar chart axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadarPoint {
    pub label: &'static str,
    pub value: u8,
    pub color: &'static str,
}

/// Four axes, one per analysis category, colored per axis.
pub fn ai_radar_data(result: &AiResult) -> Vec<RadarPoint> {
    let colors = [
        (AiCategory::Usage, "#06b6d4"),
        (AiCategory::Prompt, "#8b5cf6"),
        (AiCategory::Integration, "#f59e0b"),
        (AiCategory::Output, "#10b981"),
    ];
    colors
        .into_iter()
        .map(|(category, color)| RadarPoint {
            label: category_meta(category).label,
            value: result.category_percents.get(category),
            color,
        })
        .collect()
}

/// Five axes from the combined quiz, all on the primary style's color.
pub fn pkm_radar_data(result: &QuizResult) -> Vec<RadarPoint> {
    let color = style_profile(result.primary_style).color;
    let radar = &result.radar;
    [
        ("Style", radar.style),
        ("Habit", radar.maturity),
        ("AI", radar.ai),
        ("Output", radar.output),
        ("Bottleneck", radar.bottleneck),
    ]
    .into_iter()
    .map(|(label, value)| RadarPoint {
        label,
        value,
        color,
    })
    .collect()
}

/// Result link: the share code rides in the `r` query parameter.
pub fn share_url(base: &str, code: &str) -> String {
    format!("{base}?r={code}")
}

/// Clipboard text for an AI quiz result.
pub fn ai_share_text(result: &AiResult, url: &str) -> String {
    let profile = result.profile;
    format!(
        "My AI usage level: {} {}\n\"{}\"\n\nScore: {}/60\n\nWhat's your AI level? \u{1f449} {}",
        profile.emoji, profile.name, profile.nickname, result.total_score, url
    )
}

/// Clipboard text for a combined quiz result. A secondary style rides along
/// as `x emoji name`.
pub fn pkm_share_text(result: &QuizResult, url: &str) -> String {
    let primary = style_profile(result.primary_style);
    let secondary = result
        .secondary_style
        .map(|style| {
            let profile = style_profile(style);
            format!(" x {} {}", profile.emoji, profile.name)
        })
        .unwrap_or_default();
    format!(
        "My recording DNA: {} {}{}\n\n\"{}\"\n\nWhat's your recording DNA? \u{1f449} {}",
        primary.emoji, primary.name, secondary, primary.quote, url
    )
}
