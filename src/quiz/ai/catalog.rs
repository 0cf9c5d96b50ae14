//! Static result content for the AI quiz: the five level profiles with their
//! score bands, category metadata, and the per-category label vocabularies.

use serde::Serialize;

use crate::engine::levels::LevelBand;

use super::domain::{AiCategory, AiLevel};

/// Everything the result screen shows for one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelProfile {
    pub level: AiLevel,
    pub emoji: &'static str,
    pub name: &'static str,
    pub nickname: &'static str,
    pub description: &'static str,
    /// One-paragraph bridge from this level back to note-taking practice.
    pub note_connection: &'static str,
    pub color: &'static str,
    pub min_score: u32,
    pub max_score: u32,
}

pub const LEVEL_PROFILES: [LevelProfile; 5] = [
    LevelProfile {
        level: AiLevel::Observer,
        emoji: "\u{1f440}",
        name: "AI Observer",
        nickname: "AI? I've heard of it...",
        description: "You have not really put AI to work yet. The curiosity is there, \
            but where to start may feel unclear.",
        note_connection: "Remember one thing before you start: AI is only as smart as the \
            information you give it. An everyday note habit is the foundation of using AI well.",
        color: "#94a3b8",
        min_score: 0,
        max_score: 15,
    },
    LevelProfile {
        level: AiLevel::Experimenter,
        emoji: "\u{1f9ea}",
        name: "AI Experimenter",
        nickname: "I ask it things sometimes...",
        description: "You use AI, but mostly as a search substitute. The occasional \
            question goes to a chatbot, without any system behind it.",
        note_connection: "Good answers need good context. Start writing one line of whatever \
            you are thinking each day; that becomes the best prompt you can hand an AI.",
        color: "#60a5fa",
        min_score: 16,
        max_score: 30,
    },
    LevelProfile {
        level: AiLevel::Practitioner,
        emoji: "\u{26a1}",
        name: "AI Practitioner",
        nickname: "It's getting hard to work without it",
        description: "AI is an active part of your work, just not a systematic one. You \
            use the tools, but every session starts from zero and the results evaporate.",
        note_connection: "Are you re-teaching the AI every time? Record the context you reuse \
            and the repeat explanations disappear. Your notes become a prompt library.",
        color: "#a78bfa",
        min_score: 31,
        max_score: 42,
    },
    LevelProfile {
        level: AiLevel::PowerUser,
        emoji: "\u{1f680}",
        name: "AI Power user",
        nickname: "AI is a teammate",
        description: "You run several AI tools fluently, design prompts well, and reach \
            for the right tool for each job.",
        note_connection: "You use AI well. Is its output evaporating, though? Bank the good \
            results in your note system and repeat work shrinks while quality climbs.",
        color: "#f97316",
        min_score: 43,
        max_score: 52,
    },
    LevelProfile {
        level: AiLevel::Architect,
        emoji: "\u{1f3d7}\u{fe0f}",
        name: "AI Architect",
        nickname: "I build my own AI workflows",
        description: "AI and your records run as one system. You are past using tools; \
            the AI is fully integrated into how you work.",
        note_connection: "AI and your records are already connected. The next step is teaching \
            the system to someone else: your workflow is itself content.",
        color: "#06b6d4",
        min_score: 53,
        max_score: 60,
    },
];

pub fn level_profile(level: AiLevel) -> &'static LevelProfile {
    // Declaration orders match; the position lookup cannot miss.
    let position = AiLevel::ordered()
        .iter()
        .position(|candidate| *candidate == level)
        .unwrap_or(0);
    &LEVEL_PROFILES[position]
}

/// Score bands derived from the profile table, for resolution and load-time
/// contiguity validation.
pub(super) fn level_bands() -> [LevelBand<AiLevel>; 5] {
    LEVEL_PROFILES.map(|profile| LevelBand::new(profile.level, profile.min_score, profile.max_score))
}

/// Display metadata for one analysis axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryMeta {
    pub label: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

pub const fn category_meta(category: AiCategory) -> &'static CategoryMeta {
    match category {
        AiCategory::Usage => &CategoryMeta {
            label: "AI usage stage",
            emoji: "\u{1f916}",
            description: "How often, and how, you reach for AI",
        },
        AiCategory::Prompt => &CategoryMeta {
            label: "Prompt design",
            emoji: "\u{1f4dd}",
            description: "How well you brief the AI",
        },
        AiCategory::Integration => &CategoryMeta {
            label: "Record integration",
            emoji: "\u{1f517}",
            description: "How connected AI is to your notes",
        },
        AiCategory::Output => &CategoryMeta {
            label: "Output conversion",
            emoji: "\u{1f3af}",
            description: "What you do with what AI produces",
        },
    }
}

/// Maps a category percentage to its label. Each axis has its own vocabulary
/// and its own cut points; usage runs five steps, the rest four.
pub fn category_label(category: AiCategory, percent: u8) -> &'static str {
    match category {
        AiCategory::Usage => {
            if percent <= 30 {
                "Watcher"
            } else if percent <= 50 {
                "Sampler"
            } else if percent <= 70 {
                "Regular"
            } else if percent <= 85 {
                "Power user"
            } else {
                "Designer"
            }
        }
        AiCategory::Prompt => {
            if percent <= 30 {
                "One-liner"
            } else if percent <= 50 {
                "Directive"
            } else if percent <= 75 {
                "Contextual"
            } else {
                "Systematic"
            }
        }
        AiCategory::Integration => {
            if percent <= 30 {
                "Detached"
            } else if percent <= 50 {
                "Manual"
            } else if percent <= 75 {
                "Linked"
            } else {
                "Embedded"
            }
        }
        AiCategory::Output => {
            if percent <= 30 {
                "Accepting"
            } else if percent <= 50 {
                "Editing"
            } else if percent <= 75 {
                "Reworking"
            } else {
                "Creating"
            }
        }
    }
}
