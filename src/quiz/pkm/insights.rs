//! Derived report copy: strengths, improvements, recommendations, and the
//! composite diagnosis. Every generator is an ordered decision table; the
//! first matching branch wins and the last branch is a catch-all.

use serde::Serialize;

use super::domain::{Bottleneck, OutputStyle, RecordingStyle};
use super::scoring::QuizResult;

/// Three strengths: one from the primary style, one from maturity, one from
/// AI usage or output style.
pub fn strengths(result: &QuizResult) -> Vec<String> {
    let mut strengths = Vec::with_capacity(3);

    strengths.push(
        match result.primary_style {
            RecordingStyle::Architect => {
                "You are exceptional at structuring information systematically."
            }
            RecordingStyle::Gardener => {
                "You have strong creative range for connecting unrelated ideas."
            }
            RecordingStyle::Student => {
                "You internalize what you learn more deeply than most."
            }
            RecordingStyle::Librarian => {
                "You have a sharp instinct for collecting and retrieving material fast."
            }
        }
        .to_string(),
    );

    strengths.push(
        if result.maturity.rank >= 4 {
            "Turning records into finished output is already a settled habit."
        } else if result.maturity.rank >= 3 {
            "The foundation of a steady recording habit is in place."
        } else {
            "You recognize why recording matters, which means you are ready to start."
        }
        .to_string(),
    );

    strengths.push(
        if result.ai_usage.rank >= 3 {
            "You actively lean on AI to raise your throughput."
        } else if result.output_style == OutputStyle::Sharer {
            "You have a strong publishing bent: records become content."
        } else if result.output_style == OutputStyle::Practical {
            "You move notes straight into real work; the execution link is there."
        } else {
            "You refine your thinking through reflection, and it shows in depth."
        }
        .to_string(),
    );

    strengths
}

/// Three improvements mirroring the strengths: style, maturity, AI.
pub fn improvements(result: &QuizResult) -> Vec<String> {
    let mut improvements = Vec::with_capacity(3);

    improvements.push(
        match result.primary_style {
            RecordingStyle::Architect => {
                "Time spent building structure can crowd out the actual recording."
            }
            RecordingStyle::Gardener => {
                "Scattered notes can become hard to find again later."
            }
            RecordingStyle::Student => {
                "Chasing the perfect write-up can slow your output badly."
            }
            RecordingStyle::Librarian => {
                "Saving something is easy to mistake for having learned it."
            }
        }
        .to_string(),
    );

    improvements.push(
        if result.maturity.rank <= 2 {
            "The habit is still irregular. Even one minute of writing a day builds the routine."
        } else if result.maturity.rank == 3 {
            "Capture is steady; what needs to rise is how often notes get pulled back out."
        } else {
            "Check whether the current system could be simplified further."
        }
        .to_string(),
    );

    improvements.push(
        if result.ai_usage.rank <= 1 {
            "AI tools are untouched, and that is a large efficiency gain left on the table."
        } else if result.ai_usage.rank == 2 {
            "AI is only answering one-off questions. Connect it to your notes and the effect compounds."
        } else {
            "AI reliance may be creeping up. Keep to 'my thinking first, AI assists'."
        }
        .to_string(),
    );

    improvements
}

/// A recommended tool with the reason it fits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolRecommendation {
    pub name: &'static str,
    pub reason: &'static str,
}

pub fn tool_recommendations(result: &QuizResult) -> Vec<ToolRecommendation> {
    let mut tools = Vec::with_capacity(3);

    tools.push(match result.primary_style {
        RecordingStyle::Architect => ToolRecommendation {
            name: "Notion",
            reason: "Databases and relations suit an architect's classification system.",
        },
        RecordingStyle::Gardener => ToolRecommendation {
            name: "Obsidian",
            reason: "Graph view and backlinks match a gardener's free-form linking.",
        },
        RecordingStyle::Student => ToolRecommendation {
            name: "Readwise Reader",
            reason: "Highlight-to-note automation fits a learning-centered workflow.",
        },
        RecordingStyle::Librarian => ToolRecommendation {
            name: "Raindrop.io",
            reason: "Strong tagging and search surface collected material instantly.",
        },
    });

    tools.push(if result.ai_usage.rank <= 2 {
        ToolRecommendation {
            name: "ChatGPT / Claude",
            reason: "Paste in a note and ask for a summary; that is the first step into AI.",
        }
    } else {
        ToolRecommendation {
            name: "Obsidian + AI plugins",
            reason: "Notes and AI live in one environment, connected.",
        }
    });

    tools.push(if result.maturity.rank <= 2 {
        ToolRecommendation {
            name: "Apple Notes / Google Keep",
            reason: "Build the habit on a default app before reaching for anything complex.",
        }
    } else {
        ToolRecommendation {
            name: "Tana / Capacities",
            reason: "Object-based notes with automatic linking, for a system already in motion.",
        }
    });

    tools
}

/// A recommended reading or subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecommendation {
    pub title: &'static str,
    pub kind: &'static str,
    pub reason: &'static str,
}

pub fn resource_recommendations(result: &QuizResult) -> Vec<ResourceRecommendation> {
    let mut resources = Vec::new();

    if result.maturity.rank <= 2 {
        resources.push(ResourceRecommendation {
            title: "How to Take Smart Notes",
            kind: "Book",
            reason: "Grounds why recording matters and how to begin.",
        });
    }

    match result.primary_style {
        RecordingStyle::Architect | RecordingStyle::Librarian => {
            resources.push(ResourceRecommendation {
                title: "The PARA Method (Tiago Forte)",
                kind: "Framework",
                reason: "Projects-Areas-Resources-Archive ordering suits your style.",
            });
        }
        RecordingStyle::Gardener | RecordingStyle::Student => {
            resources.push(ResourceRecommendation {
                title: "Evergreen Notes (Andy Matuschak)",
                kind: "Framework",
                reason: "A method for growing notes incrementally into your own knowledge.",
            });
        }
    }

    if result.ai_usage.rank <= 2 {
        resources.push(ResourceRecommendation {
            title: "Build Your Own AI Research Assistant",
            kind: "Newsletter",
            reason: "Weekly, practical ways to wire AI into your notes.",
        });
    }

    resources
}

/// Composite diagnosis: a headline plus two or three concrete actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub headline: String,
    pub actions: Vec<String>,
}

/// First-match-wins over (maturity, bottleneck, AI usage, primary style);
/// the final branch is the default.
pub fn diagnosis(result: &QuizResult) -> Diagnosis {
    let maturity = result.maturity.rank;
    let ai = result.ai_usage.rank;

    if maturity <= 2 && result.bottleneck == Bottleneck::Start {
        return Diagnosis {
            headline: "You know why you want to record; the sessions just never begin. The \
                blocker is the first minute, not the system."
                .to_string(),
            actions: vec![
                "Anchor one note to an existing routine: one line right after morning coffee."
                    .to_string(),
                "Delete every template. A blank line is the whole setup for now.".to_string(),
            ],
        };
    }

    if maturity <= 2 {
        return Diagnosis {
            headline: "The recording habit is still forming, so every downstream gain is \
                waiting on consistency."
                .to_string(),
            actions: vec![
                "Write one line a day for two weeks before changing anything else.".to_string(),
                "Keep a single inbox; choosing where things go can wait.".to_string(),
            ],
        };
    }

    if ai <= 1 && maturity >= 4 {
        return Diagnosis {
            headline: "Your recording system runs well, and AI is the one lever you have not \
                pulled. Your notes are exactly the context AI works best with."
                .to_string(),
            actions: vec![
                "Paste one finished note into an AI and ask for counter-arguments.".to_string(),
                "Try one AI-assisted summary of your weekly review.".to_string(),
            ],
        };
    }

    if result.bottleneck == Bottleneck::Apply && maturity >= 3 {
        return Diagnosis {
            headline: "Capture and organization hold up; application is the wall. The archive \
                is richer than what ever leaves it."
                .to_string(),
            actions: vec![
                "Pick one note each week and turn it into a post, a doc, or a decision."
                    .to_string(),
                "Add a 'where could this be used?' line to your note template.".to_string(),
                "Close each week by shipping one thing sourced from your notes.".to_string(),
            ],
        };
    }

    if result.primary_style == RecordingStyle::Architect
        && result.bottleneck == Bottleneck::Organize
    {
        return Diagnosis {
            headline: "A structure-first recorder bottlenecked on organizing usually means the \
                system has outgrown its upkeep."
                .to_string(),
            actions: vec![
                "Flatten the hierarchy to three levels and archive the rest.".to_string(),
                "Let search replace filing for one week and note what breaks.".to_string(),
            ],
        };
    }

    if ai >= 4 {
        return Diagnosis {
            headline: "Notes and AI are already wired together. The next multiplier is teaching \
                the workflow, not refining it."
                .to_string(),
            actions: vec![
                "Document your note-to-AI pipeline as a shareable walkthrough.".to_string(),
                "Watch for AI drafts shipping unedited; keep your judgment in the loop."
                    .to_string(),
            ],
        };
    }

    Diagnosis {
        headline: format!(
            "A steady recording practice with room to compound. Lean on your {} strengths and \
             close the loop between capture and use.",
            result.primary_style.label().to_lowercase()
        ),
        actions: vec![
            "Schedule one weekly review slot and protect it.".to_string(),
            "Feed one real note into an AI session this week and compare the output.".to_string(),
        ],
    }
}
