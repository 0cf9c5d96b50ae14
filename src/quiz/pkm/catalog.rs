//! Static result metadata: style profiles, discrete level tables, and the
//! primary x secondary combination read-outs. Lookup only; the documented
//! fallbacks are the sole logic here.

use serde::Serialize;

use crate::engine::levels::LevelBand;

use super::domain::RecordingStyle;

/// Discrete habit level resolved from a raw category score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HabitLevel {
    pub rank: u8,
    pub label: &'static str,
    pub description: &'static str,
}

/// Recording maturity, five levels over a raw score of 0..=12.
pub(super) const MATURITY_LEVELS: [LevelBand<HabitLevel>; 5] = [
    LevelBand::new(
        HabitLevel {
            rank: 1,
            label: "Spark",
            description: "Recording is still an intention. The wish is there; the habit is not.",
        },
        0,
        2,
    ),
    LevelBand::new(
        HabitLevel {
            rank: 2,
            label: "Starter",
            description: "Notes happen in bursts. A big moment gets captured, quiet weeks pass in silence.",
        },
        3,
        5,
    ),
    LevelBand::new(
        HabitLevel {
            rank: 3,
            label: "Regular",
            description: "Writing things down is routine, but notes are rarely revisited once made.",
        },
        6,
        8,
    ),
    LevelBand::new(
        HabitLevel {
            rank: 4,
            label: "Operator",
            description: "Capture and review both run; notes reliably resurface when work needs them.",
        },
        9,
        10,
    ),
    LevelBand::new(
        HabitLevel {
            rank: 5,
            label: "System builder",
            description: "Recording is a working system that feeds projects and output on its own.",
        },
        11,
        12,
    ),
];

/// AI usage within the recording workflow, four levels over 0..=12.
pub(super) const AI_USAGE_LEVELS: [LevelBand<HabitLevel>; 4] = [
    LevelBand::new(
        HabitLevel {
            rank: 1,
            label: "Bystander",
            description: "AI is something read about, not yet part of how notes get made or used.",
        },
        0,
        3,
    ),
    LevelBand::new(
        HabitLevel {
            rank: 2,
            label: "Dabbler",
            description: "An occasional question to a chatbot, mostly as a search replacement.",
        },
        4,
        6,
    ),
    LevelBand::new(
        HabitLevel {
            rank: 3,
            label: "Adopter",
            description: "AI shows up in real work, though each session starts from a blank context.",
        },
        7,
        9,
    ),
    LevelBand::new(
        HabitLevel {
            rank: 4,
            label: "Integrator",
            description: "Notes and AI are wired together; context goes in, results come back out.",
        },
        10,
        12,
    ),
];

/// Display metadata for one recording style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleProfile {
    pub style: RecordingStyle,
    pub emoji: &'static str,
    pub name: &'static str,
    pub nickname: &'static str,
    pub description: &'static str,
    pub strength: &'static str,
    pub weakness: &'static str,
    pub growth: &'static str,
    pub tools: &'static str,
    pub quote: &'static str,
    pub color: &'static str,
}

const ARCHITECT: StyleProfile = StyleProfile {
    style: RecordingStyle::Architect,
    emoji: "\u{1f3d7}\u{fe0f}",
    name: "Architect",
    nickname: "Draws the blueprint first",
    description: "You build the folder structure before the first note exists. A system has to be \
        in place before you can relax, and you excel at sorting information logically so anything \
        can be found fast.",
    strength: "Systematic and quick to search. Anyone can see the order in it.",
    weakness: "Sometimes the structure gets built and the notes never do.",
    growth: "Lay down 70% of the structure and let the rest emerge from actual use.",
    tools: "Notion, Capacities",
    quote: "A system that gets used beats a perfect one.",
    color: "#3b82f6",
};

const GARDENER: StyleProfile = StyleProfile {
    style: RecordingStyle::Gardener,
    emoji: "\u{1f331}",
    name: "Gardener",
    nickname: "Plants seeds and waits",
    description: "You scatter notes and wait for connections to grow. You know the feeling of an \
        idea erupting from an unexpected corner, and you are strongest at free-form thinking and \
        creative linking.",
    strength: "Ideas spark from connections nobody planned.",
    weakness: "Sometimes even you don't know where you wrote something.",
    growth: "Schedule a weekly 'garden walk' to review what has sprouted.",
    tools: "Obsidian, Logseq",
    quote: "The seeds are planted; water them now and then and they grow.",
    color: "#22c55e",
};

const STUDENT: StyleProfile = StyleProfile {
    style: RecordingStyle::Student,
    emoji: "\u{1f4da}",
    name: "Student",
    nickname: "Can't move on without understanding",
    description: "Nothing feels finished until you have digested it and restated it in your own \
        words. You believe real learning means deep processing, and the quality of your input \
        shows it.",
    strength: "Deeply internalized knowledge. What you've processed is truly yours.",
    weakness: "Output can lag far behind the volume of input.",
    growth: "Swap the 'perfect summary' for a three-line core to pick up speed.",
    tools: "Notion, Readwise",
    quote: "Organizing matters, but using it is the real studying.",
    color: "#a855f7",
};

const LIBRARIAN: StyleProfile = StyleProfile {
    style: RecordingStyle::Librarian,
    emoji: "\u{1f4d6}",
    name: "Librarian",
    nickname: "Saves first, asks later",
    description: "Anything good gets collected on sight. You can hand over exactly the right \
        reference at exactly the right moment, because you are sitting on a treasure vault of \
        saved material.",
    strength: "Finds and serves the right material fast.",
    weakness: "Risk of saving things that are never opened again.",
    growth: "Attach a one-line 'why I saved this' to everything you collect.",
    tools: "Raindrop, Pocket, Tana",
    quote: "Saving is only the start; it becomes yours when you pull it back out.",
    color: "#f59e0b",
};

pub fn style_profile(style: RecordingStyle) -> &'static StyleProfile {
    match style {
        RecordingStyle::Architect => &ARCHITECT,
        RecordingStyle::Gardener => &GARDENER,
        RecordingStyle::Student => &STUDENT,
        RecordingStyle::Librarian => &LIBRARIAN,
    }
}

/// Blended description for a primary x secondary style pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CombinationProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub tip: &'static str,
}

const SOLO_ARCHITECT: CombinationProfile = CombinationProfile {
    title: "Pure Architect",
    description: "Structure above everything. Classification is how you think, and without a \
        system you feel adrift.",
    tip: "There is no perfect system. Deliberately practice 70% structure, 30% slack.",
};

const SOLO_GARDENER: CombinationProfile = CombinationProfile {
    title: "Pure Gardener",
    description: "Fully free-association. You love chance encounters between notes and resent \
        anything that fences them in.",
    tip: "Keep one minimal inbox. Stay free, but give the notes a place they can't scatter from.",
};

const SOLO_STUDENT: CombinationProfile = CombinationProfile {
    title: "Pure Student",
    description: "Immersed in learning itself. You never skip past something you don't \
        understand, and it isn't done until it's restated in your own words.",
    tip: "Write one paragraph about anything you learn within 48 hours. Waiting for the perfect \
        summary leaves nothing behind.",
};

const SOLO_LIBRARIAN: CombinationProfile = CombinationProfile {
    title: "Pure Librarian",
    description: "A master collector with a sharp eye for good material, able to produce the \
        exact right reference for whoever needs it.",
    tip: "Take one saved item this week and rewrite it in your own words. Watch collection turn \
        into learning.",
};

fn solo(style: RecordingStyle) -> &'static CombinationProfile {
    match style {
        RecordingStyle::Architect => &SOLO_ARCHITECT,
        RecordingStyle::Gardener => &SOLO_GARDENER,
        RecordingStyle::Student => &SOLO_STUDENT,
        RecordingStyle::Librarian => &SOLO_LIBRARIAN,
    }
}

/// Resolves the blended description for a primary/secondary pair. A missing
/// or identical secondary falls back to the primary's solo profile.
pub fn combination(
    primary: RecordingStyle,
    secondary: Option<RecordingStyle>,
) -> &'static CombinationProfile {
    use RecordingStyle::*;

    let Some(secondary) = secondary else {
        return solo(primary);
    };

    match (primary, secondary) {
        (Architect, Gardener) => &CombinationProfile {
            title: "Gardener Inside the Grid",
            description: "You enjoy ideas connecting freely inside a deliberate frame: the \
                folders are planned, the links inside them are not.",
            tip: "Maps of Content fit you best. Design the big shapes, leave the note-to-note \
                links wild.",
        },
        (Architect, Student) => &CombinationProfile {
            title: "Learning Designer",
            description: "You are excellent at classifying and structuring what you learn; your \
                course and reading notes are almost certainly immaculate.",
            tip: "Roll your notes up into topic hub pages and the material becomes a body of \
                knowledge.",
        },
        (Architect, Librarian) => &CombinationProfile {
            title: "Archive Craftsman",
            description: "You classify collected material flawlessly, with tags, folders, and \
                properties that surface any item instantly.",
            tip: "Watch for over-classification. Keep the hierarchy within three levels and lean \
                on search sometimes.",
        },
        (Gardener, Architect) => &CombinationProfile {
            title: "Free-Range Designer",
            description: "You scatter ideas freely but step back to impose shape now and then, \
                walking the line between creativity and order.",
            tip: "Hold a monthly 'structure day': write freely all month, tidy once.",
        },
        (Gardener, Student) => &CombinationProfile {
            title: "Inquisitive Gardener",
            description: "You leave notes wherever curiosity takes you, and deep learning grows \
                out of the trail. Lessons connect themselves.",
            tip: "Try evergreen notes: grow short notes gradually into one finished thought.",
        },
        (Gardener, Librarian) => &CombinationProfile {
            title: "Collecting Explorer",
            description: "You gather whatever looks interesting and later stumble onto \
                connections nobody expected. A rich source of inspiration.",
            tip: "Keep a single inbox and toss everything in. Skim it weekly hunting for links \
                and the loop closes.",
        },
        (Student, Architect) => &CombinationProfile {
            title: "Systematic Learner",
            description: "You store what you learn in structured form and see the whole \
                curriculum clearly enough to design one yourself.",
            tip: "Rewrite what you learned as if teaching someone. Output jumps immediately.",
        },
        (Student, Gardener) => &CombinationProfile {
            title: "Discovering Learner",
            description: "You love the moment study produces an unexpected connection; learning \
                is creative linking, not memorization.",
            tip: "Add one line to every study note: 'this connects to ___'.",
        },
        (Student, Librarian) => &CombinationProfile {
            title: "Scholarly Collector",
            description: "You gather good material and spare no time digesting it. Both the \
                volume and the quality of your input run high.",
            tip: "Pick just three saved items to digest this week. Input converts to output \
                faster.",
        },
        (Librarian, Architect) => &CombinationProfile {
            title: "Organizing Collector",
            description: "Filing what you've gathered is genuinely satisfying, and your digital \
                library is tidier than anyone's.",
            tip: "One habit is enough: a one-line note at save time becomes the decisive search \
                clue later.",
        },
        (Librarian, Gardener) => &CombinationProfile {
            title: "Collector of Sparks",
            description: "You pull material from everywhere and find unplanned ideas in between. \
                References become seeds of creation.",
            tip: "Once a week, lay out recent finds and ask: what if I connected two of these?",
        },
        (Librarian, Student) => &CombinationProfile {
            title: "Head of the Library",
            description: "You don't stop at collecting; the important finds get studied in \
                depth. Breadth and depth in balance.",
            tip: "Shift the collect-to-digest ratio from 7:3 toward 5:5 and the archive's value \
                multiplies.",
        },
        // Same style twice carries no extra signal: solo profile.
        (p, _) => solo(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::levels;

    #[test]
    fn maturity_table_covers_raw_range() {
        assert_eq!(levels::validate(&MATURITY_LEVELS, 12), Ok(()));
        assert_eq!(levels::resolve(&MATURITY_LEVELS, 0).level.rank, 1);
        assert_eq!(levels::resolve(&MATURITY_LEVELS, 12).level.rank, 5);
    }

    #[test]
    fn ai_usage_table_covers_raw_range() {
        assert_eq!(levels::validate(&AI_USAGE_LEVELS, 12), Ok(()));
        assert_eq!(levels::resolve(&AI_USAGE_LEVELS, 7).level.rank, 3);
    }

    #[test]
    fn same_style_pair_falls_back_to_solo() {
        let blended = combination(RecordingStyle::Gardener, Some(RecordingStyle::Gardener));
        assert_eq!(blended.title, "Pure Gardener");
    }

    #[test]
    fn missing_secondary_falls_back_to_solo() {
        let blended = combination(RecordingStyle::Student, None);
        assert_eq!(blended.title, "Pure Student");
    }

    #[test]
    fn every_distinct_pair_has_a_blend() {
        for primary in RecordingStyle::ordered() {
            for secondary in RecordingStyle::ordered() {
                if primary == secondary {
                    continue;
                }
                let blended = combination(primary, Some(secondary));
                assert!(!blended.title.starts_with("Pure"), "{primary:?}x{secondary:?}");
            }
        }
    }
}
