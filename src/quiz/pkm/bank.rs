//! Static question data for the recording DNA quiz.
//!
//! Choice order is deliberately shuffled relative to score/tag order; the
//! codec depends on position, the scoring passes do not.

use super::domain::{Bottleneck, Choice, OutputStyle, Question, QuestionCategory, RecordingStyle};

use Bottleneck as B;
use OutputStyle as O;
use QuestionCategory as Cat;
use RecordingStyle as S;

fn style_questions() -> Vec<Question> {
    vec![
        Question {
            category: Cat::Style,
            prompt: "You just installed a new notes app.\nWhat do you do first?",
            choices: [
                Choice::styled("Build the folder and category structure", S::Architect),
                Choice::styled("Open any page and write whatever comes to mind", S::Gardener),
                Choice::styled("Go through the tutorial first", S::Student),
                Choice::styled("Start migrating everything from the old app", S::Librarian),
            ],
        },
        Question {
            category: Cat::Style,
            prompt: "You found a great video.\nYour reaction?",
            choices: [
                Choice::styled("File it into a playlist by topic", S::Architect),
                Choice::styled("Jot down the one line that struck you", S::Gardener),
                Choice::styled("Write a summary of the whole thing", S::Student),
                Choice::styled("Save it to \"watch later\"", S::Librarian),
            ],
        },
        Question {
            category: Cat::Style,
            prompt: "Your notes just passed one hundred.\nFirst thought?",
            choices: [
                Choice::styled("Time to overhaul the tags", S::Architect),
                Choice::styled("Which of these connect to each other?", S::Gardener),
                Choice::styled("I should reread them and keep only the essentials", S::Student),
                Choice::styled("They're safely collected; I'll search when I need one", S::Librarian),
            ],
        },
        Question {
            category: Cat::Style,
            prompt: "A friend asks, \"where did you see that?\"\nYou...",
            choices: [
                Choice::styled("Give the exact folder path", S::Architect),
                Choice::styled("It surfaced while I was linking things... where was it?", S::Gardener),
                Choice::styled("Share the summary note you wrote yourself", S::Student),
                Choice::styled("Pull it straight out of your bookmarks", S::Librarian),
            ],
        },
        Question {
            category: Cat::Style,
            prompt: "If someone browsed your notes,\nwhat would they say?",
            choices: [
                Choice::styled("\"Wow, this is systematic\"", S::Architect),
                Choice::styled("\"All of this actually connects?\"", S::Gardener),
                Choice::styled("\"That is a lot of reading notes\"", S::Student),
                Choice::styled("\"It's a link collection\"", S::Librarian),
            ],
        },
        Question {
            category: Cat::Style,
            prompt: "Starting a new project,\nyour style is to...",
            choices: [
                Choice::styled("Design the overall structure and stages first", S::Architect),
                Choice::styled("Brain-dump every related idea freely", S::Gardener),
                Choice::styled("Study similar cases and references first", S::Student),
                Choice::styled("Gather usable materials and templates first", S::Librarian),
            ],
        },
        Question {
            category: Cat::Style,
            prompt: "Which line resonates most?",
            choices: [
                Choice::styled("Without a system I feel uneasy", S::Architect),
                Choice::styled("The moment things connect is the best part", S::Gardener),
                Choice::styled("I can't move on until I understand it", S::Student),
                Choice::styled("If it's good, save it first and sort it out later", S::Librarian),
            ],
        },
    ]
}

pub(super) fn standard_questions() -> Vec<Question> {
    let mut questions = style_questions();

    questions.extend([
        // Maturity: habit strength, scored 0-3. Low-score choices double as
        // bottleneck signals.
        Question {
            category: Cat::Maturity,
            prompt: "How often do you actually write something down?",
            choices: [
                Choice::scored("A few times a week", 2),
                Choice::scored_with_bottleneck("Almost never", 0, B::Start),
                Choice::scored("Every day, almost without thinking", 3),
                Choice::scored_with_bottleneck("Only when something big happens", 1, B::Sustain),
            ],
        },
        Question {
            category: Cat::Maturity,
            prompt: "How often do you reread old notes?",
            choices: [
                Choice::scored("Never; writing them is where it ends", 0),
                Choice::scored("A weekly review is part of my routine", 3),
                Choice::scored("Only when I happen to need something", 1),
                Choice::scored("Most weeks I at least skim recent ones", 2),
            ],
        },
        Question {
            category: Cat::Maturity,
            prompt: "Could you find a note you made three months ago?",
            choices: [
                Choice::scored("In under a minute", 3),
                Choice::scored_with_bottleneck("Probably, after some digging", 2, B::Organize),
                Choice::scored("Unlikely; I'd search my memory instead", 1),
                Choice::scored("It's effectively gone", 0),
            ],
        },
        Question {
            category: Cat::Maturity,
            prompt: "How often does a note turn into something you make or do?",
            choices: [
                Choice::scored_with_bottleneck("Rarely; they just accumulate", 1, B::Apply),
                Choice::scored("Never thought about it", 0),
                Choice::scored("Regularly; notes feed my projects", 3),
                Choice::scored("Sometimes, when a deadline forces it", 2),
            ],
        },
        // AI usage, scored 0-3.
        Question {
            category: Cat::AiUsage,
            prompt: "How often do you use AI tools?",
            choices: [
                Choice::scored("Hardly ever", 0),
                Choice::scored("Once or twice a week", 1),
                Choice::scored("Almost daily", 2),
                Choice::scored("Several times a day", 3),
            ],
        },
        Question {
            category: Cat::AiUsage,
            prompt: "When you ask an AI for something, you usually...",
            choices: [
                Choice::scored("Type a single short line", 0),
                Choice::scored("Give system prompt, examples, and output format", 3),
                Choice::scored("Add the question plus some background", 1),
                Choice::scored("Specify a role, conditions, and format", 2),
            ],
        },
        Question {
            category: Cat::AiUsage,
            prompt: "Do you hand the AI your own notes as context?",
            choices: [
                Choice::scored("Often; my notes go in as context", 2),
                Choice::scored("Occasionally I paste something relevant", 1),
                Choice::scored("My notes are wired in as default context", 3),
                Choice::scored("Never", 0),
            ],
        },
        Question {
            category: Cat::AiUsage,
            prompt: "What happens to AI output you like?",
            choices: [
                Choice::scored("It stays in the chat window", 1),
                Choice::scored("I don't keep it", 0),
                Choice::scored("Copied into a quick note", 2),
                Choice::scored("Filed into my note system", 3),
            ],
        },
        // Output style.
        Question {
            category: Cat::Output,
            prompt: "You finished a genuinely good note.\nWhat happens to it?",
            choices: [
                Choice::output("It stays with me; writing it was the point", O::Inner),
                Choice::output("It becomes a post or newsletter draft", O::Sharer),
                Choice::output("It goes straight into a work document", O::Practical),
                Choice::output("Depends; some stay private, some ship", O::Hybrid),
            ],
        },
        // Bottleneck.
        Question {
            category: Cat::Bottleneck,
            prompt: "Which of these sounds most like you?",
            choices: [
                Choice::bottleneck("I keep meaning to start a note habit", B::Start),
                Choice::bottleneck("I start strong and fizzle within weeks", B::Sustain),
                Choice::bottleneck("I write plenty, but it's a mess", B::Organize),
                Choice::bottleneck("Everything is organized, yet nothing gets used", B::Apply),
            ],
        },
    ]);

    questions
}

pub(super) fn classic_questions() -> Vec<Question> {
    style_questions()
}
