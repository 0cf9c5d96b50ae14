//! Static question data for the AI usage quiz: 20 questions interleaving the
//! four categories (6 usage, 5 prompt, 5 integration, 4 output).
//!
//! Choice order is shuffled relative to score order on purpose; the letter
//! codec depends on position, scoring reads only the score field.

use super::domain::{AiCategory, Choice, Question};

use AiCategory as Cat;

pub(super) fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            category: Cat::Usage,
            prompt: "How often do you use AI tools?",
            choices: [
                Choice::new("Once or twice a week", 1),
                Choice::new("Almost every day", 2),
                Choice::new("Hardly ever", 0),
                Choice::new("Several times a day", 3),
            ],
        },
        Question {
            category: Cat::Prompt,
            prompt: "How do you usually phrase a request to an AI?",
            choices: [
                Choice::new("A single short line", 0),
                Choice::new("System prompt plus examples plus output format", 3),
                Choice::new("The question with a quick bit of background", 1),
                Choice::new("Assign a role, set conditions, request a format", 2),
            ],
        },
        Question {
            category: Cat::Integration,
            prompt: "Do you hand the AI your own notes along with the question?",
            choices: [
                Choice::new("Often; my notes go in as context", 2),
                Choice::new("Occasionally I paste something relevant in", 1),
                Choice::new("My notes are wired in as the AI's default context", 3),
                Choice::new("Never have", 0),
            ],
        },
        Question {
            category: Cat::Output,
            prompt: "Have you ever used AI-written text as-is?",
            choices: [
                Choice::new("I mostly use it unchanged", 0),
                Choice::new("I keep the structure and rewrite the rest", 2),
                Choice::new("I rebuild the draft entirely around my own take", 3),
                Choice::new("I tweak it lightly and use it", 1),
            ],
        },
        Question {
            category: Cat::Usage,
            prompt: "How many AI tools do you currently use?",
            choices: [
                Choice::new("A different tool for each purpose", 3),
                Choice::new("Two or three", 1),
                Choice::new("None, or just one", 0),
                Choice::new("Four or more", 2),
            ],
        },
        Question {
            category: Cat::Prompt,
            prompt: "Asking for a summary, how do you usually put it?",
            choices: [
                Choice::new("\"Summarize this in three lines\"", 1),
                Choice::new("Just \"summarize this\"", 0),
                Choice::new("\"Three lines, bullet points, key arguments only\"", 2),
                Choice::new(
                    "\"I'm reporting to my manager: key figures and action items, 200 characters\"",
                    3,
                ),
            ],
        },
        Question {
            category: Cat::Integration,
            prompt: "Where does AI-generated output end up?",
            choices: [
                Choice::new("It stays in the chat window", 1),
                Choice::new("Filed into my note system under the right topic", 3),
                Choice::new("I don't save it", 0),
                Choice::new("Copied out into a note somewhere", 2),
            ],
        },
        Question {
            category: Cat::Output,
            prompt: "After using AI, does the result feel like yours?",
            choices: [
                Choice::new("I edited it, so it's mine", 2),
                Choice::new("Never thought about it", 0),
                Choice::new("AI is a tool; the judgment and direction are mine", 3),
                Choice::new("Honestly it feels like the AI's work, not mine", 1),
            ],
        },
        Question {
            category: Cat::Usage,
            prompt: "Where do you lean on AI the most?",
            choices: [
                Choice::new("Writing and translation", 1),
                Choice::new("Developing ideas and weighing decisions", 3),
                Choice::new("Looking things up", 0),
                Choice::new("Automating and analyzing work", 2),
            ],
        },
        Question {
            category: Cat::Prompt,
            prompt: "Do you save the prompts you use often?",
            choices: [
                Choice::new("Templated and reused", 3),
                Choice::new("No, never", 0),
                Choice::new("I copy one now and then", 1),
                Choice::new("Collected in a notes page", 2),
            ],
        },
        Question {
            category: Cat::Integration,
            prompt: "Ever wished the AI simply knew you better?",
            choices: [
                Choice::new("I've connected my notes and profile to the AI", 3),
                Choice::new("Never thought about it", 0),
                Choice::new("The thought crosses my mind sometimes", 1),
                Choice::new("That's why I explain my background every time", 2),
            ],
        },
        Question {
            category: Cat::Output,
            prompt: "Have you made content (posts, reports, decks) from AI output?",
            choices: [
                Choice::new("Often; it's part of my work", 2),
                Choice::new("No", 0),
                Choice::new("AI is a stage in my content pipeline", 3),
                Choice::new("Once in a while", 1),
            ],
        },
        Question {
            category: Cat::Usage,
            prompt: "When an AI result disappoints, you...",
            choices: [
                Choice::new("Give feedback and keep the conversation going", 3),
                Choice::new("Ask it something else", 0),
                Choice::new("Repeat the same question", 1),
                Choice::new("Change the conditions and run it again", 2),
            ],
        },
        Question {
            category: Cat::Prompt,
            prompt: "When the answer feels off, what do you do?",
            choices: [
                Choice::new("Rephrase the question", 1),
                Choice::new("Work out why it missed and improve the prompt", 3),
                Choice::new("Give up and do it myself", 0),
                Choice::new("Ask for a targeted fix: \"change this part to...\"", 2),
            ],
        },
        Question {
            category: Cat::Integration,
            prompt: "Have you gone back to an old AI conversation?",
            choices: [
                Choice::new("Sometimes I dig one up to refer to", 2),
                Choice::new("No", 0),
                Choice::new("Tried to, couldn't find it", 1),
                Choice::new("Important ones get written up separately", 3),
            ],
        },
        Question {
            category: Cat::Output,
            prompt: "Which line rings truest?",
            choices: [
                Choice::new("\"AI is convenient but still just an assistant\"", 1),
                Choice::new("\"AI has changed how I work\"", 2),
                Choice::new("\"I couldn't go back to working without AI\"", 3),
                Choice::new("\"I still don't really know what AI can do\"", 0),
            ],
        },
        Question {
            category: Cat::Usage,
            prompt: "If AI disappeared tomorrow, how would that feel?",
            choices: [
                Choice::new("Wouldn't really matter", 0),
                Choice::new("My work would grind to a halt", 3),
                Choice::new("A bit inconvenient", 1),
                Choice::new("Genuinely awkward", 2),
            ],
        },
        Question {
            category: Cat::Prompt,
            prompt: "When you see someone else's prompt tips, you...",
            choices: [
                Choice::new("Try them as-is", 2),
                Choice::new("Adapt them to my own situation", 3),
                Choice::new("Not interested", 0),
                Choice::new("Read them and move on", 1),
            ],
        },
        Question {
            category: Cat::Integration,
            prompt: "\"Good records make AI more useful.\" Agree?",
            choices: [
                Choice::new("Agree, though I'm not living it yet", 2),
                Choice::new("Agree, and that's how I actually work", 3),
                Choice::new("Not sure what that means", 0),
                Choice::new("I suppose that might be true", 1),
            ],
        },
        Question {
            category: Cat::Usage,
            prompt: "A new AI tool launches. You...",
            choices: [
                Choice::new("Read the news coverage", 1),
                Choice::new("Test whether it fits into my existing workflow", 3),
                Choice::new("Not interested", 0),
                Choice::new("Try it out myself", 2),
            ],
        },
    ]
}
