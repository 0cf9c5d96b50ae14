//! The "recording DNA" quiz: recording-style typing plus maturity, AI-usage,
//! output-style, and bottleneck read-outs from one combined question bank.

pub mod catalog;
pub mod domain;
pub mod insights;
pub mod scoring;

mod bank;

pub use domain::{Bottleneck, Choice, OutputStyle, Question, QuestionBank, QuestionCategory, RecordingStyle};
pub use scoring::{score, QuizResult, RadarScores, StyleCounts};
