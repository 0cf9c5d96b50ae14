//! The "AI usage level" quiz: one additive score with a discrete level, plus
//! four category read-outs with their own label vocabularies.

pub mod catalog;
pub mod domain;
pub mod insights;
pub mod scoring;

mod bank;

pub use domain::{AiCategory, AiLevel, Choice, Question, QuestionBank};
pub use scoring::{score, AiResult, CategoryLabels, CategoryPercents, CategoryScores};
