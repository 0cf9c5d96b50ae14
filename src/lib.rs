//! Deterministic core for the "recording DNA" quizzes: question banks, the
//! answer-letter share codec, scoring and classification, result catalogs,
//! and the lead-capture plumbing around them.
//!
//! Everything derivable is derived: results are recomputed from an answer
//! sheet (or a decoded share code) on every access and never stored.

pub mod config;
pub mod engine;
pub mod flow;
pub mod leads;
pub mod quiz;
pub mod share;
pub mod telemetry;
