//! The two quiz variants sharing the engine primitives.

pub mod ai;
pub mod pkm;
