//! Scoring primitives shared by both quiz variants.

pub mod bank;
pub mod codec;
pub mod levels;

/// Normalizes a raw score against a theoretical maximum into 0..=100.
///
/// A zero maximum yields 0 rather than dividing by zero; a category with no
/// questions simply reports an empty bar.
pub fn percent(raw: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let pct = (raw as f64 / max as f64) * 100.0;
    pct.round().clamp(0.0, 100.0) as u8
}

/// Primary and optional secondary tag after ranking by occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRank<T> {
    pub primary: T,
    pub secondary: Option<T>,
}

/// Ranks tags by descending count with a deterministic tie-break: the tag
/// declared earlier wins. The secondary slot is filled only when its count is
/// strictly positive, so an empty answer sequence degenerates to the first
/// declared tag with no secondary.
///
/// `counts` must be in enum declaration order. Callers pass the fixed arrays
/// produced by the domain enums' `ordered()` helpers, which are never empty.
pub fn rank_tags<T: Copy, const N: usize>(counts: &[(T, u32); N]) -> TagRank<T> {
    let mut primary = 0;
    for i in 1..N {
        if counts[i].1 > counts[primary].1 {
            primary = i;
        }
    }

    let mut runner_up: Option<usize> = None;
    for (i, entry) in counts.iter().enumerate() {
        if i == primary {
            continue;
        }
        let better = match runner_up {
            Some(current) => entry.1 > counts[current].1,
            None => true,
        };
        if better {
            runner_up = Some(i);
        }
    }

    TagRank {
        primary: counts[primary].0,
        secondary: runner_up
            .filter(|&i| counts[i].1 > 0)
            .map(|i| counts[i].0),
    }
}
