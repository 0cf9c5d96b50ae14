//! Discrete level tables: ordered inclusive ranges over raw scores.

/// Inclusive `[min, max]` raw-score range resolving to a level payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelBand<L> {
    pub level: L,
    pub min: u32,
    pub max: u32,
}

impl<L> LevelBand<L> {
    pub const fn new(level: L, min: u32, max: u32) -> Self {
        Self { level, min, max }
    }

    pub fn contains(&self, raw: u32) -> bool {
        raw >= self.min && raw <= self.max
    }
}

/// Structural defects in a level table, caught at bank load rather than at
/// scoring time.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LevelTableError {
    #[error("level table is empty")]
    Empty,
    #[error("level table starts at {0}, expected 0")]
    StartsAbove(u32),
    #[error("band range is inverted: {min}..={max}")]
    Inverted { min: u32, max: u32 },
    #[error("band starts at {found}, expected {expected} (gap or overlap)")]
    Discontinuous { expected: u32, found: u32 },
    #[error("level table ends at {found}, expected {expected}")]
    WrongCeiling { expected: u32, found: u32 },
}

/// Checks that the table covers `0..=max_raw` with contiguous,
/// non-overlapping bands, so every achievable raw score maps to exactly one
/// level.
pub fn validate<L>(bands: &[LevelBand<L>], max_raw: u32) -> Result<(), LevelTableError> {
    let first = bands.first().ok_or(LevelTableError::Empty)?;
    if first.min != 0 {
        return Err(LevelTableError::StartsAbove(first.min));
    }

    let mut expected_min = 0;
    let mut ceiling = 0;
    for band in bands {
        if band.min > band.max {
            return Err(LevelTableError::Inverted {
                min: band.min,
                max: band.max,
            });
        }
        if band.min != expected_min {
            return Err(LevelTableError::Discontinuous {
                expected: expected_min,
                found: band.min,
            });
        }
        expected_min = band.max + 1;
        ceiling = band.max;
    }

    if ceiling != max_raw {
        return Err(LevelTableError::WrongCeiling {
            expected: max_raw,
            found: ceiling,
        });
    }

    Ok(())
}

/// Resolves a raw score against the table, first matching band wins.
///
/// Tables are validated exhaustive at bank load; the fallback to the first
/// band only guards against raw scores outside the validated range.
pub fn resolve<L>(bands: &[LevelBand<L>], raw: u32) -> &LevelBand<L> {
    debug_assert!(!bands.is_empty(), "level tables are validated non-empty");
    bands
        .iter()
        .find(|band| band.contains(raw))
        .unwrap_or(&bands[0])
}
