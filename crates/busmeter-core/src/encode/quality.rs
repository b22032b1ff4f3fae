//! Quality levels for lossy encoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A tenths value outside `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Quality must be between 1 and 10 tenths, got {0}")]
pub struct QualityOutOfRange(pub u8);

/// A lossy-encoder fidelity level in (0, 1], held as whole tenths.
///
/// Holding tenths instead of a float keeps the search ladder exact:
/// stepping down from 0.9 by 0.1 visits 0.9, 0.8, ..., 0.2 and nothing else.
/// Serializes as the tenths integer; deserialization rejects values outside
/// `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct QualityLevel(u8);

impl QualityLevel {
    /// Full fidelity (1.0).
    pub const MAX: QualityLevel = QualityLevel(10);

    /// First level tried by the size search (0.9).
    pub const SEARCH_START: QualityLevel = QualityLevel(9);

    /// Last level tried by the size search (0.2). The search keeps going
    /// only while the level is strictly above 0.1, so 0.1 is never encoded.
    pub const SEARCH_FLOOR: QualityLevel = QualityLevel(2);

    /// Build a level from tenths; `None` outside `1..=10`.
    pub fn from_tenths(tenths: u8) -> Option<Self> {
        (1..=10).contains(&tenths).then_some(QualityLevel(tenths))
    }

    pub fn tenths(self) -> u8 {
        self.0
    }

    /// The level as a fraction in (0, 1].
    pub fn as_f32(self) -> f32 {
        self.0 as f32 / 10.0
    }

    /// The level on the 1-100 scale JPEG encoders take.
    pub fn jpeg_quality(self) -> u8 {
        self.0 * 10
    }

    /// Levels visited by the size search, highest first.
    pub fn search_ladder() -> impl DoubleEndedIterator<Item = QualityLevel> + ExactSizeIterator {
        (Self::SEARCH_FLOOR.0..=Self::SEARCH_START.0)
            .rev()
            .map(QualityLevel)
    }
}

impl TryFrom<u8> for QualityLevel {
    type Error = QualityOutOfRange;

    fn try_from(tenths: u8) -> Result<Self, Self::Error> {
        Self::from_tenths(tenths).ok_or(QualityOutOfRange(tenths))
    }
}

impl From<QualityLevel> for u8 {
    fn from(quality: QualityLevel) -> u8 {
        quality.0
    }
}

impl Default for QualityLevel {
    fn default() -> Self {
        Self::SEARCH_START
    }
}

impl std::fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}
