//! Hit dice.
//!
//! Classes roll one of four die sizes for hit points. The rules engine never
//! rolls them; it only needs the maximum face for first-level hit points and
//! the fixed average taken on later levels.

use serde::{Deserialize, Serialize};

/// A class hit die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitDie {
    /// Six-sided die.
    D6,
    /// Eight-sided die. Used for unrecognised classes.
    #[default]
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
}

impl HitDie {
    /// Returns the number of sides on this die, which is also its maximum face.
    pub fn sides(self) -> i32 {
        match self {
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
        }
    }

    /// Fixed per-level average: half the sides plus one (4, 5, 6, 7).
    pub fn average(self) -> i32 {
        self.sides() / 2 + 1
    }
}

impl std::fmt::Display for HitDie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
