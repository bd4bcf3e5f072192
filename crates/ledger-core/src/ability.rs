//! The six abilities and a character's scores in them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Score every ability starts at when nothing else is known.
pub const DEFAULT_SCORE: i32 = 10;

/// One of the six core attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    /// Physical power.
    Strength,
    /// Agility and reflexes.
    Dexterity,
    /// Health and stamina.
    Constitution,
    /// Reasoning and memory.
    Intelligence,
    /// Perception and insight.
    Wisdom,
    /// Force of personality.
    Charisma,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Lowercase canonical name (e.g. `"dexterity"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    /// Parse an ability name, ignoring case. Anything else, including
    /// surrounding whitespace, is rejected.
    pub fn parse(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL.into_iter().find(|a| a.as_str() == lower)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ability {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::UnknownAbility(s.to_string()))
    }
}

fn default_score() -> i32 {
    DEFAULT_SCORE
}

/// Raw scores for all six abilities.
///
/// Every ability is always present. Missing entries in serialized input
/// fall back to [`DEFAULT_SCORE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Strength score.
    #[serde(default = "default_score")]
    pub strength: i32,
    /// Dexterity score.
    #[serde(default = "default_score")]
    pub dexterity: i32,
    /// Constitution score.
    #[serde(default = "default_score")]
    pub constitution: i32,
    /// Intelligence score.
    #[serde(default = "default_score")]
    pub intelligence: i32,
    /// Wisdom score.
    #[serde(default = "default_score")]
    pub wisdom: i32,
    /// Charisma score.
    #[serde(default = "default_score")]
    pub charisma: i32,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self {
            strength: DEFAULT_SCORE,
            dexterity: DEFAULT_SCORE,
            constitution: DEFAULT_SCORE,
            intelligence: DEFAULT_SCORE,
            wisdom: DEFAULT_SCORE,
            charisma: DEFAULT_SCORE,
        }
    }
}

impl AbilityScores {
    /// Build scores in sheet order: STR, DEX, CON, INT, WIS, CHA.
    pub fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    /// Score for one ability.
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Overwrite the score for one ability.
    pub fn set(&mut self, ability: Ability, score: i32) {
        let slot = match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        };
        *slot = score;
    }

    /// Builder-style variant of [`AbilityScores::set`].
    pub fn with(mut self, ability: Ability, score: i32) -> Self {
        self.set(ability, score);
        self
    }

    /// Iterate `(ability, score)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}
