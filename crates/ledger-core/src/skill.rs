//! The eighteen canonical skills.
//!
//! The skill list is fixed by the rules system, so unlike classes or species
//! it is modelled as a closed enum. Names are matched exactly as they appear
//! on the character sheet (`"Sleight of Hand"`, not `"sleight_of_hand"`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ability::Ability;

/// A trained capability governed by a single ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    /// Balance and tumbling.
    Acrobatics,
    /// Calming and reading animals.
    #[serde(rename = "Animal Handling")]
    AnimalHandling,
    /// Magical lore.
    Arcana,
    /// Climbing, jumping, swimming.
    Athletics,
    /// Convincing lies.
    Deception,
    /// Historical lore.
    History,
    /// Reading intentions.
    Insight,
    /// Threats and coercion.
    Intimidation,
    /// Deduction from clues.
    Investigation,
    /// Stabilizing and diagnosing.
    Medicine,
    /// Terrain, plants, and animals lore.
    Nature,
    /// Noticing things.
    Perception,
    /// Entertaining an audience.
    Performance,
    /// Honest influence.
    Persuasion,
    /// Divine lore.
    Religion,
    /// Manual trickery.
    #[serde(rename = "Sleight of Hand")]
    SleightOfHand,
    /// Moving unseen.
    Stealth,
    /// Tracking and foraging.
    Survival,
}

impl Skill {
    /// All skills in table order.
    pub const ALL: [Skill; 18] = [
        Self::Acrobatics,
        Self::AnimalHandling,
        Self::Arcana,
        Self::Athletics,
        Self::Deception,
        Self::History,
        Self::Insight,
        Self::Intimidation,
        Self::Investigation,
        Self::Medicine,
        Self::Nature,
        Self::Perception,
        Self::Performance,
        Self::Persuasion,
        Self::Religion,
        Self::SleightOfHand,
        Self::Stealth,
        Self::Survival,
    ];

    /// Sheet name of the skill.
    pub fn name(self) -> &'static str {
        match self {
            Self::Acrobatics => "Acrobatics",
            Self::AnimalHandling => "Animal Handling",
            Self::Arcana => "Arcana",
            Self::Athletics => "Athletics",
            Self::Deception => "Deception",
            Self::History => "History",
            Self::Insight => "Insight",
            Self::Intimidation => "Intimidation",
            Self::Investigation => "Investigation",
            Self::Medicine => "Medicine",
            Self::Nature => "Nature",
            Self::Perception => "Perception",
            Self::Performance => "Performance",
            Self::Persuasion => "Persuasion",
            Self::Religion => "Religion",
            Self::SleightOfHand => "Sleight of Hand",
            Self::Stealth => "Stealth",
            Self::Survival => "Survival",
        }
    }

    /// Look up a skill by its exact sheet name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// The ability that governs checks with this skill.
    pub fn ability(self) -> Ability {
        match self {
            Self::Athletics => Ability::Strength,
            Self::Acrobatics | Self::SleightOfHand | Self::Stealth => Ability::Dexterity,
            Self::Arcana
            | Self::History
            | Self::Investigation
            | Self::Nature
            | Self::Religion => Ability::Intelligence,
            Self::AnimalHandling
            | Self::Insight
            | Self::Medicine
            | Self::Perception
            | Self::Survival => Ability::Wisdom,
            Self::Deception | Self::Intimidation | Self::Performance | Self::Persuasion => {
                Ability::Charisma
            }
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
