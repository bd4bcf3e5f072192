//! Proficiency sets: what a character is trained in.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ability::Ability;
use crate::skill::Skill;

/// Armor training granted by a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorCategory {
    /// Light armor.
    Light,
    /// Medium armor.
    Medium,
    /// Heavy armor.
    Heavy,
    /// Shields.
    Shields,
}

impl fmt::Display for ArmorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
            Self::Shields => "shields",
        };
        f.write_str(tag)
    }
}

/// Weapon training granted by a class.
///
/// Restricted martial training is kept as a single composite tag rather
/// than being decomposed into weapon properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponCategory {
    /// Simple weapons.
    Simple,
    /// All martial weapons.
    Martial,
    /// Martial weapons with the Light property.
    MartialLight,
    /// Martial weapons with the Finesse or Light property.
    MartialFinesseLight,
}

impl fmt::Display for WeaponCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Simple => "simple",
            Self::Martial => "martial",
            Self::MartialLight => "martial_light",
            Self::MartialFinesseLight => "martial_finesse_light",
        };
        f.write_str(tag)
    }
}

/// Everything a character is proficient in.
///
/// Skills are kept as names because they come from player input; sets keep
/// every entry unique and give a stable serialization order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProficiencySet {
    /// Trained skills, by sheet name.
    pub skills: BTreeSet<String>,
    /// Abilities with saving-throw proficiency.
    pub saves: BTreeSet<Ability>,
    /// Free-form tool proficiencies (e.g. "Thieves' Tools").
    pub tools: BTreeSet<String>,
    /// Weapon categories.
    pub weapons: BTreeSet<WeaponCategory>,
    /// Armor categories.
    pub armor: BTreeSet<ArmorCategory>,
}

impl ProficiencySet {
    /// Returns true if the named skill is trained.
    pub fn has_skill(&self, name: &str) -> bool {
        self.skills.contains(name)
    }

    /// Returns true if saves for `ability` are proficient.
    pub fn has_save(&self, ability: Ability) -> bool {
        self.saves.contains(&ability)
    }

    /// Add a canonical skill.
    pub fn add_skill(&mut self, skill: Skill) -> bool {
        self.skills.insert(skill.name().to_string())
    }

    /// Trained skill names that are not one of the canonical skills.
    pub fn unknown_skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .map(String::as_str)
            .filter(|name| Skill::from_name(name).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_are_deduplicated() {
        let mut set = ProficiencySet::default();
        assert!(set.add_skill(Skill::Stealth));
        assert!(!set.add_skill(Skill::Stealth));
        assert_eq!(set.skills.len(), 1);
        assert!(set.has_skill("Stealth"));
        assert!(!set.has_skill("stealth"));
    }

    #[test]
    fn unknown_skills_listed() {
        let mut set = ProficiencySet::default();
        set.skills.insert("Juggling".to_string());
        set.add_skill(Skill::Arcana);
        assert_eq!(set.unknown_skills().collect::<Vec<_>>(), vec!["Juggling"]);
    }

    #[test]
    fn serializes_as_flat_lists() {
        let mut set = ProficiencySet::default();
        set.saves.insert(Ability::Strength);
        set.weapons.insert(WeaponCategory::MartialLight);
        set.armor.insert(ArmorCategory::Shields);
        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value["saves"], serde_json::json!(["strength"]));
        assert_eq!(value["weapons"], serde_json::json!(["martial_light"]));
        assert_eq!(value["armor"], serde_json::json!(["shields"]));
        assert_eq!(value["tools"], serde_json::json!([]));
    }

    #[test]
    fn empty_object_deserializes() {
        let set: ProficiencySet = serde_json::from_str("{}").unwrap();
        assert_eq!(set, ProficiencySet::default());
    }

    #[test]
    fn category_display_matches_serde() {
        assert_eq!(WeaponCategory::MartialFinesseLight.to_string(), "martial_finesse_light");
        assert_eq!(ArmorCategory::Heavy.to_string(), "heavy");
    }
}
