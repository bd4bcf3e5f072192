//! The character aggregate and partial updates to it.
//!
//! Progression trackers (renown, piety, bastion), inventory and spells are
//! carried as opaque JSON. Nothing in the rules engine interprets them; they
//! are stored and returned exactly as the client sent them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::ability::AbilityScores;
use crate::error::{CoreError, CoreResult};
use crate::proficiency::ProficiencySet;

/// Base armor class before the dexterity modifier is applied.
pub const BASE_ARMOR_CLASS: i32 = 10;

/// Walking speed in feet used when nothing better is known.
pub const DEFAULT_SPEED: i32 = 30;

/// Empty spell record: nothing known, nothing prepared, no slots.
pub fn empty_spells() -> Value {
    json!({ "known": [], "prepared": [], "slots": {} })
}

/// A player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Character level (at least 1).
    pub level: i32,
    /// Species name (e.g. "Dwarf").
    pub species: String,
    /// Class name (e.g. "Fighter").
    pub class_name: String,
    /// Chosen subclass, if any.
    #[serde(default)]
    pub subclass: Option<String>,
    /// Background name (e.g. "Sage").
    pub background: String,
    /// Alignment, if recorded.
    #[serde(default)]
    pub alignment: Option<String>,
    /// Ability scores.
    #[serde(default)]
    pub stats: AbilityScores,
    /// Current hit points.
    pub hp_current: i32,
    /// Maximum hit points.
    pub hp_max: i32,
    /// Temporary hit points.
    #[serde(default)]
    pub temp_hp: i32,
    /// Unspent hit dice.
    pub hit_dice_current: i32,
    /// Total hit dice, usually equal to level.
    pub hit_dice_max: i32,
    /// Experience points.
    #[serde(default)]
    pub xp: i32,
    /// Trained skills, saves, tools, weapons and armor.
    #[serde(default)]
    pub proficiencies: ProficiencySet,
    /// Armor class before dexterity.
    pub armor_class: i32,
    /// Base walking speed in feet.
    pub speed: i32,
    /// Faction renown, e.g. `{"Harpers": 5}`.
    #[serde(default)]
    pub renown: Map<String, Value>,
    /// Devotion per deity, e.g. `{"Tyr": 3}`.
    #[serde(default)]
    pub piety: Map<String, Value>,
    /// Bastion state, e.g. `{"turns": [], "facilities": []}`.
    #[serde(default)]
    pub bastion: Map<String, Value>,
    /// Carried items.
    #[serde(default)]
    pub inventory: Vec<Value>,
    /// Spells known, prepared, and slots.
    #[serde(default = "empty_spells")]
    pub spells: Value,
}

impl Character {
    /// Create a level 1 character with default scores, 0 hit points and no
    /// proficiencies. The rules engine fills in the derived values.
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        class_name: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            level: 1,
            species: species.into(),
            class_name: class_name.into(),
            subclass: None,
            background: background.into(),
            alignment: None,
            stats: AbilityScores::default(),
            hp_current: 0,
            hp_max: 0,
            temp_hp: 0,
            hit_dice_current: 1,
            hit_dice_max: 1,
            xp: 0,
            proficiencies: ProficiencySet::default(),
            armor_class: BASE_ARMOR_CLASS,
            speed: DEFAULT_SPEED,
            renown: Map::new(),
            piety: Map::new(),
            bastion: Map::new(),
            inventory: Vec::new(),
            spells: empty_spells(),
        }
    }
}

/// A partial update. Only fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterPatch {
    /// New name.
    pub name: Option<String>,
    /// New level (must be at least 1).
    pub level: Option<i32>,
    /// New current hit points.
    pub hp_current: Option<i32>,
    /// New maximum hit points.
    pub hp_max: Option<i32>,
    /// New temporary hit points.
    pub temp_hp: Option<i32>,
    /// New unspent hit dice.
    pub hit_dice_current: Option<i32>,
    /// New experience points.
    pub xp: Option<i32>,
    /// Replacement ability scores.
    pub stats: Option<AbilityScores>,
    /// Replacement inventory.
    pub inventory: Option<Vec<Value>>,
    /// Replacement spell record.
    pub spells: Option<Value>,
    /// Replacement renown map.
    pub renown: Option<Map<String, Value>>,
    /// Replacement piety map.
    pub piety: Option<Map<String, Value>>,
    /// Replacement bastion state.
    pub bastion: Option<Map<String, Value>>,
    /// New subclass.
    pub subclass: Option<String>,
    /// New alignment.
    pub alignment: Option<String>,
}

impl CharacterPatch {
    /// Returns true if the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write every provided field into `character`.
    ///
    /// The patch is checked before anything is written, so a rejected patch
    /// leaves the character unchanged.
    pub fn apply(self, character: &mut Character) -> CoreResult<()> {
        if let Some(level) = self.level.filter(|l| *l < 1) {
            return Err(CoreError::InvalidLevel(level));
        }

        if let Some(name) = self.name {
            character.name = name;
        }
        if let Some(level) = self.level {
            character.level = level;
        }
        if let Some(hp) = self.hp_current {
            character.hp_current = hp;
        }
        if let Some(hp) = self.hp_max {
            character.hp_max = hp;
        }
        if let Some(hp) = self.temp_hp {
            character.temp_hp = hp;
        }
        if let Some(dice) = self.hit_dice_current {
            character.hit_dice_current = dice;
        }
        if let Some(xp) = self.xp {
            character.xp = xp;
        }
        if let Some(stats) = self.stats {
            character.stats = stats;
        }
        if let Some(inventory) = self.inventory {
            character.inventory = inventory;
        }
        if let Some(spells) = self.spells {
            character.spells = spells;
        }
        if let Some(renown) = self.renown {
            character.renown = renown;
        }
        if let Some(piety) = self.piety {
            character.piety = piety;
        }
        if let Some(bastion) = self.bastion {
            character.bastion = bastion;
        }
        if self.subclass.is_some() {
            character.subclass = self.subclass;
        }
        if self.alignment.is_some() {
            character.alignment = self.alignment;
        }
        Ok(())
    }
}
