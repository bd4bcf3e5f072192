//! Derived character sheets.
//!
//! A [`CharacterSheet`] is the read view of a stored [`Character`]: the
//! stored values plus everything the rules derive from them.

use std::collections::BTreeMap;

use ledger_core::{Ability, Character};
use serde::Serialize;

use crate::formula::{modifier, proficiency_bonus};
use crate::roll::{RollContext, SavingThrow, SkillCheck};

/// A character's stored vitals together with derived modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterSheet {
    /// Character name.
    pub name: String,
    /// Character level.
    pub level: i32,
    /// Ability modifiers keyed by ability.
    pub modifiers: BTreeMap<Ability, i32>,
    /// Proficiency bonus for the character's level.
    pub proficiency_bonus: i32,
    /// Base armor class plus the dexterity modifier.
    pub armor_class: i32,
    /// Base walking speed in feet.
    pub speed: i32,
    /// Current hit points.
    pub hp_current: i32,
    /// Maximum hit points.
    pub hp_max: i32,
    /// Temporary hit points.
    pub temp_hp: i32,
    /// Unspent hit dice.
    pub hit_dice_current: i32,
    /// Total hit dice.
    pub hit_dice_max: i32,
    /// Experience points.
    pub xp: i32,
    /// All six saving throws in sheet order.
    pub saving_throws: Vec<SavingThrow>,
    /// All eighteen skills in table order.
    pub skills: Vec<SkillCheck>,
}

impl CharacterSheet {
    /// Derive the sheet for a character.
    pub fn derive(character: &Character) -> Self {
        let modifiers: BTreeMap<Ability, i32> = character
            .stats
            .iter()
            .map(|(ability, score)| (ability, modifier(score)))
            .collect();
        let dex = modifier(character.stats.dexterity);

        let ctx = RollContext::from_character(character);
        let saving_throws = Ability::ALL.into_iter().map(|a| ctx.save(a)).collect();

        Self {
            name: character.name.clone(),
            level: character.level,
            modifiers,
            proficiency_bonus: proficiency_bonus(character.level),
            armor_class: character.armor_class.saturating_add(dex),
            speed: character.speed,
            hp_current: character.hp_current,
            hp_max: character.hp_max,
            temp_hp: character.temp_hp,
            hit_dice_current: character.hit_dice_current,
            hit_dice_max: character.hit_dice_max,
            xp: character.xp,
            saving_throws,
            skills: ctx.all_skills(),
        }
    }

    /// Modifier for one ability.
    pub fn modifier(&self, ability: Ability) -> i32 {
        self.modifiers.get(&ability).copied().unwrap_or_default()
    }
}
