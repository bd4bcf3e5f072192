//! Roll calculators: skill checks, saving throws, and attack rolls.
//!
//! These compute the modifier a player adds to a d20, not the roll itself.
//! Every query is a pure function of ability scores, level and proficiencies.

use ledger_core::{Ability, AbilityScores, Character, ProficiencySet, Skill};
use serde::Serialize;

use crate::error::{MechError, MechResult};
use crate::formula::{modifier, proficiency_bonus, signed};
use crate::rules::governing_ability;

/// Modifier breakdown for a skill check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCheck {
    /// Skill name.
    pub skill: String,
    /// Governing ability.
    pub ability: Ability,
    /// Modifier from the ability score.
    pub ability_modifier: i32,
    /// Whether the character is trained in the skill.
    pub proficient: bool,
    /// Proficiency bonus applied (0 when untrained).
    pub proficiency_bonus: i32,
    /// Total modifier.
    pub total_modifier: i32,
    /// Signed display form, e.g. `"+3"`.
    pub display: String,
}

/// Modifier breakdown for a saving throw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingThrow {
    /// Ability being saved with.
    pub ability: Ability,
    /// Modifier from the ability score.
    pub ability_modifier: i32,
    /// Whether the character is proficient in this save.
    pub proficient: bool,
    /// Proficiency bonus applied (0 when not proficient).
    pub proficiency_bonus: i32,
    /// Total modifier.
    pub total_modifier: i32,
    /// Signed display form.
    pub display: String,
}

/// Modifier breakdown for a weapon attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttackRoll {
    /// Weapon type tag as requested (e.g. "melee", "ranged").
    pub weapon_type: String,
    /// Ability used for the attack.
    pub ability: Ability,
    /// Modifier from the ability score.
    pub ability_modifier: i32,
    /// Proficiency bonus; always applied.
    pub proficiency_bonus: i32,
    /// Attack roll modifier.
    pub to_hit: i32,
    /// Signed display form of `to_hit`.
    pub display: String,
    /// Damage modifier; the same ability modifier as the attack.
    pub damage_bonus: i32,
}

/// The inputs every roll query needs, borrowed from wherever they live.
#[derive(Debug, Clone, Copy)]
pub struct RollContext<'a> {
    /// Ability scores.
    pub scores: &'a AbilityScores,
    /// Character level.
    pub level: i32,
    /// Proficiency set.
    pub proficiencies: &'a ProficiencySet,
}

impl<'a> RollContext<'a> {
    /// Bundle scores, level and proficiencies.
    pub fn new(scores: &'a AbilityScores, level: i32, proficiencies: &'a ProficiencySet) -> Self {
        Self {
            scores,
            level,
            proficiencies,
        }
    }

    /// Borrow the roll inputs from a stored character.
    pub fn from_character(character: &'a Character) -> Self {
        Self::new(&character.stats, character.level, &character.proficiencies)
    }

    /// Skill check modifier for a skill, by exact sheet name.
    pub fn skill_check(&self, skill_name: &str) -> MechResult<SkillCheck> {
        let ability = governing_ability(skill_name)?;
        let proficient = self.proficiencies.has_skill(skill_name);
        let (ability_modifier, bonus, total) = self.breakdown(ability, proficient);
        Ok(SkillCheck {
            skill: skill_name.to_string(),
            ability,
            ability_modifier,
            proficient,
            proficiency_bonus: bonus,
            total_modifier: total,
            display: signed(total),
        })
    }

    /// Saving throw modifier. The ability name is matched case-insensitively.
    pub fn saving_throw(&self, ability_name: &str) -> MechResult<SavingThrow> {
        let ability = Ability::parse(ability_name)
            .ok_or_else(|| MechError::InvalidAbility(ability_name.to_string()))?;
        Ok(self.save(ability))
    }

    /// Saving throw modifier for an already-parsed ability.
    pub fn save(&self, ability: Ability) -> SavingThrow {
        let proficient = self.proficiencies.has_save(ability);
        let (ability_modifier, bonus, total) = self.breakdown(ability, proficient);
        SavingThrow {
            ability,
            ability_modifier,
            proficient,
            proficiency_bonus: bonus,
            total_modifier: total,
            display: signed(total),
        }
    }

    /// Attack roll modifier.
    ///
    /// Dexterity is used when `use_dex` is set (finesse) or the weapon type
    /// is `"ranged"` in any casing; otherwise strength. Proficiency is
    /// assumed for any equipped weapon.
    pub fn attack_roll(&self, weapon_type: &str, use_dex: bool) -> AttackRoll {
        let ability = attack_ability(weapon_type, use_dex);
        let (ability_modifier, bonus, to_hit) = self.breakdown(ability, true);
        AttackRoll {
            weapon_type: weapon_type.to_string(),
            ability,
            ability_modifier,
            proficiency_bonus: bonus,
            to_hit,
            display: signed(to_hit),
            damage_bonus: ability_modifier,
        }
    }

    /// Skill checks for all eighteen skills, in table order.
    pub fn all_skills(&self) -> Vec<SkillCheck> {
        Skill::ALL
            .into_iter()
            .map(|skill| {
                let proficient = self.proficiencies.has_skill(skill.name());
                let (ability_modifier, bonus, total) = self.breakdown(skill.ability(), proficient);
                SkillCheck {
                    skill: skill.name().to_string(),
                    ability: skill.ability(),
                    ability_modifier,
                    proficient,
                    proficiency_bonus: bonus,
                    total_modifier: total,
                    display: signed(total),
                }
            })
            .collect()
    }

    /// `(ability modifier, applied proficiency bonus, total)`.
    fn breakdown(&self, ability: Ability, proficient: bool) -> (i32, i32, i32) {
        let ability_modifier = modifier(self.scores.get(ability));
        let bonus = if proficient {
            proficiency_bonus(self.level)
        } else {
            0
        };
        (ability_modifier, bonus, ability_modifier + bonus)
    }
}

/// Which ability an attack uses.
pub fn attack_ability(weapon_type: &str, use_dex: bool) -> Ability {
    if use_dex || weapon_type.eq_ignore_ascii_case("ranged") {
        Ability::Dexterity
    } else {
        Ability::Strength
    }
}

/// Skill check modifier. See [`RollContext::skill_check`].
pub fn skill_check(
    scores: &AbilityScores,
    level: i32,
    proficiencies: &ProficiencySet,
    skill_name: &str,
) -> MechResult<SkillCheck> {
    RollContext::new(scores, level, proficiencies).skill_check(skill_name)
}

/// Saving throw modifier. See [`RollContext::saving_throw`].
pub fn saving_throw(
    scores: &AbilityScores,
    level: i32,
    proficiencies: &ProficiencySet,
    ability_name: &str,
) -> MechResult<SavingThrow> {
    RollContext::new(scores, level, proficiencies).saving_throw(ability_name)
}

/// Attack roll modifier. Proficiencies are not consulted.
pub fn attack_roll(
    scores: &AbilityScores,
    level: i32,
    weapon_type: &str,
    use_dex: bool,
) -> AttackRoll {
    let none = ProficiencySet::default();
    RollContext::new(scores, level, &none).attack_roll(weapon_type, use_dex)
}

/// Skill checks for all eighteen skills. See [`RollContext::all_skills`].
pub fn all_skills(
    scores: &AbilityScores,
    level: i32,
    proficiencies: &ProficiencySet,
) -> Vec<SkillCheck> {
    RollContext::new(scores, level, proficiencies).all_skills()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trained(skills: &[&str], saves: &[Ability]) -> ProficiencySet {
        ProficiencySet {
            skills: skills.iter().map(|s| (*s).to_string()).collect(),
            saves: saves.iter().copied().collect(),
            ..ProficiencySet::default()
        }
    }

    #[test]
    fn proficient_skill_adds_bonus() {
        let scores = AbilityScores::default().with(Ability::Wisdom, 16);
        let profs = trained(&["Perception"], &[]);
        let check = skill_check(&scores, 5, &profs, "Perception").unwrap();
        assert_eq!(check.ability, Ability::Wisdom);
        assert_eq!(check.ability_modifier, 3);
        assert!(check.proficient);
        assert_eq!(check.proficiency_bonus, 3);
        assert_eq!(check.total_modifier, 6);
        assert_eq!(check.display, "+6");
    }

    #[test]
    fn untrained_skill_has_no_bonus() {
        let scores = AbilityScores::default().with(Ability::Strength, 6);
        let check = skill_check(&scores, 9, &ProficiencySet::default(), "Athletics").unwrap();
        assert!(!check.proficient);
        assert_eq!(check.proficiency_bonus, 0);
        assert_eq!(check.total_modifier, -2);
        assert_eq!(check.display, "-2");
    }

    #[test]
    fn zero_total_displays_plus() {
        let (scores, profs) = (AbilityScores::default(), ProficiencySet::default());
        let check = skill_check(&scores, 1, &profs, "Arcana").unwrap();
        assert_eq!(check.display, "+0");
    }

    #[test]
    fn unknown_skill_rejected() {
        let err = skill_check(&AbilityScores::default(), 1, &ProficiencySet::default(), "Juggling")
            .unwrap_err();
        assert!(matches!(err, MechError::UnknownSkill(ref s) if s == "Juggling"));
    }

    #[test]
    fn saving_throw_case_insensitive() {
        let scores = AbilityScores::default().with(Ability::Dexterity, 14);
        let profs = trained(&[], &[Ability::Dexterity]);
        let upper = saving_throw(&scores, 1, &profs, "DEXTERITY").unwrap();
        let lower = saving_throw(&scores, 1, &profs, "dexterity").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.total_modifier, 4);
        assert_eq!(upper.display, "+4");
    }

    #[test]
    fn invalid_ability_rejected() {
        let err = saving_throw(&AbilityScores::default(), 1, &ProficiencySet::default(), "luck")
            .unwrap_err();
        assert!(matches!(err, MechError::InvalidAbility(ref s) if s == "luck"));
    }

    #[test]
    fn padded_ability_rejected() {
        let (scores, profs) = (AbilityScores::default(), ProficiencySet::default());
        for name in [" dexterity ", "dexterity ", "\tSTR", ""] {
            let err = saving_throw(&scores, 1, &profs, name).unwrap_err();
            assert!(matches!(err, MechError::InvalidAbility(ref s) if s == name));
        }
    }

    #[test]
    fn attack_ability_selection() {
        assert_eq!(attack_ability("Ranged", false), Ability::Dexterity);
        assert_eq!(attack_ability("RANGED", false), Ability::Dexterity);
        assert_eq!(attack_ability("melee", true), Ability::Dexterity);
        assert_eq!(attack_ability("melee", false), Ability::Strength);
        assert_eq!(attack_ability("thrown", false), Ability::Strength);
    }

    #[test]
    fn attack_always_proficient() {
        let scores = AbilityScores::default()
            .with(Ability::Strength, 8)
            .with(Ability::Dexterity, 18);
        let melee = attack_roll(&scores, 1, "melee", false);
        assert_eq!(melee.ability, Ability::Strength);
        assert_eq!(melee.to_hit, 1);
        assert_eq!(melee.damage_bonus, -1);
        assert_eq!(melee.display, "+1");

        let bow = attack_roll(&scores, 17, "ranged", false);
        assert_eq!(bow.proficiency_bonus, 6);
        assert_eq!(bow.to_hit, 10);
        assert_eq!(bow.damage_bonus, 4);
        assert_eq!(bow.weapon_type, "ranged");
    }

    #[test]
    fn all_skills_in_table_order() {
        let scores = AbilityScores::default().with(Ability::Dexterity, 15);
        let profs = trained(&["Stealth"], &[]);
        let skills = all_skills(&scores, 1, &profs);
        assert_eq!(skills.len(), 18);
        assert_eq!(skills[0].skill, "Acrobatics");
        assert_eq!(skills[17].skill, "Survival");
        let stealth = skills.iter().find(|s| s.skill == "Stealth").unwrap();
        assert_eq!(stealth.total_modifier, 4);
        let sleight = skills.iter().find(|s| s.skill == "Sleight of Hand").unwrap();
        assert_eq!(sleight.total_modifier, 2);
        assert!(!sleight.proficient);
    }

    #[test]
    fn context_from_character() {
        let mut c = Character::new("Ash", "Human", "Ranger", "Guide");
        c.level = 5;
        c.stats.wisdom = 14;
        c.proficiencies.skills.insert("Survival".to_string());
        let ctx = RollContext::from_character(&c);
        assert_eq!(ctx.skill_check("Survival").unwrap().total_modifier, 5);
    }

    #[test]
    fn serializes_snake_case_keys() {
        let (scores, profs) = (AbilityScores::default(), ProficiencySet::default());
        let check = skill_check(&scores, 1, &profs, "Nature").unwrap();
        let value = serde_json::to_value(&check).unwrap();
        assert_eq!(value["ability"], "intelligence");
        assert_eq!(value["total_modifier"], 0);
        assert_eq!(value["display"], "+0");
    }
}
