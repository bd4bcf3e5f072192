//! Character creation: proficiency resolution and starting values.
//!
//! Merge policy:
//! - saving throws, armor and weapons come straight from the class;
//! - skills are the union of the background's two skills and the player's
//!   choices, deduplicated;
//! - speed comes from the species, hit points from the class hit die at
//!   level 1 plus the constitution modifier.
//!
//! Under the default [`CreationPolicy`] the player's skill choices are taken
//! as-is. Checking them against the class menu is the caller's job unless the
//! policy enforces it.

use ledger_core::character::BASE_ARMOR_CLASS;
use ledger_core::{AbilityScores, Character, ProficiencySet};
use serde::{Deserialize, Serialize};

use crate::config::CreationPolicy;
use crate::error::{MechError, MechResult};
use crate::formula::{modifier, starting_hp};
use crate::rules::RuleBook;
use crate::validate::skill_choice_errors;

fn default_level() -> i32 {
    1
}

/// Everything a player submits to create a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationRequest {
    /// Character name.
    pub name: String,
    /// Species name.
    pub species: String,
    /// Class name.
    pub class_name: String,
    /// Background name.
    pub background: String,
    /// Starting level.
    #[serde(default = "default_level")]
    pub level: i32,
    /// Ability scores; missing entries are 10.
    #[serde(default)]
    pub stats: AbilityScores,
    /// Skills picked from the class menu.
    #[serde(default)]
    pub skill_choices: Vec<String>,
}

impl CreationRequest {
    /// A level 1 request with default scores and no skill choices.
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        class_name: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            class_name: class_name.into(),
            background: background.into(),
            level: default_level(),
            stats: AbilityScores::default(),
            skill_choices: Vec::new(),
        }
    }

    /// Set the ability scores.
    pub fn with_stats(mut self, stats: AbilityScores) -> Self {
        self.stats = stats;
        self
    }

    /// Set the starting level.
    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Set the player's skill choices.
    pub fn with_skill_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skill_choices = choices.into_iter().map(Into::into).collect();
        self
    }
}

/// Derived starting values for a new character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationOutcome {
    /// Consolidated proficiencies.
    pub proficiencies: ProficiencySet,
    /// Base walking speed in feet.
    pub speed: i32,
    /// Starting (and maximum) hit points.
    pub starting_hp: i32,
}

/// Build the proficiency set for a class, background and skill choices.
///
/// The result does not depend on the order of `skill_choices`, and repeated
/// entries collapse into one.
pub fn resolve_proficiencies(
    book: &RuleBook,
    class_name: &str,
    background_name: &str,
    skill_choices: &[String],
) -> ProficiencySet {
    let mut set = ProficiencySet {
        saves: book.save_proficiencies(class_name).iter().copied().collect(),
        armor: book.armor_proficiencies(class_name).iter().copied().collect(),
        weapons: book.weapon_proficiencies(class_name).iter().copied().collect(),
        ..ProficiencySet::default()
    };
    for skill in book.background_skills(background_name) {
        set.add_skill(*skill);
    }
    set.skills.extend(skill_choices.iter().cloned());
    set
}

/// Derive proficiencies, speed and starting hit points for a request.
pub fn build(
    book: &RuleBook,
    request: &CreationRequest,
    policy: &CreationPolicy,
) -> MechResult<CreationOutcome> {
    trace_unknown_names(book, request);

    if policy.enforce_skill_choices {
        let errors = skill_choice_errors(book, &request.class_name, &request.skill_choices);
        if let Some(err) = errors.into_iter().next() {
            tracing::warn!(character = %request.name, error = %err, "rejected skill choices");
            return Err(err);
        }
    }

    let con_mod = modifier(request.stats.constitution);
    let hp = starting_hp(book, &request.class_name, con_mod);
    if let Some(minimum) = policy.min_starting_hp.filter(|min| hp < *min) {
        tracing::warn!(character = %request.name, hp, minimum, "starting hit points too low");
        return Err(MechError::StartingHpTooLow { hp, minimum });
    }

    Ok(CreationOutcome {
        proficiencies: resolve_proficiencies(
            book,
            &request.class_name,
            &request.background,
            &request.skill_choices,
        ),
        speed: book.species_speed(&request.species),
        starting_hp: hp,
    })
}

/// Build a complete character ready to be stored.
///
/// Hit points start full and the character has one hit die per level.
/// Starting hit points always use the level 1 formula, whatever the
/// requested level.
pub fn create_character(
    book: &RuleBook,
    request: CreationRequest,
    policy: &CreationPolicy,
) -> MechResult<Character> {
    let outcome = build(book, &request, policy)?;
    let mut character = Character::new(
        request.name,
        request.species,
        request.class_name,
        request.background,
    );
    character.level = request.level;
    character.stats = request.stats;
    character.hp_max = outcome.starting_hp;
    character.hp_current = outcome.starting_hp;
    character.hit_dice_max = request.level;
    character.hit_dice_current = request.level;
    character.proficiencies = outcome.proficiencies;
    character.armor_class = BASE_ARMOR_CLASS;
    character.speed = outcome.speed;
    tracing::debug!(
        character = %character.name,
        class = %character.class_name,
        hp = character.hp_max,
        skills = character.proficiencies.skills.len(),
        "created character"
    );
    Ok(character)
}

/// Emit a debug event for each name that will fall back to defaults.
fn trace_unknown_names(book: &RuleBook, request: &CreationRequest) {
    if book.class(&request.class_name).is_none() {
        tracing::debug!(class = %request.class_name, "unknown class, using defaults");
    }
    if book.species_definition(&request.species).is_none() {
        tracing::debug!(species = %request.species, "unknown species, using defaults");
    }
    if book.background(&request.background).is_none() {
        tracing::debug!(background = %request.background, "unknown background, using defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_core::{Ability, ArmorCategory, WeaponCategory};
    use proptest::prelude::*;

    use crate::rules::standard;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn fighter_soldier_proficiencies() {
        let set = resolve_proficiencies(
            standard(),
            "Fighter",
            "Soldier",
            &strings(&["Perception", "Athletics"]),
        );
        assert_eq!(
            set.saves.iter().copied().collect::<Vec<_>>(),
            vec![Ability::Strength, Ability::Constitution]
        );
        assert!(set.armor.contains(&ArmorCategory::Heavy));
        assert!(set.weapons.contains(&WeaponCategory::Martial));
        // Athletics comes from both sources but appears once.
        assert_eq!(
            set.skills.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["Athletics", "Intimidation", "Perception"]
        );
        assert!(set.tools.is_empty());
    }

    #[test]
    fn choices_are_not_checked_by_default() {
        let set = resolve_proficiencies(standard(), "Wizard", "Sage", &strings(&["Juggling"]));
        assert!(set.has_skill("Juggling"));
    }

    #[test]
    fn unknown_names_give_empty_sets() {
        let set = resolve_proficiencies(standard(), "Artificer", "Pirate", &[]);
        assert_eq!(set, ProficiencySet::default());
    }

    #[test]
    fn build_outcome() {
        let request = CreationRequest::new("Brann", "Dwarf", "Fighter", "Soldier")
            .with_stats(AbilityScores::default().with(Ability::Constitution, 14));
        let outcome = build(standard(), &request, &CreationPolicy::default()).unwrap();
        assert_eq!(outcome.starting_hp, 12);
        assert_eq!(outcome.speed, 25);
    }

    #[test]
    fn unknown_species_and_class_defaults() {
        let request = CreationRequest::new("Vex", "Warforged", "Artificer", "Sage")
            .with_stats(AbilityScores::default().with(Ability::Constitution, 12));
        let outcome = build(standard(), &request, &CreationPolicy::default()).unwrap();
        assert_eq!(outcome.speed, 30);
        assert_eq!(outcome.starting_hp, 9);
    }

    #[test]
    fn strict_policy_rejects_bad_choices() {
        let request = CreationRequest::new("Ilse", "Elf", "Wizard", "Sage")
            .with_skill_choices(["Stealth", "Arcana"]);
        let err = build(standard(), &request, &CreationPolicy::strict()).unwrap_err();
        assert!(matches!(err, MechError::InvalidSkillChoice(_)));

        let ok = request.with_skill_choices(["Medicine", "Nature"]);
        assert!(build(standard(), &ok, &CreationPolicy::strict()).is_ok());
    }

    #[test]
    fn minimum_hp_enforced_only_when_configured() {
        let request = CreationRequest::new("Frail", "Human", "Wizard", "Hermit")
            .with_stats(AbilityScores::default().with(Ability::Constitution, 1));
        let permissive = build(standard(), &request, &CreationPolicy::default()).unwrap();
        assert_eq!(permissive.starting_hp, 1);

        let policy = CreationPolicy::default().with_min_starting_hp(2);
        let err = build(standard(), &request, &policy).unwrap_err();
        assert!(matches!(err, MechError::StartingHpTooLow { hp: 1, minimum: 2 }));
    }

    #[test]
    fn create_character_fills_vitals() {
        let request = CreationRequest::new("Tamsin", "Halfling", "Rogue", "Criminal")
            .with_level(3)
            .with_stats(AbilityScores::new(8, 16, 12, 13, 10, 14))
            .with_skill_choices(["Acrobatics", "Deception", "Insight", "Perception"]);
        let c = create_character(standard(), request, &CreationPolicy::strict()).unwrap();
        assert_eq!(c.level, 3);
        assert_eq!(c.hp_max, 9);
        assert_eq!(c.hp_current, 9);
        assert_eq!(c.hit_dice_max, 3);
        assert_eq!(c.hit_dice_current, 3);
        assert_eq!(c.speed, 25);
        assert_eq!(c.armor_class, BASE_ARMOR_CLASS);
        assert_eq!(c.proficiencies.skills.len(), 6);
        assert_eq!(c.stats.dexterity, 16);
    }

    #[test]
    fn request_from_json_defaults() {
        let request: CreationRequest = serde_json::from_str(
            r#"{"name": "Pell", "species": "Elf", "class_name": "Druid", "background": "Guide"}"#,
        )
        .unwrap();
        assert_eq!(request.level, 1);
        assert_eq!(request.stats, AbilityScores::default());
        assert!(request.skill_choices.is_empty());
    }

    proptest! {
        #[test]
        fn skill_union_ignores_order(
            picks in proptest::sample::subsequence(
                ledger_core::Skill::ALL.iter().map(|s| s.name().to_string()).collect::<Vec<_>>(),
                0..6,
            ),
            background_idx in 0usize..17,
        ) {
            let background = standard().backgrounds[background_idx].name.clone();
            let mut reversed = picks.clone();
            reversed.reverse();
            let mut doubled = picks.clone();
            doubled.extend(picks.iter().cloned());

            let a = resolve_proficiencies(standard(), "Bard", &background, &picks);
            let b = resolve_proficiencies(standard(), "Bard", &background, &reversed);
            let c = resolve_proficiencies(standard(), "Bard", &background, &doubled);
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(&a, &c);
        }
    }
}
