//! End-to-end character scenarios against the built-in rulebook.

use ledger_core::{Ability, AbilityScores, CharacterPatch, ProficiencySet};
use ledger_mechanics::roll::{all_skills, attack_roll, saving_throw, skill_check};
use ledger_mechanics::{
    CharacterSheet, CreationPolicy, CreationRequest, MechError, RollContext, RuleBook,
    create_character, proficiency_bonus, standard, starting_hp, validate_character,
};

#[test]
fn level_one_fighter_hit_points() {
    let request = CreationRequest::new("Brann", "Human", "Fighter", "Soldier")
        .with_stats(AbilityScores::new(16, 12, 14, 10, 10, 8))
        .with_skill_choices(["Perception", "Survival"]);
    let fighter = create_character(standard(), request, &CreationPolicy::default()).unwrap();

    assert_eq!(fighter.hp_max, 12);
    assert_eq!(fighter.hp_current, 12);
    assert_eq!(proficiency_bonus(fighter.level), 2);
    assert_eq!(fighter.speed, 30);
    assert!(fighter.proficiencies.has_save(Ability::Strength));
    assert!(fighter.proficiencies.has_save(Ability::Constitution));
    assert!(validate_character(standard(), &fighter).is_empty());
}

#[test]
fn level_five_proficient_skill() {
    let scores = AbilityScores::default().with(Ability::Intelligence, 16);
    let mut profs = ProficiencySet::default();
    profs.skills.insert("Investigation".to_string());

    let check = skill_check(&scores, 5, &profs, "Investigation").unwrap();
    assert_eq!(check.total_modifier, 6);
    assert_eq!(check.display, "+6");
}

#[test]
fn saving_throw_ignores_case() {
    let scores = AbilityScores::default().with(Ability::Dexterity, 12);
    let profs = ProficiencySet::default();
    let upper = saving_throw(&scores, 3, &profs, "DEXTERITY").unwrap();
    let lower = saving_throw(&scores, 3, &profs, "dexterity").unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper.display, "+1");
}

#[test]
fn juggling_is_not_a_skill() {
    let err = skill_check(&AbilityScores::default(), 1, &ProficiencySet::default(), "Juggling")
        .unwrap_err();
    assert!(matches!(err, MechError::UnknownSkill(_)));
    assert_eq!(err.to_string(), "unknown skill: Juggling");
}

#[test]
fn unknown_class_matches_d8_class() {
    for con_mod in -5..=5 {
        assert_eq!(
            starting_hp(standard(), "Blood Hunter", con_mod),
            starting_hp(standard(), "Cleric", con_mod)
        );
    }
}

#[test]
fn attack_selection_matrix() {
    let scores = AbilityScores::default()
        .with(Ability::Strength, 14)
        .with(Ability::Dexterity, 18);
    let cases = [
        ("Ranged", false, Ability::Dexterity),
        ("rAnGeD", false, Ability::Dexterity),
        ("melee", true, Ability::Dexterity),
        ("melee", false, Ability::Strength),
        ("thrown", false, Ability::Strength),
    ];
    for (weapon, use_dex, expected) in cases {
        assert_eq!(attack_roll(&scores, 1, weapon, use_dex).ability, expected, "{weapon}");
    }
}

#[test]
fn created_character_round_trip_through_rolls() {
    let request = CreationRequest::new("Ilse", "Elf", "Wizard", "Sage")
        .with_stats(AbilityScores::new(8, 14, 13, 16, 12, 10))
        .with_skill_choices(["Investigation", "Medicine"]);
    let mut wizard = create_character(standard(), request, &CreationPolicy::strict()).unwrap();
    assert_eq!(wizard.hp_max, 7);

    let ctx = RollContext::from_character(&wizard);
    assert_eq!(ctx.skill_check("Arcana").unwrap().total_modifier, 5);
    assert_eq!(ctx.saving_throw("wisdom").unwrap().total_modifier, 3);
    assert_eq!(ctx.saving_throw("charisma").unwrap().total_modifier, 0);

    let patch: CharacterPatch =
        serde_json::from_str(r#"{"level": 5, "subclass": "Bladesinging"}"#).unwrap();
    patch.apply(&mut wizard).unwrap();
    let sheet = CharacterSheet::derive(&wizard);
    assert_eq!(sheet.proficiency_bonus, 3);
    assert_eq!(sheet.armor_class, 12);

    let summary = all_skills(&wizard.stats, wizard.level, &wizard.proficiencies);
    let arcana = summary.iter().find(|s| s.skill == "Arcana").unwrap();
    assert_eq!(arcana.display, "+6");
    assert!(validate_character(standard(), &wizard).is_empty());
}

#[test]
fn content_pack_extends_creation() {
    let pack = RuleBook::from_json(
        r#"{
            "name": "Homebrew",
            "classes": [{
                "name": "Gunslinger",
                "hit_die": "d10",
                "saves": ["dexterity", "wisdom"],
                "skill_choices": {
                    "choose": 2,
                    "from": ["Perception", "Sleight of Hand", "Stealth"]
                },
                "armor": ["light"],
                "weapons": ["simple", "martial"]
            }],
            "species": [{"name": "Warforged", "speed": 30, "size": "Medium"}]
        }"#,
    )
    .unwrap();
    let book = standard().clone().with_pack(pack);

    let request = CreationRequest::new("Rook", "Warforged", "Gunslinger", "Guard")
        .with_stats(AbilityScores::default().with(Ability::Constitution, 15))
        .with_skill_choices(["Stealth", "Sleight of Hand"]);
    let rook = create_character(&book, request, &CreationPolicy::strict()).unwrap();
    assert_eq!(rook.hp_max, 12);
    assert_eq!(rook.proficiencies.skills.len(), 4);
    assert!(rook.proficiencies.has_save(Ability::Wisdom));
}
