//! Built-in tables for the 2024 rules with the Faerun campaign additions.
//!
//! Class traits and backgrounds follow the 2024 SRD. Species are the
//! campaign's custom list; subclasses combine the 2024 Player's Handbook
//! with the Faerun expansion.

use ledger_core::{Ability, ArmorCategory, Skill, WeaponCategory};

use crate::dice::HitDie;
use crate::rules::{
    BackgroundDefinition, ClassDefinition, RuleBook, Size, SkillChoices, SkillPool,
    SpeciesDefinition, Subclass,
};

const PHB: &str = "PHB 2024";
const FAERUN: &str = "Faerun Expansion";

/// The default rulebook.
pub fn faerun_2024() -> RuleBook {
    RuleBook {
        name: "faerun_2024".to_string(),
        classes: classes(),
        species: species(),
        backgrounds: backgrounds(),
    }
}

fn subclasses(entries: &[(&str, &str)]) -> Vec<Subclass> {
    entries
        .iter()
        .map(|(name, source)| Subclass {
            name: (*name).to_string(),
            source: (*source).to_string(),
            min_level: 3,
        })
        .collect()
}

fn choose(count: usize, from: &[Skill]) -> SkillChoices {
    SkillChoices {
        count,
        pool: SkillPool::Listed(from.to_vec()),
    }
}

fn classes() -> Vec<ClassDefinition> {
    use Ability::*;
    use ArmorCategory::{Heavy, Light, Medium, Shields};
    use Skill::*;
    use WeaponCategory::*;

    vec![
        ClassDefinition {
            name: "Barbarian".to_string(),
            hit_die: HitDie::D12,
            saves: vec![Strength, Constitution],
            skill_choices: choose(
                2,
                &[AnimalHandling, Athletics, Intimidation, Nature, Perception, Survival],
            ),
            armor: vec![Light, Medium, Shields],
            weapons: vec![Simple, Martial],
            subclasses: subclasses(&[
                ("Path of the Berserker", PHB),
                ("Path of the Totem Warrior", PHB),
                ("Path of the Ancestral Guardian", PHB),
                ("Path of the Zealot", PHB),
                ("Path of Wild Heart", PHB),
                ("Path of the World Tree", PHB),
            ]),
        },
        ClassDefinition {
            name: "Bard".to_string(),
            hit_die: HitDie::D8,
            saves: vec![Dexterity, Charisma],
            skill_choices: SkillChoices {
                count: 3,
                pool: SkillPool::Any,
            },
            armor: vec![Light],
            weapons: vec![Simple],
            subclasses: subclasses(&[
                ("College of Lore", PHB),
                ("College of Valor", PHB),
                ("College of Glamour", PHB),
                ("College of Dance", PHB),
            ]),
        },
        ClassDefinition {
            name: "Cleric".to_string(),
            hit_die: HitDie::D8,
            saves: vec![Wisdom, Charisma],
            skill_choices: choose(2, &[History, Insight, Medicine, Persuasion, Religion]),
            armor: vec![Light, Medium, Shields],
            weapons: vec![Simple],
            subclasses: subclasses(&[
                ("Life Domain", PHB),
                ("Light Domain", PHB),
                ("Trickery Domain", PHB),
                ("War Domain", PHB),
                ("Knowledge Domain", FAERUN),
            ]),
        },
        ClassDefinition {
            name: "Druid".to_string(),
            hit_die: HitDie::D8,
            saves: vec![Intelligence, Wisdom],
            skill_choices: choose(
                2,
                &[
                    AnimalHandling,
                    Arcana,
                    Insight,
                    Medicine,
                    Nature,
                    Perception,
                    Religion,
                    Survival,
                ],
            ),
            armor: vec![Light, Shields],
            weapons: vec![Simple],
            subclasses: subclasses(&[
                ("Circle of the Land", PHB),
                ("Circle of the Moon", PHB),
                ("Circle of the Sea", PHB),
                ("Circle of Stars", PHB),
            ]),
        },
        ClassDefinition {
            name: "Fighter".to_string(),
            hit_die: HitDie::D10,
            saves: vec![Strength, Constitution],
            skill_choices: choose(
                2,
                &[
                    Acrobatics,
                    AnimalHandling,
                    Athletics,
                    History,
                    Insight,
                    Intimidation,
                    Perception,
                    Persuasion,
                    Survival,
                ],
            ),
            armor: vec![Light, Medium, Heavy, Shields],
            weapons: vec![Simple, Martial],
            subclasses: subclasses(&[
                ("Champion", PHB),
                ("Battle Master", PHB),
                ("Eldritch Knight", PHB),
                ("Psi Warrior", PHB),
                ("Gladiator", FAERUN),
                ("Purple Dragon Knight (Banneret)", FAERUN),
            ]),
        },
        ClassDefinition {
            name: "Monk".to_string(),
            hit_die: HitDie::D8,
            saves: vec![Strength, Dexterity],
            skill_choices: choose(
                2,
                &[Acrobatics, Athletics, History, Insight, Religion, Stealth],
            ),
            armor: vec![],
            weapons: vec![Simple, MartialLight],
            subclasses: subclasses(&[
                ("Way of the Open Hand", PHB),
                ("Way of Shadow", PHB),
                ("Way of the Four Elements", PHB),
                ("Way of Mercy", PHB),
            ]),
        },
        ClassDefinition {
            name: "Paladin".to_string(),
            hit_die: HitDie::D10,
            saves: vec![Wisdom, Charisma],
            skill_choices: choose(
                2,
                &[Athletics, Insight, Intimidation, Medicine, Persuasion, Religion],
            ),
            armor: vec![Light, Medium, Heavy, Shields],
            weapons: vec![Simple, Martial],
            subclasses: subclasses(&[
                ("Oath of Devotion", PHB),
                ("Oath of the Ancients", PHB),
                ("Oath of Vengeance", PHB),
                ("Oath of Glory", PHB),
                ("Oath of the Noble Genie", FAERUN),
            ]),
        },
        ClassDefinition {
            name: "Ranger".to_string(),
            hit_die: HitDie::D10,
            saves: vec![Strength, Dexterity],
            skill_choices: choose(
                3,
                &[
                    AnimalHandling,
                    Athletics,
                    Insight,
                    Investigation,
                    Nature,
                    Perception,
                    Stealth,
                    Survival,
                ],
            ),
            armor: vec![Light, Medium, Shields],
            weapons: vec![Simple, Martial],
            subclasses: subclasses(&[
                ("Hunter", PHB),
                ("Beast Master", PHB),
                ("Gloom Stalker", PHB),
                ("Fey Wanderer", PHB),
                ("Winter Walker", FAERUN),
            ]),
        },
        ClassDefinition {
            name: "Rogue".to_string(),
            hit_die: HitDie::D8,
            saves: vec![Dexterity, Intelligence],
            skill_choices: choose(
                4,
                &[
                    Acrobatics,
                    Athletics,
                    Deception,
                    Insight,
                    Intimidation,
                    Investigation,
                    Perception,
                    Persuasion,
                    SleightOfHand,
                    Stealth,
                ],
            ),
            armor: vec![Light],
            weapons: vec![Simple, MartialFinesseLight],
            subclasses: subclasses(&[
                ("Thief", PHB),
                ("Assassin", PHB),
                ("Arcane Trickster", PHB),
                ("Soulknife", PHB),
            ]),
        },
        ClassDefinition {
            name: "Sorcerer".to_string(),
            hit_die: HitDie::D6,
            saves: vec![Constitution, Charisma],
            skill_choices: choose(
                2,
                &[Arcana, Deception, Insight, Intimidation, Persuasion, Religion],
            ),
            armor: vec![],
            weapons: vec![Simple],
            subclasses: subclasses(&[
                ("Draconic Bloodline", PHB),
                ("Wild Magic", PHB),
                ("Aberrant Mind", PHB),
                ("Clockwork Soul", PHB),
                ("Spellfire Wielder", FAERUN),
            ]),
        },
        ClassDefinition {
            name: "Warlock".to_string(),
            hit_die: HitDie::D8,
            saves: vec![Wisdom, Charisma],
            skill_choices: choose(
                2,
                &[
                    Arcana,
                    Deception,
                    History,
                    Intimidation,
                    Investigation,
                    Nature,
                    Religion,
                ],
            ),
            armor: vec![Light],
            weapons: vec![Simple],
            subclasses: subclasses(&[
                ("The Archfey", PHB),
                ("The Fiend", PHB),
                ("The Great Old One", PHB),
                ("The Celestial", PHB),
                ("The Inquisitor", FAERUN),
            ]),
        },
        ClassDefinition {
            name: "Wizard".to_string(),
            hit_die: HitDie::D6,
            saves: vec![Intelligence, Wisdom],
            skill_choices: choose(
                2,
                &[
                    Arcana,
                    History,
                    Insight,
                    Investigation,
                    Medicine,
                    Nature,
                    Religion,
                ],
            ),
            armor: vec![],
            weapons: vec![Simple],
            subclasses: subclasses(&[
                ("School of Evocation", PHB),
                ("School of Abjuration", PHB),
                ("School of Illusion", PHB),
                ("School of Divination", PHB),
                ("Bladesinging", FAERUN),
            ]),
        },
    ]
}

fn species() -> Vec<SpeciesDefinition> {
    let entry = |name: &str, speed: i32, size: Size, description: &str| SpeciesDefinition {
        name: name.to_string(),
        speed,
        size,
        description: description.to_string(),
    };

    vec![
        entry(
            "Human",
            30,
            Size::Medium,
            "Versatile and ambitious, humans are the most widespread species in Faerun.",
        ),
        entry(
            "Elf",
            30,
            Size::Medium,
            "Graceful and long-lived, elves possess keen senses and affinity for magic.",
        ),
        entry(
            "Dwarf",
            25,
            Size::Medium,
            "Short and stout, dwarves are known for their resilience and craftsmanship.",
        ),
        entry(
            "Halfling",
            25,
            Size::Small,
            "Small and nimble, halflings are known for their luck and bravery.",
        ),
        entry(
            "Aasimar",
            30,
            Size::Medium,
            "Celestial-touched beings with divine heritage and radiant abilities.",
        ),
        entry(
            "Tiefling",
            30,
            Size::Medium,
            "Infernal-touched beings bearing the mark of fiendish ancestry.",
        ),
        entry(
            "Genasi",
            30,
            Size::Medium,
            "Elemental-touched beings infused with the power of the Inner Planes.",
        ),
        entry(
            "Half-Ogre",
            30,
            Size::Medium,
            "Powerful and intimidating, half-ogres combine human cunning with ogre strength.",
        ),
        entry(
            "Centaur",
            40,
            Size::Medium,
            "Noble beings with the upper body of a humanoid and lower body of a horse.",
        ),
        entry(
            "Lizardfolk",
            30,
            Size::Medium,
            "Cold-blooded reptilian hunters with natural armor and primal instincts.",
        ),
        entry(
            "Atomie",
            25,
            Size::Small,
            "Tiny fey creatures with gossamer wings and mischievous spirits.",
        ),
    ]
}

fn backgrounds() -> Vec<BackgroundDefinition> {
    use Skill::*;

    let table: [(&str, [Skill; 2]); 17] = [
        ("Acolyte", [Insight, Religion]),
        ("Artisan", [Investigation, Persuasion]),
        ("Charlatan", [Deception, SleightOfHand]),
        ("Criminal", [Stealth, SleightOfHand]),
        ("Entertainer", [Acrobatics, Performance]),
        ("Farmer", [AnimalHandling, Nature]),
        ("Folk Hero", [AnimalHandling, Survival]),
        ("Guard", [Athletics, Perception]),
        ("Guide", [Stealth, Survival]),
        ("Hermit", [Medicine, Religion]),
        ("Merchant", [Investigation, Persuasion]),
        ("Noble", [History, Persuasion]),
        ("Sage", [Arcana, History]),
        ("Sailor", [Acrobatics, Perception]),
        ("Scribe", [History, Investigation]),
        ("Soldier", [Athletics, Intimidation]),
        ("Wayfarer", [Insight, Stealth]),
    ];

    table
        .into_iter()
        .map(|(name, skills)| BackgroundDefinition {
            name: name.to_string(),
            skills: skills.to_vec(),
        })
        .collect()
}
