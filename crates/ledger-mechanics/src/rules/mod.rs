//! Rules tables: classes, species, backgrounds, and skills.
//!
//! A [`RuleBook`] holds the static reference data the engine derives
//! characters from. The built-in tables come from [`preset::faerun_2024`];
//! house rules can be layered on top with [`RuleBook::from_json`] and
//! [`RuleBook::merge`].
//!
//! Lookups by class, species or background name never fail. An unknown name
//! yields an empty list, a d8 hit die, or a speed of 30, so custom content
//! degrades instead of aborting. Skill names are the exception: the skill
//! list is fixed, so [`governing_ability`] rejects names it does not know.

pub mod preset;

use std::sync::LazyLock;

use ledger_core::character::DEFAULT_SPEED;
use ledger_core::{Ability, ArmorCategory, Skill, WeaponCategory};
use serde::{Deserialize, Serialize};

use crate::dice::HitDie;
use crate::error::{MechError, MechResult};

static STANDARD: LazyLock<RuleBook> = LazyLock::new(preset::faerun_2024);

/// The built-in rulebook, built once on first use and shared process-wide.
pub fn standard() -> &'static RuleBook {
    &STANDARD
}

/// The ability that governs a skill, by exact sheet name.
pub fn governing_ability(skill_name: &str) -> MechResult<Ability> {
    Skill::from_name(skill_name)
        .map(Skill::ability)
        .ok_or_else(|| MechError::UnknownSkill(skill_name.to_string()))
}

/// A specialization a class picks at a fixed level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subclass {
    /// Subclass name (e.g. "Battle Master").
    pub name: String,
    /// Book or supplement it comes from.
    pub source: String,
    /// Class level at which it can be chosen.
    #[serde(rename = "level")]
    pub min_level: u32,
}

/// Which skills a class may pick from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PoolRepr", into = "PoolRepr")]
pub enum SkillPool {
    /// Any of the eighteen skills.
    Any,
    /// Only the listed skills.
    Listed(Vec<Skill>),
}

impl SkillPool {
    /// Returns true if `skill` may be chosen from this pool.
    pub fn allows(&self, skill: Skill) -> bool {
        match self {
            Self::Any => true,
            Self::Listed(skills) => skills.contains(&skill),
        }
    }
}

/// Wire form of [`SkillPool`]: either the string `"any"` or a list.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PoolRepr {
    Keyword(String),
    List(Vec<Skill>),
}

impl TryFrom<PoolRepr> for SkillPool {
    type Error = String;

    fn try_from(repr: PoolRepr) -> Result<Self, Self::Error> {
        match repr {
            PoolRepr::Keyword(k) if k == "any" => Ok(Self::Any),
            PoolRepr::Keyword(k) => Err(format!("expected \"any\" or a skill list, got {k:?}")),
            PoolRepr::List(skills) => Ok(Self::Listed(skills)),
        }
    }
}

impl From<SkillPool> for PoolRepr {
    fn from(pool: SkillPool) -> Self {
        match pool {
            SkillPool::Any => Self::Keyword("any".to_string()),
            SkillPool::Listed(skills) => Self::List(skills),
        }
    }
}

/// How many skills a class picks, and from where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillChoices {
    /// Number of skills to choose.
    #[serde(rename = "choose")]
    pub count: usize,
    /// Eligible skills.
    #[serde(rename = "from")]
    pub pool: SkillPool,
}

/// Menu for classes the rulebook does not know: choose nothing from nothing.
static NO_CHOICES: SkillChoices = SkillChoices {
    count: 0,
    pool: SkillPool::Listed(Vec::new()),
};

/// Static definition of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDefinition {
    /// Class name (e.g. "Fighter").
    pub name: String,
    /// Hit die size.
    pub hit_die: HitDie,
    /// The two abilities with saving-throw proficiency.
    pub saves: Vec<Ability>,
    /// Skill-choice menu.
    pub skill_choices: SkillChoices,
    /// Armor training.
    #[serde(default)]
    pub armor: Vec<ArmorCategory>,
    /// Weapon training.
    #[serde(default)]
    pub weapons: Vec<WeaponCategory>,
    /// Subclasses in catalog order.
    #[serde(default)]
    pub subclasses: Vec<Subclass>,
}

/// Creature size category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    /// Tiny.
    Tiny,
    /// Small.
    Small,
    /// Medium.
    Medium,
    /// Large.
    Large,
}

/// Static definition of a playable species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDefinition {
    /// Species name (e.g. "Dwarf").
    pub name: String,
    /// Base walking speed in feet.
    pub speed: i32,
    /// Size category.
    pub size: Size,
    /// Short flavor text.
    #[serde(default)]
    pub description: String,
}

/// Static definition of a background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundDefinition {
    /// Background name (e.g. "Sage").
    pub name: String,
    /// The two skills the background grants.
    #[serde(rename = "skill_proficiencies")]
    pub skills: Vec<Skill>,
}

/// Catalog entry for a class, as shown to a player building a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSummary<'a> {
    /// Class name.
    pub name: &'a str,
    /// Hit die size.
    pub hit_die: HitDie,
    /// Skill-choice menu.
    pub skill_choices: &'a SkillChoices,
    /// Available subclasses.
    pub subclasses: &'a [Subclass],
}

/// A complete set of rules tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleBook {
    /// Rulebook or content pack name.
    pub name: String,
    /// Classes in catalog order.
    pub classes: Vec<ClassDefinition>,
    /// Species in catalog order.
    pub species: Vec<SpeciesDefinition>,
    /// Backgrounds in catalog order.
    pub backgrounds: Vec<BackgroundDefinition>,
}

impl RuleBook {
    /// Load a rulebook or content pack from JSON.
    ///
    /// Any section may be omitted. Backgrounds must grant exactly two skills
    /// and classes exactly two saving throws.
    pub fn from_json(text: &str) -> MechResult<Self> {
        let book: Self = serde_json::from_str(text)?;
        book.check()?;
        Ok(book)
    }

    /// Structural checks serde cannot express.
    fn check(&self) -> MechResult<()> {
        for class in &self.classes {
            if class.name.trim().is_empty() {
                return Err(MechError::InvalidRuleBook("class with empty name".to_string()));
            }
            if class.saves.len() != 2 {
                return Err(MechError::InvalidRuleBook(format!(
                    "class '{}' must grant exactly 2 saving throws, found {}",
                    class.name,
                    class.saves.len()
                )));
            }
        }
        for background in &self.backgrounds {
            if background.skills.len() != 2 {
                return Err(MechError::InvalidRuleBook(format!(
                    "background '{}' must grant exactly 2 skills, found {}",
                    background.name,
                    background.skills.len()
                )));
            }
        }
        Ok(())
    }

    /// Layer a content pack over this rulebook.
    ///
    /// Entries whose name already exists are replaced in place; new entries
    /// are appended, keeping catalog order stable.
    pub fn merge(&mut self, pack: RuleBook) {
        tracing::debug!(
            pack = %pack.name,
            classes = pack.classes.len(),
            species = pack.species.len(),
            backgrounds = pack.backgrounds.len(),
            "merging content pack"
        );
        upsert(&mut self.classes, pack.classes);
        upsert(&mut self.species, pack.species);
        upsert(&mut self.backgrounds, pack.backgrounds);
    }

    /// Builder-style variant of [`RuleBook::merge`].
    pub fn with_pack(mut self, pack: RuleBook) -> Self {
        self.merge(pack);
        self
    }

    /// Find a class by exact name.
    pub fn class(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Find a species by exact name.
    pub fn species_definition(&self, name: &str) -> Option<&SpeciesDefinition> {
        self.species.iter().find(|s| s.name == name)
    }

    /// Find a background by exact name.
    pub fn background(&self, name: &str) -> Option<&BackgroundDefinition> {
        self.backgrounds.iter().find(|b| b.name == name)
    }

    /// Saving-throw proficiencies for a class. Empty if unknown.
    pub fn save_proficiencies(&self, class_name: &str) -> &[Ability] {
        self.class(class_name)
            .map(|c| c.saves.as_slice())
            .unwrap_or_default()
    }

    /// Skill-choice menu for a class. Zero choices if unknown.
    pub fn skill_choice_menu(&self, class_name: &str) -> &SkillChoices {
        self.class(class_name)
            .map_or(&NO_CHOICES, |c| &c.skill_choices)
    }

    /// Hit die for a class. d8 if unknown.
    pub fn hit_die(&self, class_name: &str) -> HitDie {
        self.class(class_name)
            .map(|c| c.hit_die)
            .unwrap_or_default()
    }

    /// Armor training for a class. Empty if unknown.
    pub fn armor_proficiencies(&self, class_name: &str) -> &[ArmorCategory] {
        self.class(class_name)
            .map(|c| c.armor.as_slice())
            .unwrap_or_default()
    }

    /// Weapon training for a class. Empty if unknown.
    pub fn weapon_proficiencies(&self, class_name: &str) -> &[WeaponCategory] {
        self.class(class_name)
            .map(|c| c.weapons.as_slice())
            .unwrap_or_default()
    }

    /// Skills granted by a background. Empty if unknown.
    pub fn background_skills(&self, background_name: &str) -> &[Skill] {
        self.background(background_name)
            .map(|b| b.skills.as_slice())
            .unwrap_or_default()
    }

    /// Base walking speed for a species. 30 if unknown.
    pub fn species_speed(&self, species_name: &str) -> i32 {
        self.species_definition(species_name)
            .map_or(DEFAULT_SPEED, |s| s.speed)
    }

    /// Subclasses for a class in catalog order. Empty if unknown.
    pub fn subclasses(&self, class_name: &str) -> &[Subclass] {
        self.class(class_name)
            .map(|c| c.subclasses.as_slice())
            .unwrap_or_default()
    }

    /// One catalog entry per class, in catalog order.
    pub fn class_catalog(&self) -> Vec<ClassSummary<'_>> {
        self.classes
            .iter()
            .map(|c| ClassSummary {
                name: &c.name,
                hit_die: c.hit_die,
                skill_choices: &c.skill_choices,
                subclasses: &c.subclasses,
            })
            .collect()
    }
}

/// Table entries keyed by name.
trait Named {
    fn name(&self) -> &str;
}

impl Named for ClassDefinition {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for SpeciesDefinition {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for BackgroundDefinition {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Replace entries with a matching name, append the rest.
fn upsert<T: Named>(target: &mut Vec<T>, incoming: Vec<T>) {
    for item in incoming {
        match target.iter().position(|t| t.name() == item.name()) {
            Some(idx) => target[idx] = item,
            None => target.push(item),
        }
    }
}
