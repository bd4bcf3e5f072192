//! Rules-derivation engine for Adventurers Ledger.
//!
//! Turns a character's raw attributes into game values: ability modifiers,
//! proficiency bonus, hit points, and skill, save and attack modifiers.
//! Ships with the 2024 rules tables plus the Faerun campaign content, and
//! accepts JSON content packs for house rules.
//!
//! Every operation is a pure function of its inputs and a borrowed
//! [`RuleBook`]; nothing here performs I/O or holds mutable state.

pub mod config;
pub mod creation;
pub mod dice;
pub mod error;
pub mod formula;
pub mod roll;
pub mod rules;
pub mod sheet;
pub mod validate;

pub use config::CreationPolicy;
pub use creation::{
    CreationOutcome, CreationRequest, build, create_character, resolve_proficiencies,
};
pub use dice::HitDie;
pub use error::{MechError, MechResult};
pub use formula::{hp_per_level, modifier, proficiency_bonus, starting_hp};
pub use roll::{AttackRoll, RollContext, SavingThrow, SkillCheck};
pub use rules::{RuleBook, governing_ability, standard};
pub use sheet::CharacterSheet;
pub use validate::{ValidationIssue, validate_character, validate_skill_choices};
