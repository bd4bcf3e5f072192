//! Core types for Adventurers Ledger.
//!
//! Defines the six abilities, the eighteen canonical skills, proficiency
//! sets, and the [`Character`] aggregate stored by the application. All
//! rules arithmetic lives in `ledger-mechanics`; this crate only holds data.

pub mod ability;
pub mod character;
pub mod error;
pub mod proficiency;
pub mod skill;

pub use ability::{Ability, AbilityScores};
pub use character::{Character, CharacterPatch};
pub use error::{CoreError, CoreResult};
pub use proficiency::{ArmorCategory, ProficiencySet, WeaponCategory};
pub use skill::Skill;
