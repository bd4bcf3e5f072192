//! Error types for the rules engine.

use ledger_core::CoreError;

/// Errors that can occur during rules derivation.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A skill name is not one of the eighteen canonical skills.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// An ability name is not one of the six abilities.
    #[error("invalid ability: {0}")]
    InvalidAbility(String),

    /// A rulebook or content pack is malformed.
    #[error("invalid rulebook: {0}")]
    InvalidRuleBook(String),

    /// A submitted skill choice is not allowed for the class.
    #[error("invalid skill choice: {0}")]
    InvalidSkillChoice(String),

    /// The number of submitted skill choices does not match the class menu.
    #[error("{class} chooses {expected} skills, got {actual}")]
    SkillChoiceCount {
        /// Class whose menu was checked.
        class: String,
        /// Number of skills the class chooses.
        expected: usize,
        /// Number of distinct skills submitted.
        actual: usize,
    },

    /// Starting hit points fall below the configured minimum.
    #[error("starting hit points {hp} below minimum {minimum}")]
    StartingHpTooLow {
        /// Computed starting hit points.
        hp: i32,
        /// Configured minimum.
        minimum: i32,
    },

    /// An error from the core data model.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<serde_json::Error> for MechError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidRuleBook(err.to_string())
    }
}

/// Convenience result type for rules operations.
pub type MechResult<T> = Result<T, MechError>;
