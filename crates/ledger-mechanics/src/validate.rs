//! Validation of player input and stored characters against a rulebook.
//!
//! Nothing here runs implicitly. Character creation only consults the
//! skill-choice checks when [`CreationPolicy`](crate::config::CreationPolicy)
//! asks for it; callers can also run the checks themselves and present the
//! issues to the player.

use std::collections::HashSet;

use ledger_core::{Character, Skill};

use crate::error::MechError;
use crate::rules::RuleBook;

/// A warning or error found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// What the issue is about (a character or class name).
    pub subject: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(subject: &str, message: impl Into<String>) -> Self {
        Self {
            subject: subject.to_string(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(subject: &str, message: impl Into<String>) -> Self {
        Self {
            subject: subject.to_string(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.subject, self.message)
    }
}

/// Check a player's skill choices against a class's skill-choice menu.
///
/// Flags names that are not skills, skills outside the class pool, repeated
/// picks, and a number of distinct picks different from the menu count.
/// Classes the rulebook does not know produce no issues.
pub fn validate_skill_choices(
    book: &RuleBook,
    class_name: &str,
    choices: &[String],
) -> Vec<ValidationIssue> {
    skill_choice_errors(book, class_name, choices)
        .into_iter()
        .map(|e| ValidationIssue::error(class_name, e.to_string()))
        .collect()
}

/// The same checks as [`validate_skill_choices`], as typed errors.
pub(crate) fn skill_choice_errors(
    book: &RuleBook,
    class_name: &str,
    choices: &[String],
) -> Vec<MechError> {
    let Some(class) = book.class(class_name) else {
        return Vec::new();
    };
    let menu = &class.skill_choices;

    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for name in choices {
        if !seen.insert(name.as_str()) {
            errors.push(MechError::InvalidSkillChoice(format!("'{name}' chosen twice")));
            continue;
        }
        match Skill::from_name(name) {
            None => errors.push(MechError::InvalidSkillChoice(format!(
                "'{name}' is not a skill"
            ))),
            Some(skill) if !menu.pool.allows(skill) => {
                errors.push(MechError::InvalidSkillChoice(format!(
                    "'{name}' is not on the {} skill list",
                    class.name
                )));
            }
            Some(_) => {}
        }
    }

    if seen.len() != menu.count {
        errors.push(MechError::SkillChoiceCount {
            class: class.name.clone(),
            expected: menu.count,
            actual: seen.len(),
        });
    }

    errors
}

/// Check a stored character for consistency with a rulebook.
///
/// Unknown class, species or background names are warnings: house-ruled
/// content is allowed. Broken invariants (level below 1, non-positive
/// maximum hit points, unknown skill names) are errors.
pub fn validate_character(book: &RuleBook, character: &Character) -> Vec<ValidationIssue> {
    let subject = character.name.as_str();
    let mut issues = Vec::new();

    if character.level < 1 {
        issues.push(ValidationIssue::error(
            subject,
            format!("level {} is below 1", character.level),
        ));
    }

    if character.hp_max <= 0 {
        issues.push(ValidationIssue::error(
            subject,
            format!("maximum hit points {} is not positive", character.hp_max),
        ));
    }

    for name in character.proficiencies.unknown_skills() {
        issues.push(ValidationIssue::error(
            subject,
            format!("proficient in unknown skill '{name}'"),
        ));
    }

    let class = book.class(&character.class_name);
    if class.is_none() {
        issues.push(ValidationIssue::warning(
            subject,
            format!("unknown class '{}'", character.class_name),
        ));
    }
    if book.species_definition(&character.species).is_none() {
        issues.push(ValidationIssue::warning(
            subject,
            format!("unknown species '{}'", character.species),
        ));
    }
    if book.background(&character.background).is_none() {
        issues.push(ValidationIssue::warning(
            subject,
            format!("unknown background '{}'", character.background),
        ));
    }

    if let (Some(class), Some(chosen)) = (class, character.subclass.as_deref()) {
        match class.subclasses.iter().find(|s| s.name == chosen) {
            None => issues.push(ValidationIssue::warning(
                subject,
                format!("'{chosen}' is not a {} subclass", class.name),
            )),
            Some(sub) if i64::from(character.level) < i64::from(sub.min_level) => {
                issues.push(ValidationIssue::warning(
                    subject,
                    format!(
                        "subclass '{chosen}' requires level {}, character is level {}",
                        sub.min_level, character.level
                    ),
                ));
            }
            Some(_) => {}
        }
    }

    issues
}
