//! Policy knobs for character creation.

/// How strictly character creation checks its input.
///
/// The default policy is permissive: skill choices are merged without
/// checking them against the class menu, and starting hit points are not
/// floored. Existing clients rely on that, so tightening is opt-in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationPolicy {
    /// Reject skill choices that are unknown, outside the class pool, or
    /// that do not match the class's choice count.
    pub enforce_skill_choices: bool,
    /// Reject characters whose starting hit points fall below this value.
    pub min_starting_hp: Option<i32>,
}

impl CreationPolicy {
    /// Strict policy: enforce skill choices and require at least 1 hit point.
    pub fn strict() -> Self {
        Self {
            enforce_skill_choices: true,
            min_starting_hp: Some(1),
        }
    }

    /// Enable or disable skill-choice enforcement.
    pub fn with_skill_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_skill_choices = enforce;
        self
    }

    /// Set the minimum starting hit points.
    pub fn with_min_starting_hp(mut self, minimum: i32) -> Self {
        self.min_starting_hp = Some(minimum);
        self
    }

    /// Returns true if nothing is enforced.
    pub fn is_permissive(&self) -> bool {
        *self == Self::default()
    }
}
