//! Arithmetic primitives shared by character creation and roll queries.
//!
//! Every function here is total: any integer input produces a result, even
//! scores outside 1..=30 or levels below 1.

use crate::rules::RuleBook;

/// Ability modifier for a score: `floor((score - 10) / 2)`.
///
/// Rounds toward negative infinity, so a score of 9 gives -1.
pub fn modifier(score: i32) -> i32 {
    score.div_euclid(2) - 5
}

/// Proficiency bonus for a character level.
///
/// 2 at levels 1-4, then +1 every four levels. Levels below 1 clamp to 2.
pub fn proficiency_bonus(level: i32) -> i32 {
    if level < 1 {
        return 2;
    }
    (level - 1) / 4 + 2
}

/// Render a modifier with an explicit sign: `+3`, `+0`, `-2`.
pub fn signed(value: i32) -> String {
    if value >= 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

/// First-level hit points: the class hit die's maximum face plus the
/// constitution modifier. Not floored; very low constitution can produce
/// zero or negative hit points. Saturates at the `i32` bounds.
pub fn starting_hp(book: &RuleBook, class_name: &str, con_modifier: i32) -> i32 {
    book.hit_die(class_name).sides().saturating_add(con_modifier)
}

/// Hit points gained per level past the first, using the die's fixed average.
pub fn hp_per_level(book: &RuleBook, class_name: &str, con_modifier: i32) -> i32 {
    book.hit_die(class_name).average().saturating_add(con_modifier)
}
