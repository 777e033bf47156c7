// File: src/core/level.rs
use crate::core::types::CharSet;
use serde::{Deserialize, Serialize};

/// Position of a level in its curriculum, starting at 1.
pub type LevelIndex = u32;

/// How a level decides which characters it is drilling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusCharacters {
    /// The characters are listed with the level.
    Explicit(CharSet),
    /// Whatever this level adds over the previous one. The first level
    /// focuses on all of its characters.
    DeriveFromPrevious,
}

impl FocusCharacters {
    pub fn resolve(&self, level: &LevelDefinition, previous: Option<&LevelDefinition>) -> CharSet {
        match self {
            FocusCharacters::Explicit(chars) => chars.clone(),
            FocusCharacters::DeriveFromPrevious => match previous {
                Some(prev) => level.chars.difference(&prev.chars),
                None => level.chars.clone(),
            },
        }
    }
}

/// Scoring formula for a level's candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    /// Every focus character adds 1000, so words packed with new letters win.
    #[default]
    FocusWeighted,
    /// A flat 1000 for any qualifying word.
    FlatFocus,
}

impl ScoringRule {
    pub fn score(self, focus_count: usize, frequency: u64, length: usize, level: LevelIndex) -> f64 {
        let focus_weight = match self {
            ScoringRule::FocusWeighted => focus_count as f64 * 1000.0,
            ScoringRule::FlatFocus => 1000.0,
        };
        focus_weight + frequency as f64 / 100.0 + (length as f64 * level as f64)
    }
}

/// One step of a curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub index: LevelIndex,
    pub name: String,
    pub description: String,
    /// Everything typable at this level.
    pub chars: CharSet,
    pub focus: FocusCharacters,
    #[serde(default)]
    pub scoring: ScoringRule,
}

impl LevelDefinition {
    pub fn focus_chars(&self, previous: Option<&LevelDefinition>) -> CharSet {
        self.focus.resolve(self, previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(index: LevelIndex, chars: &str, focus: FocusCharacters) -> LevelDefinition {
        LevelDefinition {
            index,
            name: format!("Level {index}"),
            description: String::new(),
            chars: CharSet::new(chars),
            focus,
            scoring: ScoringRule::default(),
        }
    }

    #[test]
    fn test_explicit_focus() {
        let lvl = level(2, "𐑦𐑩𐑧𐑐", FocusCharacters::Explicit(CharSet::new("𐑐")));
        assert_eq!(lvl.focus_chars(None).as_str(), "𐑐");
    }

    #[test]
    fn test_derived_focus() {
        let first = level(1, "𐑦𐑩", FocusCharacters::DeriveFromPrevious);
        let second = level(2, "𐑦𐑩𐑧𐑐", FocusCharacters::DeriveFromPrevious);
        assert_eq!(first.focus_chars(None).as_str(), "𐑦𐑩");
        assert_eq!(second.focus_chars(Some(&first)).as_str(), "𐑧𐑐");
    }

    #[test]
    fn test_scoring_rules() {
        // 2 * 1000 + 500 / 100 + 3 * 4
        assert_eq!(ScoringRule::FocusWeighted.score(2, 500, 3, 4), 2017.0);
        // 1000 + 500 / 100 + 3 * 4
        assert_eq!(ScoringRule::FlatFocus.score(2, 500, 3, 4), 1017.0);
        assert_eq!(ScoringRule::FocusWeighted.score(1, 250, 1, 1), 1003.5);
    }

    #[test]
    fn test_level_json_shape() {
        let json = r#"{
            "index": 5,
            "name": "Number Row Focus",
            "description": "Master the number row characters",
            "chars": "𐑶𐑬",
            "focus": {"explicit": "𐑶"},
            "scoring": "flat_focus"
        }"#;
        let lvl: LevelDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(lvl.scoring, ScoringRule::FlatFocus);
        assert_eq!(lvl.focus, FocusCharacters::Explicit(CharSet::new("𐑶")));

        let derived = r#"{"index": 1, "name": "a", "description": "b", "chars": "𐑶", "focus": "derive_from_previous"}"#;
        let lvl: LevelDefinition = serde_json::from_str(derived).unwrap();
        assert_eq!(lvl.focus, FocusCharacters::DeriveFromPrevious);
        assert_eq!(lvl.scoring, ScoringRule::FocusWeighted);
    }
}
