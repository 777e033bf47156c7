// File: src/script.rs
//! Target-script membership checks.

use std::ops::RangeInclusive;

/// The Shavian Unicode block.
pub const SHAVIAN_BLOCK: RangeInclusive<char> = '\u{10450}'..='\u{1047F}';

/// The namer dot, written before proper nouns.
pub const NAMER_DOT: char = '\u{00B7}';

pub fn is_shavian(c: char) -> bool {
    SHAVIAN_BLOCK.contains(&c)
}

/// Accepts words written entirely in the target script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptFilter {
    /// Also accept the namer dot anywhere in the word.
    pub allow_namer: bool,
}

impl Default for ScriptFilter {
    fn default() -> Self {
        Self { allow_namer: true }
    }
}

impl ScriptFilter {
    pub fn accepts(&self, word: &str) -> bool {
        !word.is_empty()
            && word
                .chars()
                .all(|c| is_shavian(c) || (self.allow_namer && c == NAMER_DOT))
    }
}

/// Prefixes the namer dot unless the word already starts with one.
pub fn mark_proper_noun(word: &str) -> String {
    if word.starts_with(NAMER_DOT) {
        word.to_string()
    } else {
        let mut marked = String::with_capacity(word.len() + NAMER_DOT.len_utf8());
        marked.push(NAMER_DOT);
        marked.push_str(word);
        marked
    }
}
