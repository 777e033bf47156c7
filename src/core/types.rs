// src/core/types.rs
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One lexicon entry: a word in the target script and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub text: String,
    pub frequency: u64,
}

impl WordRecord {
    pub fn new(text: impl Into<String>, frequency: u64) -> Self {
        Self { text: text.into(), frequency }
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A set of characters that keeps the string it was written as.
///
/// Level files echo the character string back verbatim, so the original text
/// is preserved alongside the lookup set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CharSet {
    text: String,
    members: BTreeSet<char>,
}

impl CharSet {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let members = text.chars().collect();
        Self { text, members }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn contains(&self, c: char) -> bool {
        self.members.contains(&c)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Characters of `self` missing from `other`, in `self`'s order.
    pub fn difference(&self, other: &CharSet) -> CharSet {
        CharSet::new(
            self.text
                .chars()
                .unique()
                .filter(|c| !other.contains(*c))
                .collect::<String>(),
        )
    }

    /// All characters of all sets, in order of first appearance.
    pub fn union<'a, I>(sets: I) -> CharSet
    where
        I: IntoIterator<Item = &'a CharSet>,
    {
        CharSet::new(
            sets.into_iter()
                .flat_map(|set| set.text.chars())
                .unique()
                .collect::<String>(),
        )
    }
}

impl From<String> for CharSet {
    fn from(text: String) -> Self {
        CharSet::new(text)
    }
}

impl From<&str> for CharSet {
    fn from(text: &str) -> Self {
        CharSet::new(text)
    }
}

impl From<CharSet> for String {
    fn from(set: CharSet) -> Self {
        set.text
    }
}

/// A word under consideration for one level. Built fresh for every level.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateWord<'a> {
    pub word: &'a WordRecord,
    pub focus_count: usize,
    pub length: usize,
    pub score: f64,
}

/// One lesson as written to the lesson file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRecord {
    pub name: String,
    pub description: String,
    pub chars: String,
    pub words: Vec<String>,
}

impl LessonRecord {
    pub fn average_length(&self) -> f64 {
        if self.words.is_empty() {
            return 0.0;
        }
        let total: usize = self.words.iter().map(|w| w.chars().count()).sum();
        total as f64 / self.words.len() as f64
    }
}
