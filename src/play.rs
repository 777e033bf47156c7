// File: src/play.rs
//! Word lists for play mode, bucketed by word length.

use crate::core::lexicon::Lexicon;
use crate::core::types::WordRecord;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayConfig {
    pub max_length: usize,
    pub per_length: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self { max_length: 10, per_length: 200 }
    }
}

/// Length in characters -> most frequent words of that length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayWords {
    buckets: BTreeMap<usize, Vec<String>>,
}

impl PlayWords {
    /// Every length from 1 to `max_length` gets a bucket, even if empty.
    pub fn build(lexicon: &Lexicon, config: &PlayConfig) -> Self {
        let mut grouped = lexicon
            .iter()
            .sorted_by(|a, b| b.frequency.cmp(&a.frequency))
            .into_group_map_by(|word| word.char_len());

        let buckets = (1..=config.max_length)
            .map(|length| {
                let words = grouped
                    .remove(&length)
                    .unwrap_or_default()
                    .into_iter()
                    .take(config.per_length)
                    .map(|word: &WordRecord| word.text.clone())
                    .collect();
                (length, words)
            })
            .collect();
        Self { buckets }
    }

    pub fn get(&self, length: usize) -> &[String] {
        self.buckets.get(&length).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.buckets.iter().map(|(length, words)| (*length, words.as_slice()))
    }
}
