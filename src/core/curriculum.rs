// File: src/core/curriculum.rs
use crate::config::GeneratorConfig;
use crate::core::lexicon::Lexicon;
use crate::core::ligature::LigatureTable;
use crate::core::types::{CandidateWord, CharSet, LessonRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Levels needed before a compound lesson is placed.
const MIN_LEVELS_FOR_COMPOUND: usize = 3;

/// Lessons keyed by their 1-based position.
///
/// Serialises as a JSON object with keys "1", "2", ... in numeric order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curriculum {
    lessons: BTreeMap<u32, LessonRecord>,
}

impl Curriculum {
    /// Numbers the lessons contiguously from 1.
    pub fn from_lessons<I>(lessons: I) -> Self
    where
        I: IntoIterator<Item = LessonRecord>,
    {
        Self {
            lessons: (1..).zip(lessons).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn get(&self, number: u32) -> Option<&LessonRecord> {
        self.lessons.get(&number)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &LessonRecord)> {
        self.lessons.iter().map(|(number, lesson)| (*number, lesson))
    }
}

/// Result of building the compound-letters lesson.
#[derive(Debug, Clone, PartialEq)]
pub enum CompoundOutcome {
    Built(LessonRecord),
    Skipped { found: usize },
    /// Too few levels survived, or the layout has no character set.
    NotAttempted,
}

/// Builds the compound lesson and places it among the level lessons.
pub struct CurriculumAssembler<'a> {
    ligatures: &'a LigatureTable,
    config: &'a GeneratorConfig,
}

impl<'a> CurriculumAssembler<'a> {
    pub fn new(ligatures: &'a LigatureTable, config: &'a GeneratorConfig) -> Self {
        Self { ligatures, config }
    }

    /// Words containing a ligature and typable on the full keyboard, best
    /// first. `focus_count` holds the number of distinct ligatures.
    pub fn compound_candidates<'w>(&self, lexicon: &'w Lexicon, all_chars: &CharSet) -> Vec<CandidateWord<'w>> {
        let mut candidates: Vec<CandidateWord<'w>> = lexicon
            .iter()
            .filter_map(|word| {
                let ligature_count = self.ligatures.count_ligatures(&word.text);
                if ligature_count == 0 || !self.ligatures.can_type(&word.text, all_chars, true) {
                    return None;
                }
                let length = word.char_len();
                let score = ligature_count as f64 * 1000.0 + word.frequency as f64 / 100.0 + length as f64;
                Some(CandidateWord { word, focus_count: ligature_count, length, score })
            })
            .collect();

        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates
    }

    pub fn compound_lesson(&self, lexicon: &Lexicon, all_chars: &CharSet) -> CompoundOutcome {
        if all_chars.is_empty() {
            return CompoundOutcome::NotAttempted;
        }
        let words: Vec<String> = self
            .compound_candidates(lexicon, all_chars)
            .into_iter()
            .take(self.config.cap)
            .map(|c| c.word.text.clone())
            .collect();

        if words.len() < self.config.min_words {
            return CompoundOutcome::Skipped { found: words.len() };
        }
        CompoundOutcome::Built(LessonRecord {
            name: self.config.compound_name.clone(),
            description: format!("Practice typing ligatures: {}", self.ligatures.symbol_list()),
            chars: all_chars.as_str().to_string(),
            words,
        })
    }

    /// Where the compound lesson goes among `surviving` level lessons:
    /// before the third-from-last one, so the final two stay review levels.
    pub fn insertion_index(surviving: usize) -> Option<usize> {
        (surviving >= MIN_LEVELS_FOR_COMPOUND).then(|| surviving - 2)
    }

    pub fn assemble(&self, mut levels: Vec<LessonRecord>, compound: Option<LessonRecord>) -> Curriculum {
        if let (Some(lesson), Some(at)) = (compound, Self::insertion_index(levels.len())) {
            levels.insert(at, lesson);
        }
        Curriculum::from_lessons(levels)
    }
}
