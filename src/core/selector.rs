// File: src/core/selector.rs
use crate::config::GeneratorConfig;
use crate::core::level::LevelDefinition;
use crate::core::lexicon::Lexicon;
use crate::core::ligature::LigatureTable;
use crate::core::types::{CandidateWord, CharSet, LessonRecord};

/// Result of selecting words for one level.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelOutcome {
    Selected(LessonRecord),
    /// Too few qualifying words; the level is left out of the curriculum.
    Skipped { found: usize },
}

/// Picks and ranks the words for individual levels.
pub struct LevelSelector<'a> {
    ligatures: &'a LigatureTable,
    config: &'a GeneratorConfig,
    use_ligatures: bool,
}

impl<'a> LevelSelector<'a> {
    pub fn new(ligatures: &'a LigatureTable, config: &'a GeneratorConfig, use_ligatures: bool) -> Self {
        Self { ligatures, config, use_ligatures }
    }

    /// Scores every word that is typable at `level` and drills at least one
    /// focus character, best first. Equal scores keep lexicon order.
    pub fn candidates<'w>(
        &self,
        lexicon: &'w Lexicon,
        level: &LevelDefinition,
        focus: &CharSet,
    ) -> Vec<CandidateWord<'w>> {
        let mut candidates: Vec<CandidateWord<'w>> = lexicon
            .iter()
            .filter(|word| self.ligatures.can_type(&word.text, &level.chars, self.use_ligatures))
            .filter_map(|word| {
                let focus_count = self.ligatures.count_focus_chars(&word.text, focus, self.use_ligatures);
                if focus_count == 0 {
                    return None;
                }
                let length = word.char_len();
                let score = level.scoring.score(focus_count, word.frequency, length, level.index);
                Some(CandidateWord { word, focus_count, length, score })
            })
            .collect();

        // sort_by is stable
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates
    }

    pub fn select(&self, lexicon: &Lexicon, level: &LevelDefinition, focus: &CharSet) -> LevelOutcome {
        let words: Vec<String> = self
            .candidates(lexicon, level, focus)
            .into_iter()
            .take(self.config.cap)
            .map(|c| c.word.text.clone())
            .collect();

        if words.len() < self.config.min_words {
            return LevelOutcome::Skipped { found: words.len() };
        }
        LevelOutcome::Selected(LessonRecord {
            name: level.name.clone(),
            description: level.description.clone(),
            chars: level.chars.as_str().to_string(),
            words,
        })
    }
}
