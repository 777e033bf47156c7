use crate::config::{GeneratorConfig, LayoutDefinition};
use crate::core::curriculum::{CompoundOutcome, Curriculum, CurriculumAssembler};
use crate::core::level::LevelIndex;
use crate::core::lexicon::Lexicon;
use crate::core::ligature::LigatureTable;
use crate::core::selector::{LevelOutcome, LevelSelector};

/// What happened to one level during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelReport {
    pub index: LevelIndex,
    pub name: String,
    /// Words kept, or words found when the level was skipped.
    pub words: usize,
    pub average_length: f64,
    pub skipped: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompoundReport {
    Inserted { position: u32, words: usize, average_length: f64 },
    Skipped { found: usize },
    NotAttempted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub levels: Vec<LevelReport>,
    pub compound: CompoundReport,
}

/// Output of one (lexicon, layout, ligature mode) run.
#[derive(Debug, Clone)]
pub struct Generation {
    pub curriculum: Curriculum,
    pub report: GenerationReport,
}

/// Runs the whole pipeline for a layout: level selection, compound lesson,
/// assembly. Holds no state between runs.
pub struct LessonEngine {
    config: GeneratorConfig,
    ligatures: LigatureTable,
}

impl LessonEngine {
    pub fn new(config: GeneratorConfig, ligatures: LigatureTable) -> Self {
        Self { config, ligatures }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn ligatures(&self) -> &LigatureTable {
        &self.ligatures
    }

    pub fn generate(&self, lexicon: &Lexicon, layout: &LayoutDefinition, use_ligatures: bool) -> Generation {
        let selector = LevelSelector::new(&self.ligatures, &self.config, use_ligatures);
        let assembler = CurriculumAssembler::new(&self.ligatures, &self.config);

        let mut lessons = Vec::new();
        let mut level_reports = Vec::new();
        for (level, previous) in layout.ordered_levels() {
            let focus = level.focus_chars(previous);
            let report = match selector.select(lexicon, level, &focus) {
                LevelOutcome::Selected(lesson) => {
                    let report = LevelReport {
                        index: level.index,
                        name: level.name.clone(),
                        words: lesson.words.len(),
                        average_length: lesson.average_length(),
                        skipped: false,
                    };
                    lessons.push(lesson);
                    report
                }
                LevelOutcome::Skipped { found } => {
                    log::debug!(
                        "{}: level {} ({}) skipped, only {} words available",
                        layout.id,
                        level.index,
                        level.name,
                        found
                    );
                    LevelReport {
                        index: level.index,
                        name: level.name.clone(),
                        words: found,
                        average_length: 0.0,
                        skipped: true,
                    }
                }
            };
            level_reports.push(report);
        }

        let insert_at = CurriculumAssembler::insertion_index(lessons.len());
        let outcome = match insert_at {
            Some(_) => assembler.compound_lesson(lexicon, &layout.all_chars()),
            None => CompoundOutcome::NotAttempted,
        };

        let (compound, compound_report) = match outcome {
            CompoundOutcome::Built(lesson) => {
                let report = CompoundReport::Inserted {
                    position: insert_at.map_or(0, |at| at as u32 + 1),
                    words: lesson.words.len(),
                    average_length: lesson.average_length(),
                };
                (Some(lesson), report)
            }
            CompoundOutcome::Skipped { found } => {
                log::debug!("{}: compound letters skipped, only {} words available", layout.id, found);
                (None, CompoundReport::Skipped { found })
            }
            CompoundOutcome::NotAttempted => (None, CompoundReport::NotAttempted),
        };

        Generation {
            curriculum: assembler.assemble(lessons, compound),
            report: GenerationReport {
                levels: level_reports,
                compound: compound_report,
            },
        }
    }
}
