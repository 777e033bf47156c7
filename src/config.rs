// File: src/config.rs
//! Generator settings and the keyboard layout catalog.

use crate::core::level::LevelDefinition;
use crate::core::types::CharSet;
use crate::error::{LessonError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// ReadLex tag of the reference (British) pronunciation.
pub const REFERENCE_VARIANT_TAG: &str = "RRP";

const BUILTIN_LAYOUTS: &str = include_str!("../data/layouts.json");

/// Limits shared by every level of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Most words kept per lesson.
    pub cap: usize,
    /// Lessons with fewer words are dropped.
    pub min_words: usize,
    pub compound_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cap: 100,
            min_words: 5,
            compound_name: "Compound Letters".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Gb,
    Us,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Gb, Dialect::Us];

    /// Short code used in file names.
    pub fn code(self) -> &'static str {
        match self {
            Dialect::Gb => "gb",
            Dialect::Us => "us",
        }
    }

    /// The ReadLex `var` tag for this dialect.
    pub fn variant_tag(self) -> &'static str {
        match self {
            Dialect::Gb => REFERENCE_VARIANT_TAG,
            Dialect::Us => "GenAm",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Dialect {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gb" | "british" | "uk" => Ok(Dialect::Gb),
            "us" | "american" => Ok(Dialect::Us),
            _ => Err(LessonError::UnknownDialect(s.to_string())),
        }
    }
}

/// Substitutes `{dialect}` in a lexicon path, so per-dialect frequency files
/// can share one template.
pub fn lexicon_path(template: &Path, dialect: Dialect) -> PathBuf {
    let text = template.to_string_lossy();
    if text.contains("{dialect}") {
        PathBuf::from(text.replace("{dialect}", dialect.code()))
    } else {
        template.to_path_buf()
    }
}

/// Characters by physical keyboard row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRows {
    #[serde(default)]
    pub number: CharSet,
    #[serde(default)]
    pub qwerty: CharSet,
    #[serde(default)]
    pub home: CharSet,
    #[serde(default)]
    pub bottom: CharSet,
}

/// One output file produced from a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutVariant {
    /// Expand ligatures before checking typability.
    pub ligatures: bool,
    /// Appended to the output file stem, e.g. `_no_lig`.
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDefinition {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub rows: LayoutRows,
    pub variants: Vec<LayoutVariant>,
    pub levels: Vec<LevelDefinition>,
}

impl LayoutDefinition {
    /// Every character on the keyboard.
    pub fn all_chars(&self) -> CharSet {
        let rows = &self.rows;
        CharSet::union([&rows.number, &rows.qwerty, &rows.home, &rows.bottom])
    }

    pub fn variant_title(&self, variant: &LayoutVariant) -> String {
        match &variant.label {
            Some(label) => format!("{} ({})", self.display_name, label),
            None => self.display_name.clone(),
        }
    }

    pub fn output_file_name(&self, variant: &LayoutVariant, dialect: Dialect) -> String {
        format!("learn_words_{}_{}{}.json", self.id, dialect.code(), variant.suffix)
    }

    /// Levels in curriculum order, each paired with the one before it.
    pub fn ordered_levels(&self) -> Vec<(&LevelDefinition, Option<&LevelDefinition>)> {
        let mut levels: Vec<&LevelDefinition> = self.levels.iter().collect();
        levels.sort_by_key(|level| level.index);
        levels
            .iter()
            .enumerate()
            .map(|(i, level)| (*level, i.checked_sub(1).map(|prev| levels[prev])))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.levels.is_empty() {
            return Err(LessonError::invalid_layout(format!("layout '{}' has no levels", self.id)));
        }
        if self.variants.is_empty() {
            return Err(LessonError::invalid_layout(format!("layout '{}' has no variants", self.id)));
        }
        let mut seen = HashSet::new();
        for level in &self.levels {
            if level.index == 0 {
                return Err(LessonError::invalid_layout(format!(
                    "layout '{}': level indices start at 1",
                    self.id
                )));
            }
            if !seen.insert(level.index) {
                return Err(LessonError::invalid_layout(format!(
                    "layout '{}': level {} defined twice",
                    self.id, level.index
                )));
            }
        }
        Ok(())
    }
}

/// All layouts the generator knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutCatalog {
    pub layouts: Vec<LayoutDefinition>,
}

impl LayoutCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_LAYOUTS)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let catalog: LayoutCatalog = serde_json::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(LessonError::MissingInput(path.to_path_buf()));
        }
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn get(&self, id: &str) -> Option<&LayoutDefinition> {
        self.layouts.iter().find(|layout| layout.id == id)
    }

    /// Keeps only the named layouts; an empty filter keeps everything.
    pub fn select(&self, ids: &[String]) -> Result<Vec<&LayoutDefinition>> {
        if ids.is_empty() {
            return Ok(self.layouts.iter().collect());
        }
        ids.iter()
            .map(|id| {
                self.get(id)
                    .ok_or_else(|| LessonError::invalid_layout(format!("unknown layout '{id}'")))
            })
            .collect()
    }

    fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for layout in &self.layouts {
            if !ids.insert(layout.id.as_str()) {
                return Err(LessonError::invalid_layout(format!("layout '{}' defined twice", layout.id)));
            }
            layout.validate()?;
        }
        Ok(())
    }
}
