// File: src/core/lexicon.rs
use crate::config::{Dialect, REFERENCE_VARIANT_TAG};
use crate::core::types::WordRecord;
use crate::error::{LessonError, Result};
use crate::script::{mark_proper_noun, ScriptFilter};
use itertools::Itertools;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// CLAWS tag for proper nouns.
const PROPER_NOUN_TAG: &str = "NP0";

/// Source formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconFormat {
    /// `word frequency` per line.
    FrequencyList,
    /// ReadLex JSON: lexical key -> list of dialect variants.
    ReadLex,
}

impl LexiconFormat {
    /// `.json` files are ReadLex, anything else is a frequency list.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => LexiconFormat::ReadLex,
            _ => LexiconFormat::FrequencyList,
        }
    }
}

impl FromStr for LexiconFormat {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "frequency" | "freq" => Ok(LexiconFormat::FrequencyList),
            "readlex" | "json" => Ok(LexiconFormat::ReadLex),
            _ => Err(LessonError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub dialect: Dialect,
    /// `None` keeps every word regardless of script.
    pub filter: Option<ScriptFilter>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::Gb,
            filter: Some(ScriptFilter::default()),
        }
    }
}

/// Counters gathered while loading. Nothing here aborts a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    /// Unparsable lines, entries or variants.
    pub malformed: usize,
    /// Words containing characters outside the target script.
    pub rejected_script: usize,
    /// Words that received a namer dot.
    pub proper_nouns: usize,
    /// Entries that fell back to the reference dialect.
    pub reference_fallbacks: usize,
    /// Entries that fell back to their first listed variant.
    pub first_variant_fallbacks: usize,
}

/// A single spelling variant in a ReadLex entry.
#[derive(Debug, Clone, Deserialize)]
struct LexiconVariant {
    #[serde(rename = "Shaw")]
    spelling: String,
    #[serde(rename = "var", default)]
    dialect: String,
    freq: u64,
    #[serde(default)]
    pos: String,
}

impl LexiconVariant {
    fn is_proper_noun(&self) -> bool {
        self.pos.split(['+', '_']).any(|tag| tag == PROPER_NOUN_TAG)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VariantChoice {
    Requested,
    Reference,
    First,
}

/// Requested dialect, then the reference dialect, then whatever comes first.
fn select_variant(variants: &[LexiconVariant], dialect: Dialect) -> Option<(&LexiconVariant, VariantChoice)> {
    if let Some(v) = variants.iter().find(|v| v.dialect == dialect.variant_tag()) {
        return Some((v, VariantChoice::Requested));
    }
    if let Some(v) = variants.iter().find(|v| v.dialect == REFERENCE_VARIANT_TAG) {
        return Some((v, VariantChoice::Reference));
    }
    variants.first().map(|v| (v, VariantChoice::First))
}

/// The loaded word list, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<WordRecord>,
}

impl Lexicon {
    pub fn from_words(words: Vec<WordRecord>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[WordRecord] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordRecord> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Loads a lexicon file. A missing file is fatal; bad records are not.
    pub fn load(path: &Path, format: LexiconFormat, options: &LoadOptions) -> Result<(Self, LoadReport)> {
        if !path.is_file() {
            return Err(LessonError::MissingInput(path.to_path_buf()));
        }
        let (lexicon, report) = match format {
            LexiconFormat::FrequencyList => {
                let reader = BufReader::new(File::open(path)?);
                Self::parse_frequency_list(reader, options)?
            }
            LexiconFormat::ReadLex => {
                let text = fs::read_to_string(path)?;
                Self::parse_readlex(&text, options)?
            }
        };
        log::info!(
            "loaded {} words from {} ({} malformed, {} outside script)",
            report.loaded,
            path.display(),
            report.malformed,
            report.rejected_script
        );
        Ok((lexicon, report))
    }

    /// Parses `word frequency` lines. Extra columns are ignored.
    pub fn parse_frequency_list<R: BufRead>(reader: R, options: &LoadOptions) -> Result<(Self, LoadReport)> {
        let mut words = Vec::new();
        let mut report = LoadReport::default();

        for (line_num, bytes) in reader.split(b'\n').enumerate() {
            let line = match String::from_utf8(bytes?) {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("skipping line {}: {}", line_num + 1, e);
                    report.malformed += 1;
                    continue;
                }
            };
            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else {
                continue;
            };
            let frequency = match parts.next().map(str::parse::<u64>) {
                Some(Ok(freq)) => freq,
                _ => {
                    log::warn!("skipping line {}: {}", line_num + 1, line.trim());
                    report.malformed += 1;
                    continue;
                }
            };
            if let Some(filter) = &options.filter {
                if !filter.accepts(word) {
                    report.rejected_script += 1;
                    continue;
                }
            }
            words.push(WordRecord::new(word, frequency));
        }

        report.loaded = words.len();
        Ok((Self { words }, report))
    }

    /// Parses a ReadLex document, keeping one variant per lexical entry.
    pub fn parse_readlex(text: &str, options: &LoadOptions) -> Result<(Self, LoadReport)> {
        let root: serde_json::Map<String, serde_json::Value> = serde_json::from_str(text)?;
        let mut words = Vec::with_capacity(root.len());
        let mut report = LoadReport::default();

        for (key, value) in root {
            let raw: Vec<serde_json::Value> = match serde_json::from_value(value) {
                Ok(raw) => raw,
                Err(e) => {
                    log::warn!("skipping entry '{}': {}", key, e);
                    report.malformed += 1;
                    continue;
                }
            };
            // a bad variant only costs itself, not its siblings
            let (variants, errors): (Vec<LexiconVariant>, Vec<serde_json::Error>) = raw
                .into_iter()
                .map(serde_json::from_value::<LexiconVariant>)
                .partition_result();
            for e in &errors {
                log::warn!("skipping variant of '{}': {}", key, e);
            }
            report.malformed += errors.len();

            let Some((variant, choice)) = select_variant(&variants, options.dialect) else {
                if errors.is_empty() {
                    log::warn!("skipping entry '{}': no variants", key);
                    report.malformed += 1;
                }
                continue;
            };
            match choice {
                VariantChoice::Requested => {}
                VariantChoice::Reference => report.reference_fallbacks += 1,
                VariantChoice::First => report.first_variant_fallbacks += 1,
            }

            let text = if variant.is_proper_noun() {
                report.proper_nouns += 1;
                mark_proper_noun(&variant.spelling)
            } else {
                variant.spelling.clone()
            };
            if let Some(filter) = &options.filter {
                if !filter.accepts(&text) {
                    report.rejected_script += 1;
                    continue;
                }
            }
            words.push(WordRecord::new(text, variant.freq));
        }

        report.loaded = words.len();
        Ok((Self { words }, report))
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a WordRecord;
    type IntoIter = std::slice::Iter<'a, WordRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
