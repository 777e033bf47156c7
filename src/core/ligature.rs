// File: src/core/ligature.rs
use crate::core::types::CharSet;
use crate::error::{LessonError, Result};
use itertools::Itertools;
use std::borrow::Cow;

/// A compound letter typed as two keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ligature {
    pub symbol: char,
    pub expansion: [char; 2],
}

impl Ligature {
    pub const fn new(symbol: char, first: char, second: char) -> Self {
        Self { symbol, expansion: [first, second] }
    }
}

/// Fixed, ordered table of ligatures.
///
/// No symbol may appear inside any expansion, so a single left-to-right pass
/// fully expands a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LigatureTable {
    entries: Vec<Ligature>,
}

impl LigatureTable {
    pub fn new(entries: Vec<Ligature>) -> Result<Self> {
        for (i, lig) in entries.iter().enumerate() {
            if entries[..i].iter().any(|other| other.symbol == lig.symbol) {
                return Err(LessonError::InvalidLigatureTable(format!(
                    "symbol {} listed twice",
                    lig.symbol
                )));
            }
            if let Some(nested) = entries.iter().find(|other| other.expansion.contains(&lig.symbol)) {
                return Err(LessonError::InvalidLigatureTable(format!(
                    "symbol {} appears in the expansion of {}",
                    lig.symbol, nested.symbol
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The five Shavian ligatures: ER, AR, OR, YEW, AIR.
    pub fn shavian() -> Self {
        Self {
            entries: vec![
                Ligature::new('\u{1047C}', '\u{10469}', '\u{1046E}'), // 𐑼 -> 𐑩𐑮
                Ligature::new('\u{10478}', '\u{1046D}', '\u{1046E}'), // 𐑸 -> 𐑭𐑮
                Ligature::new('\u{10479}', '\u{10477}', '\u{1046E}'), // 𐑹 -> 𐑷𐑮
                Ligature::new('\u{1047F}', '\u{10458}', '\u{10475}'), // 𐑿 -> 𐑘𐑵
                Ligature::new('\u{1047D}', '\u{1047E}', '\u{1046E}'), // 𐑽 -> 𐑾𐑮
            ],
        }
    }

    pub fn entries(&self) -> &[Ligature] {
        &self.entries
    }

    fn lookup(&self, c: char) -> Option<&Ligature> {
        self.entries.iter().find(|lig| lig.symbol == c)
    }

    pub fn is_ligature(&self, c: char) -> bool {
        self.lookup(c).is_some()
    }

    /// Replaces every ligature symbol with its two-character form.
    pub fn expand(&self, word: &str) -> String {
        let mut expanded = String::with_capacity(word.len() * 2);
        for c in word.chars() {
            match self.lookup(c) {
                Some(lig) => expanded.extend(lig.expansion),
                None => expanded.push(c),
            }
        }
        expanded
    }

    /// The characters a typist actually presses for `word`.
    pub fn typed_form<'w>(&self, word: &'w str, use_ligatures: bool) -> Cow<'w, str> {
        if use_ligatures && word.chars().any(|c| self.is_ligature(c)) {
            Cow::Owned(self.expand(word))
        } else {
            Cow::Borrowed(word)
        }
    }

    pub fn can_type(&self, word: &str, available: &CharSet, use_ligatures: bool) -> bool {
        self.typed_form(word, use_ligatures)
            .chars()
            .all(|c| available.contains(c))
    }

    /// Counts focus characters in the typed form; repeats count each time.
    pub fn count_focus_chars(&self, word: &str, focus: &CharSet, use_ligatures: bool) -> usize {
        self.typed_form(word, use_ligatures)
            .chars()
            .filter(|c| focus.contains(*c))
            .count()
    }

    /// Number of distinct ligature symbols present in the unexpanded word.
    pub fn count_ligatures(&self, word: &str) -> usize {
        self.entries
            .iter()
            .filter(|lig| word.contains(lig.symbol))
            .count()
    }

    /// Symbols separated by spaces, e.g. for lesson descriptions.
    pub fn symbol_list(&self) -> String {
        self.entries.iter().map(|lig| lig.symbol).join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_symbol_expands_to_its_pair() {
        let table = LigatureTable::shavian();
        for lig in table.entries() {
            let expected: String = lig.expansion.iter().collect();
            assert_eq!(table.expand(&lig.symbol.to_string()), expected);
        }
    }

    #[test]
    fn test_expand_is_noop_without_symbols() {
        let table = LigatureTable::shavian();
        assert_eq!(table.expand("𐑞𐑩𐑑"), "𐑞𐑩𐑑");
        assert!(matches!(table.typed_form("𐑞𐑩𐑑", true), Cow::Borrowed(_)));
    }

    #[test]
    fn test_expand_inside_word() {
        let table = LigatureTable::shavian();
        // 𐑓𐑹 -> 𐑓𐑷𐑮
        assert_eq!(table.expand("𐑓𐑹"), "𐑓𐑷𐑮");
    }

    #[test]
    fn test_shavian_table_is_valid() {
        let table = LigatureTable::shavian();
        assert!(LigatureTable::new(table.entries().to_vec()).is_ok());
        assert_eq!(table.symbol_list(), "𐑼 𐑸 𐑹 𐑿 𐑽");
    }

    #[test]
    fn test_rejects_nested_symbol() {
        let entries = vec![
            Ligature::new('a', 'b', 'c'),
            Ligature::new('d', 'a', 'e'),
        ];
        assert!(matches!(
            LigatureTable::new(entries),
            Err(LessonError::InvalidLigatureTable(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_symbol() {
        let entries = vec![Ligature::new('a', 'b', 'c'), Ligature::new('a', 'd', 'e')];
        assert!(LigatureTable::new(entries).is_err());
    }

    #[test]
    fn test_can_type_with_and_without_expansion() {
        let table = LigatureTable::shavian();
        let available = CharSet::new("𐑓𐑷𐑮");
        assert!(table.can_type("𐑓𐑹", &available, true));
        assert!(!table.can_type("𐑓𐑹", &available, false));

        let with_key = CharSet::new("𐑓𐑹");
        assert!(table.can_type("𐑓𐑹", &with_key, false));
    }

    #[test]
    fn test_count_focus_chars_counts_repeats() {
        let table = LigatureTable::shavian();
        let focus = CharSet::new("𐑮");
        // 𐑼 and 𐑸 each expand to include 𐑮
        assert_eq!(table.count_focus_chars("𐑼𐑸", &focus, true), 2);
        assert_eq!(table.count_focus_chars("𐑼𐑸", &focus, false), 0);
        assert_eq!(table.count_focus_chars("𐑮𐑮𐑩", &focus, false), 2);
    }

    #[test]
    fn test_count_ligatures_is_distinct() {
        let table = LigatureTable::shavian();
        assert_eq!(table.count_ligatures("𐑼𐑼"), 1);
        assert_eq!(table.count_ligatures("𐑼𐑸𐑑"), 2);
        assert_eq!(table.count_ligatures("𐑑"), 0);
    }
}
