// tests/pipeline.rs
use lesson_core::config::{Dialect, GeneratorConfig, LayoutCatalog, LayoutDefinition};
use lesson_core::core::engine::{CompoundReport, LessonEngine};
use lesson_core::core::ligature::LigatureTable;
use lesson_core::core::types::{CharSet, WordRecord};
use lesson_core::persistence::{load_curriculum, save_curriculum};
use lesson_core::{Lexicon, LexiconFormat, LoadOptions};
use std::fs;
use std::path::Path;

/// Every two-letter word over the characters of all built-in layouts, plus
/// words pairing each ligature with a plain letter.
fn synthetic_lexicon(catalog: &LayoutCatalog) -> Lexicon {
    let keyboards: Vec<CharSet> = catalog.layouts.iter().map(|l| l.all_chars()).collect();
    let chars: Vec<char> = CharSet::union(&keyboards).as_str().chars().collect();
    let ligatures = LigatureTable::shavian();

    let mut words = Vec::new();
    let mut seed: u64 = 17;
    let mut next_freq = || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) % 50_000
    };
    for a in &chars {
        for b in &chars {
            words.push(WordRecord::new(format!("{a}{b}"), next_freq()));
        }
    }
    for lig in ligatures.entries() {
        for c in &chars {
            words.push(WordRecord::new(format!("{c}{}", lig.symbol), next_freq()));
        }
    }
    Lexicon::from_words(words)
}

fn write_frequency_list(lexicon: &Lexicon, path: &Path) {
    let text: String = lexicon
        .iter()
        .map(|w| format!("{} {}\n", w.text, w.frequency))
        .collect();
    fs::write(path, text).unwrap();
}

fn check_invariants(layout: &LayoutDefinition, use_ligatures: bool, lexicon: &Lexicon) {
    let config = GeneratorConfig::default();
    let engine = LessonEngine::new(config.clone(), LigatureTable::shavian());
    let ligatures = engine.ligatures();
    let generation = engine.generate(lexicon, layout, use_ligatures);
    let ordered = layout.ordered_levels();

    let mut numbers = Vec::new();
    for (number, lesson) in generation.curriculum.iter() {
        numbers.push(number);
        assert!(lesson.words.len() <= config.cap, "{}: lesson {} over cap", layout.id, number);
        assert!(lesson.words.len() >= config.min_words, "{}: lesson {} too small", layout.id, number);

        let chars = CharSet::new(lesson.chars.clone());
        if lesson.name == config.compound_name {
            assert_eq!(chars, layout.all_chars());
            for word in &lesson.words {
                assert!(ligatures.count_ligatures(word) > 0, "{word} has no ligature");
                assert!(ligatures.can_type(word, &chars, true));
            }
            continue;
        }

        let (level, previous) = ordered
            .iter()
            .find(|(level, _)| level.name == lesson.name)
            .copied()
            .unwrap();
        let focus = level.focus_chars(previous);
        for word in &lesson.words {
            assert!(ligatures.can_type(word, &chars, use_ligatures), "{}: {word} not typable", layout.id);
            assert!(ligatures.count_focus_chars(word, &focus, use_ligatures) > 0, "{}: {word} misses focus", layout.id);
        }
    }
    let expected: Vec<u32> = (1..=generation.curriculum.len() as u32).collect();
    assert_eq!(numbers, expected);

    let surviving = generation.report.levels.iter().filter(|l| !l.skipped).count();
    match generation.report.compound {
        CompoundReport::Inserted { position, .. } => {
            assert!(surviving >= 3);
            assert_eq!(position as usize, surviving - 1);
            assert_eq!(generation.curriculum.len(), surviving + 1);
            let compound = generation.curriculum.get(position).unwrap();
            assert_eq!(compound.name, config.compound_name);
        }
        _ => assert_eq!(generation.curriculum.len(), surviving),
    }
}

#[test]
fn test_builtin_layouts_hold_invariants() {
    let catalog = LayoutCatalog::builtin().unwrap();
    let lexicon = synthetic_lexicon(&catalog);

    for layout in &catalog.layouts {
        for variant in &layout.variants {
            check_invariants(layout, variant.ligatures, &lexicon);
        }
    }
}

#[test]
fn test_imperial_keeps_every_level() {
    let catalog = LayoutCatalog::builtin().unwrap();
    let lexicon = synthetic_lexicon(&catalog);
    let imperial = catalog.get("imperial").unwrap();
    let engine = LessonEngine::new(GeneratorConfig::default(), LigatureTable::shavian());

    let generation = engine.generate(&lexicon, imperial, true);
    assert!(generation.report.levels.iter().all(|l| !l.skipped));
    // seven levels plus compound, placed before the last two levels
    assert_eq!(generation.curriculum.len(), 8);
    assert_eq!(generation.curriculum.get(6).unwrap().name, "Compound Letters");
    assert_eq!(generation.curriculum.get(7).unwrap().name, imperial.levels[5].name);
    assert_eq!(generation.curriculum.get(8).unwrap().name, imperial.levels[6].name);
}

#[test]
fn test_end_to_end_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = LayoutCatalog::builtin().unwrap();
    let lexicon_path = dir.path().join("shavian-gb.txt");
    write_frequency_list(&synthetic_lexicon(&catalog), &lexicon_path);

    let layout = catalog.get("jafl").unwrap();
    let variant = &layout.variants[0];
    let out = dir.path().join("site").join(layout.output_file_name(variant, Dialect::Gb));

    let mut outputs = Vec::new();
    for _ in 0..2 {
        let (lexicon, report) =
            Lexicon::load(&lexicon_path, LexiconFormat::detect(&lexicon_path), &LoadOptions::default()).unwrap();
        assert_eq!(report.malformed, 0);
        let engine = LessonEngine::new(GeneratorConfig::default(), LigatureTable::shavian());
        let generation = engine.generate(&lexicon, layout, variant.ligatures);
        save_curriculum(&generation.curriculum, &out).unwrap();
        assert_eq!(load_curriculum(&out).unwrap(), generation.curriculum);
        outputs.push(fs::read(&out).unwrap());
    }
    assert_eq!(outputs[0], outputs[1]);
    assert!(out.ends_with("learn_words_jafl_gb.json"));
}

#[test]
fn test_readlex_dialect_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("readlex.json");
    fs::write(
        &path,
        r#"{
            "colour_nn1": [{"Shaw": "𐑒𐑳𐑤𐑼", "var": "RRP", "freq": 120, "pos": "NN1"}],
            "tomato_nn1": [
                {"Shaw": "𐑑𐑩𐑥𐑭𐑑𐑴", "var": "RRP", "freq": 40, "pos": "NN1"},
                {"Shaw": "𐑑𐑩𐑥𐑱𐑑𐑴", "var": "GenAm", "freq": 40, "pos": "NN1"}
            ]
        }"#,
    )
    .unwrap();

    let options = LoadOptions { dialect: Dialect::Us, ..LoadOptions::default() };
    let (lexicon, report) = Lexicon::load(&path, LexiconFormat::ReadLex, &options).unwrap();
    let words: Vec<&str> = lexicon.iter().map(|w| w.text.as_str()).collect();
    assert_eq!(words, vec!["𐑒𐑳𐑤𐑼", "𐑑𐑩𐑥𐑱𐑑𐑴"]);
    assert_eq!(report.reference_fallbacks, 1);
}

#[test]
fn test_mixed_script_word_is_filtered() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, "abc123 500\n𐑞 400\n").unwrap();

    let (lexicon, report) = Lexicon::load(&path, LexiconFormat::FrequencyList, &LoadOptions::default()).unwrap();
    assert_eq!(lexicon.words(), &[WordRecord::new("𐑞", 400)]);
    assert_eq!(report.rejected_script, 1);
}

#[test]
fn test_missing_lexicon_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    assert!(matches!(
        Lexicon::load(&missing, LexiconFormat::ReadLex, &LoadOptions::default()),
        Err(lesson_core::LessonError::MissingInput(_))
    ));
}
