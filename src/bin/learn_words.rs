// src/bin/learn_words.rs
use clap::Parser;
use crossterm::style::Stylize;
use lesson_core::config::{lexicon_path, Dialect, GeneratorConfig, LayoutCatalog};
use lesson_core::core::engine::{CompoundReport, GenerationReport, LessonEngine};
use lesson_core::core::lexicon::LoadReport;
use lesson_core::core::ligature::LigatureTable;
use lesson_core::persistence::save_curriculum;
use lesson_core::script::ScriptFilter;
use lesson_core::{Lexicon, LexiconFormat, LoadOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(
    name = "learn_words",
    version,
    about = "Generates the progressive learn-mode word lists for every keyboard layout."
)]
struct Args {
    /// Lexicon file. A `{dialect}` placeholder is replaced by gb or us.
    #[clap(short = 'l', long, default_value = "data/readlex.json")]
    lexicon: PathBuf,

    /// Lexicon format (frequency or readlex). Guessed from the extension if omitted.
    #[clap(short = 'f', long)]
    format: Option<LexiconFormat>,

    /// Layout catalog to use instead of the built-in one.
    #[clap(long)]
    layouts: Option<PathBuf>,

    /// Only generate this layout. May be repeated.
    #[clap(long = "layout")]
    layout_ids: Vec<String>,

    /// Only generate this dialect (gb or us). May be repeated.
    #[clap(short = 'd', long = "dialect")]
    dialects: Vec<Dialect>,

    #[clap(short = 'o', long, default_value = "site")]
    output_dir: PathBuf,

    /// Most words per lesson.
    #[clap(long, default_value_t = 100)]
    cap: usize,

    /// Lessons with fewer words are dropped.
    #[clap(long, default_value_t = 5)]
    min_words: usize,

    /// Keep words containing characters outside the Shavian block.
    #[clap(long)]
    no_script_filter: bool,

    /// Reject words containing the namer dot.
    #[clap(long)]
    no_namer: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> lesson_core::Result<()> {
    let catalog = match &args.layouts {
        Some(path) => LayoutCatalog::load(path)?,
        None => LayoutCatalog::builtin()?,
    };
    let layouts = catalog.select(&args.layout_ids)?;
    let dialects = if args.dialects.is_empty() {
        Dialect::ALL.to_vec()
    } else {
        args.dialects.clone()
    };

    let config = GeneratorConfig {
        cap: args.cap,
        min_words: args.min_words,
        ..GeneratorConfig::default()
    };
    let engine = LessonEngine::new(config, LigatureTable::shavian());
    let filter = (!args.no_script_filter).then_some(ScriptFilter { allow_namer: !args.no_namer });

    for dialect in dialects {
        let path = lexicon_path(&args.lexicon, dialect);
        let format = args.format.unwrap_or_else(|| LexiconFormat::detect(&path));
        let upper = dialect.code().to_uppercase();

        println!("\n{}", "=".repeat(60));
        println!("{}", format!("Generating word lists for {upper} English").bold());
        println!("{}", "=".repeat(60));

        let (lexicon, load_report) = Lexicon::load(&path, format, &LoadOptions { dialect, filter })?;
        print_load_report(&load_report);

        for layout in &layouts {
            for variant in &layout.variants {
                println!("\n{} Layout ({upper}):", layout.variant_title(variant).bold());
                if variant.ligatures {
                    println!("  Using ligature expansion");
                } else {
                    println!("  No ligature expansion (raw characters only)");
                }

                let generation = engine.generate(&lexicon, layout, variant.ligatures);
                print_generation_report(&generation.report);

                let out = args.output_dir.join(layout.output_file_name(variant, dialect));
                save_curriculum(&generation.curriculum, &out)?;
                println!("  {}", format!("Saved to {}", out.display()).green());
            }
        }
    }
    Ok(())
}

fn print_load_report(report: &LoadReport) {
    println!("Loaded {} words from lexicon", report.loaded);
    if report.malformed > 0 {
        println!("  {} malformed records skipped", report.malformed);
    }
    if report.rejected_script > 0 {
        println!("  {} words outside the Shavian script filtered", report.rejected_script);
    }
    if report.proper_nouns > 0 {
        println!("  {} proper nouns marked with a namer dot", report.proper_nouns);
    }
}

fn print_generation_report(report: &GenerationReport) {
    for level in &report.levels {
        if level.skipped {
            println!(
                "  Level {} ({}): {} - only {} words available",
                level.index,
                level.name,
                "SKIPPED".yellow(),
                level.words
            );
        } else {
            println!(
                "  Level {} ({}): {} words (avg length: {:.1})",
                level.index, level.name, level.words, level.average_length
            );
        }
    }
    match &report.compound {
        CompoundReport::Inserted { position, words, average_length } => println!(
            "  Compound Letters: {} words (avg length: {:.1}), lesson {}",
            words, average_length, position
        ),
        CompoundReport::Skipped { found } => println!(
            "  Compound Letters: {} - only {} words available",
            "SKIPPED".yellow(),
            found
        ),
        CompoundReport::NotAttempted => {}
    }
}
