// src/bin/play_words.rs
use clap::Parser;
use crossterm::style::Stylize;
use lesson_core::config::{lexicon_path, Dialect};
use lesson_core::persistence::save_json;
use lesson_core::play::{PlayConfig, PlayWords};
use lesson_core::script::ScriptFilter;
use lesson_core::{Lexicon, LexiconFormat, LoadOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(
    name = "play_words",
    version,
    about = "Generates the play-mode word lists, grouped by word length."
)]
struct Args {
    /// Lexicon file. A `{dialect}` placeholder is replaced by gb or us.
    #[clap(short = 'l', long, default_value = "data/readlex.json")]
    lexicon: PathBuf,

    /// Lexicon format (frequency or readlex). Guessed from the extension if omitted.
    #[clap(short = 'f', long)]
    format: Option<LexiconFormat>,

    /// Only generate this dialect (gb or us). May be repeated.
    #[clap(short = 'd', long = "dialect")]
    dialects: Vec<Dialect>,

    #[clap(short = 'o', long, default_value = "site")]
    output_dir: PathBuf,

    /// Longest word length with its own list.
    #[clap(long, default_value_t = 10)]
    max_length: usize,

    /// Words kept per length.
    #[clap(long, default_value_t = 200)]
    per_length: usize,
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
    let dialects = if args.dialects.is_empty() {
        Dialect::ALL.to_vec()
    } else {
        args.dialects.clone()
    };
    let config = PlayConfig {
        max_length: args.max_length,
        per_length: args.per_length,
    };

    for dialect in dialects {
        let path = lexicon_path(&args.lexicon, dialect);
        let format = args.format.unwrap_or_else(|| LexiconFormat::detect(&path));
        let options = LoadOptions {
            dialect,
            filter: Some(ScriptFilter::default()),
        };

        println!("\n{}", "=".repeat(60));
        println!(
            "{}",
            format!("Generating play mode words for {} English", dialect.code().to_uppercase()).bold()
        );
        println!("{}", "=".repeat(60));

        let (lexicon, report) = Lexicon::load(&path, format, &options)?;
        println!("  Loaded {} words from lexicon", report.loaded);

        let play = PlayWords::build(&lexicon, &config);
        for (length, words) in play.iter() {
            println!("  Length {}: {} words", length, words.len());
        }

        let out = args.output_dir.join(format!("words_{}.json", dialect.code()));
        save_json(&play, &out)?;
        println!("  {}", format!("Saved to {}", out.display()).green());
    }
    Ok(())
}
