//! Transphonator CLI — English words to Arabic phonetic spelling.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use transphonator_core::paths::{DataPaths, validate_data_dir};
use transphonator_core::phoneme::get_retriever;
use transphonator_core::{TranslitPipeline, Transphonation};

#[derive(Parser, Debug)]
#[command(
    name = "transphonator",
    about = "Transliterate English words into Arabic script by their pronunciation",
    version,
)]
struct Cli {
    /// Base data directory holding cmudict-0.7b.txt and phonenems_en.txt
    data_dir: PathBuf,

    /// Words to transphonate (read from stdin when omitted)
    words: Vec<String>,

    /// Phoneme source
    #[arg(long, default_value = "dict", value_parser = ["dict", "g2p"])]
    retriever: String,

    /// Primary dictionary path [default: DATA_DIR/cmudict-0.7b.txt]
    #[arg(long)]
    dict: Option<PathBuf>,

    /// Fallback dictionary path [default: DATA_DIR/phonenems_en.txt]
    #[arg(long)]
    fallback: Option<PathBuf>,

    /// Print one JSON object per word
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Printed in place of words that could not be transphonated
    #[arg(long, default_value = "None")]
    absent: String,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn data_paths(&self) -> DataPaths {
        let mut paths = DataPaths::from_data_dir(&self.data_dir);
        if let Some(dict) = &self.dict {
            paths.cmu_dict = dict.clone();
        }
        if let Some(fallback) = &self.fallback {
            paths.fallback_dict = fallback.clone();
        }
        paths
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    validate_data_dir(&cli.data_dir)?;
    let paths = cli.data_paths();

    let retriever = get_retriever(&cli.retriever, &paths)?;
    log::info!("Using {} retriever", retriever.name());
    let pipeline = TranslitPipeline::arabic(retriever);

    let words = if cli.words.is_empty() {
        read_words(io::stdin().lock()).context("Failed to read words from stdin")?
    } else {
        cli.words.clone()
    };

    let results = pipeline.transphonate_all(&words);

    let mut out = io::stdout().lock();
    for result in &results {
        writeln!(out, "{}", format_line(result, cli.json, &cli.absent)?)?;
    }

    let translated = results.iter().filter(|r| r.is_translated()).count();
    log::info!("Transphonated {} of {} words", translated, results.len());
    Ok(())
}

/// Whitespace-separated words from every line of `reader`.
fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        words.extend(line?.split_whitespace().map(str::to_string));
    }
    Ok(words)
}

/// One output line: JSON, or "word transliteration" with `absent` for misses.
fn format_line(result: &Transphonation, json: bool, absent: &str) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(result)?);
    }
    let spelled = result.transliteration.as_deref().unwrap_or(absent);
    Ok(format!("{} {}", result.word, spelled))
}
