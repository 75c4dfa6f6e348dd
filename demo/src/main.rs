//! CIE-10 Diagnosis Search: command-line front end
//!
//! Runs the search engine against the bundled sample dataset or a JSON
//! export of a CIE-10 table.
//!
//! Usage:
//!   cargo run -p demo -- search amigdalitis
//!   cargo run -p demo -- search J10 --corpus cie10.json --json
//!   cargo run -p demo -- classify "A00.1"
//!   cargo run -p demo -- scenarios

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cie10_contracts::{
    entry::{CorpusRow, DiagnosisEntry},
    error::{Cie10Error, Cie10Result, LookupKind},
    selection::DiagnosisSelection,
};
use cie10_core::{traits::DiagnosisCorpus, SearchEngine, SearchSession, SessionOutcome};
use cie10_corpus::{sample_corpus, InMemoryCorpus};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Search CIE-10 diagnoses by code or by (accent-insensitive) name.
#[derive(Parser)]
#[command(
    name = "cie10",
    about = "CIE-10 diagnosis search",
    long_about = "Looks up CIE-10 diagnoses by code prefix or by name fragment,\n\
                  ranking name matches by relevance."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for a code or a diagnosis name.
    Search {
        /// Query text, e.g. "J10" or "amigdalitis".
        query: String,
        /// JSON file with an array of {code, name, name_norm} rows.
        #[arg(long)]
        corpus: Option<PathBuf>,
        /// Engine configuration TOML.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show how a query is normalized and classified.
    Classify {
        query: String,
        /// Engine configuration TOML.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Run the reference searches against the sample dataset.
    Scenarios,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to trace every lookup.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Search { query, corpus, config, json } => {
            run_search(&query, corpus.as_deref(), config.as_deref(), json)
        }
        Command::Classify { query, config } => run_classify(&query, config.as_deref()),
        Command::Scenarios => run_scenarios(),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn load_engine(config: Option<&Path>) -> Cie10Result<SearchEngine> {
    Ok(SearchEngine::new(cie10_config::load(config)?))
}

fn load_corpus(path: Option<&Path>) -> Cie10Result<InMemoryCorpus> {
    match path {
        Some(path) => InMemoryCorpus::from_json_file(path),
        None => {
            debug!("no corpus file given, using the sample dataset");
            Ok(sample_corpus())
        }
    }
}

fn run_search(query: &str, corpus: Option<&Path>, config: Option<&Path>, json: bool) -> Cie10Result<()> {
    let engine = load_engine(config)?;
    let corpus = load_corpus(corpus)?;
    let results = engine.search(query, &corpus)?;

    if json {
        println!("{:#}", serde_json::json!(results));
    } else {
        print_results(&results);
    }
    Ok(())
}

fn run_classify(query: &str, config: Option<&Path>) -> Cie10Result<()> {
    let engine = load_engine(config)?;
    let parsed = engine.parse(query);

    println!("trimmed:    {:?}", parsed.trimmed);
    println!("upper:      {:?}", parsed.upper);
    println!("normalized: {:?}", parsed.normalized);
    println!("kind:       {:?}", parsed.kind);
    Ok(())
}

fn run_scenarios() -> Cie10Result<()> {
    let engine = load_engine(None)?;
    let corpus = sample_corpus();

    for query in ["J10", "amig", "neumonia", "   "] {
        println!("── search {:?}", query);
        print_results(&engine.search(query, &corpus)?);
        println!();
    }

    println!("── search \"J10\" with the corpus offline");
    match engine.search("J10", &OfflineCorpus) {
        Err(e) => println!("  reported: {}", e),
        Ok(results) => println!("  unexpected results: {}", results.len()),
    }
    println!();

    println!("── typing \"influ\" then \"influenza\" in one session");
    let session = SearchSession::new(engine, corpus);
    let stale = session.begin("influ");
    let latest = session.begin("influenza");
    match session.run(&stale)? {
        SessionOutcome::Superseded => println!("  \"influ\" superseded"),
        SessionOutcome::Current(_) => println!("  \"influ\" unexpectedly current"),
    }
    let results = session.run(&latest)?.into_results().unwrap_or_default();
    print_results(&results);
    println!();

    println!("── picking diagnoses for a visit");
    let mut picked = DiagnosisSelection::new();
    for entry in results.iter().take(2).chain(results.first()) {
        let added = picked.add(entry.clone());
        println!("  {} {}", if added { "added  " } else { "skipped" }, entry.code);
    }
    println!("  selected: {}", picked.codes().collect::<Vec<_>>().join(", "));

    Ok(())
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_results(results: &[DiagnosisEntry]) {
    if results.is_empty() {
        println!("  (no results)");
        return;
    }
    for entry in results {
        println!("  {:<8} {}", entry.code, entry.name);
    }
}

/// A corpus whose backend is down, for the failure scenario.
struct OfflineCorpus;

impl DiagnosisCorpus for OfflineCorpus {
    fn lookup_by_code_prefix(&self, _prefix: &str, _limit: usize) -> Cie10Result<Vec<CorpusRow>> {
        Err(Cie10Error::lookup_failed(LookupKind::CodePrefix, "backend unreachable"))
    }

    fn lookup_by_name_substring(&self, _fragment: &str, _limit: usize) -> Cie10Result<Vec<CorpusRow>> {
        Err(Cie10Error::lookup_failed(LookupKind::NameSubstring, "backend unreachable"))
    }
}
