//! # cie10-corpus
//!
//! Reference `DiagnosisCorpus` implementations for the CIE-10 search engine.
//!
//! - [`InMemoryCorpus`] answers lookups from rows held in memory, loaded
//!   from code or from a JSON export of the hosted CIE-10 table.
//! - [`sample_corpus`] returns a small, fixed Spanish CIE-10 dataset.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cie10_core::SearchEngine;
//! use cie10_corpus::InMemoryCorpus;
//!
//! let corpus = InMemoryCorpus::from_json_file(Path::new("cie10.json"))?;
//! let results = SearchEngine::default().search("gripe", &corpus)?;
//! ```

pub mod memory;
pub mod sample;

pub use memory::InMemoryCorpus;
pub use sample::{sample_corpus, sample_rows, SAMPLE_DIAGNOSES};

// ── Tests ─────────────────────────────────────────────────────────────────────
