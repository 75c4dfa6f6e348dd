//! # cie10-core
//!
//! The stateless CIE-10 diagnosis search-and-rank engine.
//!
//! This crate provides:
//! - The `DiagnosisCorpus` trait the host application implements
//! - The `SearchEngine` that turns a query into ranked, deduplicated entries
//! - `SearchSession`, a newest-query-wins wrapper for interactive callers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cie10_core::{SearchEngine, traits::DiagnosisCorpus};
//!
//! let engine = SearchEngine::default();
//! let results = engine.search("amigdalitis", &corpus)?;
//! ```

pub mod engine;
pub mod session;
pub mod traits;

pub use engine::SearchEngine;
pub use session::{SearchSession, SearchTicket, SessionOutcome};
pub use traits::DiagnosisCorpus;
