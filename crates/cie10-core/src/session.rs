//! Per-caller search sessions where the newest query wins.
//!
//! A search box fires a query every time the user pauses typing. Only the
//! answer to the most recent query is worth showing, so each query takes a
//! ticket from the session and a result is handed back only while its ticket
//! is still the newest one. Debouncing itself stays with the caller.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use cie10_contracts::{entry::DiagnosisEntry, error::Cie10Result};

use crate::{engine::SearchEngine, traits::DiagnosisCorpus};

/// A claim on the session for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// What a session hands back for a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The ticket was still the newest when the search finished.
    Current(Vec<DiagnosisEntry>),
    /// A newer ticket was issued; the results were discarded.
    Superseded,
}

impl SessionOutcome {
    /// The results, if they were not superseded.
    pub fn into_results(self) -> Option<Vec<DiagnosisEntry>> {
        match self {
            SessionOutcome::Current(entries) => Some(entries),
            SessionOutcome::Superseded => None,
        }
    }
}

/// One caller's view of the engine: an engine, a corpus and the newest
/// ticket number.
///
/// `&self` methods only, so a session can be shared behind an `Arc` between
/// the thread that issues tickets and the threads that run them.
pub struct SearchSession<C: DiagnosisCorpus> {
    engine: SearchEngine,
    corpus: C,
    latest: AtomicU64,
}

impl<C: DiagnosisCorpus> SearchSession<C> {
    pub fn new(engine: SearchEngine, corpus: C) -> Self {
        Self {
            engine,
            corpus,
            latest: AtomicU64::new(0),
        }
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    pub fn corpus(&self) -> &C {
        &self.corpus
    }

    /// Issue a ticket for `query`, superseding every earlier ticket.
    pub fn begin(&self, query: impl Into<String>) -> SearchTicket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        SearchTicket {
            generation,
            query: query.into(),
        }
    }

    /// Return true if no ticket newer than `ticket` has been issued.
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.generation
    }

    /// Run the search for `ticket`.
    ///
    /// Skips the corpus entirely when the ticket is already stale, and
    /// discards the results when it went stale while the search ran.
    ///
    /// # Errors
    ///
    /// Propagates engine errors for a ticket that is still current. Errors
    /// for a superseded ticket are dropped with its results.
    pub fn run(&self, ticket: &SearchTicket) -> Cie10Result<SessionOutcome> {
        if !self.is_current(ticket) {
            debug!(generation = ticket.generation, "ticket superseded before search");
            return Ok(SessionOutcome::Superseded);
        }

        let result = self.engine.search(&ticket.query, &self.corpus);

        if !self.is_current(ticket) {
            debug!(generation = ticket.generation, "ticket superseded during search");
            return Ok(SessionOutcome::Superseded);
        }

        result.map(SessionOutcome::Current)
    }

    /// Issue a ticket for `query` and run it immediately.
    pub fn search(&self, query: impl Into<String>) -> Cie10Result<SessionOutcome> {
        let ticket = self.begin(query);
        self.run(&ticket)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
