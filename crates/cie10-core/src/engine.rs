//! The diagnosis search engine: query in, ranked entries out.
//!
//! Each call runs the same pipeline:
//!
//!   Normalize → Classify → Lookup → Merge/Dedupe → Score → Sort → Truncate
//!
//! Code-like queries skip scoring and keep the corpus order. The engine
//! holds configuration only; no result, query or corpus row outlives the
//! call that produced it.

use std::collections::HashSet;
use std::thread;

use tracing::{debug, warn};

use cie10_contracts::{
    config::{EngineConfig, ScoringWeights, MAX_RESULT_LIMIT},
    entry::{Candidate, CorpusRow, DiagnosisEntry},
    error::{Cie10Error, Cie10Result, LookupKind},
    query::{QueryKind, SearchQuery},
};

use crate::traits::DiagnosisCorpus;

/// Stateless search-and-rank over a [`DiagnosisCorpus`].
///
/// Cheap to clone and safe to share; concurrent calls never observe each
/// other.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: EngineConfig,
}

impl SearchEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Entries returned per search: the configured `result_limit`, capped at
    /// [`MAX_RESULT_LIMIT`] for configurations built in code.
    pub fn result_limit(&self) -> usize {
        self.config.limits.result_limit.min(MAX_RESULT_LIMIT)
    }

    /// Normalize and classify `raw` with this engine's code pattern.
    pub fn parse(&self, raw: &str) -> SearchQuery {
        SearchQuery::parse(raw, &self.config.code_pattern)
    }

    /// Search `corpus` for `raw` and return at most `result_limit` entries,
    /// highest relevance first.
    ///
    /// # Errors
    ///
    /// Returns `CorpusLookupFailed` when the lookup of a code-like query
    /// fails, or when both lookups of a free-text query fail. A single failed
    /// free-text lookup only removes that source's rows.
    pub fn search(&self, raw: &str, corpus: &dyn DiagnosisCorpus) -> Cie10Result<Vec<DiagnosisEntry>> {
        let query = self.parse(raw);

        match query.kind {
            QueryKind::Empty => {
                debug!("empty query, skipping corpus lookup");
                Ok(Vec::new())
            }
            QueryKind::Code => self.search_code(&query, corpus),
            QueryKind::FreeText => self.search_free_text(&query, corpus),
        }
    }

    fn search_code(&self, query: &SearchQuery, corpus: &dyn DiagnosisCorpus) -> Cie10Result<Vec<DiagnosisEntry>> {
        let limits = &self.config.limits;
        debug!(prefix = %query.upper, limit = limits.code_prefix_limit, "code lookup");

        let rows = corpus
            .lookup_by_code_prefix(&query.upper, limits.code_prefix_limit)
            .inspect_err(|e| warn!(prefix = %query.upper, error = %e, "code lookup failed"))?;

        // The corpus promises prefix matches; enforce it so the output
        // contract holds for any implementation.
        let mut seen = HashSet::new();
        let entries: Vec<DiagnosisEntry> = valid_candidates(rows)
            .filter(|c| c.code().to_uppercase().starts_with(&query.upper))
            .filter(|c| seen.insert(c.code().to_string()))
            .map(|c| c.entry)
            .take(self.result_limit())
            .collect();

        debug!(prefix = %query.upper, results = entries.len(), "code search complete");
        Ok(entries)
    }

    fn search_free_text(&self, query: &SearchQuery, corpus: &dyn DiagnosisCorpus) -> Cie10Result<Vec<DiagnosisEntry>> {
        let (by_name, by_code) = self.fetch_free_text(query, corpus);

        let (by_name, by_code) = match (by_name, by_code) {
            (Err(name_err), Err(code_err)) => {
                warn!(
                    query = %query.trimmed,
                    name_error = %name_err,
                    code_error = %code_err,
                    "all free-text lookups failed"
                );
                return Err(name_err);
            }
            (by_name, by_code) => (
                absorb_failure(by_name, LookupKind::NameSubstring),
                absorb_failure(by_code, LookupKind::CodeSubstring),
            ),
        };

        // Name hits first, then code hits; the first copy of a code wins.
        let mut seen = HashSet::new();
        let merged: Vec<Candidate> = valid_candidates(by_name)
            .chain(valid_candidates(by_code))
            .filter(|c| seen.insert(c.code().to_string()))
            .collect();

        let s = query.normalized.as_str();
        let raw = query.trimmed.to_lowercase();
        let weights = &self.config.scoring;

        let mut scored: Vec<(u32, Candidate)> = merged
            .into_iter()
            .map(|c| (score(&c, s, &raw, weights), c))
            .collect();

        // `sort_by` is stable: equal scores keep merge order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let entries: Vec<DiagnosisEntry> = scored
            .into_iter()
            .take(self.result_limit())
            .map(|(_, c)| c.entry)
            .collect();

        debug!(query = %query.trimmed, results = entries.len(), "free-text search complete");
        Ok(entries)
    }

    /// Run the name and code lookups, concurrently when configured.
    fn fetch_free_text(
        &self,
        query: &SearchQuery,
        corpus: &dyn DiagnosisCorpus,
    ) -> (Cie10Result<Vec<CorpusRow>>, Cie10Result<Vec<CorpusRow>>) {
        let limits = &self.config.limits;
        let by_name = || corpus.lookup_by_name_substring(&query.normalized, limits.name_lookup_limit);
        let by_code = || corpus.lookup_by_code_substring(&query.upper, limits.code_lookup_limit);

        debug!(
            fragment = %query.normalized,
            code_fragment = %query.upper,
            concurrent = self.config.concurrent_lookups,
            "free-text lookups"
        );

        if !self.config.concurrent_lookups {
            return (by_name(), by_code());
        }

        thread::scope(|scope| {
            let code_handle = scope.spawn(by_code);
            let name_rows = by_name();
            let code_rows = code_handle.join().unwrap_or_else(|_| {
                Err(Cie10Error::lookup_failed(
                    LookupKind::CodeSubstring,
                    "lookup thread panicked",
                ))
            });
            (name_rows, code_rows)
        })
    }
}

/// Relevance of `candidate` for the normalized query `s` and the lower-cased
/// trimmed query `raw`. Saturates at `u32::MAX`.
pub fn score(candidate: &Candidate, s: &str, raw: &str, weights: &ScoringWeights) -> u32 {
    let nn = candidate.normalized_name.to_lowercase();
    let code = candidate.code().to_lowercase();
    let name_hit = nn.contains(s);

    let mut total: u32 = 0;
    if nn.starts_with(s) {
        total = total.saturating_add(weights.name_prefix);
    }
    if name_hit {
        total = total.saturating_add(weights.name_contains);
    }
    if code.starts_with(raw) {
        total = total.saturating_add(weights.code_prefix);
    }
    if code.contains(raw) {
        total = total.saturating_add(weights.code_contains);
    }
    if name_hit && s.chars().count() <= weights.short_match_max_chars {
        total = total.saturating_add(weights.short_match_bonus);
    }
    total
}

fn valid_candidates(rows: Vec<CorpusRow>) -> impl Iterator<Item = Candidate> {
    rows.into_iter().filter_map(|row| {
        let candidate = row.into_candidate();
        if candidate.is_none() {
            debug!("dropping malformed corpus row");
        }
        candidate
    })
}

fn absorb_failure(result: Cie10Result<Vec<CorpusRow>>, lookup: LookupKind) -> Vec<CorpusRow> {
    result.unwrap_or_else(|e| {
        warn!(lookup = %lookup, error = %e, "lookup failed, continuing without its rows");
        Vec::new()
    })
}

// ── Tests ────────────────────────────────────────────────────────────────────
