//! In-memory implementation of `DiagnosisCorpus`.
//!
//! `InMemoryCorpus` is the reference corpus: it answers every lookup by
//! scanning a `Vec<CorpusRow>` kept in code order, mirroring what the hosted
//! CIE-10 table does with `ilike` filters. Rows are stored as given,
//! incomplete ones included; dropping them is the engine's job.

use std::path::Path;

use tracing::{debug, info};

use cie10_contracts::{
    entry::CorpusRow,
    error::{Cie10Error, Cie10Result},
    query::normalize_es,
};
use cie10_core::traits::DiagnosisCorpus;

/// A read-only CIE-10 table held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    rows: Vec<CorpusRow>,
}

impl InMemoryCorpus {
    /// Build a corpus from `rows`, ordering them by code.
    ///
    /// The sort is stable, so rows sharing a code keep their input order.
    pub fn new(rows: Vec<CorpusRow>) -> Self {
        let mut rows = rows;
        rows.sort_by(|a, b| a.code.cmp(&b.code));
        Self { rows }
    }

    /// Parse a JSON array of rows.
    ///
    /// Each element may carry `code`, `name` and `normalized_name` (or the
    /// hosted table's `name_norm`); any of them may be missing.
    pub fn from_json_str(s: &str) -> Cie10Result<Self> {
        let rows: Vec<CorpusRow> = serde_json::from_str(s).map_err(|e| Cie10Error::CorpusLoadFailed {
            reason: format!("failed to parse corpus JSON: {}", e),
        })?;
        Ok(Self::new(rows))
    }

    /// Read and parse a JSON corpus file.
    pub fn from_json_file(path: &Path) -> Cie10Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Cie10Error::CorpusLoadFailed {
            reason: format!("failed to read corpus file '{}': {}", path.display(), e),
        })?;
        let corpus = Self::from_json_str(&contents)?;
        info!(path = %path.display(), rows = corpus.len(), "corpus loaded");
        Ok(corpus)
    }

    pub fn rows(&self) -> &[CorpusRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn scan(&self, limit: usize, keep: impl Fn(&CorpusRow) -> bool) -> Vec<CorpusRow> {
        self.rows.iter().filter(|r| keep(r)).take(limit).cloned().collect()
    }
}

fn upper_code(row: &CorpusRow) -> Option<String> {
    row.code.as_deref().map(str::to_uppercase)
}

fn matching_name(row: &CorpusRow) -> String {
    match row.normalized_name.as_deref() {
        Some(n) if !n.trim().is_empty() => n.to_lowercase(),
        _ => normalize_es(row.name.as_deref().unwrap_or_default()),
    }
}

impl DiagnosisCorpus for InMemoryCorpus {
    fn lookup_by_code_prefix(&self, prefix: &str, limit: usize) -> Cie10Result<Vec<CorpusRow>> {
        let prefix = prefix.to_uppercase();
        let rows = self.scan(limit, |r| upper_code(r).is_some_and(|c| c.starts_with(&prefix)));
        debug!(prefix = %prefix, rows = rows.len(), "code prefix lookup");
        Ok(rows)
    }

    /// Falls back to normalizing `name` for rows whose normalized name was
    /// never filled in.
    fn lookup_by_name_substring(&self, fragment: &str, limit: usize) -> Cie10Result<Vec<CorpusRow>> {
        let fragment = fragment.to_lowercase();
        let rows = self.scan(limit, |r| matching_name(r).contains(&fragment));
        debug!(fragment = %fragment, rows = rows.len(), "name substring lookup");
        Ok(rows)
    }

    fn lookup_by_code_substring(&self, fragment: &str, limit: usize) -> Cie10Result<Vec<CorpusRow>> {
        let fragment = fragment.to_uppercase();
        let rows = self.scan(limit, |r| upper_code(r).is_some_and(|c| c.contains(&fragment)));
        debug!(fragment = %fragment, rows = rows.len(), "code substring lookup");
        Ok(rows)
    }
}
