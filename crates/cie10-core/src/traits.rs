//! The corpus trait: the only collaborator the engine talks to.
//!
//! The engine never reaches storage directly. The hosting application
//! provides a `DiagnosisCorpus` backed by whatever holds the CIE-10 table
//! (a hosted database, a file, an in-memory list) and the engine issues
//! read-only lookups against it.

use std::sync::Arc;

use cie10_contracts::{entry::CorpusRow, error::Cie10Result};

/// A read-only, queryable collection of CIE-10 diagnoses.
///
/// Implementations must be safe to call from several threads at once: the
/// engine may issue the two free-text lookups concurrently. Every method
/// reports failure per call; an `Err` never poisons later calls.
pub trait DiagnosisCorpus: Send + Sync {
    /// Rows whose code starts with `prefix`, case-insensitive, at most
    /// `limit` rows.
    fn lookup_by_code_prefix(&self, prefix: &str, limit: usize) -> Cie10Result<Vec<CorpusRow>>;

    /// Rows whose normalized name contains `fragment`, at most `limit` rows.
    ///
    /// `fragment` is already normalized (lower-cased, accent-free).
    fn lookup_by_name_substring(&self, fragment: &str, limit: usize) -> Cie10Result<Vec<CorpusRow>>;

    /// Rows whose code contains `fragment`, case-insensitive, at most
    /// `limit` rows.
    ///
    /// Defaults to a prefix lookup for corpora that cannot search inside
    /// codes.
    fn lookup_by_code_substring(&self, fragment: &str, limit: usize) -> Cie10Result<Vec<CorpusRow>> {
        self.lookup_by_code_prefix(fragment, limit)
    }
}

impl<T: DiagnosisCorpus + ?Sized> DiagnosisCorpus for Arc<T> {
    fn lookup_by_code_prefix(&self, prefix: &str, limit: usize) -> Cie10Result<Vec<CorpusRow>> {
        (**self).lookup_by_code_prefix(prefix, limit)
    }

    fn lookup_by_name_substring(&self, fragment: &str, limit: usize) -> Cie10Result<Vec<CorpusRow>> {
        (**self).lookup_by_name_substring(fragment, limit)
    }

    fn lookup_by_code_substring(&self, fragment: &str, limit: usize) -> Cie10Result<Vec<CorpusRow>> {
        (**self).lookup_by_code_substring(fragment, limit)
    }
}
