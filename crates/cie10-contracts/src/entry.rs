//! Diagnosis entries and the raw rows a corpus hands back.

use serde::{Deserialize, Serialize};

use crate::query::normalize_es;

/// A CIE-10 diagnosis as returned to callers: just the code and its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagnosisEntry {
    /// Classification code, e.g. `"J10"` or `"A00.1"`.
    pub code: String,
    /// Human-readable diagnosis name.
    pub name: String,
}

impl DiagnosisEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// One row as produced by a corpus lookup.
///
/// Every field is optional because the backing table may hold incomplete
/// data. Rows without a usable code or name are dropped by
/// [`CorpusRow::into_candidate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRow {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Pre-computed normalized name (`name_norm` in the hosted table).
    #[serde(default, alias = "name_norm", alias = "normalizedName")]
    pub normalized_name: Option<String>,
}

impl CorpusRow {
    /// A complete row with the normalized name derived from `name`.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: Some(code.into()),
            normalized_name: Some(normalize_es(&name)),
            name: Some(name),
        }
    }

    /// Validate the row and turn it into a rankable candidate.
    ///
    /// Returns `None` when the code or name is missing or blank. A blank
    /// `normalized_name` is treated as absent and recomputed from `name`.
    pub fn into_candidate(self) -> Option<Candidate> {
        let code = self.code?.trim().to_string();
        let name = self.name?;
        if code.is_empty() || name.trim().is_empty() {
            return None;
        }
        let normalized_name = match self.normalized_name {
            Some(n) if !n.trim().is_empty() => n.trim().to_lowercase(),
            _ => normalize_es(&name),
        };
        Some(Candidate {
            entry: DiagnosisEntry { code, name },
            normalized_name,
        })
    }
}

/// A validated row carrying the matching key alongside the public entry.
///
/// Internal to a single search; only `entry` is ever returned to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub entry: DiagnosisEntry,
    pub normalized_name: String,
}

impl Candidate {
    pub fn code(&self) -> &str {
        &self.entry.code
    }
}
