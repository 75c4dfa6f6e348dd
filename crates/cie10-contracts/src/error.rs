//! Error types for the CIE-10 search pipeline.
//!
//! All fallible operations return `Cie10Result<T>`. An empty query is not an
//! error, and neither is a malformed corpus row: those are absorbed by the
//! engine and never surface here.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which corpus lookup an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupKind {
    /// Rows whose code starts with a prefix.
    CodePrefix,
    /// Rows whose code contains a fragment.
    CodeSubstring,
    /// Rows whose normalized name contains a fragment.
    NameSubstring,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LookupKind::CodePrefix => "code-prefix",
            LookupKind::CodeSubstring => "code-substring",
            LookupKind::NameSubstring => "name-substring",
        };
        f.write_str(label)
    }
}

/// The unified error type for the CIE-10 crates.
#[derive(Debug, Error)]
pub enum Cie10Error {
    /// The corpus could not answer one lookup.
    ///
    /// In the free-text branch the engine absorbs this for a single source;
    /// it only reaches the caller when no source produced rows.
    #[error("corpus lookup '{lookup}' failed: {reason}")]
    CorpusLookupFailed { lookup: LookupKind, reason: String },

    /// A corpus file could not be read or parsed.
    #[error("corpus load failed: {reason}")]
    CorpusLoadFailed { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

impl Cie10Error {
    /// Shorthand for a failed lookup.
    pub fn lookup_failed(lookup: LookupKind, reason: impl Into<String>) -> Self {
        Cie10Error::CorpusLookupFailed {
            lookup,
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the CIE-10 crates.
pub type Cie10Result<T> = Result<T, Cie10Error>;
