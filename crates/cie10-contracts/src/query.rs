//! Query normalization and code-shape classification.

use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::{Cie10Error, Cie10Result};

/// Code shape used when no pattern is configured: one letter, two digits,
/// and an optional decimal suffix.
pub const DEFAULT_CODE_PATTERN: &str = r"^[A-Za-z][0-9]{2}(\.[0-9]+)?$";

/// Fold a Spanish-language string into its matching key.
///
/// Trims, lower-cases, decomposes to NFD and drops the combining diacritical
/// marks (U+0300..=U+036F), so `ñ` becomes `n` and `š` becomes `s`. Letters
/// with no canonical decomposition (`ł`, `ø`) pass through lower-cased.
pub fn normalize_es(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_diacritical_mark(*c))
        .collect()
}

fn is_diacritical_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// The shape a query must have to be treated as a CIE-10 code.
///
/// Wraps a regular expression matched case-insensitively against the trimmed
/// query. Serialized as the pattern source string.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CodePattern {
    regex: Regex,
}

impl CodePattern {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `pattern` is not a valid regular expression.
    pub fn new(pattern: &str) -> Cie10Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| Cie10Error::ConfigError {
                reason: format!("invalid code pattern '{}': {}", pattern, e),
            })?;
        Ok(Self { regex })
    }

    /// The pattern source as configured.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Return true if `input` (already trimmed) has the shape of a code.
    pub fn matches(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

impl Default for CodePattern {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_PATTERN).expect("built-in code pattern compiles")
    }
}

impl PartialEq for CodePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for CodePattern {}

impl fmt::Debug for CodePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CodePattern").field(&self.as_str()).finish()
    }
}

impl TryFrom<String> for CodePattern {
    type Error = Cie10Error;

    fn try_from(pattern: String) -> Cie10Result<Self> {
        Self::new(&pattern)
    }
}

impl From<CodePattern> for String {
    fn from(pattern: CodePattern) -> Self {
        pattern.as_str().to_string()
    }
}

/// How a query will be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryKind {
    /// Nothing to search for after trimming.
    Empty,
    /// A code prefix lookup.
    Code,
    /// Name and code substring lookups, then ranking.
    FreeText,
}

/// A query string together with every form the engine matches against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub raw: String,
    pub trimmed: String,
    /// Upper-cased trimmed input, used for code lookups.
    pub upper: String,
    /// Accent-free lower-cased input, used for name lookups.
    pub normalized: String,
    pub kind: QueryKind,
}

impl SearchQuery {
    /// Derive all forms of `raw` and classify it with `pattern`.
    pub fn parse(raw: &str, pattern: &CodePattern) -> Self {
        let trimmed = raw.trim().to_string();
        let normalized = normalize_es(&trimmed);
        // A lone combining mark trims to something but normalizes to nothing.
        let kind = if normalized.is_empty() {
            QueryKind::Empty
        } else if pattern.matches(&trimmed) {
            QueryKind::Code
        } else {
            QueryKind::FreeText
        };
        Self {
            raw: raw.to_string(),
            upper: trimmed.to_uppercase(),
            normalized,
            trimmed,
            kind,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind == QueryKind::Empty
    }

    pub fn looks_like_code(&self) -> bool {
        self.kind == QueryKind::Code
    }
}
