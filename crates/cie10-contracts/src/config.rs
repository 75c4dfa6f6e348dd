//! Engine configuration types.
//!
//! Every field has a default matching the behavior of the diagnosis pickers,
//! so an empty TOML document yields a working configuration.

use serde::{Deserialize, Serialize};

use crate::query::CodePattern;

/// Upper bound on `result_limit`. A search never returns more entries.
pub const MAX_RESULT_LIMIT: usize = 30;

/// Row caps for each lookup and for the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Maximum entries returned from one search, at most [`MAX_RESULT_LIMIT`].
    pub result_limit: usize,
    /// Rows requested from the code-prefix lookup of a code-like query.
    pub code_prefix_limit: usize,
    /// Rows requested from the name lookup of a free-text query.
    pub name_lookup_limit: usize,
    /// Rows requested from the code lookup of a free-text query.
    pub code_lookup_limit: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            result_limit: 30,
            code_prefix_limit: 30,
            name_lookup_limit: 40,
            code_lookup_limit: 20,
        }
    }
}

/// Relevance points awarded to a free-text candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Normalized name starts with the query.
    pub name_prefix: u32,
    /// Normalized name contains the query.
    pub name_contains: u32,
    /// Code starts with the raw query.
    pub code_prefix: u32,
    /// Code contains the raw query.
    pub code_contains: u32,
    /// Extra points for a name hit when the query is short.
    pub short_match_bonus: u32,
    /// Longest query (in characters) that still earns `short_match_bonus`.
    pub short_match_max_chars: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            name_prefix: 120,
            name_contains: 80,
            code_prefix: 100,
            code_contains: 20,
            short_match_bonus: 15,
            short_match_max_chars: 4,
        }
    }
}

/// Complete engine configuration.
///
/// Example in TOML:
/// ```toml
/// concurrent_lookups = true
/// code_pattern = '^[A-Za-z][0-9]{2,4}(\.[0-9]+)?$'
///
/// [limits]
/// result_limit = 30
///
/// [scoring]
/// name_prefix = 120
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub limits: SearchLimits,
    pub scoring: ScoringWeights,
    /// Regular expression a trimmed query must match to be looked up as a
    /// code prefix.
    pub code_pattern: CodePattern,
    /// Issue the two free-text lookups on separate threads.
    pub concurrent_lookups: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            limits: SearchLimits::default(),
            scoring: ScoringWeights::default(),
            code_pattern: CodePattern::default(),
            concurrent_lookups: true,
        }
    }
}
