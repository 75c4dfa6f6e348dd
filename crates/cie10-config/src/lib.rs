//! # cie10-config
//!
//! TOML configuration for the CIE-10 diagnosis search engine.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use cie10_core::SearchEngine;
//!
//! let config = cie10_config::from_file(Path::new("config/engine.toml"))?;
//! let engine = SearchEngine::new(config);
//! ```
//!
//! Scoring weights, lookup limits and the code-shape rule are all data, so
//! a deployment can retune ranking without a rebuild.

pub mod loader;

pub use loader::{from_file, from_toml_str, load, validate, DEFAULT_CONFIG_TOML};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;

    use cie10_contracts::{config::EngineConfig, error::Cie10Error, query::CodePattern};

    use crate::{from_file, from_toml_str, load};

    fn config_error(result: Result<EngineConfig, Cie10Error>) -> String {
        match result {
            Err(Cie10Error::ConfigError { reason }) => reason,
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 1. shipped defaults ───────────────────────────────────────────────────

    #[test]
    fn test_shipped_config_equals_builtin_defaults() {
        let config = load(None).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(from_toml_str("").unwrap(), EngineConfig::default());
    }

    // ── 2. partial overrides ──────────────────────────────────────────────────

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let toml = r#"
            concurrent_lookups = false
            code_pattern = '^[A-Za-z][0-9]{2,4}(\.[0-9]+)?$'

            [scoring]
            name_prefix = 500
        "#;

        let config = from_toml_str(toml).unwrap();

        assert!(!config.concurrent_lookups);
        assert_eq!(config.scoring.name_prefix, 500);
        assert_eq!(config.scoring.name_contains, 80);
        assert_eq!(
            config.code_pattern,
            CodePattern::new(r"^[A-Za-z][0-9]{2,4}(\.[0-9]+)?$").unwrap()
        );
        assert!(config.code_pattern.matches("J109"));
        assert_eq!(config.limits.result_limit, 30);
    }

    // ── 3. validation ─────────────────────────────────────────────────────────

    #[test]
    fn test_zero_limit_is_rejected() {
        let reason = config_error(from_toml_str("[limits]\nresult_limit = 0\n"));
        assert!(reason.contains("limits.result_limit"), "unexpected reason: {reason}");
    }

    #[test]
    fn test_result_limit_above_maximum_is_rejected() {
        let reason = config_error(from_toml_str("[limits]\nresult_limit = 500\n"));
        assert!(reason.contains("limits.result_limit"), "unexpected reason: {reason}");
        assert!(reason.contains("maximum of 30"), "unexpected reason: {reason}");

        assert_eq!(from_toml_str("[limits]\nresult_limit = 30\n").unwrap().limits.result_limit, 30);
    }

    #[test]
    fn test_invalid_code_pattern_is_rejected() {
        let reason = config_error(from_toml_str("code_pattern = '^[A-Z('\n"));
        assert!(reason.contains("invalid code pattern"), "unexpected reason: {reason}");
    }

    // ── 4. parse and I/O errors ───────────────────────────────────────────────

    #[test]
    fn test_toml_parse_error() {
        let reason = config_error(from_toml_str("this is not valid toml ][[["));
        assert!(
            reason.contains("failed to parse engine config TOML"),
            "expected parse error message, got: {reason}"
        );
    }

    #[test]
    fn test_wrong_type_is_a_parse_error() {
        let reason = config_error(from_toml_str("[limits]\nresult_limit = \"thirty\"\n"));
        assert!(reason.contains("failed to parse engine config TOML"));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let reason = config_error(from_file(Path::new("/nonexistent/cie10/engine.toml")));
        assert!(reason.contains("failed to read engine config"), "unexpected reason: {reason}");
    }
}
