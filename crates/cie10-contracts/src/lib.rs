//! # cie10-contracts
//!
//! Shared types, query normalization, and errors for the CIE-10 diagnosis
//! search engine.
//!
//! All crates in the workspace import from here. No I/O lives in this
//! crate, only data definitions, pure string handling and error types.

pub mod config;
pub mod entry;
pub mod error;
pub mod query;
pub mod selection;

#[cfg(test)]
mod tests {
    use super::*;
    use config::{EngineConfig, MAX_RESULT_LIMIT};
    use entry::{CorpusRow, DiagnosisEntry};
    use error::{Cie10Error, LookupKind};
    use query::{normalize_es, CodePattern, QueryKind, SearchQuery};
    use selection::DiagnosisSelection;

    // ── normalize_es ─────────────────────────────────────────────────────────

    #[test]
    fn normalize_strips_accents_and_case() {
        assert_eq!(normalize_es("  Cólera  "), "colera");
        assert_eq!(normalize_es("Influenza sin NEUMONÍA"), "influenza sin neumonia");
        assert_eq!(normalize_es("Año"), "ano");
        assert_eq!(normalize_es("Pingüino"), "pinguino");
    }

    #[test]
    fn normalize_drops_decomposed_marks() {
        // "e" followed by a combining acute accent.
        assert_eq!(normalize_es("Ce\u{0301}lula"), "celula");
    }

    #[test]
    fn normalize_folds_letters_beyond_spanish() {
        assert_eq!(normalize_es("Kašin-Beck"), "kasin-beck");
        assert_eq!(normalize_es("Āb"), "ab");
        assert_eq!(normalize_es("Çağ"), "cag");
        assert_eq!(normalize_es("Ångström"), "angstrom");
        // No canonical decomposition: kept as a lower-case letter.
        assert_eq!(normalize_es("Łódź"), "łodz");
    }

    #[test]
    fn normalize_keeps_digits_and_punctuation() {
        assert_eq!(normalize_es("Tipo 2, no insulinodependiente"), "tipo 2, no insulinodependiente");
    }

    // ── CodePattern ──────────────────────────────────────────────────────────

    #[test]
    fn default_pattern_accepts_letter_two_digits_and_decimal() {
        let p = CodePattern::default();
        assert!(p.matches("J10"));
        assert!(p.matches("a00"));
        assert!(p.matches("A00.1"));
        assert!(p.matches("E11.65"));
    }

    #[test]
    fn default_pattern_rejects_other_shapes() {
        let p = CodePattern::default();
        assert!(!p.matches("J109"));
        assert!(!p.matches("J1"));
        assert!(!p.matches("J10."));
        assert!(!p.matches("J10.1.2"));
        assert!(!p.matches("10J"));
        assert!(!p.matches("amid"));
        assert!(!p.matches("Ñ10"));
        assert!(!p.matches(""));
    }

    #[test]
    fn widened_pattern_accepts_four_digit_codes() {
        let p = CodePattern::new(r"^[A-Za-z][0-9]{2,4}(\.[0-9]+)?$").unwrap();
        assert!(p.matches("J109"));
        assert!(p.matches("k3580"));
        assert!(!p.matches("K35801"));
    }

    #[test]
    fn pattern_without_decimal_rejects_suffix() {
        let p = CodePattern::new("^[A-Z][0-9]{2}$").unwrap();
        assert!(p.matches("a00"));
        assert!(!p.matches("A00.1"));
    }

    #[test]
    fn invalid_pattern_is_a_config_error() {
        match CodePattern::new("^[A-Z(") {
            Err(Cie10Error::ConfigError { reason }) => {
                assert!(reason.contains("invalid code pattern"), "unexpected reason: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn pattern_serializes_as_its_source() {
        let p: CodePattern = serde_json::from_str(r#""^[A-Z][0-9]{3}$""#).unwrap();
        assert_eq!(p.as_str(), "^[A-Z][0-9]{3}$");
        assert_eq!(serde_json::to_value(&p).unwrap(), serde_json::json!("^[A-Z][0-9]{3}$"));
        assert!(serde_json::from_str::<CodePattern>(r#""(""#).is_err());
    }

    // ── SearchQuery ──────────────────────────────────────────────────────────

    #[test]
    fn query_derives_all_forms() {
        let q = SearchQuery::parse("  Amígdala ", &CodePattern::default());
        assert_eq!(q.trimmed, "Amígdala");
        assert_eq!(q.upper, "AMÍGDALA");
        assert_eq!(q.normalized, "amigdala");
        assert_eq!(q.kind, QueryKind::FreeText);
    }

    #[test]
    fn query_classification() {
        let p = CodePattern::default();
        assert!(SearchQuery::parse("   ", &p).is_empty());
        assert!(SearchQuery::parse("", &p).is_empty());
        assert!(SearchQuery::parse(" \u{0301} ", &p).is_empty());
        assert!(SearchQuery::parse(" j10 ", &p).looks_like_code());
        assert_eq!(SearchQuery::parse("j10", &p).upper, "J10");
        assert_eq!(SearchQuery::parse("gripe", &p).kind, QueryKind::FreeText);
    }

    // ── CorpusRow ────────────────────────────────────────────────────────────

    #[test]
    fn row_without_code_or_name_is_dropped() {
        let no_code = CorpusRow { code: None, name: Some("Gripe".into()), normalized_name: None };
        let blank_code = CorpusRow { code: Some("  ".into()), name: Some("Gripe".into()), normalized_name: None };
        let no_name = CorpusRow { code: Some("J10".into()), name: None, normalized_name: None };
        assert!(no_code.into_candidate().is_none());
        assert!(blank_code.into_candidate().is_none());
        assert!(no_name.into_candidate().is_none());
    }

    #[test]
    fn row_recomputes_missing_normalized_name() {
        let row = CorpusRow { code: Some("A00".into()), name: Some("Cólera".into()), normalized_name: None };
        let candidate = row.into_candidate().unwrap();
        assert_eq!(candidate.normalized_name, "colera");
        assert_eq!(candidate.entry, DiagnosisEntry::new("A00", "Cólera"));
    }

    #[test]
    fn row_deserializes_from_hosted_table_shape() {
        let row: CorpusRow =
            serde_json::from_str(r#"{"code":"J10","name":"Influenza","name_norm":"influenza"}"#).unwrap();
        assert_eq!(row.normalized_name.as_deref(), Some("influenza"));

        let partial: CorpusRow = serde_json::from_str(r#"{"name":"Sin código"}"#).unwrap();
        assert!(partial.code.is_none());
    }

    // ── DiagnosisSelection ───────────────────────────────────────────────────

    #[test]
    fn selection_ignores_duplicate_codes() {
        let mut sel = DiagnosisSelection::new();
        assert!(sel.add(DiagnosisEntry::new("J10", "Influenza")));
        assert!(sel.add(DiagnosisEntry::new("E11", "Diabetes")));
        assert!(!sel.add(DiagnosisEntry::new("J10", "Influenza (otra)")));

        assert_eq!(sel.len(), 2);
        assert_eq!(sel.codes().collect::<Vec<_>>(), vec!["J10", "E11"]);
        assert_eq!(sel.entries()[0].name, "Influenza");
    }

    #[test]
    fn selection_remove_clear_and_replace() {
        let mut sel: DiagnosisSelection = vec![
            DiagnosisEntry::new("J10", "Influenza"),
            DiagnosisEntry::new("E11", "Diabetes"),
            DiagnosisEntry::new("J10", "Influenza"),
        ]
        .into_iter()
        .collect();
        assert_eq!(sel.len(), 2);

        assert!(sel.remove("J10"));
        assert!(!sel.remove("J10"));
        assert!(!sel.contains("J10"));

        sel.replace_single(DiagnosisEntry::new("A00", "Cólera"));
        assert_eq!(sel.codes().collect::<Vec<_>>(), vec!["A00"]);

        sel.clear();
        assert!(sel.is_empty());
    }

    #[test]
    fn selection_serializes_as_plain_list() {
        let mut sel = DiagnosisSelection::new();
        sel.add(DiagnosisEntry::new("J10", "Influenza"));
        let json = serde_json::to_value(&sel).unwrap();
        assert_eq!(json, serde_json::json!([{ "code": "J10", "name": "Influenza" }]));
    }

    #[test]
    fn selection_deserializes_without_duplicate_codes() {
        let json = r#"[
            {"code": "J10", "name": "Influenza"},
            {"code": "E11", "name": "Diabetes"},
            {"code": "J10", "name": "Influenza (otra)"}
        ]"#;
        let sel: DiagnosisSelection = serde_json::from_str(json).unwrap();
        assert_eq!(sel.codes().collect::<Vec<_>>(), vec!["J10", "E11"]);
        assert_eq!(sel.entries()[0].name, "Influenza");
    }

    // ── Config defaults ──────────────────────────────────────────────────────

    #[test]
    fn config_defaults_match_picker_behavior() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.limits.result_limit, 30);
        assert!(cfg.limits.result_limit <= MAX_RESULT_LIMIT);
        assert_eq!(cfg.limits.name_lookup_limit, 40);
        assert_eq!(cfg.limits.code_lookup_limit, 20);
        assert_eq!(cfg.scoring.name_prefix, 120);
        assert_eq!(cfg.scoring.short_match_max_chars, 4);
        assert!(cfg.concurrent_lookups);
    }

    // ── Errors ───────────────────────────────────────────────────────────────

    #[test]
    fn lookup_error_names_its_source() {
        let err = Cie10Error::lookup_failed(LookupKind::CodePrefix, "timeout");
        assert_eq!(err.to_string(), "corpus lookup 'code-prefix' failed: timeout");
    }
}
