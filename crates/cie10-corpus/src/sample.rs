//! A small CIE-10 dataset for demos and tests.
//!
//! Codes and names follow the Spanish CIE-10 edition, but the selection is
//! arbitrary and far from complete. No external systems are contacted.

use cie10_contracts::entry::CorpusRow;

use crate::memory::InMemoryCorpus;

/// `(code, name)` pairs of the sample dataset.
pub const SAMPLE_DIAGNOSES: &[(&str, &str)] = &[
    ("A00", "Cólera"),
    ("A00.1", "Cólera debido a Vibrio cholerae 01, biotipo El Tor"),
    ("A09", "Diarrea y gastroenteritis de presunto origen infeccioso"),
    ("B34.9", "Infección viral, no especificada"),
    ("E10", "Diabetes mellitus tipo 1"),
    ("E11", "Diabetes mellitus tipo 2"),
    ("E11.9", "Diabetes mellitus tipo 2 sin complicaciones"),
    ("E66.9", "Obesidad, no especificada"),
    ("E78.0", "Hipercolesterolemia pura"),
    ("G43.9", "Migraña, no especificada"),
    ("I10", "Hipertensión esencial (primaria)"),
    ("I15.9", "Hipertensión secundaria, no especificada"),
    ("J00", "Rinofaringitis aguda (resfriado común)"),
    ("J02.9", "Faringitis aguda, no especificada"),
    ("J03.9", "Amigdalitis aguda, no especificada"),
    ("J06.9", "Infección aguda de las vías respiratorias superiores, no especificada"),
    ("J10", "Influenza debida a virus de la influenza identificado"),
    ("J10.1", "Influenza con otras manifestaciones respiratorias, virus identificado"),
    ("J109", "Influenza sin neumonía"),
    ("J11", "Influenza debida a virus no identificado"),
    ("J18.9", "Neumonía, no especificada"),
    ("J20.9", "Bronquitis aguda, no especificada"),
    ("J45.9", "Asma, no especificada"),
    ("K21.9", "Enfermedad del reflujo gastroesofágico sin esofagitis"),
    ("K29.7", "Gastritis, no especificada"),
    ("K35.8", "Apendicitis aguda, otras y las no especificadas"),
    ("M54.5", "Lumbago no especificado"),
    ("N39.0", "Infección de vías urinarias, sitio no especificado"),
    ("R05", "Tos"),
    ("R10.4", "Otros dolores abdominales y los no especificados"),
    ("R50.9", "Fiebre, no especificada"),
    ("R51", "Cefalea"),
    ("Z00.0", "Examen médico general"),
];

/// The sample dataset as rows with pre-computed normalized names.
pub fn sample_rows() -> Vec<CorpusRow> {
    SAMPLE_DIAGNOSES
        .iter()
        .map(|(code, name)| CorpusRow::new(*code, *name))
        .collect()
}

/// The sample dataset as a ready-to-query corpus.
pub fn sample_corpus() -> InMemoryCorpus {
    InMemoryCorpus::new(sample_rows())
}
