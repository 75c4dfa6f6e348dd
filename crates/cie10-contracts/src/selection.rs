//! The set of diagnoses a clinician has picked for a visit.
//!
//! Order of picking is preserved and a code can appear at most once.

use serde::{Deserialize, Serialize};

use crate::entry::DiagnosisEntry;

/// An ordered, code-unique list of picked diagnoses.
///
/// Serialized as a plain list. Deserializing goes through [`add`], so a list
/// with repeated codes keeps only the first entry for each.
///
/// [`add`]: DiagnosisSelection::add
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<DiagnosisEntry>", into = "Vec<DiagnosisEntry>")]
pub struct DiagnosisSelection {
    entries: Vec<DiagnosisEntry>,
}

impl DiagnosisSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` unless its code is already selected.
    ///
    /// Returns true if the entry was added.
    pub fn add(&mut self, entry: DiagnosisEntry) -> bool {
        if self.contains(&entry.code) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove the entry with `code`. Returns true if one was removed.
    pub fn remove(&mut self, code: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.code != code);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Single-diagnosis picking: drop everything and keep only `entry`.
    pub fn replace_single(&mut self, entry: DiagnosisEntry) {
        self.entries.clear();
        self.entries.push(entry);
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|e| e.code == code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.code.as_str())
    }

    pub fn entries(&self) -> &[DiagnosisEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<DiagnosisEntry> for DiagnosisSelection {
    fn from_iter<I: IntoIterator<Item = DiagnosisEntry>>(iter: I) -> Self {
        let mut selection = DiagnosisSelection::new();
        for entry in iter {
            selection.add(entry);
        }
        selection
    }
}

impl From<Vec<DiagnosisEntry>> for DiagnosisSelection {
    fn from(entries: Vec<DiagnosisEntry>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<DiagnosisSelection> for Vec<DiagnosisEntry> {
    fn from(selection: DiagnosisSelection) -> Self {
        selection.entries
    }
}
