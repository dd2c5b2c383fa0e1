//! Disease → symptom-set index construction.
//!
//! Built once at startup from the ingested rows, then treated as read-only.
//! Safe to share across concurrent queries without locking: no field is
//! mutated after construction.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::dataset::Record;

/// Aggregated symptom profile for one disease label.
///
/// `symptoms` is the union of every symptom flagged present across all rows
/// carrying this label; duplicates collapse in the set.
#[derive(Debug, Clone)]
pub struct DiseaseProfile {
    /// Label exactly as first encountered in the source data.
    pub name: String,
    /// Normalised (lowercased, trimmed) symptom tokens.
    pub symptoms: HashSet<String>,
}

/// Immutable mapping from disease label to its symptom profile.
///
/// Profiles are stored in first-seen order so downstream ranking has a
/// deterministic iteration order for tie-breaking.
#[derive(Debug, Clone)]
pub struct SymptomIndex {
    profiles: Vec<DiseaseProfile>,
    by_name: HashMap<String, usize>,
    source_rows: usize,
    built_at: DateTime<Utc>,
}

/// Build the index from ingested rows.
///
/// For each row, the `label_column` cell names the disease; every other
/// column whose value is exactly `"1"` contributes its (lowercased, trimmed)
/// column name to that disease's symptom set. Any other cell value,
/// including `"0"` and empty, is ignored for that row. Malformed rows never
/// fail the build.
///
/// Rows whose label cell is missing or blank are skipped: an empty label is
/// a data hygiene defect, not a disease worth indexing.
pub fn build_index(rows: &[Record], label_column: &str) -> SymptomIndex {
    let mut profiles: Vec<DiseaseProfile> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for row in rows {
        let Some(label) = row.get(label_column).filter(|v| !v.trim().is_empty()) else {
            skipped += 1;
            continue;
        };

        let idx = *by_name.entry(label.clone()).or_insert_with(|| {
            profiles.push(DiseaseProfile {
                name: label.clone(),
                symptoms: HashSet::new(),
            });
            profiles.len() - 1
        });

        for (column, value) in row {
            if column != label_column && value == "1" {
                profiles[idx]
                    .symptoms
                    .insert(column.to_lowercase().trim().to_string());
            }
        }
    }

    if skipped > 0 {
        debug!(skipped, "Skipped rows with empty disease label");
    }
    info!(
        diseases = profiles.len(),
        rows = rows.len(),
        "Loaded {} unique diseases from {} records",
        profiles.len(),
        rows.len()
    );

    SymptomIndex {
        profiles,
        by_name,
        source_rows: rows.len(),
        built_at: Utc::now(),
    }
}

impl SymptomIndex {
    /// Profiles in first-seen dataset order.
    pub fn profiles(&self) -> &[DiseaseProfile] {
        &self.profiles
    }

    /// Look up one profile by its exact label.
    pub fn get(&self, name: &str) -> Option<&DiseaseProfile> {
        self.by_name.get(name).map(|&i| &self.profiles[i])
    }

    /// Number of distinct disease labels.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Number of distinct symptoms across all profiles.
    pub fn distinct_symptom_count(&self) -> usize {
        let mut all: HashSet<&str> = HashSet::new();
        for profile in &self.profiles {
            all.extend(profile.symptoms.iter().map(|s| s.as_str()));
        }
        all.len()
    }

    /// How many data rows the index was built from.
    pub fn source_rows(&self) -> usize {
        self.source_rows
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_one_entry_per_distinct_label() {
        let rows = vec![
            row(&[("diseases", "Flu"), ("fever", "1")]),
            row(&[("diseases", "Cold"), ("fever", "1")]),
            row(&[("diseases", "Flu"), ("cough", "1")]),
        ];
        let index = build_index(&rows, "diseases");
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_symptom_set_is_union_across_rows() {
        let rows = vec![
            row(&[("diseases", "Flu"), ("fever", "1"), ("cough", "0")]),
            row(&[("diseases", "Flu"), ("fever", "0"), ("cough", "1")]),
        ];
        let index = build_index(&rows, "diseases");

        let flu = index.get("Flu").unwrap();
        assert_eq!(flu.symptoms.len(), 2);
        assert!(flu.symptoms.contains("fever"));
        assert!(flu.symptoms.contains("cough"));
    }

    #[test]
    fn test_only_literal_one_counts_as_present() {
        let rows = vec![row(&[
            ("diseases", "Flu"),
            ("fever", "1"),
            ("cough", "0"),
            ("nausea", ""),
            ("chills", "yes"),
        ])];
        let index = build_index(&rows, "diseases");

        let flu = index.get("Flu").unwrap();
        assert_eq!(flu.symptoms.len(), 1);
        assert!(flu.symptoms.contains("fever"));
    }

    #[test]
    fn test_symptom_column_names_are_normalised() {
        let rows = vec![row(&[("diseases", "Flu"), (" Sore Throat ", "1")])];
        let index = build_index(&rows, "diseases");
        assert!(index.get("Flu").unwrap().symptoms.contains("sore throat"));
    }

    #[test]
    fn test_empty_label_rows_are_skipped() {
        let rows = vec![
            row(&[("diseases", ""), ("fever", "1")]),
            row(&[("diseases", "  "), ("cough", "1")]),
            row(&[("fever", "1")]),
            row(&[("diseases", "Flu"), ("fever", "1")]),
        ];
        let index = build_index(&rows, "diseases");
        assert_eq!(index.len(), 1);
        assert!(index.get("Flu").is_some());
    }

    #[test]
    fn test_label_casing_preserved_and_distinct() {
        // Labels compare exactly as written in the source.
        let rows = vec![
            row(&[("diseases", "Flu"), ("fever", "1")]),
            row(&[("diseases", "flu"), ("cough", "1")]),
        ];
        let index = build_index(&rows, "diseases");
        assert_eq!(index.len(), 2);
        assert_eq!(index.profiles()[0].name, "Flu");
        assert_eq!(index.profiles()[1].name, "flu");
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let rows = vec![
            row(&[("diseases", "Mumps"), ("fever", "1")]),
            row(&[("diseases", "Cold"), ("fever", "1")]),
            row(&[("diseases", "Mumps"), ("chills", "1")]),
            row(&[("diseases", "Flu"), ("fever", "1")]),
        ];
        let index = build_index(&rows, "diseases");
        let names: Vec<&str> = index.profiles().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Mumps", "Cold", "Flu"]);
    }

    #[test]
    fn test_disease_with_no_flagged_symptoms_still_indexed() {
        let rows = vec![row(&[("diseases", "Mystery"), ("fever", "0")])];
        let index = build_index(&rows, "diseases");
        let profile = index.get("Mystery").unwrap();
        assert!(profile.symptoms.is_empty());
    }

    #[test]
    fn test_distinct_symptom_count() {
        let rows = vec![
            row(&[("diseases", "Flu"), ("fever", "1"), ("cough", "1")]),
            row(&[("diseases", "Cold"), ("fever", "1")]),
        ];
        let index = build_index(&rows, "diseases");
        assert_eq!(index.distinct_symptom_count(), 2);
    }

    #[test]
    fn test_empty_rows_give_empty_index() {
        let index = build_index(&[], "diseases");
        assert!(index.is_empty());
        assert_eq!(index.source_rows(), 0);
    }
}
