//! JSON exporter for run metrics.
//!
//! Writes the flat `fields.json` record: run parameters followed by the five
//! result fields, indented with four spaces.

use freewill_core::{ExperimentParams, InfluenceReport};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// File name of the persisted record inside the run directory.
pub const FIELDS_FILE: &str = "fields.json";

/// Flat record persisted after a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldsRecord {
    /// Population size
    #[serde(rename = "N")]
    pub population_size: usize,

    /// Influence count
    #[serde(rename = "K")]
    pub influence_count: usize,

    /// Target label
    #[serde(rename = "FREE_WILL_CHOICE")]
    pub target: String,

    /// Action labels, in set order
    #[serde(rename = "ACTION_SET")]
    pub actions: Vec<String>,

    /// Observer sample size
    #[serde(rename = "RANDOM_SAMPLE_SIZE")]
    pub sample_size: usize,

    /// Result fields
    #[serde(flatten)]
    pub report: InfluenceReport,
}

impl FieldsRecord {
    /// Creates a record from the run's parameters and result.
    pub fn new(params: &ExperimentParams, report: &InfluenceReport) -> Self {
        Self {
            population_size: params.population_size(),
            influence_count: params.influence_count(),
            target: params.target_label().to_string(),
            actions: params.actions().labels().to_vec(),
            sample_size: params.sample_size(),
            report: *report,
        }
    }

    /// Serializes with four-space indentation.
    pub fn to_writer<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut serializer)
    }

    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: &Path) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freewill_core::ActionSet;

    fn record() -> FieldsRecord {
        let params = ExperimentParams::new(8, 3, 4, "east", ActionSet::cardinal()).unwrap();
        let report = InfluenceReport {
            baseline_percentage: 50.0,
            majority_percentage: 75.0,
            random_percentage: 50.0,
            free_will_influence: 25.0,
            random_influence: 0.0,
        };
        FieldsRecord::new(&params, &report)
    }

    #[test]
    fn test_field_names_and_order() {
        let mut buf = Vec::new();
        record().to_writer(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let keys = [
            "\"N\"",
            "\"K\"",
            "\"FREE_WILL_CHOICE\"",
            "\"ACTION_SET\"",
            "\"RANDOM_SAMPLE_SIZE\"",
            "\"baseline_percentage\"",
            "\"majority_percentage\"",
            "\"random_percentage\"",
            "\"free_will_influence\"",
            "\"random_influence\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_four_space_indent() {
        let mut buf = Vec::new();
        record().to_writer(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("{\n    \"N\": 8,"));
        assert!(text.contains("\n        \"east\","));
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FIELDS_FILE);

        record().write_to_file(&path).unwrap();

        let loaded: FieldsRecord =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, record());
        assert_eq!(loaded.actions, vec!["east", "west", "north", "south"]);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(FIELDS_FILE);

        assert!(record().write_to_file(&path).is_err());
    }
}
