//! Tabular view of a result record.
//!
//! Three rows, each split into the stacked "baseline" and "influence"
//! components the chart draws.

use freewill_core::InfluenceReport;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the target's prevalence was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "Baseline")]
    Baseline,

    #[serde(rename = "Majority (Actual)")]
    Majority,

    #[serde(rename = "Random Sample (Perceived)")]
    RandomSample,
}

impl Method {
    /// All methods in table order.
    pub fn all() -> [Method; 3] {
        [Method::Baseline, Method::Majority, Method::RandomSample]
    }

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Baseline => "Baseline",
            Method::Majority => "Majority (Actual)",
            Method::RandomSample => "Random Sample (Perceived)",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One row: a baseline segment with an influence segment stacked on top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "Method")]
    pub method: Method,

    #[serde(rename = "Baseline")]
    pub baseline: f64,

    #[serde(rename = "Free Will Influence")]
    pub influence: f64,
}

impl ResultRow {
    /// Height of the stacked bar.
    pub fn total(&self) -> f64 {
        self.baseline + self.influence
    }
}

/// The run's public tabular result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Lays out a result record as three stacked rows.
    pub fn from_report(report: &InfluenceReport) -> Self {
        let rows = Method::all()
            .into_iter()
            .map(|method| {
                let influence = match method {
                    Method::Baseline => 0.0,
                    Method::Majority => report.free_will_influence,
                    Method::RandomSample => report.random_influence,
                };
                ResultRow {
                    method,
                    baseline: report.baseline_percentage,
                    influence,
                }
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn row(&self, method: Method) -> Option<&ResultRow> {
        self.rows.iter().find(|r| r.method == method)
    }

    /// Tallest stacked bar.
    pub fn max_total(&self) -> f64 {
        self.rows
            .iter()
            .map(ResultRow::total)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const HEADERS: [&str; 3] = ["Method", "Baseline", "Free Will Influence"];

        let cells: Vec<[String; 3]> = self
            .rows
            .iter()
            .map(|r| {
                [
                    r.method.name().to_string(),
                    format!("{:.6}", r.baseline),
                    format!("{:.6}", r.influence),
                ]
            })
            .collect();

        let index_width = self.rows.len().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = (0..3)
            .map(|c| {
                cells
                    .iter()
                    .map(|row| row[c].len())
                    .chain(std::iter::once(HEADERS[c].len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:iw$}", "", iw = index_width)?;
        for (c, header) in HEADERS.iter().enumerate() {
            write!(f, "  {:>w$}", header, w = widths[c])?;
        }
        for (i, row) in cells.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:<iw$}", i, iw = index_width)?;
            for (c, cell) in row.iter().enumerate() {
                write!(f, "  {:>w$}", cell, w = widths[c])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> InfluenceReport {
        InfluenceReport {
            baseline_percentage: 50.0,
            majority_percentage: 75.0,
            random_percentage: 40.0,
            free_will_influence: 25.0,
            random_influence: -10.0,
        }
    }

    #[test]
    fn test_rows_from_report() {
        let table = ResultTable::from_report(&report());

        assert_eq!(table.rows().len(), 3);
        let majority = table.row(Method::Majority).unwrap();
        assert_eq!(majority.baseline, 50.0);
        assert_eq!(majority.total(), 75.0);
        assert_eq!(table.row(Method::Baseline).unwrap().influence, 0.0);
        assert_eq!(table.row(Method::RandomSample).unwrap().total(), 40.0);
        assert_eq!(table.max_total(), 75.0);
    }

    #[test]
    fn test_display_layout() {
        let text = ResultTable::from_report(&report()).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("Free Will Influence"));
        assert!(lines[2].starts_with('1'));
        assert!(lines[2].contains("Majority (Actual)"));
        assert!(lines[3].ends_with("-10.000000"));
        // Columns are aligned
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn test_serialized_column_names() {
        let json = serde_json::to_value(ResultTable::from_report(&report())).unwrap();
        let first = &json["rows"][0];

        assert_eq!(first["Method"], "Baseline");
        assert_eq!(first["Baseline"], 50.0);
        assert_eq!(first["Free Will Influence"], 0.0);
        assert_eq!(json["rows"][2]["Method"], "Random Sample (Perceived)");
    }
}
