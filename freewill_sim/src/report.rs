//! Output collaborators: chart rendering and metric persistence.
//!
//! Runs strictly after the result record is final. Failures here are
//! collected into a [`ReportOutcome`] and never touch the record itself.

use crate::chart;
use crate::config::ExperimentConfig;
use crate::error::SimError;
use crate::exporter::{FieldsRecord, FIELDS_FILE};
use crate::table::ResultTable;
use freewill_core::{ExperimentParams, InfluenceReport};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Where and what to write after a run.
#[derive(Debug, Clone)]
pub struct Reporter {
    /// Output root; `None` disables all writes
    save_dir: Option<PathBuf>,

    run_name: String,

    render_chart: bool,
}

impl Reporter {
    /// Creates a reporter writing under `<save_dir>/<run_name>/`.
    pub fn new(save_dir: impl Into<PathBuf>, run_name: impl Into<String>) -> Self {
        Self {
            save_dir: Some(save_dir.into()),
            run_name: run_name.into(),
            render_chart: true,
        }
    }

    /// Creates a reporter that writes nothing.
    pub fn disabled() -> Self {
        Self {
            save_dir: None,
            run_name: String::new(),
            render_chart: false,
        }
    }

    /// Builds the reporter described by a config.
    pub fn from_config(config: &ExperimentConfig) -> Self {
        Self::new(&config.output_dir, &config.run_name).with_chart(config.render_chart)
    }

    /// Enables or disables chart rendering.
    pub fn with_chart(mut self, enabled: bool) -> Self {
        self.render_chart = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.save_dir.is_some()
    }

    pub fn run_name(&self) -> &str {
        &self.run_name
    }

    /// Returns `<save_dir>/<run_name>` if reporting is enabled.
    pub fn run_dir(&self) -> Option<PathBuf> {
        self.save_dir.as_ref().map(|dir| dir.join(&self.run_name))
    }

    /// Writes the chart and the fields record.
    pub fn report(
        &self,
        params: &ExperimentParams,
        record: &InfluenceReport,
        table: &ResultTable,
    ) -> ReportOutcome {
        let Some(run_dir) = self.run_dir() else {
            return ReportOutcome::default();
        };

        if let Err(e) = std::fs::create_dir_all(&run_dir) {
            error!("Failed to create run directory {}: {}", run_dir.display(), e);
            let fields = Some(Err(SimError::resource(&run_dir, &e)));
            let chart = self
                .render_chart
                .then(|| Err(SimError::resource(&run_dir, &e)));
            return ReportOutcome { chart, fields };
        }

        let chart = self
            .render_chart
            .then(|| self.write_chart(&run_dir, params, table));
        let fields = Some(self.write_fields(&run_dir, params, record));

        ReportOutcome { chart, fields }
    }

    fn write_chart(
        &self,
        run_dir: &Path,
        params: &ExperimentParams,
        table: &ResultTable,
    ) -> Result<PathBuf, SimError> {
        let path = chart::chart_path(run_dir, &self.run_name);
        match chart::render_stacked_bars(&path, table, params) {
            Ok(()) => {
                info!("Chart saved to: {}", path.display());
                Ok(path)
            }
            Err(e) => {
                error!("Failed to render chart {}: {}", path.display(), e);
                Err(SimError::resource(&path, e))
            }
        }
    }

    fn write_fields(
        &self,
        run_dir: &Path,
        params: &ExperimentParams,
        record: &InfluenceReport,
    ) -> Result<PathBuf, SimError> {
        let path = run_dir.join(FIELDS_FILE);
        match FieldsRecord::new(params, record).write_to_file(&path) {
            Ok(()) => {
                info!("Fields saved to: {}", path.display());
                Ok(path)
            }
            Err(e) => {
                error!("Failed to write fields {}: {}", path.display(), e);
                Err(SimError::resource(&path, e))
            }
        }
    }
}

/// What the collaborators managed to write. `None` means not attempted.
#[derive(Debug, Default)]
pub struct ReportOutcome {
    pub chart: Option<Result<PathBuf, SimError>>,
    pub fields: Option<Result<PathBuf, SimError>>,
}

impl ReportOutcome {
    /// Returns the collaborator failures, if any.
    pub fn failures(&self) -> Vec<&SimError> {
        [&self.chart, &self.fields]
            .into_iter()
            .filter_map(|r| r.as_ref().and_then(|r| r.as_ref().err()))
            .collect()
    }

    /// True if every attempted write succeeded.
    pub fn is_ok(&self) -> bool {
        self.failures().is_empty()
    }

    /// Path of the written chart, if any.
    pub fn chart_path(&self) -> Option<&Path> {
        self.chart.as_ref()?.as_ref().ok().map(PathBuf::as_path)
    }

    /// Path of the written fields record, if any.
    pub fn fields_path(&self) -> Option<&Path> {
        self.fields.as_ref()?.as_ref().ok().map(PathBuf::as_path)
    }
}
