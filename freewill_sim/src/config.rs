//! Experiment configuration.

use freewill_core::types::CARDINAL_DIRECTIONS;
use freewill_core::{ActionSet, EngineError, ExperimentParams};
use std::path::PathBuf;

/// Default run name, used for the output subdirectory and chart file.
pub const DEFAULT_RUN_NAME: &str = "FreeWillSimulation_Run";

/// Configuration for an experiment run.
///
/// Unvalidated on purpose: [`ExperimentConfig::params`] is the single place
/// where sizes and labels are checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// Master seed for the reproducible stages
    pub seed: u64,

    /// Total population members (N)
    pub population_size: usize,

    /// Members forced to the target (K)
    pub influence_count: usize,

    /// Members the observer samples (S)
    pub sample_size: usize,

    /// Label of the target choice
    pub target: String,

    /// Action labels, in order
    pub actions: Vec<String>,

    /// Directory receiving the per-run output subdirectory
    pub output_dir: PathBuf,

    /// Name of the run (subdirectory and chart file stem)
    pub run_name: String,

    /// Whether to render the stacked bar chart
    pub render_chart: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            population_size: 100_000,
            influence_count: 250,
            sample_size: 500,
            target: "east".to_string(),
            actions: CARDINAL_DIRECTIONS.iter().map(|s| s.to_string()).collect(),
            output_dir: PathBuf::from("output"),
            run_name: DEFAULT_RUN_NAME.to_string(),
            render_chart: true,
        }
    }
}

impl ExperimentConfig {
    /// Validates the configuration into engine parameters.
    pub fn params(&self) -> Result<ExperimentParams, EngineError> {
        let actions = ActionSet::new(self.actions.iter().cloned())?;
        ExperimentParams::new(
            self.population_size,
            self.influence_count,
            self.sample_size,
            &self.target,
            actions,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExperimentConfig::default();
        let params = config.params().unwrap();

        assert_eq!(params.population_size(), 100_000);
        assert_eq!(params.influence_count(), 250);
        assert_eq!(params.sample_size(), 500);
        assert_eq!(params.target_label(), "east");
        assert_eq!(params.actions().len(), 4);
    }

    #[test]
    fn test_empty_action_set_rejected() {
        let config = ExperimentConfig {
            actions: vec![],
            ..Default::default()
        };
        assert!(matches!(config.params(), Err(EngineError::InvalidParameter(_))));
    }
}
