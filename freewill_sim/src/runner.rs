//! Experiment runner - drives one run through its stages.
//!
//! ```text
//! Initialized --generate--> Generated --apply_override--> Overridden
//!     --measure--> Measured --report--> Reported
//! ```
//!
//! Each stage consumes the previous one and returns a new value, so a stage's
//! vectors can never be written once the next stage exists.

use crate::config::ExperimentConfig;
use crate::error::SimError;
use crate::report::{ReportOutcome, Reporter};
use crate::table::ResultTable;

use freewill_core::{
    apply_override, calculate_influence, sample_population, select_influence_indices,
    EngineError, ExperimentParams, IndexSet, InfluenceReport, Population,
};
use freewill_env::{DeterministicSource, NonReproducibleSource};
use std::fmt;
use tracing::{debug, info};

/// Stream id of the population generator under the master seed.
pub const POPULATION_STREAM: u64 = 1;

/// Stream id of the influence selector under the master seed.
pub const SELECTION_STREAM: u64 = 2;

/// Run states, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunState {
    Initialized,
    Generated,
    Overridden,
    Measured,
    Reported,
}

impl RunState {
    /// Returns the state name.
    pub fn name(&self) -> &'static str {
        match self {
            RunState::Initialized => "initialized",
            RunState::Generated => "generated",
            RunState::Overridden => "overridden",
            RunState::Measured => "measured",
            RunState::Reported => "reported",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// STAGES
// =============================================================================

/// Validated parameters, nothing generated yet.
#[derive(Debug, Clone)]
pub struct Initialized {
    params: ExperimentParams,
}

impl Initialized {
    pub const STATE: RunState = RunState::Initialized;

    pub fn new(params: ExperimentParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ExperimentParams {
        &self.params
    }

    /// Generates the baseline population.
    pub fn generate(self, source: &mut DeterministicSource) -> Result<Generated, EngineError> {
        let baseline = Population::generate(
            self.params.population_size(),
            self.params.actions(),
            source,
        )?;
        debug!("{} -> {}: {} members", Self::STATE, Generated::STATE, baseline.len());

        Ok(Generated {
            params: self.params,
            baseline,
        })
    }
}

/// Baseline population in place.
#[derive(Debug, Clone)]
pub struct Generated {
    params: ExperimentParams,
    baseline: Population,
}

impl Generated {
    pub const STATE: RunState = RunState::Generated;

    pub fn baseline(&self) -> &Population {
        &self.baseline
    }

    /// Selects the influenced members and forces them to the target.
    pub fn apply_override(
        self,
        source: &mut DeterministicSource,
    ) -> Result<Overridden, EngineError> {
        let influence = select_influence_indices(
            self.params.population_size(),
            self.params.influence_count(),
            source,
        )?;
        let final_states = apply_override(&self.baseline, &influence, self.params.target())?;
        debug!(
            "{} -> {}: {} members forced to '{}'",
            Self::STATE,
            Overridden::STATE,
            influence.len(),
            self.params.target_label()
        );

        Ok(Overridden {
            params: self.params,
            baseline: self.baseline,
            influence,
            final_states,
        })
    }
}

/// Final population in place.
#[derive(Debug, Clone)]
pub struct Overridden {
    params: ExperimentParams,
    baseline: Population,
    influence: IndexSet,
    final_states: Population,
}

impl Overridden {
    pub const STATE: RunState = RunState::Overridden;

    pub fn baseline(&self) -> &Population {
        &self.baseline
    }

    pub fn influence(&self) -> &IndexSet {
        &self.influence
    }

    pub fn final_states(&self) -> &Population {
        &self.final_states
    }

    /// Samples the final population and computes the result record.
    pub fn measure(self, source: &mut NonReproducibleSource) -> Result<Measured, EngineError> {
        let (sample, observation) =
            sample_population(&self.final_states, self.params.sample_size(), source)?;
        let record = calculate_influence(
            &self.baseline,
            &self.final_states,
            self.params.target(),
            &observation,
        )?;
        debug!(
            "{} -> {}: observer sampled {} members",
            Self::STATE,
            Measured::STATE,
            sample.len()
        );

        Ok(Measured {
            params: self.params,
            baseline: self.baseline,
            influence: self.influence,
            final_states: self.final_states,
            sample,
            record,
        })
    }
}

/// Result record computed; nothing written yet.
#[derive(Debug, Clone)]
pub struct Measured {
    params: ExperimentParams,
    baseline: Population,
    influence: IndexSet,
    final_states: Population,
    sample: IndexSet,
    record: InfluenceReport,
}

impl Measured {
    pub const STATE: RunState = RunState::Measured;

    pub fn params(&self) -> &ExperimentParams {
        &self.params
    }

    pub fn baseline(&self) -> &Population {
        &self.baseline
    }

    pub fn influence(&self) -> &IndexSet {
        &self.influence
    }

    pub fn final_states(&self) -> &Population {
        &self.final_states
    }

    pub fn sample(&self) -> &IndexSet {
        &self.sample
    }

    pub fn record(&self) -> &InfluenceReport {
        &self.record
    }

    /// Packages the record and hands it to the output collaborators.
    pub fn report(self, reporter: &Reporter) -> Reported {
        let table = ResultTable::from_report(&self.record);
        let outcome = reporter.report(&self.params, &self.record, &table);
        debug!("{} -> {}", Self::STATE, Reported::STATE);

        Reported {
            params: self.params,
            record: self.record,
            table,
            outcome,
        }
    }
}

/// Terminal state: the record, its table, and what got written.
#[derive(Debug)]
pub struct Reported {
    params: ExperimentParams,
    record: InfluenceReport,
    table: ResultTable,
    outcome: ReportOutcome,
}

impl Reported {
    pub const STATE: RunState = RunState::Reported;

    pub fn params(&self) -> &ExperimentParams {
        &self.params
    }

    pub fn record(&self) -> &InfluenceReport {
        &self.record
    }

    pub fn table(&self) -> &ResultTable {
        &self.table
    }

    pub fn outcome(&self) -> &ReportOutcome {
        &self.outcome
    }
}

// =============================================================================
// RUNNER
// =============================================================================

/// Runs the experiment end to end.
pub struct ExperimentRunner {
    config: ExperimentConfig,
    reporter: Reporter,
}

impl ExperimentRunner {
    /// Creates a runner reporting to the config's output directory.
    pub fn new(config: ExperimentConfig) -> Self {
        let reporter = Reporter::from_config(&config);
        Self { config, reporter }
    }

    /// Sets the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Replaces the output collaborators.
    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Disables all output.
    pub fn without_reporting(self) -> Self {
        self.with_reporter(Reporter::disabled())
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Run name from the config, whether or not output is enabled.
    pub fn run_name(&self) -> &str {
        &self.config.run_name
    }

    /// Runs up to the measured state without writing anything.
    ///
    /// Parameters are validated before any generation. The reproducible
    /// streams are rebuilt from the seed on every call; the observer's source
    /// is fresh on every call.
    pub fn measure(&self) -> Result<Measured, SimError> {
        let params = self.config.params()?;

        let master = DeterministicSource::new(self.config.seed);
        let mut population_rng = master.derive(POPULATION_STREAM);
        let mut selection_rng = master.derive(SELECTION_STREAM);
        let mut observer_rng = NonReproducibleSource::new()?;

        let measured = Initialized::new(params)
            .generate(&mut population_rng)?
            .apply_override(&mut selection_rng)?
            .measure(&mut observer_rng)?;

        Ok(measured)
    }

    /// Runs the full experiment and reports the result.
    pub fn run(&self) -> Result<Reported, SimError> {
        info!(
            "--- Running Simulation: {} (seed={}) ---",
            self.run_name(),
            self.config.seed
        );

        let reported = self.measure()?.report(&self.reporter);
        log_summary(&reported);

        Ok(reported)
    }
}

fn log_summary(reported: &Reported) {
    let record = reported.record();
    info!("Baseline Percentage: {:.4}%", record.baseline_percentage);
    info!(
        "Actual Free Will Influence (Majority): {:+.4}%",
        record.free_will_influence
    );
    info!(
        "Perceived Free Will Influence (Random Sample): {:+.4}%",
        record.random_influence
    );
}
