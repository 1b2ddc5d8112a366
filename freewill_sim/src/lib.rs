//! Free-Will Experiment Runner
//!
//! Drives the statistics engine through one run and hands the result to the
//! output collaborators.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      ExperimentRunner                        │
//! │                                                              │
//! │   seed ──► DeterministicSource ──┬─► Generate (baseline)     │
//! │                                  └─► Select + Override       │
//! │   OsRng ─► NonReproducibleSource ──► Sample + Calculate      │
//! │                                            │                 │
//! │                                     InfluenceReport          │
//! └────────────────────────────────────────────┼─────────────────┘
//!                                              ▼
//!                      Reporter (chart PNG, fields.json)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use freewill_sim::{ExperimentConfig, ExperimentRunner};
//!
//! let runner = ExperimentRunner::new(ExperimentConfig::default());
//! let reported = runner.run()?;
//! println!("{}", reported.table());
//! ```

mod config;
mod error;
mod exporter;
mod report;
mod runner;
pub mod chart;
pub mod table;

pub use config::{ExperimentConfig, DEFAULT_RUN_NAME};
pub use error::SimError;
pub use exporter::{FieldsRecord, FIELDS_FILE};
pub use report::{ReportOutcome, Reporter};
pub use runner::{
    ExperimentRunner, Generated, Initialized, Measured, Overridden, Reported, RunState,
    POPULATION_STREAM, SELECTION_STREAM,
};
pub use table::{Method, ResultRow, ResultTable};
