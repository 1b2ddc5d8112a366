//! Free-Will Experiment Core - Population Override Statistics Engine
//!
//! A single-shot Monte-Carlo experiment in five pure stages:
//! 1. **Generate**: baseline population, each member uniform over the action set
//! 2. **Select**: K distinct members to override, blind to their current state
//! 3. **Override**: copy of the baseline with the selected members forced to the target
//! 4. **Sample**: an observer's S-member view of the final population
//! 5. **Calculate**: baseline / majority / perceived percentages and their deltas
//!
//! Generation and selection draw from a `DeterministicSource`; sampling draws
//! from a `NonReproducibleSource`. No stage mutates its inputs.

pub mod error;
pub mod types;
pub mod params;
pub mod population;
pub mod selection;
pub mod overrides;
pub mod sampling;
pub mod influence;
pub mod memory;
pub mod actor;

// Re-export key types for convenience
pub use error::EngineError;
pub use types::{Action, ActionSet, IndexSet};
pub use params::ExperimentParams;
pub use population::Population;
pub use selection::select_influence_indices;
pub use overrides::apply_override;
pub use sampling::{draw_sample_indices, observe, sample_population, Observation};
pub use influence::{calculate_influence, InfluenceReport};
