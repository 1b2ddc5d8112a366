//! The observer's partial view of the population.
//!
//! The observer never sees the whole final population, only a fresh sample
//! drawn from a `NonReproducibleSource`. Two observations of the same
//! population therefore generally disagree.

use crate::error::EngineError;
use crate::population::Population;
use crate::types::{Action, IndexSet};
use freewill_env::NonReproducibleSource;
use rand::seq::index;

/// The labels an observer saw, as a multiset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    states: Vec<Action>,
}

impl Observation {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[Action] {
        &self.states
    }

    /// Number of sampled members in `action`.
    pub fn count(&self, action: Action) -> usize {
        self.states.iter().filter(|&&s| s == action).count()
    }
}

/// Draws `sample_size` distinct indices from `[0, population_size)`.
pub fn draw_sample_indices(
    population_size: usize,
    sample_size: usize,
    source: &mut NonReproducibleSource,
) -> Result<IndexSet, EngineError> {
    if sample_size == 0 {
        return Err(EngineError::invalid("sample size must be positive"));
    }
    if sample_size > population_size {
        return Err(EngineError::invalid(format!(
            "sample size {} exceeds population size {}",
            sample_size, population_size
        )));
    }

    let indices = index::sample(source, population_size, sample_size).into_vec();
    Ok(IndexSet::from_distinct(indices, population_size))
}

/// Reads the population at the sampled indices.
pub fn observe(population: &Population, sample: &IndexSet) -> Result<Observation, EngineError> {
    if sample.universe() != population.len() {
        return Err(EngineError::invalid(format!(
            "sample set covers {} members but population has {}",
            sample.universe(),
            population.len()
        )));
    }

    let states = sample
        .iter()
        .filter_map(|index| population.get(index))
        .collect();

    Ok(Observation { states })
}

/// Draws a fresh sample and observes it in one step.
pub fn sample_population(
    population: &Population,
    sample_size: usize,
    source: &mut NonReproducibleSource,
) -> Result<(IndexSet, Observation), EngineError> {
    let sample = draw_sample_indices(population.len(), sample_size, source)?;
    let observation = observe(population, &sample)?;
    Ok((sample, observation))
}
