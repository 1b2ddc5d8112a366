//! Influence index selection.

use crate::error::EngineError;
use crate::types::IndexSet;
use freewill_env::DeterministicSource;
use rand::seq::index;

/// Chooses which members of a population get overridden.
///
/// Returns exactly `influence_count` distinct indices, sampled uniformly
/// without replacement from `[0, population_size)`. The population itself is
/// not an input: the override lands wherever it lands, regardless of the
/// state already sitting there.
pub fn select_influence_indices(
    population_size: usize,
    influence_count: usize,
    source: &mut DeterministicSource,
) -> Result<IndexSet, EngineError> {
    if influence_count > population_size {
        return Err(EngineError::invalid(format!(
            "influence count {} exceeds population size {}",
            influence_count, population_size
        )));
    }

    let indices = index::sample(source, population_size, influence_count).into_vec();
    Ok(IndexSet::from_distinct(indices, population_size))
}
