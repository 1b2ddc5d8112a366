//! The override: forcing selected members to the target choice.

use crate::error::EngineError;
use crate::population::Population;
use crate::types::{Action, IndexSet};

/// Produces the final population from a baseline.
///
/// Every index in `influence` is set to `target`; every other member keeps its
/// baseline state. The baseline is left untouched, and applying the same
/// override to the result again changes nothing.
pub fn apply_override(
    baseline: &Population,
    influence: &IndexSet,
    target: Action,
) -> Result<Population, EngineError> {
    if influence.universe() != baseline.len() {
        return Err(EngineError::invalid(format!(
            "influence set covers {} members but population has {}",
            influence.universe(),
            baseline.len()
        )));
    }

    let mut states = baseline.states().to_vec();
    for index in influence.iter() {
        states[index] = target;
    }

    Ok(Population::from_states(states))
}
