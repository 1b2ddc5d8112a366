//! Validated experiment parameters.

use crate::error::EngineError;
use crate::types::{Action, ActionSet};

/// Parameters of one experiment, checked up front.
///
/// Holding an `ExperimentParams` means:
/// - `population_size > 0`
/// - `influence_count <= population_size`
/// - `0 < sample_size <= population_size`
/// - the target is a member of the action set (which is non-empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentParams {
    population_size: usize,
    influence_count: usize,
    sample_size: usize,
    target: Action,
    actions: ActionSet,
}

impl ExperimentParams {
    /// Validates and builds the parameters.
    ///
    /// # Arguments
    /// * `population_size` - N, total population members
    /// * `influence_count` - K, members forced to the target
    /// * `sample_size` - S, members the observer gets to see
    /// * `target` - label of the target choice
    /// * `actions` - the action set
    pub fn new(
        population_size: usize,
        influence_count: usize,
        sample_size: usize,
        target: &str,
        actions: ActionSet,
    ) -> Result<Self, EngineError> {
        if population_size == 0 {
            return Err(EngineError::invalid("population size must be positive"));
        }
        if influence_count > population_size {
            return Err(EngineError::invalid(format!(
                "influence count {} exceeds population size {}",
                influence_count, population_size
            )));
        }
        if sample_size == 0 {
            return Err(EngineError::invalid("sample size must be positive"));
        }
        if sample_size > population_size {
            return Err(EngineError::invalid(format!(
                "sample size {} exceeds population size {}",
                sample_size, population_size
            )));
        }
        let target = actions.require(target)?;

        Ok(Self {
            population_size,
            influence_count,
            sample_size,
            target,
            actions,
        })
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn influence_count(&self) -> usize {
        self.influence_count
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn target(&self) -> Action {
        self.target
    }

    /// Label of the target choice.
    pub fn target_label(&self) -> &str {
        // target was resolved from this set in `new`
        self.actions.label(self.target).unwrap_or_default()
    }

    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(n: usize, k: usize, s: usize, target: &str) -> Result<ExperimentParams, EngineError> {
        ExperimentParams::new(n, k, s, target, ActionSet::cardinal())
    }

    #[test]
    fn test_default_scale_is_valid() {
        let p = params(100_000, 250, 500, "east").unwrap();
        assert_eq!(p.population_size(), 100_000);
        assert_eq!(p.influence_count(), 250);
        assert_eq!(p.sample_size(), 500);
        assert_eq!(p.target_label(), "east");
    }

    #[test]
    fn test_boundaries_accepted() {
        assert!(params(8, 0, 1, "east").is_ok());
        assert!(params(8, 8, 8, "south").is_ok());
    }

    #[test]
    fn test_influence_exceeds_population() {
        let err = params(8, 9, 4, "east").unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
    }

    #[test]
    fn test_sample_size_bounds() {
        assert!(params(8, 3, 0, "east").is_err());
        assert!(params(8, 3, 9, "east").is_err());
    }

    #[test]
    fn test_zero_population() {
        assert!(params(0, 0, 1, "east").is_err());
    }

    #[test]
    fn test_target_not_in_action_set() {
        let err = params(8, 3, 4, "up").unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
    }
}
