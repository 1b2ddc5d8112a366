//! Influence Calculation
//! =====================
//!
//! Three views of the target's prevalence:
//! - **Baseline**: before the override, over the whole population
//! - **Majority**: after the override, over the whole population (ground truth)
//! - **Random**: after the override, over the observer's sample (perceived)
//!
//! and two deltas against the baseline: the true effect of the override
//! (`free_will_influence`) and the effect as the observer perceives it
//! (`random_influence`).

use crate::error::EngineError;
use crate::population::Population;
use crate::sampling::Observation;
use crate::types::Action;
use serde::{Deserialize, Serialize};

/// Result record of one experiment. All values are percentages in `[0, 100]`
/// (deltas in `[-100, 100]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfluenceReport {
    /// Target prevalence in the baseline population
    pub baseline_percentage: f64,

    /// Target prevalence in the final population
    pub majority_percentage: f64,

    /// Target prevalence in the observer's sample
    pub random_percentage: f64,

    /// `majority_percentage - baseline_percentage`
    pub free_will_influence: f64,

    /// `random_percentage - baseline_percentage`
    pub random_influence: f64,
}

// =============================================================================
// CALCULATION
// =============================================================================

/// Computes the result record from already-materialized vectors.
pub fn calculate_influence(
    baseline: &Population,
    final_states: &Population,
    target: Action,
    observation: &Observation,
) -> Result<InfluenceReport, EngineError> {
    if baseline.is_empty() {
        return Err(EngineError::invalid("population must not be empty"));
    }
    if final_states.len() != baseline.len() {
        return Err(EngineError::invalid(format!(
            "final population has {} members, baseline has {}",
            final_states.len(),
            baseline.len()
        )));
    }
    if observation.is_empty() {
        return Err(EngineError::invalid("observation must not be empty"));
    }

    let baseline_percentage = percentage(baseline.count(target), baseline.len());
    let majority_percentage = percentage(final_states.count(target), final_states.len());
    let random_percentage = percentage(observation.count(target), observation.len());

    Ok(InfluenceReport {
        baseline_percentage,
        majority_percentage,
        random_percentage,
        free_will_influence: majority_percentage - baseline_percentage,
        random_influence: random_percentage - baseline_percentage,
    })
}

fn percentage(count: usize, total: usize) -> f64 {
    (count as f64 / total as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::apply_override;
    use crate::sampling::observe;
    use crate::types::{ActionSet, IndexSet};
    use approx::assert_relative_eq;

    #[test]
    fn test_eight_member_scenario() {
        let actions = ActionSet::cardinal();
        let east = actions.action("east").unwrap();
        let baseline = Population::from_labels(
            &actions,
            &["east", "west", "east", "north", "south", "east", "west", "east"],
        )
        .unwrap();

        let influence = IndexSet::new(vec![1, 3, 5], 8).unwrap();
        let final_states = apply_override(&baseline, &influence, east).unwrap();
        let sample = IndexSet::new(vec![0, 2, 4, 6], 8).unwrap();
        let observation = observe(&final_states, &sample).unwrap();

        let report = calculate_influence(&baseline, &final_states, east, &observation).unwrap();

        assert_relative_eq!(report.baseline_percentage, 50.0);
        assert_relative_eq!(report.majority_percentage, 75.0);
        assert_relative_eq!(report.free_will_influence, 25.0);
        assert_relative_eq!(report.random_percentage, 50.0);
        assert_relative_eq!(report.random_influence, 0.0);
    }

    #[test]
    fn test_negative_perceived_influence() {
        let actions = ActionSet::cardinal();
        let east = actions.action("east").unwrap();
        let baseline =
            Population::from_labels(&actions, &["east", "west", "east", "north"]).unwrap();
        let final_states = baseline.clone();
        let observation = observe(&final_states, &IndexSet::new(vec![1, 3], 4).unwrap()).unwrap();

        let report = calculate_influence(&baseline, &final_states, east, &observation).unwrap();

        assert_relative_eq!(report.free_will_influence, 0.0);
        assert_relative_eq!(report.random_percentage, 0.0);
        assert_relative_eq!(report.random_influence, -50.0);
    }

    #[test]
    fn test_mismatched_lengths() {
        let actions = ActionSet::cardinal();
        let east = actions.action("east").unwrap();
        let a = Population::from_labels(&actions, &["east", "west"]).unwrap();
        let b = Population::from_labels(&actions, &["east"]).unwrap();
        let observation = observe(&b, &IndexSet::new(vec![0], 1).unwrap()).unwrap();

        assert!(calculate_influence(&a, &b, east, &observation).is_err());
    }
}
