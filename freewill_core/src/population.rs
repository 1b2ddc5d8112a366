//! Population state vectors and baseline generation.

use crate::error::EngineError;
use crate::types::{Action, ActionSet};
use freewill_env::DeterministicSource;
use rand::Rng;

/// An ordered, immutable vector of population states.
///
/// Serves as both the baseline vector and the final (overridden) vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    states: Vec<Action>,
}

impl Population {
    /// Generates a baseline population of `size` members.
    ///
    /// Each member is drawn independently and uniformly from `actions`. The
    /// same seed yields the same population.
    pub fn generate(
        size: usize,
        actions: &ActionSet,
        source: &mut DeterministicSource,
    ) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::invalid("population size must be positive"));
        }

        let states = (0..size)
            .map(|_| actions.nth(source.gen_range(0..actions.len())))
            .collect();

        Ok(Self { states })
    }

    /// Builds a population from explicit labels.
    pub fn from_labels(actions: &ActionSet, labels: &[&str]) -> Result<Self, EngineError> {
        let states = labels
            .iter()
            .map(|label| actions.require(label))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { states })
    }

    pub(crate) fn from_states(states: Vec<Action>) -> Self {
        Self { states }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Action> {
        self.states.get(index).copied()
    }

    pub fn states(&self) -> &[Action] {
        &self.states
    }

    /// Number of members currently in `action`.
    pub fn count(&self, action: Action) -> usize {
        self.states.iter().filter(|&&s| s == action).count()
    }

    /// Resolves every member back to its label.
    pub fn labels<'a>(&self, actions: &'a ActionSet) -> Vec<&'a str> {
        self.states
            .iter()
            .filter_map(|&s| actions.label(s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_length_and_membership() {
        let actions = ActionSet::cardinal();
        let mut source = DeterministicSource::new(42);

        let population = Population::generate(1_000, &actions, &mut source).unwrap();

        assert_eq!(population.len(), 1_000);
        assert!(population.states().iter().all(|&s| actions.contains(s)));
    }

    #[test]
    fn test_generate_deterministic() {
        let actions = ActionSet::cardinal();

        let p1 = Population::generate(500, &actions, &mut DeterministicSource::new(42)).unwrap();
        let p2 = Population::generate(500, &actions, &mut DeterministicSource::new(42)).unwrap();
        let p3 = Population::generate(500, &actions, &mut DeterministicSource::new(43)).unwrap();

        assert_eq!(p1, p2);
        assert_ne!(p1, p3);
    }

    #[test]
    fn test_generate_roughly_uniform() {
        let actions = ActionSet::cardinal();
        let mut source = DeterministicSource::new(7);

        let population = Population::generate(100_000, &actions, &mut source).unwrap();

        for action in actions.actions() {
            let share = population.count(action) as f64 / population.len() as f64;
            assert!((share - 0.25).abs() < 0.01, "share {} for {:?}", share, action);
        }
    }

    #[test]
    fn test_generate_zero_size() {
        let actions = ActionSet::cardinal();
        let mut source = DeterministicSource::new(42);
        assert!(Population::generate(0, &actions, &mut source).is_err());
    }

    #[test]
    fn test_from_labels_and_count() {
        let actions = ActionSet::cardinal();
        let population = Population::from_labels(
            &actions,
            &["east", "west", "east", "north", "south", "east", "west", "east"],
        )
        .unwrap();

        let east = actions.action("east").unwrap();
        assert_eq!(population.count(east), 4);
        assert_eq!(population.labels(&actions)[3], "north");
        assert!(Population::from_labels(&actions, &["east", "up"]).is_err());
    }
}
