//! Common types: action labels and index sets.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Default action labels (the four compass directions).
pub const CARDINAL_DIRECTIONS: [&str; 4] = ["east", "west", "north", "south"];

/// One category label, stored as its position in the owning [`ActionSet`].
///
/// Populations hold `Action`s rather than strings; the set resolves them back
/// to labels for display and persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action(usize);

impl Action {
    /// Returns the position of this action in its set.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered set of distinct category labels. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionSet {
    labels: Vec<String>,
}

impl ActionSet {
    /// Creates an action set, rejecting empty sets and duplicate labels.
    pub fn new<I, S>(labels: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.is_empty() {
            return Err(EngineError::invalid("action set must not be empty"));
        }

        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(EngineError::invalid(format!(
                    "duplicate action label: {}",
                    label
                )));
            }
        }

        Ok(Self { labels })
    }

    /// The four compass directions, in `east, west, north, south` order.
    pub fn cardinal() -> Self {
        Self {
            labels: CARDINAL_DIRECTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in set order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Looks up the action for a label.
    pub fn action(&self, label: &str) -> Option<Action> {
        self.labels.iter().position(|l| l == label).map(Action)
    }

    /// Like [`ActionSet::action`], but a missing label is an `InvalidParameter`.
    pub fn require(&self, label: &str) -> Result<Action, EngineError> {
        self.action(label).ok_or_else(|| {
            EngineError::invalid(format!(
                "'{}' is not a member of the action set {:?}",
                label, self.labels
            ))
        })
    }

    /// Resolves an action back to its label.
    pub fn label(&self, action: Action) -> Option<&str> {
        self.labels.get(action.0).map(String::as_str)
    }

    /// The first action in set order.
    pub fn first(&self) -> Action {
        Action(0)
    }

    /// Returns true if `action` belongs to this set.
    pub fn contains(&self, action: Action) -> bool {
        action.0 < self.labels.len()
    }

    /// Iterates over every action in set order.
    pub fn actions(&self) -> impl Iterator<Item = Action> {
        (0..self.labels.len()).map(Action)
    }

    /// Maps a uniform draw in `[0, len)` to an action.
    pub(crate) fn nth(&self, index: usize) -> Action {
        debug_assert!(index < self.labels.len());
        Action(index)
    }
}

impl Default for ActionSet {
    fn default() -> Self {
        Self::cardinal()
    }
}

/// A set of distinct indices into a population of `universe` members.
///
/// Used for both the influence index set and the observer's sample index set.
/// Order is the order of selection; membership is what matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSet {
    indices: Vec<usize>,
    universe: usize,
}

impl IndexSet {
    /// Creates an index set, rejecting out-of-range and repeated indices.
    pub fn new(indices: Vec<usize>, universe: usize) -> Result<Self, EngineError> {
        let mut seen = vec![false; universe];

        for &index in &indices {
            if index >= universe {
                return Err(EngineError::invalid(format!(
                    "index {} out of range for population of {}",
                    index, universe
                )));
            }
            if seen[index] {
                return Err(EngineError::invalid(format!("repeated index {}", index)));
            }
            seen[index] = true;
        }

        Ok(Self { indices, universe })
    }

    /// Wraps indices that are distinct and in range by construction.
    pub(crate) fn from_distinct(indices: Vec<usize>, universe: usize) -> Self {
        Self { indices, universe }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Size of the population these indices point into.
    pub fn universe(&self) -> usize {
        self.universe
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Returns a membership mask of length `universe`.
    pub fn mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.universe];
        for &index in &self.indices {
            mask[index] = true;
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_set_lookup() {
        let actions = ActionSet::cardinal();

        let north = actions.action("north").unwrap();
        assert_eq!(north.index(), 2);
        assert_eq!(actions.label(north), Some("north"));
        assert_eq!(actions.action("up"), None);
        assert_eq!(actions.first(), actions.action("east").unwrap());
    }

    #[test]
    fn test_action_set_rejects_empty() {
        let err = ActionSet::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
    }

    #[test]
    fn test_action_set_rejects_duplicates() {
        let err = ActionSet::new(["east", "west", "east"]).unwrap_err();
        assert_eq!(
            err,
            EngineError::invalid("duplicate action label: east")
        );
    }

    #[test]
    fn test_require_missing_label() {
        let actions = ActionSet::cardinal();
        assert!(actions.require("east").is_ok());
        assert!(matches!(
            actions.require("up"),
            Err(EngineError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_index_set_validation() {
        assert!(IndexSet::new(vec![1, 3, 5], 8).is_ok());
        assert!(IndexSet::new(vec![], 8).is_ok());
        assert!(IndexSet::new(vec![8], 8).is_err());
        assert!(IndexSet::new(vec![2, 2], 8).is_err());
    }

    #[test]
    fn test_index_set_mask() {
        let set = IndexSet::new(vec![5, 1], 6).unwrap();
        assert_eq!(set.mask(), vec![false, true, false, false, false, true]);
        assert!(set.contains(5));
        assert!(!set.contains(0));
        assert_eq!(set.universe(), 6);
    }
}
