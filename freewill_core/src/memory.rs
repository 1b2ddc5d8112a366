//! Experience memory capability for actors.
//!
//! Not used by the experiment pipeline. Actors may carry a memory; the
//! statistics engine never looks at one.

use crate::types::Action;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default capacity of a [`BoundedMemory`].
pub const DEFAULT_MEMORY_SIZE: usize = 1000;

/// One remembered transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub old: Action,
    pub action: Action,
    pub new: Action,
}

/// Storage for an actor's experiences.
pub trait Memory: Send {
    /// Records a transition.
    fn add_experience(&mut self, experience: Experience);

    /// Returns every stored experience, oldest first.
    fn recall(&self) -> Vec<Experience>;

    /// Returns the most recent experience, if any.
    fn recall_latest(&self) -> Option<Experience>;

    /// Number of stored experiences.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// FIFO buffer holding at most `max_size` experiences.
///
/// When full, the oldest experience is evicted to make room.
#[derive(Debug, Clone)]
pub struct BoundedMemory {
    max_size: usize,
    experiences: VecDeque<Experience>,
}

impl BoundedMemory {
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            experiences: VecDeque::with_capacity(max_size.min(DEFAULT_MEMORY_SIZE)),
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl Default for BoundedMemory {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_SIZE)
    }
}

impl Memory for BoundedMemory {
    fn add_experience(&mut self, experience: Experience) {
        if self.max_size == 0 {
            return;
        }
        if self.experiences.len() >= self.max_size {
            self.experiences.pop_front();
        }
        self.experiences.push_back(experience);
    }

    fn recall(&self) -> Vec<Experience> {
        self.experiences.iter().copied().collect()
    }

    fn recall_latest(&self) -> Option<Experience> {
        self.experiences.back().copied()
    }

    fn len(&self) -> usize {
        self.experiences.len()
    }
}

/// A memory that forgets everything immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMemory;

impl Memory for NoMemory {
    fn add_experience(&mut self, _experience: Experience) {}

    fn recall(&self) -> Vec<Experience> {
        Vec::new()
    }

    fn recall_latest(&self) -> Option<Experience> {
        None
    }

    fn len(&self) -> usize {
        0
    }
}
