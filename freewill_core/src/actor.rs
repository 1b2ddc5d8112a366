//! Placeholder actor model.
//!
//! A population member that can decide on an action, optionally remember what
//! happened, and nothing more. Actors do not interact and are not driven by the
//! experiment pipeline.

use crate::memory::{BoundedMemory, Experience, Memory};
use crate::types::{Action, ActionSet};

/// Memory capacity given to actors built with [`SimpleActor::with_memory`].
pub const ACTOR_MEMORY_SIZE: usize = 50;

/// What an actor can see when deciding.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldView {
    /// Whether conditions currently favour the preferred choice
    pub favours_choice: bool,
}

/// Something that picks an action from a view of the world.
pub trait Actor {
    fn uid(&self) -> usize;

    /// Decides the next action.
    fn act(&self, view: &WorldView) -> Action;

    /// Updates internal state after a transition.
    fn learn(&mut self, old: Action, action: Action, new: Action);
}

/// Actor with a fixed preferred choice and an optional memory.
pub struct SimpleActor {
    uid: usize,
    actions: ActionSet,
    preferred: Action,
    memory: Option<Box<dyn Memory>>,
}

impl SimpleActor {
    /// Creates an actor without memory.
    pub fn new(uid: usize, actions: ActionSet, preferred: Action) -> Self {
        Self {
            uid,
            actions,
            preferred,
            memory: None,
        }
    }

    /// Gives the actor a bounded memory of [`ACTOR_MEMORY_SIZE`] experiences.
    pub fn with_memory(self) -> Self {
        self.with_memory_impl(Box::new(BoundedMemory::new(ACTOR_MEMORY_SIZE)))
    }

    /// Gives the actor a custom memory.
    pub fn with_memory_impl(mut self, memory: Box<dyn Memory>) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn memory(&self) -> Option<&dyn Memory> {
        self.memory.as_deref()
    }

    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }
}

impl Actor for SimpleActor {
    fn uid(&self) -> usize {
        self.uid
    }

    fn act(&self, view: &WorldView) -> Action {
        if view.favours_choice {
            self.preferred
        } else {
            self.actions.first()
        }
    }

    fn learn(&mut self, old: Action, action: Action, new: Action) {
        if let Some(memory) = self.memory.as_mut() {
            memory.add_experience(Experience { old, action, new });
        }
    }
}
