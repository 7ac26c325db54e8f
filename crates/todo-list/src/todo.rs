//! The todo item model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single task with a description and a completion flag.
///
/// The description is fixed at construction; only the completion state
/// changes, through the mark operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// The text of the task.
    description: String,

    /// Whether the task is completed.
    #[serde(default)]
    done: bool,
}

impl Todo {
    /// Creates a new todo, not yet done.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
        }
    }

    /// Returns the description text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Marks the todo as done. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Marks the todo as not done. Idempotent.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Flips the completion state.
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }

    /// Returns true if the todo is done.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl fmt::Display for Todo {
    /// Renders as `[X] description` when done, `[ ] description` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.done { 'X' } else { ' ' };
        write!(f, "[{}] {}", marker, self.description)
    }
}
