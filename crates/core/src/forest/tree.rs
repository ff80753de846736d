//! Tree life-cycle tracking for the forest grid

use serde::{Deserialize, Serialize};
use std::fmt;

/// Life-cycle state of a tree
///
/// `Burnt` is terminal: once a tree has burnt there is no transition back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeState {
    /// Standing and flammable
    Alive,
    /// Destroyed by fire
    Burnt,
}

/// A single flammable tree occupying one forest cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    state: TreeState,
}

impl Tree {
    /// Create a living tree
    pub fn new() -> Self {
        Tree {
            state: TreeState::Alive,
        }
    }

    /// Check whether the tree is still standing
    pub fn is_alive(&self) -> bool {
        self.state == TreeState::Alive
    }

    /// Get the tree state
    pub fn state(&self) -> TreeState {
        self.state
    }

    /// Burn the tree down
    pub fn scorch(&mut self) {
        self.state = TreeState::Burnt;
    }
}

impl Default for Tree {
    fn default() -> Self {
        Tree::new()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            TreeState::Alive => write!(f, "🌳"),
            TreeState::Burnt => write!(f, "☠️"),
        }
    }
}
