//! Forest data model: a grid of cells, each empty or holding a tree

pub mod grid;
pub mod tree;

// Re-export main types
pub use grid::*;
pub use tree::*;
