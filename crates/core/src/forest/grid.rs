//! Forest grid with randomized tree placement
//!
//! The forest is a fixed-size 2D grid of cells, each either empty or holding
//! a [`Tree`]. Cells are stored row-major: `index = y * width + x`. The shape
//! is immutable after creation; only cell contents change.

use crate::forest::tree::Tree;
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 2D grid forest with row-major cell storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    width: usize,
    height: usize,
    cells: Vec<Option<Tree>>,
}

impl Forest {
    /// Create a treeless forest with the given dimensions
    ///
    /// # Errors
    /// Returns an error if either dimension is below the 1x1 minimum.
    pub fn empty(width: usize, height: usize) -> Result<Self, ForestError> {
        if width < 1 || height < 1 {
            return Err(ForestError::InvalidDimensions { width, height });
        }

        Ok(Forest {
            width,
            height,
            cells: vec![None; width * height],
        })
    }

    /// Generate a forest covered by trees at a target percentage
    ///
    /// Plants exactly `floor(width * height * cover_percent / 100)` trees,
    /// each at a distinct cell chosen uniformly at random without
    /// replacement.
    ///
    /// # Errors
    /// Returns an error if either dimension is below the 1x1 minimum or if
    /// `cover_percent` is outside `[1, 100]`.
    pub fn generate(
        width: usize,
        height: usize,
        cover_percent: u8,
        rng: &mut impl Rng,
    ) -> Result<Self, ForestError> {
        if cover_percent == 0 || cover_percent > 100 {
            return Err(ForestError::InvalidCoverPercentage(cover_percent));
        }

        let mut forest = Self::empty(width, height)?;
        let trees_to_plant = forest.cell_count() * usize::from(cover_percent) / 100;

        for cell_index in index::sample(rng, forest.cell_count(), trees_to_plant) {
            forest.cells[cell_index] = Some(Tree::new());
        }

        Ok(forest)
    }

    /// Forest width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Forest height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the tree at `(x, y)`, if the cell is in bounds and occupied
    pub fn tree_at(&self, x: usize, y: usize) -> Option<&Tree> {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x].as_ref()
        } else {
            None
        }
    }

    /// Plant a living tree at `(x, y)`
    ///
    /// Returns false without planting when the cell is out of bounds or
    /// already occupied.
    pub fn plant_tree(&mut self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }

        let cell = &mut self.cells[y * self.width + x];
        if cell.is_some() {
            return false;
        }

        *cell = Some(Tree::new());
        true
    }

    /// Number of trees in the forest, alive or burnt
    pub fn tree_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Number of burnt trees
    pub fn burnt_tree_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|tree| !tree.is_alive())
            .count()
    }

    /// Iterate over the grid one row slice at a time, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Tree>]> {
        self.cells.chunks(self.width)
    }

    /// Cell index for signed coordinates, `None` when out of bounds
    pub(crate) fn index_of(&self, x: isize, y: isize) -> Option<usize> {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    /// Mutable access to the tree at a cell index
    pub(crate) fn tree_mut(&mut self, cell_index: usize) -> Option<&mut Tree> {
        self.cells[cell_index].as_mut()
    }
}

/// Errors that can occur while building a forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForestError {
    /// Width or height below the 1x1 minimum
    InvalidDimensions { width: usize, height: usize },
    /// Cover percentage outside `[1, 100]`
    InvalidCoverPercentage(u8),
}

impl std::fmt::Display for ForestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForestError::InvalidDimensions { width, height } => write!(
                f,
                "forest dimensions must be at least 1x1, got {width}x{height}"
            ),
            ForestError::InvalidCoverPercentage(percent) => write!(
                f,
                "forest cover percentage must be between 1 and 100, got {percent}"
            ),
        }
    }
}

impl std::error::Error for ForestError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rng;

    #[test]
    fn test_empty_forest() {
        let forest = Forest::empty(4, 3).unwrap();

        assert_eq!(forest.width(), 4);
        assert_eq!(forest.height(), 3);
        assert_eq!(forest.cell_count(), 12);
        assert_eq!(forest.tree_count(), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Forest::empty(0, 5),
            Err(ForestError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(matches!(
            Forest::generate(5, 0, 50, &mut rng()),
            Err(ForestError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_invalid_cover_percentage() {
        assert!(matches!(
            Forest::generate(5, 5, 0, &mut rng()),
            Err(ForestError::InvalidCoverPercentage(0))
        ));
        assert!(matches!(
            Forest::generate(5, 5, 101, &mut rng()),
            Err(ForestError::InvalidCoverPercentage(101))
        ));
    }

    #[test]
    fn test_exact_tree_count() {
        // floor(width * height * cover / 100), never more, never fewer
        for (width, height, cover, expected) in [
            (10, 10, 50, 50),
            (10, 10, 1, 1),
            (10, 10, 100, 100),
            (3, 3, 50, 4),
            (1, 1, 99, 0),
            (1, 1, 100, 1),
            (7, 3, 33, 6),
        ] {
            let forest = Forest::generate(width, height, cover, &mut rng()).unwrap();
            assert_eq!(
                forest.tree_count(),
                expected,
                "{width}x{height} at {cover}% cover"
            );
        }
    }

    #[test]
    fn test_generated_trees_start_alive() {
        let forest = Forest::generate(6, 6, 75, &mut rng()).unwrap();
        assert_eq!(forest.burnt_tree_count(), 0);
    }

    #[test]
    fn test_plant_tree() {
        let mut forest = Forest::empty(3, 3).unwrap();

        assert!(forest.plant_tree(1, 1));
        assert!(!forest.plant_tree(1, 1), "cell already occupied");
        assert!(!forest.plant_tree(3, 1), "x out of bounds");
        assert!(!forest.plant_tree(1, 3), "y out of bounds");

        assert_eq!(forest.tree_count(), 1);
        assert!(forest.tree_at(1, 1).is_some_and(Tree::is_alive));
    }

    #[test]
    fn test_tree_at_out_of_bounds() {
        let forest = Forest::generate(2, 2, 100, &mut rng()).unwrap();
        assert!(forest.tree_at(2, 0).is_none());
        assert!(forest.tree_at(0, 2).is_none());
    }

    #[test]
    fn test_rows_are_row_major() {
        let mut forest = Forest::empty(3, 2).unwrap();
        forest.plant_tree(2, 0);
        forest.plant_tree(0, 1);

        let rows: Vec<_> = forest.rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0][2].is_some());
        assert!(rows[1][0].is_some());
        assert!(rows[0][0].is_none());
    }

    #[test]
    fn test_index_of_bounds() {
        let forest = Forest::empty(3, 2).unwrap();

        assert_eq!(forest.index_of(0, 0), Some(0));
        assert_eq!(forest.index_of(2, 1), Some(5));
        assert_eq!(forest.index_of(-1, 0), None);
        assert_eq!(forest.index_of(0, -1), None);
        assert_eq!(forest.index_of(3, 0), None);
        assert_eq!(forest.index_of(0, 2), None);
    }
}
