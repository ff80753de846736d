//! Fire spread over 8-neighbor adjacency
//!
//! Fire started at one cell consumes the whole connected component of living
//! trees around it. The traversal runs over an explicit worklist instead of
//! recursing: the burn front can cover every cell of the grid, which would
//! otherwise overflow the call stack on large forests.

use crate::forest::Forest;

/// Offsets of the 8 cells surrounding a grid cell
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Burn every living tree connected to the ignition point
///
/// Marks the tree at `(ignition_x, ignition_y)` and all trees reachable from
/// it through 8-directional adjacency as burnt, and returns how many trees
/// burnt. Returns 0 and leaves the forest untouched when the ignition point
/// is out of bounds, the cell is empty, or the tree there has already burnt.
///
/// The burnt count depends only on grid contents and ignition point; burning
/// is idempotent per cell, so traversal order never shows in the result.
pub fn spread_fire(forest: &mut Forest, ignition_x: isize, ignition_y: isize) -> usize {
    let Some(start) = forest.index_of(ignition_x, ignition_y) else {
        return 0;
    };
    match forest.tree_mut(start) {
        Some(tree) if tree.is_alive() => tree.scorch(),
        _ => return 0,
    }

    let mut burnt_trees = 1;
    // Trees are scorched when pushed, so each cell enters the worklist at
    // most once.
    let mut worklist = vec![(ignition_x, ignition_y)];

    while let Some((x, y)) = worklist.pop() {
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let (nx, ny) = (x + dx, y + dy);
            let Some(cell_index) = forest.index_of(nx, ny) else {
                continue;
            };
            if let Some(tree) = forest.tree_mut(cell_index) {
                if tree.is_alive() {
                    tree.scorch();
                    burnt_trees += 1;
                    worklist.push((nx, ny));
                }
            }
        }
    }

    burnt_trees
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forest::Tree;
    use rand::rng;

    /// Build a forest from rows of `T` (tree) and `.` (empty)
    fn forest_from_layout(rows: &[&str]) -> Forest {
        let mut forest = Forest::empty(rows[0].len(), rows.len()).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.chars().enumerate() {
                if cell == 'T' {
                    assert!(forest.plant_tree(x, y));
                }
            }
        }
        forest
    }

    #[test]
    fn test_out_of_bounds_ignition() {
        let mut forest = forest_from_layout(&["TT", "TT"]);

        assert_eq!(spread_fire(&mut forest, -1, 0), 0);
        assert_eq!(spread_fire(&mut forest, 0, -1), 0);
        assert_eq!(spread_fire(&mut forest, 2, 0), 0);
        assert_eq!(spread_fire(&mut forest, 0, 2), 0);
        assert_eq!(forest.burnt_tree_count(), 0);
    }

    #[test]
    fn test_empty_cell_ignition() {
        let mut forest = forest_from_layout(&["T.", ".."]);

        assert_eq!(spread_fire(&mut forest, 1, 1), 0);
        assert_eq!(forest.burnt_tree_count(), 0);
    }

    #[test]
    fn test_treeless_forest() {
        let mut forest = Forest::empty(5, 5).unwrap();
        assert_eq!(spread_fire(&mut forest, 2, 2), 0);
    }

    #[test]
    fn test_single_isolated_tree() {
        let mut forest = forest_from_layout(&["...", ".T.", "..."]);

        assert_eq!(spread_fire(&mut forest, 1, 1), 1);
        assert_eq!(forest.burnt_tree_count(), 1);
    }

    #[test]
    fn test_reignition_is_idempotent() {
        let mut forest = forest_from_layout(&["TT.", "TT.", "..."]);

        assert_eq!(spread_fire(&mut forest, 0, 0), 4);
        // Striking the burnt patch again changes nothing
        assert_eq!(spread_fire(&mut forest, 0, 0), 0);
        assert_eq!(spread_fire(&mut forest, 1, 1), 0);
        assert_eq!(forest.burnt_tree_count(), 4);
    }

    #[test]
    fn test_diagonal_adjacency_spreads() {
        let mut forest = forest_from_layout(&["T..", ".T.", "..T"]);

        assert_eq!(spread_fire(&mut forest, 0, 0), 3);
        assert_eq!(forest.burnt_tree_count(), 3);
    }

    #[test]
    fn test_connected_cluster_burns_exactly() {
        // Three clusters separated by more than one cell of clearance
        let mut forest = forest_from_layout(&[
            "TT...T", //
            ".T...T", //
            "......", //
            "T.....", //
        ]);

        assert_eq!(spread_fire(&mut forest, 0, 0), 3);
        assert_eq!(forest.burnt_tree_count(), 3);
        assert!(forest.tree_at(5, 0).is_some_and(Tree::is_alive));
        assert!(forest.tree_at(5, 1).is_some_and(Tree::is_alive));
        assert!(forest.tree_at(0, 3).is_some_and(Tree::is_alive));
    }

    #[test]
    fn test_full_grid_burns_entirely() {
        for n in [1, 2, 8] {
            let mut forest = Forest::generate(n, n, 100, &mut rng()).unwrap();
            let burnt = spread_fire(&mut forest, (n / 2) as isize, (n / 2) as isize);
            assert_eq!(burnt, n * n, "{n}x{n} fully occupied grid");
            assert_eq!(forest.burnt_tree_count(), n * n);
        }
    }

    #[test]
    fn test_burnt_count_never_exceeds_tree_count() {
        let mut rng = rng();
        for cover in [10, 50, 90] {
            let mut forest = Forest::generate(10, 10, cover, &mut rng).unwrap();
            let tree_count = forest.tree_count();
            let burnt = spread_fire(&mut forest, 4, 7);

            assert!(burnt <= tree_count);
            assert!(tree_count <= forest.cell_count());
            assert_eq!(forest.burnt_tree_count(), burnt);
        }
    }
}
