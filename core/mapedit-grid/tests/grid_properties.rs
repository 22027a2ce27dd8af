//! Property-based tests for the grid mutation operations.
//!
//! - paint sets exactly one layer and never touches the other
//! - erase always leaves an empty cell
//! - resize keeps the overlapping region and empties everything else

use mapedit_catalog::Catalog;
use mapedit_grid::Grid;
use proptest::prelude::*;

const TOOL_IDS: &[&str] = &[
    "ground",
    "brick",
    "hard_block",
    "death_block",
    "coin",
    "mushroom",
    "goomba",
    "koopa",
];

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn tool_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(TOOL_IDS)
}

/// A grid of random size with a random set of strokes applied.
fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
        prop::collection::vec((0..rows, 0..cols, tool_strategy()), 0..24).prop_map(
            move |strokes| {
                let catalog = Catalog::builtin();
                strokes.into_iter().fold(
                    Grid::new(rows, cols, 32).unwrap(),
                    |grid, (row, col, tool)| grid.paint(&catalog, row, col, tool),
                )
            },
        )
    })
}

proptest! {
    #[test]
    fn paint_sets_only_its_layer(
        grid in grid_strategy(),
        row in 0usize..8,
        col in 0usize..8,
        tool in tool_strategy(),
    ) {
        prop_assume!(grid.contains(row, col));
        let catalog = Catalog::builtin();
        let before = grid.cell(row, col).unwrap().clone();
        let after_grid = grid.paint(&catalog, row, col, tool);
        let after = after_grid.cell(row, col).unwrap();

        if catalog.lookup_by_id(tool).unwrap().terrain_code().is_some() {
            prop_assert_eq!(after.terrain_id(), Some(tool));
            prop_assert_eq!(&after.entity, &before.entity);
        } else {
            prop_assert_eq!(after.entity_id(), Some(tool));
            prop_assert_eq!(&after.terrain, &before.terrain);
        }
    }

    #[test]
    fn paint_touches_one_cell(
        grid in grid_strategy(),
        row in 0usize..8,
        col in 0usize..8,
        tool in tool_strategy(),
    ) {
        let catalog = Catalog::builtin();
        let painted = grid.paint(&catalog, row, col, tool);
        for (r, c, cell) in grid.iter() {
            if (r, c) != (row, col) {
                prop_assert_eq!(painted.cell(r, c).unwrap(), cell);
            }
        }
    }

    #[test]
    fn erase_empties_cell(grid in grid_strategy(), row in 0usize..8, col in 0usize..8) {
        prop_assume!(grid.contains(row, col));
        let erased = grid.erase(row, col);
        prop_assert!(erased.cell(row, col).unwrap().is_empty());
    }

    #[test]
    fn resize_keeps_overlap(grid in grid_strategy(), new_cols in 1usize..10, new_rows in 1usize..10) {
        let resized = grid.resize(new_cols, new_rows).unwrap();
        prop_assert_eq!(resized.rows(), new_rows);
        prop_assert_eq!(resized.cols(), new_cols);

        for (r, c, cell) in resized.iter() {
            if r < grid.rows().min(new_rows) && c < grid.cols().min(new_cols) {
                prop_assert_eq!(cell, grid.cell(r, c).unwrap());
            } else {
                prop_assert!(cell.is_empty());
            }
        }
    }
}
