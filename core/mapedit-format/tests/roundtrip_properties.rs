//! Property-based tests for the level format.
//!
//! For any grid built only from catalog tool ids, exporting and importing
//! again reproduces the grid exactly, both in memory and through JSON text.

use mapedit_catalog::Catalog;
use mapedit_format::{
    ExportOptions, RawDocument, export, import, import_str, to_json_string,
};
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

fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..10, 1usize..10, prop::sample::select(vec![8u32, 16, 32, 48])).prop_flat_map(
        |(rows, cols, tile_size)| {
            prop::collection::vec(
                (0..rows, 0..cols, prop::sample::select(TOOL_IDS)),
                0..40,
            )
            .prop_map(move |strokes| {
                let catalog = Catalog::builtin();
                strokes.into_iter().fold(
                    Grid::new(rows, cols, tile_size).unwrap(),
                    |grid, (row, col, tool)| grid.paint(&catalog, row, col, tool),
                )
            })
        },
    )
}

proptest! {
    #[test]
    fn export_import_roundtrip(grid in grid_strategy()) {
        let catalog = Catalog::builtin();
        let doc = export(&grid, &catalog, &ExportOptions::default());
        let restored = import(&RawDocument::from(&doc), &catalog).unwrap();
        prop_assert_eq!(restored, grid);
    }

    #[test]
    fn json_text_roundtrip(grid in grid_strategy()) {
        let catalog = Catalog::builtin();
        let json = to_json_string(&export(&grid, &catalog, &ExportOptions::default())).unwrap();
        let restored = import_str(&json, &catalog).unwrap();
        prop_assert_eq!(restored, grid);
    }

    #[test]
    fn export_shape_matches_grid(grid in grid_strategy()) {
        let catalog = Catalog::builtin();
        let doc = export(&grid, &catalog, &ExportOptions::default());
        let stats = grid.stats();

        prop_assert_eq!(doc.tiles.len(), grid.rows());
        prop_assert!(doc.tiles.iter().all(|row| row.len() == grid.cols()));
        prop_assert_eq!(doc.objects.len(), stats.entity_cells);
        prop_assert_eq!(
            doc.tiles.iter().flatten().filter(|code| code.as_str() != "0").count(),
            stats.terrain_cells
        );
        prop_assert_eq!(doc.width, grid.cols() as u64 * u64::from(grid.tile_size()));
        prop_assert_eq!(doc.height, grid.rows() as u64);
    }
}
