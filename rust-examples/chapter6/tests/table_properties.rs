//! Property-based tests for the table layout engine.
//!
//! Uses proptest to check the layout invariants across random grids of text
//! cells, underlined headers and stretch wrappers.

use eloquent_chapter6::exercise_6_2::{
    Cell, Grid, RTextCell, StretchCell, TextCell, UnderlinedCell, plan, render,
};
use proptest::prelude::*;

// ═══════════════════════════════════════════════════════════════════════════════
// STRATEGIES
// ═══════════════════════════════════════════════════════════════════════════════

/// Multi-line ASCII text, so display width equals byte length.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9 ]{0,8}", 1..4).prop_map(|lines| lines.join("\n"))
}

/// One cell of any variant, possibly decorated.
fn cell_strategy() -> impl Strategy<Value = Box<dyn Cell>> {
    (text_strategy(), 0u8..4, 0usize..6, 0usize..4).prop_map(|(text, kind, w, h)| {
        let cell: Box<dyn Cell> = match kind {
            0 => Box::new(TextCell::new(&text)),
            1 => Box::new(RTextCell::new(&text)),
            2 => Box::new(UnderlinedCell::new(TextCell::new(&text))),
            _ => Box::new(StretchCell::new(RTextCell::new(&text), w, h)),
        };
        cell
    })
}

/// A rectangular grid of 1-4 rows by 1-4 columns.
fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..5, 1usize..5).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(cell_strategy(), cols), rows)
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROPERTY TESTS: Layout
// ═══════════════════════════════════════════════════════════════════════════════

proptest! {
    /// Property: output has one line per unit of row height, each the full table width
    #[test]
    fn prop_output_shape_matches_layout(grid in grid_strategy()) {
        let layout = plan(&grid).unwrap();
        let output = render(&grid).unwrap();

        let cols = layout.col_widths.len();
        let line_width = layout.col_widths.iter().sum::<usize>() + (cols - 1);
        let total_lines: usize = layout.row_heights.iter().sum();

        let lines: Vec<&str> = output.split('\n').collect();
        prop_assert_eq!(lines.len(), total_lines);
        for line in lines {
            prop_assert_eq!(line.len(), line_width);
        }
    }

    /// Property: rendering has no hidden state
    #[test]
    fn prop_render_is_idempotent(grid in grid_strategy()) {
        prop_assert_eq!(render(&grid).unwrap(), render(&grid).unwrap());
    }

    /// Property: every cell fits its planned column and row
    #[test]
    fn prop_planned_sizes_cover_every_cell(grid in grid_strategy()) {
        let layout = plan(&grid).unwrap();
        for (r, row) in grid.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                prop_assert!(cell.min_width() <= layout.col_widths[c]);
                prop_assert!(cell.min_height() <= layout.row_heights[r]);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROPERTY TESTS: Cells
// ═══════════════════════════════════════════════════════════════════════════════

proptest! {
    /// Property: the underline is always the last line, exactly `width` dashes
    #[test]
    fn prop_underline_is_last_line(text in text_strategy(), extra_w in 0usize..5, extra_h in 0usize..3) {
        let cell = UnderlinedCell::new(TextCell::new(&text));
        let width = cell.min_width() + extra_w;
        let height = cell.min_height() + extra_h;
        let block = cell.draw(width, height);

        prop_assert_eq!(block.len(), height);
        prop_assert_eq!(block.last().unwrap(), &"-".repeat(width));
    }

    /// Property: stretch minimums are the max of inner and requested sizes
    #[test]
    fn prop_stretch_minimums(text in text_strategy(), w in 0usize..20, h in 0usize..10) {
        let inner = TextCell::new(&text);
        let (inner_w, inner_h) = (inner.min_width(), inner.min_height());
        let cell = StretchCell::new(inner, w, h);

        prop_assert_eq!(cell.min_width(), inner_w.max(w));
        prop_assert_eq!(cell.min_height(), inner_h.max(h));
    }

    /// Property: text cells draw exactly the requested size at or above their minimum
    #[test]
    fn prop_text_cells_fill_requested_size(text in text_strategy(), extra_w in 0usize..5, extra_h in 0usize..3) {
        let left = TextCell::new(&text);
        let right = RTextCell::new(&text);
        let width = left.min_width() + extra_w;
        let height = left.min_height() + extra_h;

        for block in [left.draw(width, height), right.draw(width, height)] {
            prop_assert_eq!(block.len(), height);
            prop_assert!(block.iter().all(|line| line.len() == width));
        }
    }
}
