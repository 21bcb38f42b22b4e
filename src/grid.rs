//! Cell grid representation for piece rotation states.
//!
//! A grid is `layers x rows x cols`, stored as a flat array in layer-major
//! order. Row 0 is the bottom row. Each cell holds a color code, or
//! [`EMPTY_CELL`] when unoccupied.

use crate::color::{CellCode, EMPTY_CELL, UPPER_SLOT_BIT};
use crate::geometry::Coord;

/// Extent of the grid currently assigned to a piece.
///
/// This is the literal size of the grid, padding included, not the tight
/// extent of the occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

/// One canonical rotation state of a piece, read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockGrid {
    layers: usize,
    rows: usize,
    cols: usize,
    cells: Box<[CellCode]>,
}

impl BlockGrid {
    /// Creates an empty grid of the given size.
    pub fn new(layers: usize, rows: usize, cols: usize) -> Self {
        Self {
            layers,
            rows,
            cols,
            cells: vec![EMPTY_CELL; layers * rows * cols].into_boxed_slice(),
        }
    }

    /// Converts (layer, row, col) to a flat cell index.
    ///
    /// Index order is layer-major: `idx = (layer * rows + row) * cols + col`.
    #[inline(always)]
    pub fn coord_to_idx(&self, layer: usize, row: usize, col: usize) -> usize {
        (layer * self.rows + row) * self.cols + col
    }

    /// Converts a flat cell index back to (layer, row, col).
    #[inline(always)]
    pub fn idx_to_coord(&self, cell_index: usize) -> (usize, usize, usize) {
        (
            cell_index / (self.rows * self.cols),
            (cell_index / self.cols) % self.rows,
            cell_index % self.cols,
        )
    }

    pub fn layers(&self) -> usize {
        self.layers
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            width: self.cols,
            height: self.rows,
            depth: self.layers,
        }
    }

    /// Returns the cell code, or `None` outside the grid.
    pub fn get(&self, layer: usize, row: usize, col: usize) -> Option<CellCode> {
        if layer >= self.layers || row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[self.coord_to_idx(layer, row, col)])
    }

    pub(crate) fn set(&mut self, layer: usize, row: usize, col: usize, code: CellCode) {
        let idx = self.coord_to_idx(layer, row, col);
        self.cells[idx] = code;
    }

    /// Raw cells in layer-major order.
    pub fn cells(&self) -> &[CellCode] {
        &self.cells
    }

    /// Occupied cells as `((layer, row, col), code)`, in storage order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, CellCode)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &code)| code != EMPTY_CELL)
            .map(|(idx, &code)| {
                let (layer, row, col) = self.idx_to_coord(idx);
                ((layer as i32, row as i32, col as i32), code)
            })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&code| code != EMPTY_CELL).count()
    }
}

/// Formats a grid as human-readable text.
///
/// Displays the layers side by side, rows from top to bottom. Empty cells
/// show as '.', upper-slot cells as 'o' and every other occupied cell as '#'.
pub fn format_grid(grid: &BlockGrid) -> String {
    let mut output = String::new();

    // header only for dual-layer grids: l=0, l=1, ...
    if grid.layers() > 1 {
        for layer in 0..grid.layers() {
            if layer > 0 {
                output.push_str("  ");
            }
            output.push_str(&format!("l={:<width$}", layer, width = grid.cols()));
        }
        output.truncate(output.trim_end().len());
        output.push('\n');
    }

    for row in (0..grid.rows()).rev() {
        for layer in 0..grid.layers() {
            if layer > 0 {
                output.push_str("  ");
            }
            for col in 0..grid.cols() {
                let display_char = match grid.get(layer, row, col) {
                    None | Some(EMPTY_CELL) => '.',
                    Some(code) if code & UPPER_SLOT_BIT != 0 => 'o',
                    Some(_) => '#',
                };
                output.push(display_char);
            }
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_conversion_roundtrip() {
        let grid = BlockGrid::new(2, 3, 4);
        for idx in 0..24 {
            let (layer, row, col) = grid.idx_to_coord(idx);
            assert!(layer < 2 && row < 3 && col < 4, "idx {idx} out of range");
            assert_eq!(grid.coord_to_idx(layer, row, col), idx, "roundtrip failed for {idx}");
        }
    }

    #[test]
    fn test_bounding_box_is_literal_grid_size() {
        let mut grid = BlockGrid::new(1, 4, 4);
        grid.set(0, 2, 0, 5);
        assert_eq!(
            grid.bounding_box(),
            BoundingBox {
                width: 4,
                height: 4,
                depth: 1
            }
        );
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_get_outside_grid() {
        let grid = BlockGrid::new(1, 2, 2);
        assert_eq!(grid.get(0, 1, 1), Some(EMPTY_CELL));
        assert_eq!(grid.get(0, 2, 0), None);
        assert_eq!(grid.get(1, 0, 0), None);
    }

    #[test]
    fn test_format_single_layer() {
        let mut grid = BlockGrid::new(1, 2, 3);
        grid.set(0, 0, 0, 1);
        grid.set(0, 0, 1, 1);
        grid.set(0, 1, 2, 1);
        insta::assert_snapshot!(format_grid(&grid), @r"
        ..#
        ##.
        ");
    }

    #[test]
    fn test_format_dual_layer() {
        let mut grid = BlockGrid::new(2, 2, 2);
        grid.set(0, 0, 0, 3);
        grid.set(0, 0, 1, 3);
        grid.set(1, 0, 1, 3 | UPPER_SLOT_BIT);
        insta::assert_snapshot!(format_grid(&grid), @r"
        l=0   l=1
        ..  ..
        ##  .o
        ");
    }
}
