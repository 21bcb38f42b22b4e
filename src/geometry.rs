//! Planar rotation and mirror transforms on grid coordinates.
//!
//! Coordinates are `(layer, row, col)` with row 0 at the bottom. Rotations
//! and mirrors act on the row/col plane only; the layer is carried through
//! unchanged, so a dual-layer piece keeps its upper cubes on top.

use crate::color::CellCode;
use crate::grid::BlockGrid;

/// A cell position as (layer, row, col).
pub type Coord = (i32, i32, i32);

/// A positioned cell with its color code.
pub type Cell = (Coord, CellCode);

/// The four quarter turns, indexed by rotation delta.
///
/// Clockwise as seen from above with rows growing upward: a point at
/// (row, col) moves to (-col, row).
pub const QUARTER_TURNS: [fn(Coord) -> Coord; 4] = [
    |(l, r, c)| (l, r, c),   // 0 degrees
    |(l, r, c)| (l, -c, r),  // 90 degrees clockwise
    |(l, r, c)| (l, -r, -c), // 180 degrees
    |(l, r, c)| (l, c, -r),  // 270 degrees clockwise
];

/// Mirror axis of a flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left and right swap: columns are mirrored.
    Horizontal,
    /// Top and bottom swap: rows are mirrored.
    Vertical,
}

impl Axis {
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Picks the coordinate this axis mirrors.
    #[inline]
    pub fn component(self, (_, row, col): Coord) -> i32 {
        match self {
            Self::Horizontal => col,
            Self::Vertical => row,
        }
    }
}

/// Collects the occupied cells of a grid.
pub fn cells_of(grid: &BlockGrid) -> Vec<Cell> {
    grid.occupied().collect()
}

/// Smallest and largest coordinate along the axis, or `None` for no cells.
pub fn extent(cells: &[Cell], axis: Axis) -> Option<(i32, i32)> {
    let min = cells.iter().map(|&(coord, _)| axis.component(coord)).min()?;
    let max = cells.iter().map(|&(coord, _)| axis.component(coord)).max()?;
    Some((min, max))
}

/// Mirrors cells inside their own extent along the axis.
///
/// The mirrored cells occupy exactly the same span as the input, so a piece
/// flipped in place does not drift.
pub fn mirror_in_place(cells: &[Cell], axis: Axis) -> Vec<Cell> {
    let Some((min, max)) = extent(cells, axis) else {
        return Vec::new();
    };
    let mut mirrored: Vec<Cell> = cells
        .iter()
        .map(|&((l, r, c), code)| match axis {
            Axis::Horizontal => ((l, r, min + max - c), code),
            Axis::Vertical => ((l, min + max - r, c), code),
        })
        .collect();
    mirrored.sort();
    mirrored
}

/// Translates cells along one axis.
pub fn shift(cells: &[Cell], axis: Axis, delta: i32) -> Vec<Cell> {
    let mut shifted: Vec<Cell> = cells
        .iter()
        .map(|&((l, r, c), code)| match axis {
            Axis::Horizontal => ((l, r, c + delta), code),
            Axis::Vertical => ((l, r + delta, c), code),
        })
        .collect();
    shifted.sort();
    shifted
}

/// Applies a quarter-turn count to every cell.
pub fn rotate(cells: &[Cell], quarter_turns: u8) -> Vec<Cell> {
    let turn = QUARTER_TURNS[usize::from(quarter_turns % 4)];
    cells.iter().map(|&(coord, code)| (turn(coord), code)).collect()
}

/// Translates cells so the minimum row and col are both zero.
///
/// Two cell sets that differ only by translation normalize to the same
/// sorted vector.
pub fn normalize_to_origin(mut cells: Vec<Cell>) -> Vec<Cell> {
    let Some(min_row) = cells.iter().map(|&((_, r, _), _)| r).min() else {
        return cells;
    };
    let min_col = cells.iter().map(|&((_, _, c), _)| c).min().unwrap_or(0);

    for ((_, r, c), _) in &mut cells {
        *r -= min_row;
        *c -= min_col;
    }

    cells.sort();
    cells
}
