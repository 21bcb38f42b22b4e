//! Canonical grid authoring for every catalogued shape family.
//!
//! Each family is hand-authored as one readable grid per rotation. Readable
//! grids list layers bottom first and rows top to bottom, which is how they
//! read in source; [`build`] mirrors the rows once so that row 0 is the
//! bottom row at runtime, then paints the occupied cells.
//!
//! Authoring alphabet:
//! - `.` empty
//! - `#` plain cell, painted with the color combination's cell code
//! - `a` lower-slot cell of a dual-layer piece
//! - `b` upper-slot cell of a dual-layer piece
//!
//! Every rotation of one (category, subcategory) is authored on the same
//! square grid, so the engine can assume a fixed rotation pivot.

mod polyomino;
mod special;
mod tetracube;
mod tetromino;

use crate::color::{CellCode, ColorCombination, SlotCodes, EMPTY_CELL};
use crate::grid::BlockGrid;
use crate::shape::{Category, PieceType, Tetracube, ROTATION_COUNT};

/// One readable grid: layers (bottom first) of rows (top first).
pub(crate) type Authored = &'static [&'static [&'static str]];

/// How occupied cells of an authored grid are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paint {
    /// Every cell gets the same code.
    Uniform(CellCode),
    /// Lower and upper slots get their own codes.
    Slots(SlotCodes),
}

/// Looks up the readable grid for a family at one rotation.
///
/// Returns `None` for a subcategory the family is not authored with.
pub(crate) fn authored(category: Category, subcategory: u8, rotation: u8) -> Option<Authored> {
    let rotation = usize::from(rotation % ROTATION_COUNT);
    match category {
        Category::Tromino(c) => polyomino::tromino(c, subcategory),
        Category::Tetromino(c) => tetromino::tetromino(c, subcategory),
        Category::Tetracube(c) => tetracube::tetracube(c, subcategory),
        Category::Pentomino(c) => polyomino::pentomino(c, subcategory),
        Category::Special(c) => special::special(c, subcategory),
    }
    .map(|rotations| rotations[rotation])
}

/// Builds the canonical grid for a piece type at one rotation.
///
/// Deterministic in its inputs. Returns `None` when the family has no
/// authored grid for the requested subcategory.
pub fn build(kind: &PieceType, rotation: u8) -> Option<BlockGrid> {
    let readable = authored(kind.category, kind.subcategory, rotation)?;
    Some(expand(readable, paint_for(kind)))
}

/// Chooses the codes for a piece type's occupied cells.
fn paint_for(kind: &PieceType) -> Paint {
    match kind.category {
        Category::Tetracube(family) => Paint::Slots(slot_source(family, kind.color).slot_codes()),
        _ => Paint::Uniform(kind.color.cell_code()),
    }
}

/// Resolves the combination whose slot codes a dual-layer family is painted with.
///
/// The Screw and Corner families are raised from single-layer footprints and
/// take their slot pair from the single-layer base when asked for
/// [`ColorCombination::FROM_SINGLE_LAYER`]. L and Branch use the value as is.
fn slot_source(family: Tetracube, color: ColorCombination) -> ColorCombination {
    match family {
        Tetracube::Screw | Tetracube::Corner if color == ColorCombination::FROM_SINGLE_LAYER => {
            ColorCombination::SINGLE_LAYER_BASE
        }
        _ => color,
    }
}

/// Mirrors a readable grid to bottom-first rows and paints it.
fn expand(readable: Authored, paint: Paint) -> BlockGrid {
    let layers = readable.len();
    let rows = readable.first().map_or(0, |layer| layer.len());
    let cols = readable
        .first()
        .and_then(|layer| layer.first())
        .map_or(0, |row| row.len());

    let mut grid = BlockGrid::new(layers, rows, cols);
    for (layer, authored_rows) in readable.iter().enumerate() {
        for (authored_row, text) in authored_rows.iter().enumerate() {
            // authored rows run top to bottom, runtime rows bottom to top
            let row = rows - 1 - authored_row;
            for (col, symbol) in text.bytes().enumerate() {
                grid.set(layer, row, col, cell_code(symbol, paint));
            }
        }
    }
    grid
}

fn cell_code(symbol: u8, paint: Paint) -> CellCode {
    match (symbol, paint) {
        (b'#', Paint::Uniform(code)) => code,
        (b'a', Paint::Slots(slots)) => slots.lower,
        (b'b', Paint::Slots(slots)) => slots.upper,
        _ => EMPTY_CELL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Handedness, UPPER_SLOT_BIT};
    use crate::grid::format_grid;
    use crate::shape::{Pentomino, ShapeClass, Special, Tetromino};

    fn all_authored() -> impl Iterator<Item = (PieceType, u8, Authored)> {
        PieceType::catalog(ColorCombination::RED).flat_map(|kind| {
            (0..ROTATION_COUNT).map(move |rotation| {
                let readable = authored(kind.category, kind.subcategory, rotation)
                    .unwrap_or_else(|| panic!("{kind} missing rotation {rotation}"));
                (kind, rotation, readable)
            })
        })
    }

    #[test]
    fn test_authoring_alphabet_matches_class() {
        for (kind, rotation, readable) in all_authored() {
            let dual = kind.shape_class() == ShapeClass::Tetracube;
            let allowed: &[u8] = if dual { b".ab" } else { b".#" };
            for text in readable.iter().flat_map(|layer| layer.iter()) {
                assert!(
                    text.bytes().all(|symbol| allowed.contains(&symbol)),
                    "{kind} rotation {rotation} uses an unexpected symbol in {text:?}"
                );
            }
        }
    }

    #[test]
    fn test_rotations_share_one_square_grid() {
        for kind in PieceType::catalog(ColorCombination::RED) {
            let sizes: Vec<_> = (0..ROTATION_COUNT)
                .map(|rotation| build(&kind, rotation).unwrap().bounding_box())
                .collect();
            assert!(sizes.iter().all(|&size| size == sizes[0]), "{kind}: {sizes:?}");
            assert_eq!(sizes[0].width, sizes[0].height, "{kind} is not square");
            for rotation in 0..ROTATION_COUNT {
                let readable = authored(kind.category, kind.subcategory, rotation).unwrap();
                for layer in readable.iter() {
                    assert!(
                        layer.iter().all(|row| row.len() == sizes[0].width),
                        "{kind} rotation {rotation} has a ragged row"
                    );
                }
            }
        }
    }

    #[test]
    fn test_cell_counts_match_class() {
        for (kind, rotation, _) in all_authored() {
            let count = build(&kind, rotation).unwrap().occupied_count();
            let expected = match kind.shape_class() {
                ShapeClass::Tromino => Some(3),
                ShapeClass::Tetromino | ShapeClass::Tetracube => Some(4),
                ShapeClass::Pentomino => Some(5),
                ShapeClass::Special => None,
            };
            if let Some(expected) = expected {
                assert_eq!(count, expected, "{kind} rotation {rotation}");
            }
        }
    }

    #[test]
    fn test_layout_is_identical_for_every_color() {
        for kind in PieceType::catalog(ColorCombination::RED) {
            for rotation in 0..ROTATION_COUNT {
                let reference: Vec<_> = build(&kind, rotation)
                    .unwrap()
                    .occupied()
                    .map(|(coord, _)| coord)
                    .collect();
                for color in ColorCombination::all() {
                    let painted = build(&PieceType { color, ..kind }, rotation).unwrap();
                    let layout: Vec<_> = painted.occupied().map(|(coord, _)| coord).collect();
                    assert_eq!(layout, reference, "{kind} with {color} at rotation {rotation}");
                }
            }
        }
    }

    #[test]
    fn test_rows_are_stored_bottom_first() {
        let gamma = PieceType::plain(Category::Tetromino(Tetromino::Gamma), ColorCombination::RED);
        let grid = build(&gamma, 0).unwrap();
        // authored "#.." on top: the marker sits in the last runtime row
        assert_eq!(grid.get(0, 2, 0), Some(ColorCombination::RED.cell_code()));
        assert_eq!(grid.get(0, 0, 0), Some(EMPTY_CELL));
        insta::assert_snapshot!(format_grid(&grid), @r"
        #..
        ###
        ...
        ");
    }

    #[test]
    fn test_dual_layer_slots() {
        let color = ColorCombination::new(5, Handedness::Left).unwrap();
        let cube = PieceType::new(Category::Tetracube(Tetracube::L), 0, color);
        let grid = build(&cube, 0).unwrap();
        let slots = color.slot_codes();
        assert_eq!(grid.layers(), 2);
        assert_eq!(grid.get(0, 1, 0), Some(slots.lower));
        assert_eq!(grid.get(1, 1, 0), Some(slots.upper));
        assert_eq!(grid.get(1, 1, 2), Some(EMPTY_CELL));
        insta::assert_snapshot!(format_grid(&grid), @r"
        l=0    l=1
        ...  ...
        ###  o..
        ...  ...
        ");
    }

    #[test]
    fn test_from_single_layer_special_case() {
        let from_sl = ColorCombination::FROM_SINGLE_LAYER;
        let base = ColorCombination::SINGLE_LAYER_BASE.slot_codes();

        for family in [Tetracube::Screw, Tetracube::Corner] {
            let grid = build(&PieceType::new(Category::Tetracube(family), 0, from_sl), 0).unwrap();
            for (_, code) in grid.occupied() {
                assert!(code == base.lower || code == base.upper, "{family:?} painted {code:#x}");
            }
        }
        for family in [Tetracube::L, Tetracube::Branch] {
            let grid = build(&PieceType::new(Category::Tetracube(family), 0, from_sl), 0).unwrap();
            for (_, code) in grid.occupied() {
                assert_eq!(code & !UPPER_SLOT_BIT, from_sl.raw(), "{family:?} painted {code:#x}");
            }
        }
    }

    #[test]
    fn test_unknown_subcategory_has_no_grid() {
        let corner = PieceType::new(Category::Tetracube(Tetracube::Corner), 4, ColorCombination::RED);
        assert!(build(&corner, 0).is_none());
        let p = PieceType::new(Category::Pentomino(Pentomino::P), 1, ColorCombination::RED);
        assert!(build(&p, 0).is_none());
        let galaxy = PieceType::new(Category::Special(Special::Galaxy), 2, ColorCombination::RED);
        assert!(build(&galaxy, 3).is_some());
    }
}
