//! Flip case tables.
//!
//! A flip mirrors a piece's occupied cells inside their own extent along one
//! axis. The mirror image is always some authored grid: the same family or
//! its mirror partner, at the same rotation, at the opposite rotation, or at
//! a rotation picked by a fixed involution. Which one, plus the cell shift
//! that realigns the authored grid with the mirror image, is spelled out per
//! family here rather than derived at runtime.
//!
//! The shift is indexed by the source rotation and is the amount the caller's
//! offset moves along the flip axis (`x` for horizontal, `y` for vertical with
//! `y` growing upward). [`audit`] recomputes every entry from the authored
//! grids.

use std::fmt;

use crate::color::ColorCombination;
use crate::error::{Result, RotationError};
use crate::geometry::{self, cells_of, mirror_in_place, normalize_to_origin, Axis};
use crate::shape::{Category, Pentomino, PieceType, Special, Tetracube, Tetromino, Tromino, ROTATION_COUNT};
use crate::tables;

/// Fixed rotation permutations used by families whose mirror image is one of
/// their own rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationSwap {
    /// 0 <-> 3, 1 <-> 2.
    Reverse,
    /// 0 <-> 1, 2 <-> 3.
    Adjacent,
}

impl RotationSwap {
    pub const fn apply(self, rotation: u8) -> u8 {
        let rotation = rotation % ROTATION_COUNT;
        match self {
            Self::Reverse => 3 - rotation,
            Self::Adjacent => rotation ^ 1,
        }
    }
}

/// What happens to the rotation index when a piece is flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipMove {
    /// The target family's grid at the same rotation already is the mirror image.
    Keep,
    /// The mirror image is the target family turned half way.
    Turn180,
    /// The rotation index is permuted.
    Swap(RotationSwap),
}

impl FlipMove {
    pub const fn target_rotation(self, rotation: u8) -> u8 {
        match self {
            Self::Keep => rotation % ROTATION_COUNT,
            Self::Turn180 => (rotation + 2) % ROTATION_COUNT,
            Self::Swap(swap) => swap.apply(rotation),
        }
    }
}

/// One row of the flip table: where a (category, subcategory) goes when
/// mirrored along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipRule {
    pub category: Category,
    pub subcategory: u8,
    pub moves: [FlipMove; 4],
    pub shift: [i8; 4],
}

impl FlipRule {
    pub fn move_at(&self, rotation: u8) -> FlipMove {
        self.moves[usize::from(rotation % ROTATION_COUNT)]
    }

    pub fn shift_at(&self, rotation: u8) -> i8 {
        self.shift[usize::from(rotation % ROTATION_COUNT)]
    }

    /// The piece type after the flip: new family, mirrored paint.
    pub fn target(&self, color: ColorCombination) -> PieceType {
        PieceType::new(self.category, self.subcategory, color.flip())
    }
}

use FlipMove::{Keep, Swap, Turn180};

const KEEP: [FlipMove; 4] = [Keep; 4];
const TURN_ODD: [FlipMove; 4] = [Keep, Turn180, Keep, Turn180];
const TURN_EVEN: [FlipMove; 4] = [Turn180, Keep, Turn180, Keep];
const SWAP_REVERSE: [FlipMove; 4] = [Swap(RotationSwap::Reverse); 4];
const SWAP_ADJACENT: [FlipMove; 4] = [Swap(RotationSwap::Adjacent); 4];

const NO_SHIFT: [i8; 4] = [0; 4];

const fn rule(category: Category, subcategory: u8, moves: [FlipMove; 4], shift: [i8; 4]) -> FlipRule {
    FlipRule {
        category,
        subcategory,
        moves,
        shift,
    }
}

/// Same family, same rotation, only the paint is mirrored.
const fn symmetric(category: Category, subcategory: u8) -> FlipRule {
    rule(category, subcategory, KEEP, NO_SHIFT)
}

/// Picks the horizontal or vertical half of a rule pair.
const fn by_axis(axis: Axis, horizontal: FlipRule, vertical: FlipRule) -> FlipRule {
    match axis {
        Axis::Horizontal => horizontal,
        Axis::Vertical => vertical,
    }
}

/// Looks up the flip rule for any catalogued piece type.
pub fn flip_rule(kind: &PieceType, axis: Axis) -> Result<FlipRule> {
    match kind.category {
        Category::Tromino(category) => tromino_rule(kind, category, axis),
        Category::Tetromino(category) => tetromino_rule(kind, category, axis),
        Category::Tetracube(category) => tetracube_rule(kind, category, axis),
        Category::Pentomino(category) => pentomino_rule(kind, category, axis),
        Category::Special(category) => special_rule(kind, category, axis),
    }
}

fn single_placement(kind: &PieceType) -> Result<()> {
    if kind.subcategory == 0 {
        Ok(())
    } else {
        Err(RotationError::UnsupportedPiece(*kind))
    }
}

pub(crate) fn tetromino_rule(kind: &PieceType, category: Tetromino, axis: Axis) -> Result<FlipRule> {
    single_placement(kind)?;
    let tetromino = Category::Tetromino;
    Ok(match category {
        Tetromino::Line | Tetromino::Square => symmetric(kind.category, 0),
        Tetromino::T => by_axis(
            axis,
            rule(tetromino(Tetromino::T), 0, TURN_ODD, [0, 1, 0, -1]),
            rule(tetromino(Tetromino::T), 0, TURN_EVEN, [1, 0, -1, 0]),
        ),
        Tetromino::S => by_axis(
            axis,
            rule(tetromino(Tetromino::Z), 0, TURN_ODD, NO_SHIFT),
            rule(tetromino(Tetromino::Z), 0, TURN_EVEN, NO_SHIFT),
        ),
        Tetromino::Z => by_axis(
            axis,
            rule(tetromino(Tetromino::S), 0, TURN_ODD, NO_SHIFT),
            rule(tetromino(Tetromino::S), 0, TURN_EVEN, NO_SHIFT),
        ),
        Tetromino::Gamma => by_axis(
            axis,
            rule(tetromino(Tetromino::Gun), 0, TURN_EVEN, [0, 1, 0, -1]),
            rule(tetromino(Tetromino::Gun), 0, TURN_ODD, [1, 0, -1, 0]),
        ),
        Tetromino::Gun => by_axis(
            axis,
            rule(tetromino(Tetromino::Gamma), 0, TURN_EVEN, [0, -1, 0, 1]),
            rule(tetromino(Tetromino::Gamma), 0, TURN_ODD, [-1, 0, 1, 0]),
        ),
    })
}

pub(crate) fn tromino_rule(kind: &PieceType, category: Tromino, axis: Axis) -> Result<FlipRule> {
    single_placement(kind)?;
    Ok(match category {
        Tromino::Line => symmetric(kind.category, 0),
        Tromino::Corner => by_axis(
            axis,
            rule(kind.category, 0, SWAP_REVERSE, NO_SHIFT),
            rule(kind.category, 0, SWAP_ADJACENT, NO_SHIFT),
        ),
    })
}

pub(crate) fn pentomino_rule(kind: &PieceType, category: Pentomino, axis: Axis) -> Result<FlipRule> {
    single_placement(kind)?;
    let pentomino = Category::Pentomino;

    // L, N and Y pairs share the 4x4 layout and the same two-cell realignment
    let long_pair = |partner| {
        by_axis(
            axis,
            rule(pentomino(partner), 0, TURN_ODD, [0, 2, 0, -2]),
            rule(pentomino(partner), 0, TURN_EVEN, [2, 0, -2, 0]),
        )
    };
    // mirror partner is the same rotation or its half turn, no realignment
    let aligned_pair = |partner| {
        by_axis(
            axis,
            rule(pentomino(partner), 0, TURN_ODD, NO_SHIFT),
            rule(pentomino(partner), 0, TURN_EVEN, NO_SHIFT),
        )
    };

    Ok(match category {
        Pentomino::Line | Pentomino::X => symmetric(kind.category, 0),
        Pentomino::L => long_pair(Pentomino::LReverse),
        Pentomino::LReverse => long_pair(Pentomino::L),
        Pentomino::N => long_pair(Pentomino::NReverse),
        Pentomino::NReverse => long_pair(Pentomino::N),
        Pentomino::Y => long_pair(Pentomino::YReverse),
        Pentomino::YReverse => long_pair(Pentomino::Y),
        Pentomino::P => by_axis(
            axis,
            rule(pentomino(Pentomino::PReverse), 0, TURN_ODD, [1, 0, -1, 0]),
            rule(pentomino(Pentomino::PReverse), 0, TURN_EVEN, [0, -1, 0, 1]),
        ),
        Pentomino::PReverse => by_axis(
            axis,
            rule(pentomino(Pentomino::P), 0, TURN_ODD, [-1, 0, 1, 0]),
            rule(pentomino(Pentomino::P), 0, TURN_EVEN, [0, 1, 0, -1]),
        ),
        Pentomino::Z => aligned_pair(Pentomino::ZReverse),
        Pentomino::ZReverse => aligned_pair(Pentomino::Z),
        Pentomino::F => aligned_pair(Pentomino::FReverse),
        Pentomino::FReverse => aligned_pair(Pentomino::F),
        Pentomino::T => aligned_pair(Pentomino::T),
        Pentomino::U => by_axis(
            axis,
            rule(kind.category, 0, TURN_ODD, [0, 1, 0, -1]),
            rule(kind.category, 0, TURN_EVEN, [1, 0, -1, 0]),
        ),
        Pentomino::V | Pentomino::W => by_axis(
            axis,
            rule(kind.category, 0, SWAP_REVERSE, NO_SHIFT),
            rule(kind.category, 0, SWAP_ADJACENT, NO_SHIFT),
        ),
    })
}

pub(crate) fn tetracube_rule(kind: &PieceType, category: Tetracube, axis: Axis) -> Result<FlipRule> {
    if !kind.has_known_subcategory() {
        return Err(RotationError::UnsupportedPiece(*kind));
    }
    let this = kind.category;
    let sub = kind.subcategory;

    Ok(match (category, sub) {
        (Tetracube::L, _) => by_axis(
            axis,
            rule(this, sub ^ 1, TURN_ODD, NO_SHIFT),
            rule(this, sub ^ 1, TURN_EVEN, NO_SHIFT),
        ),
        (Tetracube::Branch, 0) => by_axis(
            axis,
            rule(this, 1, TURN_ODD, [-1, 1, 1, -1]),
            rule(this, 1, TURN_EVEN, [1, 1, -1, -1]),
        ),
        (Tetracube::Branch, _) => by_axis(
            axis,
            rule(this, 0, TURN_ODD, [1, 1, -1, -1]),
            rule(this, 0, TURN_EVEN, [1, -1, -1, 1]),
        ),
        (Tetracube::Screw, _) => by_axis(
            axis,
            rule(this, 0, SWAP_REVERSE, [-1, -1, 1, 1]),
            rule(this, 0, SWAP_ADJACENT, [-1, 1, 1, -1]),
        ),
        // subcategory swap 0 <-> 3, 1 <-> 2; even rotations also need a half turn
        (Tetracube::Corner, 0 | 1) => by_axis(
            axis,
            rule(this, 3 - sub, TURN_EVEN, [1, 1, -1, -1]),
            rule(this, 3 - sub, TURN_ODD, [1, -1, -1, 1]),
        ),
        (Tetracube::Corner, _) => by_axis(
            axis,
            rule(this, 3 - sub, TURN_EVEN, [1, -1, -1, 1]),
            rule(this, 3 - sub, TURN_ODD, [-1, -1, 1, 1]),
        ),
    })
}

pub(crate) fn special_rule(kind: &PieceType, category: Special, axis: Axis) -> Result<FlipRule> {
    match category {
        Special::Galaxy | Special::PushDown | Special::Arbitrary => {
            return Err(RotationError::Unflippable(*kind));
        }
        Special::Flash | Special::Single => single_placement(kind)?,
    }
    Ok(match category {
        Special::Flash => by_axis(
            axis,
            rule(kind.category, 0, SWAP_ADJACENT, NO_SHIFT),
            rule(kind.category, 0, SWAP_ADJACENT, NO_SHIFT),
        ),
        _ => symmetric(kind.category, 0),
    })
}

/// A disagreement between the flip table and the authored grids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditFinding {
    /// The mirrored grid is not the rule's target grid moved by the rule's shift.
    MirrorMismatch { kind: PieceType, axis: Axis, rotation: u8 },
    /// Flipping twice does not come back to the start with a zero net shift.
    NotInvolution { kind: PieceType, axis: Axis, rotation: u8 },
    /// A rotation is not the clockwise quarter turn of the one before it.
    RotationMismatch { kind: PieceType, rotation: u8 },
    /// The table names a target that has no authored grid.
    MissingGrid { kind: PieceType, rotation: u8 },
}

impl fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MirrorMismatch { kind, axis, rotation } => {
                write!(f, "{kind} rotation {rotation}: {axis:?} mirror does not match its rule")
            }
            Self::NotInvolution { kind, axis, rotation } => {
                write!(f, "{kind} rotation {rotation}: {axis:?} flip is not self-inverse")
            }
            Self::RotationMismatch { kind, rotation } => {
                write!(f, "{kind} rotation {rotation} is not a quarter turn of the previous rotation")
            }
            Self::MissingGrid { kind, rotation } => write!(f, "{kind} rotation {rotation} has no grid"),
        }
    }
}

/// Checks every catalogued family against the flip table and the rotation order.
///
/// Uses a neutral paint, whose flip is itself, so cell codes compare directly.
pub fn audit() -> Vec<AuditFinding> {
    let mut findings = Vec::new();
    for kind in PieceType::catalog(ColorCombination::RED) {
        audit_rotations(&kind, &mut findings);
        for axis in Axis::ALL {
            audit_flips(&kind, axis, &mut findings);
        }
    }
    findings
}

fn audit_rotations(kind: &PieceType, findings: &mut Vec<AuditFinding>) {
    for rotation in 0..ROTATION_COUNT {
        let next = (rotation + 1) % ROTATION_COUNT;
        let (Some(current), Some(following)) = (tables::build(kind, rotation), tables::build(kind, next)) else {
            findings.push(AuditFinding::MissingGrid { kind: *kind, rotation });
            continue;
        };
        let turned = normalize_to_origin(geometry::rotate(&cells_of(&current), 1));
        if turned != normalize_to_origin(cells_of(&following)) {
            findings.push(AuditFinding::RotationMismatch { kind: *kind, rotation: next });
        }
    }
}

fn audit_flips(kind: &PieceType, axis: Axis, findings: &mut Vec<AuditFinding>) {
    let Ok(rule) = flip_rule(kind, axis) else {
        return;
    };
    for rotation in 0..ROTATION_COUNT {
        let target = rule.target(kind.color);
        let target_rotation = rule.move_at(rotation).target_rotation(rotation);
        let (Some(source), Some(flipped)) = (
            tables::build(kind, rotation),
            tables::build(&target, target_rotation),
        ) else {
            findings.push(AuditFinding::MissingGrid { kind: target, rotation: target_rotation });
            continue;
        };

        let mirrored = mirror_in_place(&cells_of(&source), axis);
        let expected = geometry::shift(&cells_of(&flipped), axis, i32::from(rule.shift_at(rotation)));
        if mirrored != expected {
            findings.push(AuditFinding::MirrorMismatch { kind: *kind, axis, rotation });
        }

        let back = flip_rule(&target, axis).ok();
        let returns = back.is_some_and(|back| {
            back.category == kind.category
                && back.subcategory == kind.subcategory
                && back.move_at(target_rotation).target_rotation(target_rotation) == rotation
                && back.shift_at(target_rotation) + rule.shift_at(rotation) == 0
        });
        if !returns {
            findings.push(AuditFinding::NotInvolution { kind: *kind, axis, rotation });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(category: Category) -> PieceType {
        PieceType::plain(category, ColorCombination::RED)
    }

    #[test]
    fn test_audit_is_clean() {
        let findings = audit();
        assert!(
            findings.is_empty(),
            "flip table disagrees with the authored grids:\n{}",
            findings.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
        );
    }

    #[test]
    fn test_swaps_are_involutions() {
        for swap in [RotationSwap::Reverse, RotationSwap::Adjacent] {
            for rotation in 0..ROTATION_COUNT {
                assert_eq!(swap.apply(swap.apply(rotation)), rotation);
            }
        }
        assert_eq!(RotationSwap::Reverse.apply(1), 2);
        assert_eq!(RotationSwap::Adjacent.apply(2), 3);
    }

    #[test]
    fn test_gamma_horizontal_at_rotation_one() {
        let rule = flip_rule(&plain(Category::Tetromino(Tetromino::Gamma)), Axis::Horizontal).unwrap();
        assert_eq!(rule.category, Category::Tetromino(Tetromino::Gun));
        assert_eq!(rule.move_at(1), Keep);
        assert_eq!(rule.shift_at(1), 1);
    }

    #[test]
    fn test_s_and_z_turn_half_way_at_odd_horizontal() {
        let s = flip_rule(&plain(Category::Tetromino(Tetromino::S)), Axis::Horizontal).unwrap();
        assert_eq!(s.category, Category::Tetromino(Tetromino::Z));
        assert_eq!(s.moves, TURN_ODD);

        let z = flip_rule(&plain(Category::Pentomino(Pentomino::Z)), Axis::Vertical).unwrap();
        assert_eq!(z.category, Category::Pentomino(Pentomino::ZReverse));
        assert_eq!(z.moves, TURN_EVEN);
        assert_eq!(z.shift, NO_SHIFT);
    }

    #[test]
    fn test_p_shifts_mirror_p_reverse() {
        let p = plain(Category::Pentomino(Pentomino::P));
        let h = flip_rule(&p, Axis::Horizontal).unwrap();
        let v = flip_rule(&p, Axis::Vertical).unwrap();
        assert_eq!(h.shift, [1, 0, -1, 0]);
        assert_eq!(v.shift[1], -1);
        assert_eq!(v.shift[3], 1);

        let reverse = plain(Category::Pentomino(Pentomino::PReverse));
        let h_rev = flip_rule(&reverse, Axis::Horizontal).unwrap();
        let v_rev = flip_rule(&reverse, Axis::Vertical).unwrap();
        assert_eq!(h_rev.shift, h.shift.map(|s| -s));
        assert_eq!(v_rev.shift, v.shift.map(|s| -s));
    }

    #[test]
    fn test_corner_subcategories_pair_up() {
        for sub in 0..4 {
            let corner = PieceType::new(Category::Tetracube(Tetracube::Corner), sub, ColorCombination::RED);
            let rule = flip_rule(&corner, Axis::Horizontal).unwrap();
            assert_eq!(rule.subcategory, 3 - sub);
            assert_eq!(rule.move_at(0), Turn180);
            assert_eq!(rule.move_at(1), Keep);
        }
    }

    #[test]
    fn test_flash_uses_adjacent_swap() {
        let flash = plain(Category::Special(Special::Flash));
        for axis in Axis::ALL {
            let rule = flip_rule(&flash, axis).unwrap();
            assert_eq!(rule.moves, SWAP_ADJACENT);
        }
    }

    #[test]
    fn test_unflippable_specials() {
        for special in [Special::Galaxy, Special::PushDown, Special::Arbitrary] {
            let kind = plain(Category::Special(special));
            assert_eq!(flip_rule(&kind, Axis::Vertical), Err(RotationError::Unflippable(kind)));
        }
    }

    #[test]
    fn test_unknown_subcategory_is_unsupported() {
        let kind = PieceType::new(Category::Pentomino(Pentomino::U), 2, ColorCombination::RED);
        assert_eq!(
            flip_rule(&kind, Axis::Horizontal),
            Err(RotationError::UnsupportedPiece(kind))
        );
    }

    #[test]
    fn test_target_mirrors_paint() {
        let color = ColorCombination::new(3, crate::color::Handedness::Right).unwrap();
        let kind = PieceType::plain(Category::Tetromino(Tetromino::S), color);
        let rule = flip_rule(&kind, Axis::Horizontal).unwrap();
        let target = rule.target(color);
        assert_eq!(target.category, Category::Tetromino(Tetromino::Z));
        assert_eq!(target.color, color.flip());
    }
}
