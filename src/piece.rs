//! The caller-owned piece record the engine mutates.

use std::sync::Arc;

use crate::codec::{encode, PieceTypeId};
use crate::grid::{BlockGrid, BoundingBox};
use crate::shape::{PieceType, ROTATION_COUNT};

/// Direction of the last turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// +1 for clockwise, -1 for counter-clockwise.
    pub const fn sign(self) -> i8 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }

    pub const fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            1 => Some(Self::Clockwise),
            -1 => Some(Self::CounterClockwise),
            _ => None,
        }
    }
}

/// Discrete orientation of a piece plus one level of undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationState {
    pub index: u8,
    pub direction: Direction,
    pub previous: u8,
}

impl RotationState {
    /// A state at `index` with no turn history.
    pub const fn at(index: u8) -> Self {
        let index = index % ROTATION_COUNT;
        Self {
            index,
            direction: Direction::Clockwise,
            previous: index,
        }
    }

    /// Moves by `quarter_turns` clockwise steps, remembering where it came from.
    pub(crate) const fn turned(self, quarter_turns: u8, direction: Direction) -> Self {
        Self {
            index: (self.index % ROTATION_COUNT + quarter_turns % ROTATION_COUNT) % ROTATION_COUNT,
            direction,
            previous: self.index % ROTATION_COUNT,
        }
    }

    /// Jumps to `index`, remembering where it came from.
    pub(crate) const fn jumped(self, index: u8) -> Self {
        Self {
            index: index % ROTATION_COUNT,
            direction: self.direction,
            previous: self.index % ROTATION_COUNT,
        }
    }

    /// Brings `index` and `previous` back into `0..ROTATION_COUNT`.
    pub(crate) const fn normalized(self) -> Self {
        Self {
            index: self.index % ROTATION_COUNT,
            direction: self.direction,
            previous: self.previous % ROTATION_COUNT,
        }
    }

    pub(crate) const fn undone(self) -> Self {
        Self {
            index: self.previous % ROTATION_COUNT,
            ..self
        }
    }
}

/// Positional nudge a flip hands back to the caller. `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellOffset {
    pub x: i32,
    pub y: i32,
}

impl CellOffset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A piece as the game loop sees it.
///
/// The caller creates it; the engine rewrites its type, rotation, grid and
/// bounding box. The grid is shared with the engine's cache and stays valid
/// after the engine moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceType,
    rotation: RotationState,
    grid: Option<Arc<BlockGrid>>,
    bounds: BoundingBox,
}

impl Piece {
    /// A piece at rotation 0 with no grid assigned yet. Call
    /// [`crate::RotationEngine::turn0`] to resolve it.
    pub fn new(kind: PieceType) -> Self {
        Self::with_rotation(kind, RotationState::default())
    }

    pub fn with_rotation(kind: PieceType, rotation: RotationState) -> Self {
        Self {
            kind,
            rotation,
            grid: None,
            bounds: BoundingBox::default(),
        }
    }

    pub fn kind(&self) -> PieceType {
        self.kind
    }

    pub fn type_id(&self) -> PieceTypeId {
        encode(&self.kind)
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn grid(&self) -> Option<&BlockGrid> {
        self.grid.as_deref()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    /// Replaces every engine-owned field at once.
    ///
    /// The bounding box is recomputed from the grid's literal size.
    pub(crate) fn assign(&mut self, kind: PieceType, rotation: RotationState, grid: Arc<BlockGrid>) {
        self.bounds = grid.bounding_box();
        self.kind = kind;
        self.rotation = rotation;
        self.grid = Some(grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turned_records_previous() {
        let state = RotationState::at(3).turned(1, Direction::Clockwise);
        assert_eq!(state.index, 0);
        assert_eq!(state.previous, 3);

        let back = state.turned(3, Direction::CounterClockwise);
        assert_eq!(back.index, 3);
        assert_eq!(back.previous, 0);
        assert_eq!(back.direction.sign(), -1);
    }

    #[test]
    fn test_undone_keeps_previous() {
        let state = RotationState::at(1).turned(2, Direction::Clockwise).undone();
        assert_eq!(state.index, 1);
        assert_eq!(state.previous, 1);
    }

    #[test]
    fn test_normalized_wraps_both_indices() {
        let state = RotationState {
            index: 5,
            direction: Direction::CounterClockwise,
            previous: 9,
        }
        .normalized();
        assert_eq!(state, RotationState { index: 1, direction: Direction::CounterClockwise, previous: 1 });
    }

    #[test]
    fn test_direction_sign_roundtrip() {
        for direction in [Direction::Clockwise, Direction::CounterClockwise] {
            assert_eq!(Direction::from_sign(direction.sign()), Some(direction));
        }
        assert_eq!(Direction::from_sign(0), None);
    }
}
