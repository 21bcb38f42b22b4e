//! Per-class shape handlers.
//!
//! The engine keeps an ordered list of handlers, narrowest first, and hands a
//! piece to the first one whose class predicate accepts it. A handler decides
//! whether it serves a piece, how the piece flips and which rotation has the
//! narrowest horizontal profile; grids come from the tier's own cache.

use std::fmt;

use crate::codec::{self, PieceTypeId};
use crate::error::{Result, RotationError};
use crate::flip::{self, FlipRule};
use crate::geometry::Axis;
use crate::shape::{Category, PieceType, Special};

/// Rotation with the narrowest horizontal profile for most families.
pub const MINIMUM_PROFILE_ROTATION: u8 = 1;

pub trait ShapeHandler: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Class predicate on the encoded type.
    fn accepts(&self, id: PieceTypeId) -> bool;

    fn supports(&self, kind: &PieceType) -> bool {
        self.accepts(codec::encode(kind))
    }

    fn flip_rule(&self, kind: &PieceType, axis: Axis) -> Result<FlipRule>;

    fn minimum_profile_rotation(&self, _kind: &PieceType) -> u8 {
        MINIMUM_PROFILE_ROTATION
    }
}

/// Plain four-cell pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct TetrominoHandler;

impl ShapeHandler for TetrominoHandler {
    fn name(&self) -> &'static str {
        "tetromino"
    }

    fn accepts(&self, id: PieceTypeId) -> bool {
        codec::is_tetromino(id)
    }

    fn flip_rule(&self, kind: &PieceType, axis: Axis) -> Result<FlipRule> {
        match kind.category {
            Category::Tetromino(category) => flip::tetromino_rule(kind, category, axis),
            _ => Err(RotationError::UnsupportedPiece(*kind)),
        }
    }
}

/// Dual-layer four-cube pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct TetracubeHandler;

impl ShapeHandler for TetracubeHandler {
    fn name(&self) -> &'static str {
        "tetracube"
    }

    fn accepts(&self, id: PieceTypeId) -> bool {
        codec::is_tetracube(id)
    }

    fn flip_rule(&self, kind: &PieceType, axis: Axis) -> Result<FlipRule> {
        match kind.category {
            Category::Tetracube(category) => flip::tetracube_rule(kind, category, axis),
            _ => Err(RotationError::UnsupportedPiece(*kind)),
        }
    }
}

/// Irregular three- and five-cell pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolyominoHandler;

impl ShapeHandler for PolyominoHandler {
    fn name(&self) -> &'static str {
        "polyomino"
    }

    fn accepts(&self, id: PieceTypeId) -> bool {
        codec::is_tromino(id) || codec::is_pentomino(id)
    }

    fn flip_rule(&self, kind: &PieceType, axis: Axis) -> Result<FlipRule> {
        match kind.category {
            Category::Tromino(category) => flip::tromino_rule(kind, category, axis),
            Category::Pentomino(category) => flip::pentomino_rule(kind, category, axis),
            _ => Err(RotationError::UnsupportedPiece(*kind)),
        }
    }
}

/// Non-polyomino pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecialHandler;

impl ShapeHandler for SpecialHandler {
    fn name(&self) -> &'static str {
        "special"
    }

    fn accepts(&self, id: PieceTypeId) -> bool {
        codec::is_special(id)
    }

    fn flip_rule(&self, kind: &PieceType, axis: Axis) -> Result<FlipRule> {
        match kind.category {
            Category::Special(category) => flip::special_rule(kind, category, axis),
            _ => Err(RotationError::UnsupportedPiece(*kind)),
        }
    }

    // flash pieces lie flat at rotation 0
    fn minimum_profile_rotation(&self, kind: &PieceType) -> u8 {
        match kind.category {
            Category::Special(Special::Flash) => 0,
            _ => MINIMUM_PROFILE_ROTATION,
        }
    }
}
