//! The rotation engine: turn, flip and undo operations on caller-owned pieces.
//!
//! An engine is built for a [`EngineProfile`], which fixes the ordered list of
//! shape tiers it serves. It starts in a configuration phase where piece types
//! are registered to pre-warm their grids, then is finalized exactly once and
//! only then accepts stateful operations.
//!
//! Every operation either commits a complete new (type, rotation, grid,
//! bounding box) to the piece or returns an error and leaves the piece and the
//! offset untouched.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::LookupCache;
use crate::codec::classify;
use crate::error::{Result, RotationError};
use crate::flip::FlipMove;
use crate::geometry::Axis;
use crate::grid::BlockGrid;
use crate::persistence::ResumeState;
use crate::piece::{CellOffset, Direction, Piece, RotationState};
use crate::shape::{PieceType, ROTATION_COUNT};
use crate::tier::{PolyominoHandler, ShapeHandler, SpecialHandler, TetracubeHandler, TetrominoHandler};

/// Which shape tiers an engine serves. Each profile includes the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineProfile {
    Tetromino,
    Tetracube,
    Polyomino,
    #[default]
    Universal,
}

impl EngineProfile {
    pub const ALL: [Self; 4] = [Self::Tetromino, Self::Tetracube, Self::Polyomino, Self::Universal];

    /// Handlers in dispatch order, narrowest first.
    fn handlers(self) -> Vec<Box<dyn ShapeHandler>> {
        let mut handlers: Vec<Box<dyn ShapeHandler>> = vec![Box::new(TetrominoHandler)];
        if self == Self::Tetromino {
            return handlers;
        }
        handlers.push(Box::new(TetracubeHandler));
        if self == Self::Tetracube {
            return handlers;
        }
        handlers.push(Box::new(PolyominoHandler));
        if self == Self::Polyomino {
            return handlers;
        }
        handlers.push(Box::new(SpecialHandler));
        handlers
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Configuring,
    Finalized,
}

/// One shape handler and the grids it has built.
#[derive(Debug)]
struct Tier {
    handler: Box<dyn ShapeHandler>,
    cache: LookupCache,
}

impl Tier {
    fn grid(&mut self, kind: &PieceType, rotation: u8) -> Result<Arc<BlockGrid>> {
        self.cache
            .get_or_build(kind, rotation)
            .ok_or(RotationError::UnsupportedPiece(*kind))
    }
}

/// Computes piece grids per rotation and applies turns and flips.
///
/// Operations take `&mut self` because a cache miss publishes a new grid.
/// To share an engine between threads, put it behind a `Mutex`; the pieces
/// themselves only hold `Arc`s to immutable grids.
#[derive(Debug)]
pub struct RotationEngine {
    profile: EngineProfile,
    tiers: Vec<Tier>,
    phase: Phase,
}

impl RotationEngine {
    pub fn new(profile: EngineProfile) -> Self {
        let tiers = profile
            .handlers()
            .into_iter()
            .map(|handler| Tier {
                handler,
                cache: LookupCache::new(),
            })
            .collect();
        Self {
            profile,
            tiers,
            phase: Phase::Configuring,
        }
    }

    pub fn profile(&self) -> EngineProfile {
        self.profile
    }

    pub fn is_finalized(&self) -> bool {
        self.phase == Phase::Finalized
    }

    /// True if some tier of this engine serves the piece type's class.
    pub fn supports(&self, kind: &PieceType) -> bool {
        self.tiers.iter().any(|tier| tier.handler.supports(kind))
    }

    /// Number of grids built so far across all tiers.
    pub fn cached_grids(&self) -> usize {
        self.tiers.iter().map(|tier| tier.cache.len()).sum()
    }

    /// Pre-warms all rotations of a piece type. Configuration phase only.
    pub fn register(&mut self, kind: &PieceType) -> Result<()> {
        if self.is_finalized() {
            return Err(RotationError::AlreadyFinalized);
        }
        let tier = self.tier_mut(kind)?;
        if !tier.cache.prewarm(kind) {
            return Err(RotationError::UnsupportedPiece(*kind));
        }
        Ok(())
    }

    /// Ends the configuration phase. Can only happen once.
    pub fn finalize(&mut self) -> Result<()> {
        if self.is_finalized() {
            return Err(RotationError::AlreadyFinalized);
        }
        self.phase = Phase::Finalized;
        info!(
            profile = ?self.profile,
            tiers = self.tiers.len(),
            grids = self.cached_grids(),
            "rotation engine finalized"
        );
        Ok(())
    }

    /// Fetches the canonical grid of a type at a rotation, building it on a miss.
    pub fn lookup(&mut self, kind: &PieceType, rotation: u8) -> Result<Arc<BlockGrid>> {
        self.ensure_finalized()?;
        self.tier_mut(kind)?.grid(kind, rotation)
    }

    pub fn turn_cw(&mut self, piece: &mut Piece) -> Result<()> {
        let kind = piece.kind();
        let rotation = piece.rotation().turned(1, Direction::Clockwise);
        self.apply(piece, kind, rotation)
    }

    pub fn turn_ccw(&mut self, piece: &mut Piece) -> Result<()> {
        let kind = piece.kind();
        let rotation = piece.rotation().turned(ROTATION_COUNT - 1, Direction::CounterClockwise);
        self.apply(piece, kind, rotation)
    }

    pub fn turn_cw_180(&mut self, piece: &mut Piece) -> Result<()> {
        let kind = piece.kind();
        let rotation = piece.rotation().turned(2, Direction::Clockwise);
        self.apply(piece, kind, rotation)
    }

    pub fn turn_ccw_180(&mut self, piece: &mut Piece) -> Result<()> {
        let kind = piece.kind();
        let rotation = piece.rotation().turned(2, Direction::CounterClockwise);
        self.apply(piece, kind, rotation)
    }

    /// Re-resolves the grid for the piece's current type and rotation.
    pub fn turn0(&mut self, piece: &mut Piece) -> Result<()> {
        let (kind, rotation) = (piece.kind(), piece.rotation());
        self.apply(piece, kind, rotation)
    }

    /// Returns to the rotation held before the last turn.
    pub fn undo_turn(&mut self, piece: &mut Piece) -> Result<()> {
        let kind = piece.kind();
        let rotation = piece.rotation().undone();
        self.apply(piece, kind, rotation)
    }

    /// Moves the piece to the rotation with the narrowest horizontal profile.
    pub fn turn_minimum_horizontal_profile(&mut self, piece: &mut Piece) -> Result<()> {
        self.ensure_finalized()?;
        let kind = piece.kind();
        let index = self.tier_mut(&kind)?.handler.minimum_profile_rotation(&kind);
        let rotation = piece.rotation().jumped(index);
        self.apply(piece, kind, rotation)
    }

    /// Mirrors the piece left to right. The realignment lands in `offset.x`.
    pub fn flip_horizontal(&mut self, piece: &mut Piece, offset: &mut CellOffset) -> Result<()> {
        self.flip(piece, offset, Axis::Horizontal)
    }

    /// Mirrors the piece top to bottom. The realignment lands in `offset.y`.
    pub fn flip_vertical(&mut self, piece: &mut Piece, offset: &mut CellOffset) -> Result<()> {
        self.flip(piece, offset, Axis::Vertical)
    }

    /// Rebuilds a piece from a saved resume record.
    pub fn resume(&mut self, state: ResumeState) -> Result<Piece> {
        let kind = classify(state.type_id)?;
        let mut piece = Piece::with_rotation(kind, state.rotation);
        self.turn0(&mut piece)?;
        Ok(piece)
    }

    fn flip(&mut self, piece: &mut Piece, offset: &mut CellOffset, axis: Axis) -> Result<()> {
        self.ensure_finalized()?;
        let kind = piece.kind();
        let current = piece.rotation();
        let rule = self.tier_mut(&kind)?.handler.flip_rule(&kind, axis)?;

        let rotation = match rule.move_at(current.index) {
            FlipMove::Keep => current,
            FlipMove::Turn180 => current.turned(2, current.direction),
            FlipMove::Swap(swap) => RotationState {
                index: swap.apply(current.index),
                ..current
            },
        };
        let target = rule.target(kind.color);
        self.apply(piece, target, rotation)?;

        let shift = i32::from(rule.shift_at(current.index));
        match axis {
            Axis::Horizontal => offset.x += shift,
            Axis::Vertical => offset.y += shift,
        }
        debug!(from = %kind, to = %target, ?axis, shift, "flipped piece");
        Ok(())
    }

    /// Resolves the grid first, then commits everything to the piece.
    fn apply(&mut self, piece: &mut Piece, kind: PieceType, rotation: RotationState) -> Result<()> {
        self.ensure_finalized()?;
        let rotation = rotation.normalized();
        let grid = self.tier_mut(&kind)?.grid(&kind, rotation.index)?;
        piece.assign(kind, rotation, grid);
        Ok(())
    }

    fn ensure_finalized(&self) -> Result<()> {
        match self.phase {
            Phase::Finalized => Ok(()),
            Phase::Configuring => Err(RotationError::NotFinalized),
        }
    }

    fn tier_mut(&mut self, kind: &PieceType) -> Result<&mut Tier> {
        self.tiers
            .iter_mut()
            .find(|tier| tier.handler.supports(kind))
            .ok_or(RotationError::UnsupportedPiece(*kind))
    }
}
