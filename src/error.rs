//! Error type shared by the engine, the codec and the shape tiers.

use thiserror::Error;

use crate::shape::PieceType;

/// Failures reported by the rotation engine.
///
/// None of these are transient: every variant points at a configuration
/// mismatch or a caller bug, so nothing is ever retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RotationError {
    /// The piece belongs to a shape class (or subcategory) no tier of this engine serves.
    #[error("unsupported piece: {0}")]
    UnsupportedPiece(PieceType),

    /// A stateful operation was called while the engine is still being configured.
    #[error("rotation engine used before finalize")]
    NotFinalized,

    /// A configuration operation was called after the engine was finalized.
    #[error("rotation engine already finalized")]
    AlreadyFinalized,

    /// The piece's family has no mirror image.
    #[error("piece cannot be flipped: {0}")]
    Unflippable(PieceType),

    /// A raw type identifier does not decode to a known piece type.
    #[error("unknown piece type id {0:#010x}")]
    UnknownTypeId(u32),
}

impl RotationError {
    /// True for the errors that reject the piece itself rather than the engine state.
    pub fn is_invalid_piece(&self) -> bool {
        matches!(self, Self::UnsupportedPiece(_) | Self::Unflippable(_))
    }

    /// True for calls made in the wrong lifecycle phase.
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Self::NotFinalized | Self::AlreadyFinalized)
    }
}

pub type Result<T> = std::result::Result<T, RotationError>;
