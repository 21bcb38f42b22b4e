//! Piece Rotation Library
//!
//! Computes the cell grid of every catalogued puzzle piece at each of its four
//! rotation states, and turns, flips and undoes rotations on caller-owned
//! pieces while keeping grids anchored.

pub mod cache;
pub mod codec;
pub mod color;
pub mod engine;
pub mod error;
pub mod flip;
pub mod geometry;
pub mod grid;
pub mod persistence;
pub mod piece;
pub mod shape;
pub mod tables;
pub mod tier;

pub use codec::PieceTypeId;
pub use color::ColorCombination;
pub use engine::{EngineProfile, RotationEngine};
pub use error::{Result, RotationError};
pub use geometry::Axis;
pub use piece::{CellOffset, Direction, Piece, RotationState};
pub use shape::{Category, PieceType, ShapeClass};
