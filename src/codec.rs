//! Shape codec: packs a [`PieceType`] into a 32-bit identifier and back.
//!
//! Layout (most significant byte first): shape class, category index,
//! subcategory, color-combination byte.

use std::fmt;

use crate::color::ColorCombination;
use crate::error::{Result, RotationError};
use crate::shape::{Category, PieceType, ShapeClass};

const CLASS_SHIFT: u32 = 24;
const CATEGORY_SHIFT: u32 = 16;
const SUBCATEGORY_SHIFT: u32 = 8;

/// Opaque integer identifier of a piece type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceTypeId(pub u32);

impl fmt::Display for PieceTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

const fn class_code(class: ShapeClass) -> u8 {
    match class {
        ShapeClass::Tromino => 1,
        ShapeClass::Tetromino => 2,
        ShapeClass::Tetracube => 3,
        ShapeClass::Pentomino => 4,
        ShapeClass::Special => 5,
    }
}

const fn class_from_code(code: u8) -> Option<ShapeClass> {
    match code {
        1 => Some(ShapeClass::Tromino),
        2 => Some(ShapeClass::Tetromino),
        3 => Some(ShapeClass::Tetracube),
        4 => Some(ShapeClass::Pentomino),
        5 => Some(ShapeClass::Special),
        _ => None,
    }
}

const fn class_byte(id: PieceTypeId) -> u8 {
    (id.0 >> CLASS_SHIFT) as u8
}

/// Packs a piece type into its identifier.
pub const fn encode(kind: &PieceType) -> PieceTypeId {
    let class = class_code(kind.category.class()) as u32;
    let category = kind.category.index() as u32;
    let subcategory = kind.subcategory as u32;
    let color = kind.color.raw() as u32;
    PieceTypeId(
        (class << CLASS_SHIFT)
            | (category << CATEGORY_SHIFT)
            | (subcategory << SUBCATEGORY_SHIFT)
            | color,
    )
}

/// Unpacks an identifier into its piece type.
///
/// The subcategory byte is not range-checked here: a dynamically built type
/// may carry any subcategory, and the engine tiers decide whether they serve it.
pub fn classify(id: PieceTypeId) -> Result<PieceType> {
    let [class, category, subcategory, color] = id.0.to_be_bytes();
    let unknown = RotationError::UnknownTypeId(id.0);

    let class = class_from_code(class).ok_or(unknown)?;
    let category = Category::from_index(class, category).ok_or(unknown)?;
    let color = ColorCombination::from_raw(color).ok_or(unknown)?;

    Ok(PieceType::new(category, subcategory, color))
}

pub const fn is_tromino(id: PieceTypeId) -> bool {
    class_byte(id) == class_code(ShapeClass::Tromino)
}

pub const fn is_tetromino(id: PieceTypeId) -> bool {
    class_byte(id) == class_code(ShapeClass::Tetromino)
}

pub const fn is_tetracube(id: PieceTypeId) -> bool {
    class_byte(id) == class_code(ShapeClass::Tetracube)
}

pub const fn is_pentomino(id: PieceTypeId) -> bool {
    class_byte(id) == class_code(ShapeClass::Pentomino)
}

pub const fn is_special(id: PieceTypeId) -> bool {
    class_byte(id) == class_code(ShapeClass::Special)
}

impl From<PieceType> for PieceTypeId {
    fn from(kind: PieceType) -> Self {
        encode(&kind)
    }
}

impl TryFrom<PieceTypeId> for PieceType {
    type Error = RotationError;

    fn try_from(id: PieceTypeId) -> Result<Self> {
        classify(id)
    }
}
