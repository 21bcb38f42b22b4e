//! Color-combination algebra.
//!
//! A color combination is the paint/orientation tag stamped on every occupied
//! cell of a piece. It carries no shape information, but mirroring a piece
//! mirrors its tag, so the algebra exposes an involutive [`ColorCombination::flip`].
//!
//! Byte layout: bits 0-3 hold the paint (1-15), bits 4-5 the handedness
//! (0 neutral, 1 left, 2 right). The from-single-layer value has paint 0 and
//! is the only combination with bit 6 set.

use std::fmt;

/// The value stored in one grid cell. Zero means empty.
pub type CellCode = u8;

/// Cell code of an unoccupied cell.
pub const EMPTY_CELL: CellCode = 0;

/// Marks a cell code as belonging to the upper slot of a dual-layer piece.
pub const UPPER_SLOT_BIT: CellCode = 0x80;

/// Orientation half of a color combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness {
    Neutral,
    Left,
    Right,
}

impl Handedness {
    const fn bits(self) -> u8 {
        match self {
            Self::Neutral => 0,
            Self::Left => 1,
            Self::Right => 2,
        }
    }

    /// The handedness seen in a mirror.
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Neutral => Self::Neutral,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// The pair of codes painted on a dual-layer piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCodes {
    pub lower: CellCode,
    pub upper: CellCode,
}

/// Opaque paint/orientation tag applied to occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorCombination(u8);

impl ColorCombination {
    const PAINT_MASK: u8 = 0x0F;
    const HAND_SHIFT: u8 = 4;
    const HAND_MASK: u8 = 0x30;

    pub const RED: Self = Self(1);
    pub const ORANGE: Self = Self(2);
    pub const YELLOW: Self = Self(3);
    pub const GREEN: Self = Self(4);
    pub const CYAN: Self = Self(5);
    pub const BLUE: Self = Self(6);
    pub const PURPLE: Self = Self(7);

    /// Requests the slot colors of the single-layer piece a dual-layer piece was raised from.
    pub const FROM_SINGLE_LAYER: Self = Self(0x40);

    /// Stand-in consulted by some dual-layer families when asked for [`Self::FROM_SINGLE_LAYER`].
    pub const SINGLE_LAYER_BASE: Self = Self(0x0F);

    /// Builds a combination from a paint (1-15) and a handedness.
    pub const fn new(paint: u8, handedness: Handedness) -> Option<Self> {
        if paint == 0 || paint > Self::PAINT_MASK {
            return None;
        }
        Some(Self(paint | (handedness.bits() << Self::HAND_SHIFT)))
    }

    /// Decodes a raw byte, rejecting bit patterns the algebra never produces.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if raw == Self::FROM_SINGLE_LAYER.0 {
            return Some(Self::FROM_SINGLE_LAYER);
        }
        let hand = (raw & Self::HAND_MASK) >> Self::HAND_SHIFT;
        let known_bits = Self::PAINT_MASK | Self::HAND_MASK;
        if raw & !known_bits != 0 || raw & Self::PAINT_MASK == 0 || hand == 3 {
            return None;
        }
        Some(Self(raw))
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn paint(self) -> u8 {
        self.0 & Self::PAINT_MASK
    }

    pub const fn handedness(self) -> Handedness {
        match (self.0 & Self::HAND_MASK) >> Self::HAND_SHIFT {
            1 => Handedness::Left,
            2 => Handedness::Right,
            _ => Handedness::Neutral,
        }
    }

    /// Returns the mirrored counterpart. Applying it twice yields `self`.
    pub const fn flip(self) -> Self {
        if self.0 == Self::FROM_SINGLE_LAYER.0 {
            return self;
        }
        let hand = self.handedness().mirrored();
        Self((self.0 & !Self::HAND_MASK) | (hand.bits() << Self::HAND_SHIFT))
    }

    /// Code painted on every cell of a single-layer piece.
    pub const fn cell_code(self) -> CellCode {
        self.0
    }

    /// Codes painted on the two slots of a dual-layer piece.
    pub const fn slot_codes(self) -> SlotCodes {
        SlotCodes {
            lower: self.0,
            upper: self.0 | UPPER_SLOT_BIT,
        }
    }

    /// Every combination the algebra can produce, in raw order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=u8::MAX).filter_map(Self::from_raw)
    }
}

impl Default for ColorCombination {
    fn default() -> Self {
        Self::RED
    }
}

impl fmt::Display for ColorCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::FROM_SINGLE_LAYER {
            return f.write_str("from-single-layer");
        }
        match self.handedness() {
            Handedness::Neutral => write!(f, "paint {}", self.paint()),
            Handedness::Left => write!(f, "paint {} (left)", self.paint()),
            Handedness::Right => write!(f, "paint {} (right)", self.paint()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_is_an_involution() {
        for color in ColorCombination::all() {
            assert_eq!(color.flip().flip(), color, "{color} did not flip back");
        }
    }

    #[test]
    fn test_flip_swaps_handedness_only() {
        let left = ColorCombination::new(3, Handedness::Left).unwrap();
        let right = ColorCombination::new(3, Handedness::Right).unwrap();
        assert_eq!(left.flip(), right);
        assert_eq!(right.flip(), left);
        assert_eq!(ColorCombination::BLUE.flip(), ColorCombination::BLUE);
        assert_eq!(
            ColorCombination::FROM_SINGLE_LAYER.flip(),
            ColorCombination::FROM_SINGLE_LAYER
        );
    }

    #[test]
    fn test_cell_codes_are_never_empty() {
        for color in ColorCombination::all() {
            assert_ne!(color.cell_code(), EMPTY_CELL);
            let slots = color.slot_codes();
            assert_ne!(slots.lower, EMPTY_CELL);
            assert_ne!(slots.upper, slots.lower);
        }
    }

    #[test]
    fn test_from_raw_rejects_unknown_bits() {
        assert_eq!(ColorCombination::from_raw(0), None);
        assert_eq!(ColorCombination::from_raw(0x30 | 1), None);
        assert_eq!(ColorCombination::from_raw(0x81), None);
        assert_eq!(ColorCombination::from_raw(0x21), ColorCombination::new(1, Handedness::Right));
        // 15 paints x 3 handedness values, plus from-single-layer
        assert_eq!(ColorCombination::all().count(), 46);
    }

    #[test]
    fn test_new_rejects_out_of_range_paint() {
        assert_eq!(ColorCombination::new(0, Handedness::Neutral), None);
        assert_eq!(ColorCombination::new(16, Handedness::Left), None);
    }
}
