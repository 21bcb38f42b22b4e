//! Piece type definitions: shape classes, categories and the composite [`PieceType`].
//!
//! Categories are grouped per shape class, so a category value always names
//! its class and the class can never disagree with the family.

use std::fmt;

use crate::color::ColorCombination;

/// Number of discrete rotation states.
pub const ROTATION_COUNT: u8 = 4;

/// Top-level piece family. Decides which tier of the engine serves a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeClass {
    Tromino,
    Tetromino,
    Tetracube,
    Pentomino,
    Special,
}

impl ShapeClass {
    pub const ALL: [Self; 5] = [
        Self::Tromino,
        Self::Tetromino,
        Self::Tetracube,
        Self::Pentomino,
        Self::Special,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Tromino => "tromino",
            Self::Tetromino => "tetromino",
            Self::Tetracube => "tetracube",
            Self::Pentomino => "pentomino",
            Self::Special => "special",
        }
    }
}

/// Three-cell planar pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tromino {
    Line,
    Corner,
}

impl Tromino {
    pub const ALL: [Self; 2] = [Self::Line, Self::Corner];
}

/// Four-cell planar pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tetromino {
    Line,
    Square,
    T,
    S,
    Z,
    Gamma,
    Gun,
}

impl Tetromino {
    pub const ALL: [Self; 7] = [
        Self::Line,
        Self::Square,
        Self::T,
        Self::S,
        Self::Z,
        Self::Gamma,
        Self::Gun,
    ];
}

/// Four-cube pieces spread over two layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tetracube {
    L,
    Branch,
    Screw,
    Corner,
}

impl Tetracube {
    pub const ALL: [Self; 4] = [Self::L, Self::Branch, Self::Screw, Self::Corner];
}

/// Five-cell planar pieces, including the one-sided mirror variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Pentomino {
    Line,
    L,
    LReverse,
    N,
    NReverse,
    P,
    PReverse,
    Y,
    YReverse,
    Z,
    ZReverse,
    F,
    FReverse,
    T,
    U,
    V,
    W,
    X,
}

impl Pentomino {
    pub const ALL: [Self; 18] = [
        Self::Line,
        Self::L,
        Self::LReverse,
        Self::N,
        Self::NReverse,
        Self::P,
        Self::PReverse,
        Self::Y,
        Self::YReverse,
        Self::Z,
        Self::ZReverse,
        Self::F,
        Self::FReverse,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
    ];
}

/// Non-polyomino pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Special {
    Flash,
    Single,
    Galaxy,
    PushDown,
    Arbitrary,
}

impl Special {
    pub const ALL: [Self; 5] = [
        Self::Flash,
        Self::Single,
        Self::Galaxy,
        Self::PushDown,
        Self::Arbitrary,
    ];
}

/// A shape family within its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Tromino(Tromino),
    Tetromino(Tetromino),
    Tetracube(Tetracube),
    Pentomino(Pentomino),
    Special(Special),
}

impl Category {
    pub const fn class(self) -> ShapeClass {
        match self {
            Self::Tromino(_) => ShapeClass::Tromino,
            Self::Tetromino(_) => ShapeClass::Tetromino,
            Self::Tetracube(_) => ShapeClass::Tetracube,
            Self::Pentomino(_) => ShapeClass::Pentomino,
            Self::Special(_) => ShapeClass::Special,
        }
    }

    /// Position of the category inside its class, as used by the codec.
    pub const fn index(self) -> u8 {
        match self {
            Self::Tromino(c) => c as u8,
            Self::Tetromino(c) => c as u8,
            Self::Tetracube(c) => c as u8,
            Self::Pentomino(c) => c as u8,
            Self::Special(c) => c as u8,
        }
    }

    /// Inverse of [`Category::index`].
    pub fn from_index(class: ShapeClass, index: u8) -> Option<Self> {
        let index = usize::from(index);
        match class {
            ShapeClass::Tromino => Tromino::ALL.get(index).map(|&c| Self::Tromino(c)),
            ShapeClass::Tetromino => Tetromino::ALL.get(index).map(|&c| Self::Tetromino(c)),
            ShapeClass::Tetracube => Tetracube::ALL.get(index).map(|&c| Self::Tetracube(c)),
            ShapeClass::Pentomino => Pentomino::ALL.get(index).map(|&c| Self::Pentomino(c)),
            ShapeClass::Special => Special::ALL.get(index).map(|&c| Self::Special(c)),
        }
    }

    /// Every category of every class, class by class.
    pub fn all() -> impl Iterator<Item = Self> {
        ShapeClass::ALL.into_iter().flat_map(Self::of_class)
    }

    /// Every category of one class, in index order.
    pub fn of_class(class: ShapeClass) -> impl Iterator<Item = Self> {
        (0..=u8::MAX).map_while(move |index| Self::from_index(class, index))
    }

    /// Finds a category by its display name within a class (case-insensitive).
    pub fn from_name(class: ShapeClass, name: &str) -> Option<Self> {
        Self::of_class(class).find(|category| category.name().eq_ignore_ascii_case(name))
    }

    /// Number of marked-cell placements this family is authored with.
    pub const fn subcategory_count(self) -> u8 {
        match self {
            Self::Tetracube(Tetracube::L) | Self::Tetracube(Tetracube::Branch) => 2,
            Self::Tetracube(Tetracube::Corner) => 4,
            Self::Special(Special::Galaxy) => 3,
            _ => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Tromino(Tromino::Line) => "line",
            Self::Tromino(Tromino::Corner) => "corner",
            Self::Tetromino(c) => match c {
                Tetromino::Line => "line",
                Tetromino::Square => "square",
                Tetromino::T => "t",
                Tetromino::S => "s",
                Tetromino::Z => "z",
                Tetromino::Gamma => "gamma",
                Tetromino::Gun => "gun",
            },
            Self::Tetracube(c) => match c {
                Tetracube::L => "l",
                Tetracube::Branch => "branch",
                Tetracube::Screw => "screw",
                Tetracube::Corner => "corner",
            },
            Self::Pentomino(c) => match c {
                Pentomino::Line => "line",
                Pentomino::L => "l",
                Pentomino::LReverse => "l-reverse",
                Pentomino::N => "n",
                Pentomino::NReverse => "n-reverse",
                Pentomino::P => "p",
                Pentomino::PReverse => "p-reverse",
                Pentomino::Y => "y",
                Pentomino::YReverse => "y-reverse",
                Pentomino::Z => "z",
                Pentomino::ZReverse => "z-reverse",
                Pentomino::F => "f",
                Pentomino::FReverse => "f-reverse",
                Pentomino::T => "t",
                Pentomino::U => "u",
                Pentomino::V => "v",
                Pentomino::W => "w",
                Pentomino::X => "x",
            },
            Self::Special(c) => match c {
                Special::Flash => "flash",
                Special::Single => "single",
                Special::Galaxy => "galaxy",
                Special::PushDown => "push-down",
                Special::Arbitrary => "arbitrary",
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.class().name(), self.name())
    }
}

/// The full identity of a piece: family, marked-cell placement and paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceType {
    pub category: Category,
    pub subcategory: u8,
    pub color: ColorCombination,
}

impl PieceType {
    pub const fn new(category: Category, subcategory: u8, color: ColorCombination) -> Self {
        Self {
            category,
            subcategory,
            color,
        }
    }

    /// A piece of a single-placement family.
    pub const fn plain(category: Category, color: ColorCombination) -> Self {
        Self::new(category, 0, color)
    }

    pub const fn shape_class(&self) -> ShapeClass {
        self.category.class()
    }

    /// True if the subcategory is one the family is authored with.
    pub const fn has_known_subcategory(&self) -> bool {
        self.subcategory < self.category.subcategory_count()
    }

    /// Every authored (category, subcategory) pair with the given paint.
    pub fn catalog(color: ColorCombination) -> impl Iterator<Item = Self> {
        Category::all().flat_map(move |category| {
            (0..category.subcategory_count()).map(move |sub| Self::new(category, sub, color))
        })
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} [{}]", self.category, self.subcategory, self.color)
    }
}
