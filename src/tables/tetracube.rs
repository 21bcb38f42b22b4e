//! Two-layer four-cube families.
//!
//! Layer 0 carries the planar footprint (`a`), layer 1 the raised cube (`b`).
//! The subcategory picks which end or side of the footprint the raised cube
//! sits over.

use super::Authored;
use crate::shape::Tetracube;

pub(super) fn tetracube(category: Tetracube, subcategory: u8) -> Option<&'static [Authored; 4]> {
    match (category, subcategory) {
        (Tetracube::L, 0) => Some(&L_LEFT),
        (Tetracube::L, 1) => Some(&L_RIGHT),
        (Tetracube::Branch, 0) => Some(&BRANCH_LEFT),
        (Tetracube::Branch, 1) => Some(&BRANCH_RIGHT),
        (Tetracube::Screw, 0) => Some(&SCREW),
        (Tetracube::Corner, 0) => Some(&CORNER_UP_END),
        (Tetracube::Corner, 1) => Some(&CORNER_UP_SIDE),
        (Tetracube::Corner, 2) => Some(&CORNER_DOWN_SIDE),
        (Tetracube::Corner, 3) => Some(&CORNER_DOWN_END),
        _ => None,
    }
}

const L_LEFT: [Authored; 4] = [
    &[&["...", "aaa", "..."], &["...", "b..", "..."]],
    &[&[".a.", ".a.", ".a."], &[".b.", "...", "..."]],
    &[&["...", "aaa", "..."], &["...", "..b", "..."]],
    &[&[".a.", ".a.", ".a."], &["...", "...", ".b."]],
];

const L_RIGHT: [Authored; 4] = [
    &[&["...", "aaa", "..."], &["...", "..b", "..."]],
    &[&[".a.", ".a.", ".a."], &["...", "...", ".b."]],
    &[&["...", "aaa", "..."], &["...", "b..", "..."]],
    &[&[".a.", ".a.", ".a."], &[".b.", "...", "..."]],
];

const BRANCH_LEFT: [Authored; 4] = [
    &[&["...", "aa.", "..."], &[".b.", ".b.", "..."]],
    &[&[".a.", ".a.", "..."], &["...", ".bb", "..."]],
    &[&["...", ".aa", "..."], &["...", ".b.", ".b."]],
    &[&["...", ".a.", ".a."], &["...", "bb.", "..."]],
];

const BRANCH_RIGHT: [Authored; 4] = [
    &[&["...", ".aa", "..."], &[".b.", ".b.", "..."]],
    &[&["...", ".a.", ".a."], &["...", ".bb", "..."]],
    &[&["...", "aa.", "..."], &["...", ".b.", ".b."]],
    &[&[".a.", ".a.", "..."], &["...", "bb.", "..."]],
];

const SCREW: [Authored; 4] = [
    &[&["...", "aa.", ".a."], &["...", ".b.", "..."]],
    &[&[".a.", "aa.", "..."], &["...", ".b.", "..."]],
    &[&[".a.", ".aa", "..."], &["...", ".b.", "..."]],
    &[&["...", ".aa", ".a."], &["...", ".b.", "..."]],
];

const CORNER_UP_END: [Authored; 4] = [
    &[&[".a.", ".aa", "..."], &[".b.", "...", "..."]],
    &[&["...", ".aa", ".a."], &["...", "..b", "..."]],
    &[&["...", "aa.", ".a."], &["...", "...", ".b."]],
    &[&[".a.", "aa.", "..."], &["...", "b..", "..."]],
];

const CORNER_UP_SIDE: [Authored; 4] = [
    &[&[".a.", ".aa", "..."], &["...", "..b", "..."]],
    &[&["...", ".aa", ".a."], &["...", "...", ".b."]],
    &[&["...", "aa.", ".a."], &["...", "b..", "..."]],
    &[&[".a.", "aa.", "..."], &[".b.", "...", "..."]],
];

const CORNER_DOWN_SIDE: [Authored; 4] = [
    &[&["...", ".aa", ".a."], &["...", "..b", "..."]],
    &[&["...", "aa.", ".a."], &["...", "...", ".b."]],
    &[&[".a.", "aa.", "..."], &["...", "b..", "..."]],
    &[&[".a.", ".aa", "..."], &[".b.", "...", "..."]],
];

const CORNER_DOWN_END: [Authored; 4] = [
    &[&["...", ".aa", ".a."], &["...", "...", ".b."]],
    &[&["...", "aa.", ".a."], &["...", "b..", "..."]],
    &[&[".a.", "aa.", "..."], &[".b.", "...", "..."]],
    &[&[".a.", ".aa", "..."], &["...", "..b", "..."]],
];
