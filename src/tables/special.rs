//! Non-polyomino families. Cells need not be connected.

use super::Authored;
use crate::shape::Special;

pub(super) fn special(category: Special, subcategory: u8) -> Option<&'static [Authored; 4]> {
    match (category, subcategory) {
        (Special::Flash, 0) => Some(&FLASH),
        (Special::Single, 0) => Some(&SINGLE),
        (Special::Galaxy, 0) => Some(&GALAXY_RING),
        (Special::Galaxy, 1) => Some(&GALAXY_SPIRAL),
        (Special::Galaxy, 2) => Some(&GALAXY_ARC),
        (Special::PushDown, 0) => Some(&PUSH_DOWN),
        (Special::Arbitrary, 0) => Some(&ARBITRARY),
        _ => None,
    }
}

const FLASH_FLAT: Authored = &[&["#..", ".#.", "..#"]];
const FLASH_UPRIGHT: Authored = &[&["..#", ".#.", "#.."]];
const FLASH: [Authored; 4] = [FLASH_FLAT, FLASH_UPRIGHT, FLASH_FLAT, FLASH_UPRIGHT];

const SINGLE: [Authored; 4] = [&[&["#"]]; 4];

const GALAXY_RING: [Authored; 4] = [
    &[&["#.#", "...", "#.."]],
    &[&["#.#", "...", "..#"]],
    &[&["..#", "...", "#.#"]],
    &[&["#..", "...", "#.#"]],
];

const GALAXY_SPIRAL: [Authored; 4] = [
    &[&["#..", "..#", ".#."]],
    &[&["..#", "#..", ".#."]],
    &[&[".#.", "#..", "..#"]],
    &[&[".#.", "..#", "#.."]],
];

const GALAXY_ARC: [Authored; 4] = [
    &[&[".#.", "#.#", "..."]],
    &[&[".#.", "..#", ".#."]],
    &[&["...", "#.#", ".#."]],
    &[&[".#.", "#..", ".#."]],
];

const PUSH_DOWN_FLAT: Authored = &[&["...", "#.#", "..."]];
const PUSH_DOWN_UPRIGHT: Authored = &[&[".#.", "...", ".#."]];
const PUSH_DOWN: [Authored; 4] = [
    PUSH_DOWN_FLAT,
    PUSH_DOWN_UPRIGHT,
    PUSH_DOWN_FLAT,
    PUSH_DOWN_UPRIGHT,
];

const ARBITRARY: [Authored; 4] = [
    &[&["#..", "..#", "#.."]],
    &[&["#.#", "...", ".#."]],
    &[&["..#", "#..", "..#"]],
    &[&[".#.", "...", "#.#"]],
];
