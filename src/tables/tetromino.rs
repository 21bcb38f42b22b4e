//! Four-cell planar families.

use super::Authored;
use crate::shape::Tetromino;

pub(super) fn tetromino(category: Tetromino, subcategory: u8) -> Option<&'static [Authored; 4]> {
    if subcategory != 0 {
        return None;
    }
    Some(match category {
        Tetromino::Line => &LINE,
        Tetromino::Square => &SQUARE,
        Tetromino::T => &T,
        Tetromino::S => &S,
        Tetromino::Z => &Z,
        Tetromino::Gamma => &GAMMA,
        Tetromino::Gun => &GUN,
    })
}

const LINE_FLAT: Authored = &[&["....", "####", "....", "...."]];
const LINE_UPRIGHT: Authored = &[&["..#.", "..#.", "..#.", "..#."]];
const LINE: [Authored; 4] = [LINE_FLAT, LINE_UPRIGHT, LINE_FLAT, LINE_UPRIGHT];

const SQUARE: [Authored; 4] = [&[&["##", "##"]]; 4];

const T: [Authored; 4] = [
    &[&[".#.", "###", "..."]],
    &[&[".#.", ".##", ".#."]],
    &[&["...", "###", ".#."]],
    &[&[".#.", "##.", ".#."]],
];

const S_FLAT: Authored = &[&[".##", "##.", "..."]];
const S_UPRIGHT: Authored = &[&[".#.", ".##", "..#"]];
const S: [Authored; 4] = [S_FLAT, S_UPRIGHT, S_FLAT, S_UPRIGHT];

const Z_FLAT: Authored = &[&["##.", ".##", "..."]];
const Z_UPRIGHT: Authored = &[&["..#", ".##", ".#."]];
const Z: [Authored; 4] = [Z_FLAT, Z_UPRIGHT, Z_FLAT, Z_UPRIGHT];

const GAMMA: [Authored; 4] = [
    &[&["#..", "###", "..."]],
    &[&[".##", ".#.", ".#."]],
    &[&["...", "###", "..#"]],
    &[&[".#.", ".#.", "##."]],
];

const GUN: [Authored; 4] = [
    &[&["...", "###", "#.."]],
    &[&["##.", ".#.", ".#."]],
    &[&["..#", "###", "..."]],
    &[&[".#.", ".#.", ".##"]],
];
