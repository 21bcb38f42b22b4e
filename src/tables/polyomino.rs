//! Three- and five-cell planar families.
//!
//! One-sided pentomino pairs are authored so that the mirror of one member
//! is the other member at some rotation, which is what the flip rules rely on.

use super::Authored;
use crate::shape::{Pentomino, Tromino};

pub(super) fn tromino(category: Tromino, subcategory: u8) -> Option<&'static [Authored; 4]> {
    if subcategory != 0 {
        return None;
    }
    Some(match category {
        Tromino::Line => &TROMINO_LINE,
        Tromino::Corner => &TROMINO_CORNER,
    })
}

pub(super) fn pentomino(category: Pentomino, subcategory: u8) -> Option<&'static [Authored; 4]> {
    if subcategory != 0 {
        return None;
    }
    Some(match category {
        Pentomino::Line => &LINE,
        Pentomino::L => &L,
        Pentomino::LReverse => &L_REVERSE,
        Pentomino::N => &N,
        Pentomino::NReverse => &N_REVERSE,
        Pentomino::P => &P,
        Pentomino::PReverse => &P_REVERSE,
        Pentomino::Y => &Y,
        Pentomino::YReverse => &Y_REVERSE,
        Pentomino::Z => &Z,
        Pentomino::ZReverse => &Z_REVERSE,
        Pentomino::F => &F,
        Pentomino::FReverse => &F_REVERSE,
        Pentomino::T => &T,
        Pentomino::U => &U,
        Pentomino::V => &V,
        Pentomino::W => &W,
        Pentomino::X => &X,
    })
}

// trominoes

const TROMINO_LINE_FLAT: Authored = &[&["...", "###", "..."]];
const TROMINO_LINE_UPRIGHT: Authored = &[&[".#.", ".#.", ".#."]];
const TROMINO_LINE: [Authored; 4] = [
    TROMINO_LINE_FLAT,
    TROMINO_LINE_UPRIGHT,
    TROMINO_LINE_FLAT,
    TROMINO_LINE_UPRIGHT,
];

const TROMINO_CORNER: [Authored; 4] = [
    &[&["#.", "##"]],
    &[&["##", "#."]],
    &[&["##", ".#"]],
    &[&[".#", "##"]],
];

// pentominoes

const LINE_FLAT: Authored = &[&[".....", ".....", "#####", ".....", "....."]];
const LINE_UPRIGHT: Authored = &[&["..#..", "..#..", "..#..", "..#..", "..#.."]];
const LINE: [Authored; 4] = [LINE_FLAT, LINE_UPRIGHT, LINE_FLAT, LINE_UPRIGHT];

const L: [Authored; 4] = [
    &[&["#...", "####", "....", "...."]],
    &[&["..##", "..#.", "..#.", "..#."]],
    &[&["....", "....", "####", "...#"]],
    &[&[".#..", ".#..", ".#..", "##.."]],
];

const L_REVERSE: [Authored; 4] = [
    &[&["...#", "####", "....", "...."]],
    &[&["..#.", "..#.", "..#.", "..##"]],
    &[&["....", "....", "####", "#..."]],
    &[&["##..", ".#..", ".#..", ".#.."]],
];

const N: [Authored; 4] = [
    &[&["##..", ".###", "....", "...."]],
    &[&["...#", "..##", "..#.", "..#."]],
    &[&["....", "....", "###.", "..##"]],
    &[&[".#..", ".#..", "##..", "#..."]],
];

const N_REVERSE: [Authored; 4] = [
    &[&["..##", "###.", "....", "...."]],
    &[&["..#.", "..#.", "..##", "...#"]],
    &[&["....", "....", ".###", "##.."]],
    &[&["#...", "##..", ".#..", ".#.."]],
];

const P: [Authored; 4] = [
    &[&[".##", ".##", ".#."]],
    &[&["...", "###", ".##"]],
    &[&[".#.", "##.", "##."]],
    &[&["##.", "###", "..."]],
];

const P_REVERSE: [Authored; 4] = [
    &[&["##.", "##.", ".#."]],
    &[&[".##", "###", "..."]],
    &[&[".#.", ".##", ".##"]],
    &[&["...", "###", "##."]],
];

const Y: [Authored; 4] = [
    &[&[".#..", "####", "....", "...."]],
    &[&["..#.", "..##", "..#.", "..#."]],
    &[&["....", "....", "####", "..#."]],
    &[&[".#..", ".#..", "##..", ".#.."]],
];

const Y_REVERSE: [Authored; 4] = [
    &[&["..#.", "####", "....", "...."]],
    &[&["..#.", "..#.", "..##", "..#."]],
    &[&["....", "....", "####", ".#.."]],
    &[&[".#..", "##..", ".#..", ".#.."]],
];

const Z: [Authored; 4] = [
    &[&["##.", ".#.", ".##"]],
    &[&["..#", "###", "#.."]],
    &[&["##.", ".#.", ".##"]],
    &[&["..#", "###", "#.."]],
];

const Z_REVERSE: [Authored; 4] = [
    &[&[".##", ".#.", "##."]],
    &[&["#..", "###", "..#"]],
    &[&[".##", ".#.", "##."]],
    &[&["#..", "###", "..#"]],
];

const F: [Authored; 4] = [
    &[&[".##", "##.", ".#."]],
    &[&[".#.", "###", "..#"]],
    &[&[".#.", ".##", "##."]],
    &[&["#..", "###", ".#."]],
];

const F_REVERSE: [Authored; 4] = [
    &[&["##.", ".##", ".#."]],
    &[&["..#", "###", ".#."]],
    &[&[".#.", "##.", ".##"]],
    &[&[".#.", "###", "#.."]],
];

const T: [Authored; 4] = [
    &[&["###", ".#.", ".#."]],
    &[&["..#", "###", "..#"]],
    &[&[".#.", ".#.", "###"]],
    &[&["#..", "###", "#.."]],
];

const U: [Authored; 4] = [
    &[&["#.#", "###", "..."]],
    &[&[".##", ".#.", ".##"]],
    &[&["...", "###", "#.#"]],
    &[&["##.", ".#.", "##."]],
];

const V: [Authored; 4] = [
    &[&["#..", "#..", "###"]],
    &[&["###", "#..", "#.."]],
    &[&["###", "..#", "..#"]],
    &[&["..#", "..#", "###"]],
];

const W: [Authored; 4] = [
    &[&["#..", "##.", ".##"]],
    &[&[".##", "##.", "#.."]],
    &[&["##.", ".##", "..#"]],
    &[&["..#", ".##", "##."]],
];

const X: [Authored; 4] = [&[&[".#.", "###", ".#."]]; 4];
