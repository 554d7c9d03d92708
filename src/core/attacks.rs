// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Movement geometry for every piece kind, expressed as displacement tables. None of these tables know anything
//! about the board; clipping to the board edge and collision with other pieces happen in `movegen`.

use crate::core::{Color, PieceKind, Vector};

/// The eight squares surrounding a king.
pub const KING_STEPS: [Vector; 8] = [
    Vector::new(-1, 1),
    Vector::new(0, 1),
    Vector::new(1, 1),
    Vector::new(-1, 0),
    Vector::new(1, 0),
    Vector::new(-1, -1),
    Vector::new(0, -1),
    Vector::new(1, -1),
];

pub const KNIGHT_JUMPS: [Vector; 8] = [
    Vector::new(2, 1),
    Vector::new(2, -1),
    Vector::new(-2, 1),
    Vector::new(-2, -1),
    Vector::new(1, 2),
    Vector::new(-1, 2),
    Vector::new(1, -2),
    Vector::new(-1, -2),
];

pub const ROOK_RAYS: [Vector; 4] = [
    Vector::new(0, 1),
    Vector::new(-1, 0),
    Vector::new(1, 0),
    Vector::new(0, -1),
];

pub const BISHOP_RAYS: [Vector; 4] = [
    Vector::new(-1, 1),
    Vector::new(1, 1),
    Vector::new(-1, -1),
    Vector::new(1, -1),
];

// Same ordering as the king steps; a queen is a king that keeps walking.
pub const QUEEN_RAYS: [Vector; 8] = KING_STEPS;

/// Ray directions for a sliding piece kind. Empty for kinds that do not slide.
pub fn rays(kind: PieceKind) -> &'static [Vector] {
    match kind {
        PieceKind::Queen => &QUEEN_RAYS,
        PieceKind::Rook => &ROOK_RAYS,
        PieceKind::Bishop => &BISHOP_RAYS,
        PieceKind::King | PieceKind::Knight | PieceKind::Pawn => &[],
    }
}

/// The two diagonal-forward squares a pawn of the given color threatens.
pub fn pawn_attack_steps(color: Color) -> [Vector; 2] {
    let forward = color.forward();
    [
        Vector::new(1, 0) + forward,
        Vector::new(-1, 0) + forward,
    ]
}
