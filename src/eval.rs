// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Evaluation functions that a game session can install. The rules engine never calls these itself.
//!
//! All evaluation functions score from White's point of view: larger is better for White, smaller is better for
//! Black.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    board::Board,
    core::{Color, PieceKind},
};

const QUEEN_WEIGHT: i32 = 20;
const ROOK_WEIGHT: i32 = 5;
const BISHOP_WEIGHT: i32 = 4;
const KNIGHT_WEIGHT: i32 = 3;
const PAWN_WEIGHT: i32 = 2;
const KING_WEIGHT: i32 = 0;

/// The signature of an installable evaluation function.
pub type EvalFn = fn(&Board) -> i32;

fn weight(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Queen => QUEEN_WEIGHT,
        PieceKind::Rook => ROOK_WEIGHT,
        PieceKind::Bishop => BISHOP_WEIGHT,
        PieceKind::Knight => KNIGHT_WEIGHT,
        PieceKind::Pawn => PAWN_WEIGHT,
        PieceKind::King => KING_WEIGHT,
    }
}

/// Material balance: the sum of White's piece weights minus the sum of Black's.
pub fn material(board: &Board) -> i32 {
    board
        .pieces()
        .map(|piece| match piece.color {
            Color::White => weight(piece.kind),
            Color::Black => -weight(piece.kind),
        })
        .sum()
}

/// Scores every board as dead even.
pub fn neutral(_board: &Board) -> i32 {
    0
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluatorParseError {
    #[error("unknown evaluator: {0} (expected one of: material, neutral)")]
    Unknown(String),
}

/// Names the evaluation functions available for installation, so that they can be selected from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Evaluator {
    Material,
    Neutral,
}

impl Evaluator {
    pub fn as_fn(self) -> EvalFn {
        match self {
            Evaluator::Material => material,
            Evaluator::Neutral => neutral,
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::Material
    }
}

impl FromStr for Evaluator {
    type Err = EvaluatorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "material" => Ok(Evaluator::Material),
            "neutral" => Ok(Evaluator::Neutral),
            other => Err(EvaluatorParseError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluator::Material => write!(f, "material"),
            Evaluator::Neutral => write!(f, "neutral"),
        }
    }
}
