// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

use crate::core::{Color, Move};

/// Errors raised by board access, move application and king-safety queries. Every one of these indicates a bug in
/// the caller or a corrupted position; none of them are transient.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("coordinate out of bounds: ({x}, {y})")]
    OutOfBounds { x: i32, y: i32 },
    #[error("illegal square in move {0}: off the board or no piece to move")]
    IllegalSquare(Move),
    #[error("no {0} king on the board")]
    MissingPieceInvariant(Color),
    #[error("move {0} is not legal in this position")]
    IllegalMove(Move),
}
