// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Coordinate;

/// A move, recognized by the rookery rules engine: a piece travels from one coordinate to another. Moves carry no
/// record of what they capture and no special-move flags; the board at the time the move is applied determines its
/// effect.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    from: Coordinate,
    to: Coordinate,
}

impl Move {
    pub const fn new(from: Coordinate, to: Coordinate) -> Move {
        Move { from, to }
    }

    /// Returns the source coordinate of this move.
    pub const fn from(self) -> Coordinate {
        self.from
    }

    /// Returns the destination coordinate of this move.
    pub const fn to(self) -> Coordinate {
        self.to
    }

    /// Returns whether or not both endpoints of this move lie on the board.
    pub const fn is_inside(self) -> bool {
        self.from.is_inside() && self.to.is_inside()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
