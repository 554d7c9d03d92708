// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{fmt, ops, str::FromStr};

use derive_more::{Add, From, Neg};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordParseError {
    #[error("expected two characters, got {0:?}")]
    InvalidLength(String),
    #[error("invalid file char: {0}")]
    InvalidFile(char),
    #[error("invalid rank char: {0}")]
    InvalidRank(char),
}

/// Returns whether or not the given file and rank pair lies on the board.
pub const fn is_inside(x: i32, y: i32) -> bool {
    x >= 0 && x <= 7 && y >= 0 && y <= 7
}

/// A position on the chessboard, as a file (`x`) and rank (`y`) pair. A coordinate is allowed to fall off of the
/// board while it is being computed; [`Coordinate::is_inside`] tells whether it names one of the 64 squares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, From, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Coordinate {
        Coordinate { x, y }
    }

    pub const fn is_inside(self) -> bool {
        is_inside(self.x, self.y)
    }

    /// Index of this coordinate into a rank-major 64-entry table. Only meaningful for coordinates on the board.
    pub(crate) const fn index(self) -> u32 {
        (self.y * 8 + self.x) as u32
    }

    pub(crate) const fn from_index(index: u32) -> Coordinate {
        Coordinate::new((index % 8) as i32, (index / 8) as i32)
    }
}

impl ops::Add<Vector> for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Vector) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_inside() {
            return write!(f, "({}, {})", self.x, self.y);
        }

        let file = (b'a' + self.x as u8) as char;
        let rank = (b'1' + self.y as u8) as char;
        write!(f, "{}{}", file, rank)
    }
}

impl FromStr for Coordinate {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<_> = s.chars().collect();
        if chars.len() != 2 {
            return Err(CoordParseError::InvalidLength(s.to_string()));
        }

        let x = match chars[0] {
            c @ 'a'..='h' => c as i32 - 'a' as i32,
            c => return Err(CoordParseError::InvalidFile(c)),
        };
        let y = match chars[1] {
            c @ '1'..='8' => c as i32 - '1' as i32,
            c => return Err(CoordParseError::InvalidRank(c)),
        };

        Ok(Coordinate::new(x, y))
    }
}

/// A displacement between two coordinates, used for piece geometry tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Add, Neg, From, Serialize, Deserialize)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const fn new(x: i32, y: i32) -> Vector {
        Vector { x, y }
    }
}
