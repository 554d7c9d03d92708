// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Module `core` contains core datatypes and data structures used pervasively throughout `rookery`.

pub mod attacks;
mod coord;
mod coordset;
mod r#move;
mod types;

pub use coord::{is_inside, CoordParseError, Coordinate, Vector};
pub use coordset::{CoordSet, CoordSetIterator};
pub use r#move::Move;
pub use types::{colors, piece_kinds, Color, Piece, PieceKind, PieceParseError};
