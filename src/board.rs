// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The 8x8 board and its squares.
//!
//! Squares own their pieces by value, so cloning a [`Board`] duplicates every square and every piece. A probe board
//! produced this way shares nothing with the board it was cloned from.

use std::fmt;

use crate::{
    core::{Color, Coordinate, Piece, PieceKind},
    error::RulesError,
};

/// One of the 64 cells of the board, holding at most one piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Square {
    coord: Coordinate,
    piece: Option<Piece>,
}

impl Square {
    const fn new(coord: Coordinate) -> Square {
        Square { coord, piece: None }
    }

    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    pub fn x(&self) -> i32 {
        self.coord.x
    }

    pub fn y(&self) -> i32 {
        self.coord.y
    }

    /// Light squares are those whose file and rank have the same parity.
    pub fn is_light(&self) -> bool {
        self.coord.x % 2 == self.coord.y % 2
    }

    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}

/// The chessboard: a fixed 8x8 grid of squares, indexed by file and then rank.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces on it.
    pub fn new() -> Board {
        let mut squares = [[Square::new(Coordinate::new(0, 0)); 8]; 8];
        for (x, file) in squares.iter_mut().enumerate() {
            for (y, square) in file.iter_mut().enumerate() {
                *square = Square::new(Coordinate::new(x as i32, y as i32));
            }
        }

        Board { squares }
    }

    /// Returns the square at the given file and rank.
    pub fn get(&self, x: i32, y: i32) -> Result<&Square, RulesError> {
        if !Coordinate::new(x, y).is_inside() {
            return Err(RulesError::OutOfBounds { x, y });
        }

        Ok(&self.squares[x as usize][y as usize])
    }

    fn get_mut(&mut self, coord: Coordinate) -> Result<&mut Square, RulesError> {
        if !coord.is_inside() {
            return Err(RulesError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            });
        }

        Ok(&mut self.squares[coord.x as usize][coord.y as usize])
    }

    /// Returns the piece at the given coordinate, or None if the square is empty or the coordinate is off the board.
    pub fn piece_at(&self, coord: Coordinate) -> Option<Piece> {
        self.get(coord.x, coord.y)
            .ok()
            .and_then(|square| square.piece())
    }

    /// Places a piece on the square at `coord`, replacing (and returning) any piece already standing there. The
    /// placed piece's coordinate is updated to match its new square.
    pub fn place(&mut self, coord: Coordinate, piece: Piece) -> Result<Option<Piece>, RulesError> {
        let square = self.get_mut(coord)?;
        let placed = Piece { coord, ..piece };
        Ok(square.piece.replace(placed))
    }

    /// Removes and returns the piece at `coord`, leaving the square empty.
    pub fn take(&mut self, coord: Coordinate) -> Result<Option<Piece>, RulesError> {
        let square = self.get_mut(coord)?;
        Ok(square.piece.take())
    }

    /// Removes every piece from the board.
    pub fn clear(&mut self) {
        for square in self.squares.iter_mut().flatten() {
            square.piece = None;
        }
    }

    /// Sets up the standard starting position, White on ranks 1 and 2 and Black on ranks 7 and 8. Any pieces
    /// already on the board are removed first.
    pub fn reset(&mut self) {
        self.clear();
        for color in [Color::White, Color::Black] {
            for x in 0..8 {
                let kind = match x {
                    0 | 7 => PieceKind::Rook,
                    1 | 6 => PieceKind::Knight,
                    2 | 5 => PieceKind::Bishop,
                    3 => PieceKind::Queen,
                    _ => PieceKind::King,
                };

                let back = Coordinate::new(x, color.back_rank());
                let pawn = Coordinate::new(x, color.pawn_rank());
                self.squares[x as usize][back.y as usize].piece = Some(Piece::new(kind, color, back));
                self.squares[x as usize][pawn.y as usize].piece =
                    Some(Piece::new(PieceKind::Pawn, color, pawn));
            }
        }
    }

    /// Iterates over all 64 squares, file by file.
    pub fn squares(&self) -> impl Iterator<Item = &Square> + '_ {
        self.squares.iter().flatten()
    }

    /// Iterates over every piece on the board.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares().filter_map(|square| square.piece())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..8).rev() {
            for x in 0..8 {
                match self.squares[x][y].piece {
                    Some(piece) => write!(f, " {} ", piece)?,
                    None => write!(f, " . ")?,
                }
            }

            writeln!(f, "| {}", y + 1)?;
        }

        writeln!(f, "{}", "---".repeat(8))?;
        for x in 0..8u8 {
            write!(f, " {} ", (b'a' + x) as char)?;
        }

        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}
