// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt::{self, Write};

use thiserror::Error;

use crate::{board::Board, core::*, error::RulesError, movegen};

/// A position: a board and the side whose turn it is. Applying a move and ending the turn are separate steps, so a
/// caller can apply a move, inspect the result, and only then hand the turn over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: Board,
    /// Color whose turn it is to move.
    side_to_move: Color,
}

impl Position {
    /// Creates a position with an empty board and White to move.
    pub fn new() -> Position {
        Position {
            board: Board::new(),
            side_to_move: Color::White,
        }
    }

    pub fn from_start_position() -> Position {
        let mut pos = Position::new();
        pos.board.reset();
        pos
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Hands the turn to the other side.
    pub fn end_turn(&mut self) {
        self.side_to_move = self.side_to_move.toggle();
    }

    /// Relocates the piece at the move's source to its destination, capturing whatever stood there. Returns the
    /// captured piece, if any. The side to move is left unchanged.
    pub fn apply_move(&mut self, mov: Move) -> Result<Option<Piece>, RulesError> {
        if !mov.is_inside() {
            return Err(RulesError::IllegalSquare(mov));
        }

        let moving = self
            .board
            .take(mov.from())?
            .ok_or(RulesError::IllegalSquare(mov))?;
        let captured = self.board.place(mov.to(), moving)?;
        tracing::trace!(%mov, piece = %moving, captured = ?captured.map(|p| p.as_char()), "applied move");
        Ok(captured)
    }

    /// Returns every piece belonging to `side`.
    pub fn pieces_of(&self, side: Color) -> Vec<Piece> {
        self.board
            .pieces()
            .filter(|piece| piece.color == side)
            .collect()
    }

    /// Returns the union of the attack sets of every piece belonging to `by`.
    pub fn threatened_squares(&self, by: Color) -> CoordSet {
        self.pieces_of(by)
            .iter()
            .fold(CoordSet::empty(), |set, piece| {
                set | movegen::attack_set(piece, &self.board)
            })
    }

    /// Returns the coordinate of `side`'s king.
    pub fn king(&self, side: Color) -> Result<Coordinate, RulesError> {
        self.board
            .pieces()
            .find(|piece| piece.color == side && piece.kind == PieceKind::King)
            .map(|king| king.coord)
            .ok_or(RulesError::MissingPieceInvariant(side))
    }

    /// Returns true if `side`'s king does not stand on a square threatened by the opponent.
    pub fn is_king_safe(&self, side: Color) -> Result<bool, RulesError> {
        let king = self.king(side)?;
        Ok(!self.threatened_squares(side.toggle()).contains(king))
    }

    pub fn is_check(&self, side: Color) -> Result<bool, RulesError> {
        self.is_king_safe(side).map(|safe| !safe)
    }

    /// Legality test for a move already known to be pseudo-legal for `side`: the move is applied to a clone of
    /// this position, and the clone's king safety decides.
    fn is_safe_for(&self, side: Color, mov: Move) -> Result<bool, RulesError> {
        // The clone is naive and simple, but correct. Make/unmake would avoid the 64-square copy per probe.
        let mut probe = self.clone();
        probe.apply_move(mov)?;
        probe.is_king_safe(side)
    }

    /// Returns every legal move for `side`: the pseudo-legal moves of each of its pieces that do not leave its own
    /// king on a threatened square.
    pub fn legal_moves(&self, side: Color) -> Result<Vec<Move>, RulesError> {
        let _span = tracing::debug_span!("legal_moves", %side).entered();
        self.king(side)?;
        let mut candidates = Vec::new();
        movegen::generate_moves(side, &self.board, &mut candidates);

        let mut legal = Vec::with_capacity(candidates.len());
        for &mov in &candidates {
            if self.is_safe_for(side, mov)? {
                legal.push(mov);
            } else {
                tracing::trace!(%mov, "rejected: leaves king threatened");
            }
        }

        tracing::debug!(
            candidates = candidates.len(),
            legal = legal.len(),
            "generated moves"
        );
        Ok(legal)
    }

    /// Legality test for any move by the side to move.
    pub fn is_legal(&self, mov: Move) -> Result<bool, RulesError> {
        let piece = match self.board.piece_at(mov.from()) {
            Some(piece) if piece.color == self.side_to_move => piece,
            _ => return Ok(false),
        };

        let mut moves = vec![];
        movegen::move_set(&piece, &self.board, &mut moves);
        if !moves.contains(&mov) {
            return Ok(false);
        }

        self.is_safe_for(self.side_to_move, mov)
    }
}

//
// FEN parsing and generation.
//
// Only the first two FEN fields are meaningful here: the piece placement and the side to move. Castling rights,
// en-passant squares and move clocks are not part of these rules, so any trailing fields are accepted and ignored.
//

/// Possible errors that can arise when parsing a FEN string into a `Position`.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum FenParseError {
    #[error("unexpected char: {0}")]
    UnexpectedChar(char),
    #[error("unexpected EOF while reading")]
    UnexpectedEnd,
    #[error("invalid digit")]
    InvalidDigit,
    #[error("file does not sum to 8")]
    FileDoesNotSumToEight,
    #[error("unknown piece: {0}")]
    UnknownPiece(char),
    #[error("invalid side to move")]
    InvalidSideToMove,
}

impl Position {
    /// Constructs a new position from a FEN representation of a board position.
    pub fn from_fen(fen: impl AsRef<str>) -> Result<Position, FenParseError> {
        use std::{iter::Peekable, str::Chars};

        type Stream<'a> = Peekable<Chars<'a>>;

        fn eat(iter: &mut Stream<'_>, expected: char) -> Result<(), FenParseError> {
            match iter.next() {
                Some(c) if c == expected => Ok(()),
                Some(c) => Err(FenParseError::UnexpectedChar(c)),
                None => Err(FenParseError::UnexpectedEnd),
            }
        }

        fn peek(iter: &mut Stream<'_>) -> Result<char, FenParseError> {
            iter.peek().copied().ok_or(FenParseError::UnexpectedEnd)
        }

        fn eat_side_to_move(iter: &mut Stream<'_>) -> Result<Color, FenParseError> {
            let side = match peek(iter)? {
                'w' => Color::White,
                'b' => Color::Black,
                _ => return Err(FenParseError::InvalidSideToMove),
            };

            iter.next();
            match iter.peek() {
                None | Some(' ') => Ok(side),
                Some(_) => Err(FenParseError::InvalidSideToMove),
            }
        }

        let mut pos = Position::new();
        let iter = &mut fen.as_ref().chars().peekable();
        for y in (0..8).rev() {
            let mut x = 0;
            while x <= 7 {
                let c = peek(iter)?;
                // digits 1 through 8 indicate empty squares.
                if c.is_ascii_digit() {
                    if !('1'..='8').contains(&c) {
                        return Err(FenParseError::InvalidDigit);
                    }

                    x += c as i32 - '0' as i32;
                    if x > 8 {
                        return Err(FenParseError::FileDoesNotSumToEight);
                    }

                    iter.next();
                    continue;
                }

                // if it's not a digit, it represents a piece.
                let coord = Coordinate::new(x, y);
                let piece =
                    Piece::from_char(c, coord).map_err(|_| FenParseError::UnknownPiece(c))?;
                pos.board
                    .place(coord, piece)
                    .map_err(|_| FenParseError::FileDoesNotSumToEight)?;
                iter.next();
                x += 1;
            }

            if y != 0 {
                eat(iter, '/')?;
            }
        }

        eat(iter, ' ')?;
        pos.side_to_move = eat_side_to_move(iter)?;
        Ok(pos)
    }

    pub fn as_fen(&self) -> String {
        let mut buf = String::new();
        for y in (0..8).rev() {
            let mut empty_squares = 0;
            for x in 0..8 {
                if let Some(piece) = self.board.piece_at(Coordinate::new(x, y)) {
                    if empty_squares != 0 {
                        let _ = write!(&mut buf, "{}", empty_squares);
                    }
                    buf.push(piece.as_char());
                    empty_squares = 0;
                } else {
                    empty_squares += 1;
                }
            }

            if empty_squares != 0 {
                let _ = write!(&mut buf, "{}", empty_squares);
            }

            if y != 0 {
                buf.push('/');
            }
        }

        buf.push(' ');
        match self.side_to_move {
            Color::White => buf.push('w'),
            Color::Black => buf.push('b'),
        }
        buf
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f, "{} to move", self.side_to_move)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
