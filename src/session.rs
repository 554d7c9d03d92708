// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A game session: the live position plus whatever evaluation function the owner chose to install.

use crate::{
    board::Board,
    core::{Color, Move, Piece},
    error::RulesError,
    position::Position,
};

pub struct Game {
    position: Position,
    evaluator: Box<dyn Fn(&Board) -> i32>,
}

impl Game {
    /// Starts a new game from the standard starting position.
    pub fn new<F>(evaluator: F) -> Game
    where
        F: Fn(&Board) -> i32 + 'static,
    {
        Game::with_position(Position::from_start_position(), evaluator)
    }

    pub fn with_position<F>(position: Position, evaluator: F) -> Game
    where
        F: Fn(&Board) -> i32 + 'static,
    {
        Game {
            position,
            evaluator: Box::new(evaluator),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns an independent copy of the live position.
    pub fn snapshot(&self) -> Position {
        self.position.clone()
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn legal_moves(&self) -> Result<Vec<Move>, RulesError> {
        self.position.legal_moves(self.position.side_to_move())
    }

    /// Plays a move for the side to move, returning the captured piece if there was one. The move must be legal. The
    /// turn does not pass until [`Game::end_turn`] is called.
    pub fn play(&mut self, mov: Move) -> Result<Option<Piece>, RulesError> {
        if !self.position.is_legal(mov)? {
            tracing::debug!(%mov, "refusing illegal move");
            return Err(RulesError::IllegalMove(mov));
        }

        self.position.apply_move(mov)
    }

    pub fn end_turn(&mut self) {
        self.position.end_turn();
        tracing::info!(side = %self.position.side_to_move(), "turn ended");
    }

    /// Scores the live board with the installed evaluation function.
    pub fn evaluate(&self) -> i32 {
        (self.evaluator)(self.position.board())
    }
}
