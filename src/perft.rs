// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Move path enumeration, for testing the move generator against known node counts.

use crate::{core::Move, error::RulesError, position::Position};

/// Counts the leaf nodes of the legal move tree rooted at `pos`, `depth` plies deep. Each ply applies a legal move
/// to a copy of the position and ends the turn before recursing.
pub fn perft(pos: &Position, depth: u32) -> Result<u64, RulesError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = pos.legal_moves(pos.side_to_move())?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for mov in moves {
        let mut child = pos.clone();
        child.apply_move(mov)?;
        child.end_turn();
        nodes += perft(&child, depth - 1)?;
    }

    Ok(nodes)
}

/// Like [`perft`], but reports the node count beneath each root move separately.
pub fn divide(pos: &Position, depth: u32) -> Result<Vec<(Move, u64)>, RulesError> {
    let mut counts = Vec::new();
    if depth == 0 {
        return Ok(counts);
    }

    for mov in pos.legal_moves(pos.side_to_move())? {
        let mut child = pos.clone();
        child.apply_move(mov)?;
        child.end_turn();
        counts.push((mov, perft(&child, depth - 1)?));
    }

    Ok(counts)
}
