// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `rookery` chess rules engine.
//!
//! `rookery` knows how pieces move and when a king is in danger, and nothing more. It represents a board, produces
//! attack and move sets for each piece, and filters moves down to the legal ones by playing each candidate on a
//! copy of the position and checking king safety. Choosing moves, scoring positions and drawing boards are left to
//! whoever owns the [`session::Game`].

pub mod board;
pub mod core;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod perft;
pub mod position;
pub mod session;

pub use board::Board;
pub use error::RulesError;
pub use position::Position;
