// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use rookery::Position;
use structopt::StructOpt;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Prints the legal moves of the side to move.
#[derive(Debug, StructOpt)]
struct Options {
    /// FEN representation of the position to analyze. Defaults to the starting position.
    #[structopt(name = "FEN")]
    fen: Option<String>,

    /// Print the moves as a JSON array instead of one per line.
    #[structopt(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_env_filter(EnvFilter::from_env("ROOKERY_LOG"))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let ops = Options::from_args();
    let pos = match ops.fen {
        Some(fen) => Position::from_fen(fen)?,
        None => Position::from_start_position(),
    };

    let moves = pos.legal_moves(pos.side_to_move())?;
    if ops.json {
        println!("{}", serde_json::to_string(&moves)?);
    } else {
        for mov in moves {
            println!("{}", mov);
        }
    }

    Ok(())
}
