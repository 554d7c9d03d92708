// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use rookery::{perft, Position};
use structopt::StructOpt;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Debug, StructOpt)]
struct Options {
    /// The depth to search to.
    #[structopt(short, long)]
    depth: u32,

    /// FEN representation of the position to analyze. Defaults to the starting position.
    #[structopt(name = "FEN")]
    fen: Option<String>,

    /// Print the node count beneath each root move as well as the total.
    #[structopt(long)]
    divide: bool,
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

    if ops.divide {
        let counts = perft::divide(&pos, ops.depth)?;
        for (mov, count) in &counts {
            println!("{}: {}", mov, count);
        }

        println!();
        println!("{}", counts.iter().map(|(_, count)| count).sum::<u64>());
    } else {
        println!("{}", perft::perft(&pos, ops.depth)?);
    }

    Ok(())
}
