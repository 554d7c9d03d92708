// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use rookery::{eval::Evaluator, session::Game};
use structopt::StructOpt;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Plays a seeded random game from the starting position, printing the board after every ply.
#[derive(Debug, StructOpt)]
struct Options {
    /// Maximum number of plies to play.
    #[structopt(short, long, default_value = "20")]
    plies: u32,

    /// Seed for the random move choices.
    #[structopt(short, long, default_value = "0")]
    seed: u64,

    /// Evaluation function to install into the game (material or neutral).
    #[structopt(short, long, default_value = "material")]
    evaluator: Evaluator,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_env_filter(EnvFilter::from_env("ROOKERY_LOG"))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let ops = Options::from_args();
    let mut rng = SmallRng::seed_from_u64(ops.seed);
    let mut game = Game::new(ops.evaluator.as_fn());
    print!("{}", game.position());
    for ply in 1..=ops.plies {
        let moves = game.legal_moves()?;
        let mov = match moves.choose(&mut rng) {
            Some(&mov) => mov,
            None => {
                println!("{} has no legal moves", game.side_to_move());
                break;
            }
        };

        let side = game.side_to_move();
        game.play(mov)?;
        game.end_turn();
        println!("===========================");
        println!("{:<15} {}", format!("Ply {}:", ply), mov);
        println!("{:<15} {}", "Moved:", side);
        println!("{:<15} {}", "Evaluation:", game.evaluate());
        print!("{}", game.position());
    }

    Ok(())
}
