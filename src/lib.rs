pub mod card;
pub mod cli;
pub mod deck;
pub mod display;
pub mod game;
pub mod moves;
pub mod rules;

use std::env;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::thread_rng;

use crate::card::LabelStyle;
use crate::game::GameState;

/// Entry point for the `kabal` binary.
///
/// Parses a very small command-line surface:
///   * `--seed=<u64>` → deal a specific reproducible game
///   * `--norsk`      → use Norwegian card labels
///
/// then deals a fresh game and hands control to the interactive loop.
/// Logging goes through the `log` facade; set `RUST_LOG=debug` to see
/// per-move engine traces.
///
/// Example:
///   cargo run -- --norsk --seed=12345
pub fn run() {
    env_logger::init();

    let mut labels = LabelStyle::English;
    let mut seed: Option<u64> = None;

    // Very small hand-rolled argument parser.
    for arg in env::args().skip(1) {
        if arg == "--norsk" {
            labels = LabelStyle::Norwegian;
        } else if let Some(rest) = arg.strip_prefix("--seed=") {
            match rest.parse::<u64>() {
                Ok(v) => seed = Some(v),
                Err(_) => eprintln!(
                    "Warning: could not parse seed from '{rest}'; using a random deal"
                ),
            }
        } else {
            eprintln!("Warning: unrecognized argument '{arg}'; supported: --seed=<u64>, --norsk");
        }
    }

    let shuffled = match seed {
        Some(s) => deck::shuffled_deck(&mut StdRng::seed_from_u64(s)),
        None => deck::shuffled_deck(&mut thread_rng()),
    };

    let mut game = match GameState::deal(shuffled, labels) {
        Ok(game) => game,
        Err(err) => {
            // Unreachable with a factory-built deck, but never panic over it.
            eprintln!("Could not deal a new game: {err}");
            return;
        }
    };
    info!("new game dealt (seed: {seed:?}, labels: {labels:?})");

    cli::game_loop(&mut game);
    if game.is_won() {
        info!("game won after moving all 52 cards to the foundations");
    }
}
