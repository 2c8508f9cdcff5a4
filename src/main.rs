//! Command-line driver for the rules engine.
//!
//! Usage:
//! `cargo run --release -- --fen "<fen>" --print-fen < moves.txt`
//! `cargo run --release -- --random 80 --seed 7`
//!
//! Without `--random`, long-algebraic moves (`e2e4`, `e7e8q`) are read from
//! stdin one per line and replayed; rejected moves are reported and skipped.

use std::io::{self, BufRead};

use rand::rngs::StdRng;
use rand::SeedableRng;

use plum_rules::chess_errors::ChessErrors;
use plum_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use plum_rules::move_generation::legal_move_generator::choose_random_legal_move;
use plum_rules::session::game::Game;
use plum_rules::utils::long_algebraic::long_algebraic_to_move;

const FEN_ENV_VAR: &str = "PLUM_RULES_FEN";

#[derive(Debug, Clone, PartialEq, Eq)]
struct SessionConfig {
    fen: String,
    print_fen: bool,
    random_plies: Option<u32>,
    seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fen: STARTING_POSITION_FEN.to_owned(),
            print_fen: false,
            random_plies: None,
            seed: 0,
        }
    }
}

impl SessionConfig {
    fn from_args_and_env(args: &[String]) -> Self {
        let defaults = Self::default();
        let fen = parse_arg(args, "--fen")
            .or_else(|| std::env::var(FEN_ENV_VAR).ok())
            .unwrap_or(defaults.fen);

        Self {
            fen,
            print_fen: args.iter().any(|a| a == "--print-fen"),
            random_plies: parse_arg(args, "--random").and_then(|v| v.parse::<u32>().ok()),
            seed: parse_arg(args, "--seed")
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(defaults.seed),
        }
    }
}

fn parse_arg(args: &[String], flag: &str) -> Option<String> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn report_end(game: &Game) {
    if game.is_over() {
        println!("result: {:?} score={}", game.status(), game.score());
    } else {
        println!("in progress after {} plies", game.ply_count());
    }
}

fn run_random(game: &mut Game, plies: u32, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        if game.is_over() {
            break;
        }
        let Some(mv) = choose_random_legal_move(game.position(), &mut rng) else {
            break;
        };
        match game.play(&mv) {
            Ok(_) => println!("{mv}"),
            Err(reason) => {
                eprintln!("generated move {mv} was rejected: {reason}");
                break;
            }
        }
    }
}

fn run_stdin(game: &mut Game) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if game.is_over() {
            println!("game over, ignoring {text}");
            continue;
        }

        let mv = match long_algebraic_to_move(text, game.position()) {
            Ok(mv) => mv,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        match game.play(&mv) {
            Ok(Some(score)) => println!("{mv}: game over, score {score}"),
            Ok(None) => println!("{mv}: ok"),
            Err(reason) => println!("{mv}: {}", ChessErrors::from(reason)),
        }
    }
}

fn main() -> Result<(), ChessErrors> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let config = SessionConfig::from_args_and_env(&args);
    let mut game = Game::from_fen(&config.fen)?;

    match config.random_plies {
        Some(plies) => run_random(&mut game, plies, config.seed),
        None => run_stdin(&mut game),
    }

    report_end(&game);
    if config.print_fen {
        println!("{}", game.to_fen());
    }
    Ok(())
}
