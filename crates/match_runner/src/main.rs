//! Game driver CLI
//!
//! Play configured games, play the engine from the console, or analyse a
//! single position.

use std::env;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chess_core::{move_to_string, Board, Color, SearchLimits};
use classical_engine::{root_candidates, PerfCounters, SearchContext};
use match_runner::{GameConfig, GameRecord, GameRunner, PlayerConfig};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Chess game driver");
    println!();
    println!("Usage:");
    println!("  match_runner play <config.toml>");
    println!("  match_runner human [--ai-color white|black] [--depth D]");
    println!("  match_runner analyse <fen> [--depth D]");
    println!();
    println!("Moves are entered as coordinates, e.g. e2e4. Type quit to resign.");
    println!("Log verbosity follows RUST_LOG (default: info).");
}

/// Value following `flag`, if present.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_depth(args: &[String], default: u8) -> Result<u8> {
    match flag_value(args, "--depth").or_else(|| flag_value(args, "-d")) {
        Some(d) => d.parse().with_context(|| format!("invalid depth '{d}'")),
        None => Ok(default),
    }
}

fn run_game(config: &GameConfig) -> Result<GameRecord> {
    let mut white = config.white.build(Color::White);
    let mut black = config.black.build(Color::Black);

    let mut runner = GameRunner::from_config(config)?;
    let record = runner.play(white.as_mut(), black.as_mut())?;

    println!("{}", record.summary());
    if let Some(path) = &config.output {
        record
            .save(path)
            .with_context(|| format!("saving game record to {}", path.display()))?;
        println!("Game record written to {}", path.display());
    }
    Ok(record)
}

fn run_play(args: &[String]) -> Result<()> {
    let Some(path) = args.first() else {
        bail!("play requires a config file");
    };
    let config = GameConfig::load(Path::new(path))
        .with_context(|| format!("loading game config {path}"))?;
    run_game(&config)?;
    Ok(())
}

fn run_human(args: &[String]) -> Result<()> {
    let ai_color = match flag_value(args, "--ai-color").unwrap_or("black") {
        "white" | "w" => Color::White,
        "black" | "b" => Color::Black,
        other => bail!("invalid color '{other}': use white or black"),
    };
    let depth = parse_depth(args, 3)?;

    let (white, black) = match ai_color {
        Color::White => (PlayerConfig::ai(depth), PlayerConfig::Human),
        Color::Black => (PlayerConfig::Human, PlayerConfig::ai(depth)),
    };
    let config = GameConfig {
        white,
        black,
        ..GameConfig::default()
    };
    run_game(&config)?;
    Ok(())
}

fn run_analyse(args: &[String]) -> Result<()> {
    let Some(fen) = args.first() else {
        bail!("analyse requires a FEN string");
    };
    let depth = parse_depth(args, 4)?;
    let board = Board::from_fen(fen).context("parsing position")?;
    println!("{board}");

    let limits = SearchLimits::depth(depth);
    limits.start();
    let mut perf = PerfCounters::default();
    let outcome = {
        let mut ctx = SearchContext::new(limits.clone()).with_recorder(&mut perf);
        root_candidates(&board, &mut ctx)?
    };

    match outcome.score {
        Some(score) => {
            let moves: Vec<String> = outcome.candidates.iter().map(move_to_string).collect();
            println!("Best: {} (score {score}, depth {depth})", moves.join(" "));
        }
        None => println!("No legal move, status: {:?}", board.status(board.side_to_move())),
    }
    println!(
        "Nodes: {}, evaluations: {}, time: {:.3?}, mean evaluation: {:?}",
        perf.nodes,
        perf.evaluations,
        limits.time_control.elapsed(),
        perf.mean_eval_time()
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "play" => run_play(&args[2..]),
        "human" => run_human(&args[2..]),
        "analyse" | "analyze" => run_analyse(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}
