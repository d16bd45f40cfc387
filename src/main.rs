use anyhow::{Context, Result};
use castellan_core::{Game, divide};
use tracing::info;

/// Search depth used when none is given on the command line.
const DEFAULT_DEPTH: usize = 1;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let depth = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("invalid depth '{arg}'"))?,
        None => DEFAULT_DEPTH,
    };

    let game = Game::new();
    info!(depth, "castellan divide from the starting position");
    println!("{}", game.board().pretty());

    let results = divide(&game, depth);
    for (mv, count) in &results {
        println!("{mv}: {count}");
    }
    let total: u64 = results.iter().map(|(_, count)| count).sum();
    println!();
    println!("moves: {}", results.len());
    println!("nodes: {total}");
    info!(moves = results.len(), nodes = total, "divide complete");
    Ok(())
}
