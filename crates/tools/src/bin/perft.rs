use std::time::Instant;

use anyhow::{bail, Result};
use clap::Parser;
use log::info;
use nine_chess_core::GameState;
use tools::{divide, perft};

#[derive(Parser, Debug)]
#[command(author, version, about = "Count leaf nodes of the legal-move tree from the start position")]
struct Cli {
    /// 探索深さ (plies)
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Print the count below each root move
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    if cli.depth == 0 {
        bail!("--depth must be >= 1");
    }

    let mut state = GameState::new();
    let start = Instant::now();

    let nodes = if cli.divide {
        let counts = divide(&mut state, cli.depth)?;
        for (mv, count) in &counts {
            println!("{mv}: {count}");
        }
        counts.iter().map(|(_, count)| count).sum::<u64>()
    } else {
        perft(&mut state, cli.depth)?
    };

    let elapsed = start.elapsed();
    println!("perft({}) = {nodes}", cli.depth);
    info!(
        "{nodes} nodes in {:.3}s ({:.0} nps)",
        elapsed.as_secs_f64(),
        nodes as f64 / elapsed.as_secs_f64().max(1e-9)
    );
    Ok(())
}
