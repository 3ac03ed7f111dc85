use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use tools::{run_playouts, PlayoutConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Random legal playouts with commit/undo checks on every ply")]
struct Cli {
    /// TOML設定ファイル（games, max_plies, seed）
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of games (overrides the config file)
    #[arg(long)]
    games: Option<u32>,

    /// 1局あたり最大手数 (overrides the config file)
    #[arg(long)]
    max_plies: Option<u32>,

    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON on stdout
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<PlayoutConfig> {
        let mut config = match &self.config {
            Some(path) => PlayoutConfig::load(path)?,
            None => PlayoutConfig::default(),
        };
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(max_plies) = self.max_plies {
            config.max_plies = max_plies;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    if config.games == 0 {
        bail!("--games must be >= 1");
    }
    info!(
        "playing {} games (max {} plies, seed {:#x})",
        config.games, config.max_plies, config.seed
    );

    let report = run_playouts(&config)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{json}");
    } else {
        println!("games:          {}", report.games);
        println!("white wins:     {}", report.white_wins);
        println!("black wins:     {}", report.black_wins);
        println!("no legal moves: {}", report.no_legal_moves);
        println!("ply limit:      {}", report.ply_limit);
        println!("total plies:    {}", report.total_plies);
    }
    Ok(())
}
