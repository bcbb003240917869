use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shobu::ai::StrategyKind;
use shobu::arena::Arena;
use shobu::config::{AppConfig, MAX_SEARCH_DEPTH};

/// Play Shobu matches between computer strategies.
#[derive(Parser)]
#[command(name = "arena", about = "Pit Shobu strategies against each other")]
struct Cli {
    /// Strategy seated first (plays Dark in the first game): random|easy, greedy|medium, hard|heuristic, minimax
    #[arg(long)]
    dark: Option<String>,

    /// Strategy seated second
    #[arg(long)]
    light: Option<String>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "shobu.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override the ply cap per game
    #[arg(long)]
    max_plies: Option<usize>,

    /// Override minimax search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Seed the strategies' random sources
    #[arg(long)]
    seed: Option<u64>,

    /// Keep the first strategy on Dark in every game
    #[arg(long)]
    fixed_colors: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Print a configuration file with every default value and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(name) = &cli.dark {
        config.players.dark = name.parse::<StrategyKind>()?;
    }
    if let Some(name) = &cli.light {
        config.players.light = name.parse::<StrategyKind>()?;
    }
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    if let Some(max_plies) = cli.max_plies {
        config.arena.max_plies = max_plies;
    }
    if let Some(depth) = cli.depth {
        if !(1..=MAX_SEARCH_DEPTH).contains(&depth) {
            bail!("--depth must be between 1 and {MAX_SEARCH_DEPTH}, got {depth}");
        }
        config.search.minimax_depth = depth;
    }
    if cli.seed.is_some() {
        config.arena.seed = cli.seed;
    }
    if cli.fixed_colors {
        config.arena.alternate_colors = false;
    }
    config.validate().context("invalid configuration")?;

    let depth = config.search.minimax_depth;
    let seed = config.arena.seed;
    let mut first = config.players.dark.build(depth, seed);
    let mut second = config.players.light.build(depth, seed.map(|s| s.wrapping_add(1)));

    info!(
        first = %config.players.dark,
        second = %config.players.light,
        games = config.arena.games,
        "starting match"
    );

    let arena = Arena::new(config.arena.clone());
    let summary = arena
        .run(first.as_mut(), second.as_mut())
        .context("match aborted")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
