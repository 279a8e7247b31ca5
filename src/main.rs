use std::{
    fs,
    io::{self, BufWriter},
    path::PathBuf,
};

use anyhow::Context;
use blackjack::{
    config::Config,
    console::{Console, Table},
    session, BlackjackGame, Deck,
};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "blackjack", about = "Play Blackjack (21) against the dealer")]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Leaderboard file (default: highscores.txt)
    #[arg(long)]
    highscores: Option<PathBuf>,

    /// Seed the deck for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Log level for stderr diagnostics (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Write the session summary as JSON to this path
    #[arg(long)]
    summary_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(highscores) = args.highscores {
        config.highscores = highscores;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    let config = config.validate()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .init();

    let deck = match config.seed {
        Some(seed) => Deck::new(seed),
        None => Deck::from_entropy(),
    };
    info!(
        seed = ?config.seed,
        highscores = %config.highscores.display(),
        dealer_stands_on = config.rules.dealer_stands_on,
        "starting blackjack"
    );
    let mut game = BlackjackGame::new(deck, config.rules);

    let stdin = io::stdin();
    let mut table = Console::new(stdin.lock(), BufWriter::new(io::stdout()));
    let summary = session::run(&mut game, &mut table, &config.highscores)?;
    table.say("---------- See you again soon ----------")?;

    if let Some(path) = args.summary_out {
        let json = serde_json::to_string_pretty(&summary)?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write summary to {}", path.display()))?;
    }
    Ok(())
}
