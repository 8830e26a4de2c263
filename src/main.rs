//! Game Binary
//!
//! Plays one game in the terminal. Humans type their slot keys and press
//! enter; computers play on their own. Ctrl-C ends the game early.
//!
//! Options: --config, --humans, --computers, --turn, --hints

use clap::Parser;
use setgame::display::Console;
use setgame::oracle::Features;
use setgame::players::Keyboard;
use setgame::room::Room;
use setgame::*;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about = "Real-time triple-matching card game", long_about = None)]
struct Args {
    /// JSON configuration file; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    humans: Option<usize>,
    #[arg(long)]
    computers: Option<usize>,
    /// Turn length in milliseconds; 0 plays untimed
    #[arg(long)]
    turn: Option<u64>,
    /// Log every legal triple after each deal
    #[arg(long)]
    hints: bool,
}

impl Args {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(humans) = self.humans {
            config.humans = humans;
        }
        if let Some(computers) = self.computers {
            config.computers = computers;
        }
        if let Some(turn) = self.turn {
            config.turn_millis = turn;
        }
        config.hints |= self.hints;
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    let config = Args::parse().config()?;
    let oracle = Arc::new(Features::from(&config));
    let screen = Arc::new(Console::from(&config));
    let session = Room::new(config.clone(), oracle, screen).start();
    interrupt(session.shutdown());
    if config.humans > 0 {
        Keyboard::from(&config).spawn(session.inboxes())?;
    }
    let (summary, _) = session.finish().await?;
    println!("{}", summary);
    Ok(())
}
