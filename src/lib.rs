//! Real-time triple-matching card game.
//!
//! One [`referee::Referee`] and many [`players::Agent`]s contend for a shared
//! [`board::Board`] of face-up cards. Players mark slots; a third marker turns
//! into a [`claims::Claim`] that the referee validates against an
//! [`oracle::Oracle`], scores, and answers with a [`claims::Verdict`] on a
//! channel dedicated to that claim.
//!
//! ## Modules
//!
//! - [`board`]: slot locks, card mapping, player markers
//! - [`claims`]: claim snapshots, FIFO queue, verdicts
//! - [`referee`]: round loop, draw pile, turn timer
//! - [`players`]: per-player agents and input sources
//! - [`oracle`]: the matching rule
//! - [`display`]: fire-and-forget event sink
//! - [`room`]: wiring everything into a running game
pub mod board;
pub mod claims;
pub mod config;
pub mod display;
pub mod oracle;
pub mod players;
pub mod referee;
pub mod room;
pub mod shutdown;

pub use config::Config;
pub use shutdown::Shutdown;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Card identifier in `0..deck`.
pub type Card = usize;
/// Board position in `0..slots`.
pub type Slot = usize;
/// Player identifier in `0..players`.
pub type Position = usize;
/// Accepted claims per player.
pub type Score = usize;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Cards per claim. The matching rule is defined over triples only.
pub const TRIPLE: usize = 3;
/// Directory that receives one debug log file per run.
pub const LOG_DIR: &str = "logs";

/// Initialize logging to terminal (info) and a timestamped file (debug).
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all(LOG_DIR).context("create log directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("{}/{}.log", LOG_DIR, time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}

/// Trigger a graceful shutdown on Ctrl-C.
pub fn interrupt(shutdown: Shutdown) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                println!();
                log::warn!("interrupt received, ending the game");
                shutdown.trigger();
            }
            Err(e) => log::warn!("no interrupt handler: {}", e),
        }
    });
}
