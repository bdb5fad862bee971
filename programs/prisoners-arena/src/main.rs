//! Prisoner's Arena - Iterated Prisoner's Dilemma Tournament
//!
//! Runs one round-robin tournament over the extended roster and prints the
//! ranking to stdout. Log verbosity follows `RUST_LOG` (default `warn`).

use anyhow::Result;
use log::debug;
use match_logic::{Tournament, TournamentConfig};
use rand::Rng;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut seed = [0u8; 32];
    rand::thread_rng().fill(&mut seed);
    debug!("tournament seed {:02x?}", seed);

    let config = TournamentConfig::default()
        .with_extended(true)
        .with_seed(seed);
    let report = Tournament::new(config).run()?;

    print!("{}", report.render());
    Ok(())
}
