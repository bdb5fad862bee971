//! Round-robin tournament scheduling

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::game::{play_match, MatchResult, DEFAULT_ROUNDS};
use crate::pairing::{calculate_match_count, round_robin_pairs};
use crate::roster::Roster;
use crate::scoreboard::{Scoreboard, Standing};

/// Number of ranked entries reported at the end of a tournament
pub const DEFAULT_TOP_N: usize = 6;

/// Tournament configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Add SuperCopycat to the standard five
    pub extended: bool,
    /// Rounds per match
    pub rounds: u32,
    /// How many standings to report
    pub top_n: usize,
    /// Randomness seed for the play order
    pub seed: [u8; 32],
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            extended: false,
            rounds: DEFAULT_ROUNDS,
            top_n: DEFAULT_TOP_N,
            seed: [0u8; 32],
        }
    }
}

impl TournamentConfig {
    pub fn with_extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_seed(mut self, seed: [u8; 32]) -> Self {
        self.seed = seed;
        self
    }
}

/// Everything a finished tournament produced
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentReport {
    /// Identities in the drawn play order
    pub order: Vec<String>,
    /// Every match, in the order it was played
    pub matches: Vec<MatchResult>,
    /// Best `top_n` totals, best first
    pub standings: Vec<Standing>,
}

impl TournamentReport {
    /// Ranking as printed: one `"{rank}. {identity} {score}"` line per standing
    pub fn render(&self) -> String {
        self.standings
            .iter()
            .map(|standing| format!("{}\n", standing))
            .collect()
    }
}

/// Plays every strategy in the roster against every other exactly once
#[derive(Debug)]
pub struct Tournament {
    config: TournamentConfig,
    roster: Roster,
}

impl Tournament {
    /// Tournament over the built-in roster selected by `config.extended`
    pub fn new(config: TournamentConfig) -> Self {
        let roster = Roster::new(config.extended);
        Self { config, roster }
    }

    /// Tournament over a caller-supplied roster; `config.extended` is ignored
    pub fn with_roster(config: TournamentConfig, roster: Roster) -> Self {
        Self { config, roster }
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Shuffle the roster, play the round-robin and rank the results
    pub fn run(mut self) -> Result<TournamentReport> {
        let mut rng = StdRng::from_seed(self.config.seed);
        self.roster.shuffle(&mut rng);
        let mut players = self.roster.draw_all()?;

        let order: Vec<String> = players.iter().map(|p| p.identity().to_string()).collect();
        info!(
            "starting tournament: {} players, {} matches of {} rounds",
            players.len(),
            calculate_match_count(players.len()),
            self.config.rounds
        );

        let mut scoreboard = Scoreboard::new();
        let mut matches = Vec::with_capacity(calculate_match_count(players.len()));
        for (i, j) in round_robin_pairs(players.len()) {
            let (head, tail) = players.split_at_mut(j);
            let result = play_match(
                head[i].as_mut(),
                tail[0].as_mut(),
                self.config.rounds,
                &mut scoreboard,
            );
            matches.push(result);
        }

        let standings = scoreboard.standings(self.config.top_n);
        if let Some(leader) = standings.first() {
            info!("tournament finished, leader {} with {}", leader.identity, leader.score);
        } else {
            info!("tournament finished with no points awarded");
        }

        Ok(TournamentReport {
            order,
            matches,
            standings,
        })
    }
}
