//! Match Logic for Prisoner's Arena
//!
//! Core game logic for the Iterated Prisoner's Dilemma tournament.
//! This crate is compiled to:
//! - Native (for the command-line arena)
//! - WASM (for frontend match replay)

mod error;
mod strategy;
mod game;
mod scoreboard;
mod roster;
mod pairing;
mod tournament;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{ArenaError, Result};
pub use strategy::{
    Cheater, Cooperator, Copycat, Detective, Grudger, Move, Strategy, StrategyKind, SuperCopycat,
    DETECTIVE_OPENING,
};
pub use game::{payoff, play_match, MatchResult, RoundResult, DEFAULT_ROUNDS};
pub use scoreboard::{Scoreboard, Standing};
pub use roster::{Roster, STANDARD_ROSTER};
pub use pairing::{calculate_match_count, round_robin_pairs};
pub use tournament::{Tournament, TournamentConfig, TournamentReport, DEFAULT_TOP_N};
