//! Error types for tournament scheduling

use thiserror::Error;

/// Errors raised by the match logic crate
///
/// Payoff resolution, strategy decisions and scoreboard updates are total,
/// so a running tournament can only fail on a scheduler invariant violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// A strategy was drawn from a roster with nothing left in it.
    #[error("Picked player from empty list")]
    ExhaustedPool,

    /// A strategy name that matches no built-in strategy.
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
