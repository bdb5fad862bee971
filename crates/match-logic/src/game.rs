//! Match execution engine

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::scoreboard::Scoreboard;
use crate::strategy::{Move, Strategy};

/// Rounds per match unless the caller asks otherwise
pub const DEFAULT_ROUNDS: u32 = 10;

/// Payoff matrix for the Prisoner's Dilemma
/// Returns (score_a, score_b)
pub fn payoff(a: Move, b: Move) -> (i32, i32) {
    match (a, b) {
        (Move::Cooperate, Move::Cooperate) => (2, 2),
        (Move::Cooperate, Move::Defect) => (-1, 3),
        (Move::Defect, Move::Cooperate) => (3, -1),
        (Move::Defect, Move::Defect) => (0, 0),
    }
}

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub move_a: Move,
    pub move_b: Move,
    pub score_a: i32,
    pub score_b: i32,
    pub cumulative_a: i32,
    pub cumulative_b: i32,
}

/// Result of a complete match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub player_a: String,
    pub player_b: String,
    pub rounds: Vec<RoundResult>,
    pub total_score_a: i32,
    pub total_score_b: i32,
    pub round_count: u32,
}

/// Run a complete match between two strategies
///
/// Every round both players commit before either sees the other's move.
/// Payoffs are credited to `scoreboard` under each player's identity as the
/// round resolves, and both players are reset once the last round is done.
///
/// # Arguments
/// * `strategy_a` - First player
/// * `strategy_b` - Second player
/// * `rounds` - Number of rounds; zero plays nothing
/// * `scoreboard` - Tournament-wide point totals
///
/// # Returns
/// Complete match result with round-by-round details
pub fn play_match(
    strategy_a: &mut dyn Strategy,
    strategy_b: &mut dyn Strategy,
    rounds: u32,
    scoreboard: &mut Scoreboard,
) -> MatchResult {
    let mut history: Vec<RoundResult> = Vec::with_capacity(rounds as usize);
    let mut total_a = 0i32;
    let mut total_b = 0i32;

    for round in 0..rounds {
        let move_a = strategy_a.decide();
        let move_b = strategy_b.decide();

        let (score_a, score_b) = payoff(move_a, move_b);
        total_a += score_a;
        total_b += score_b;

        strategy_a.observe(move_b);
        strategy_b.observe(move_a);

        scoreboard.add(strategy_a.identity(), score_a);
        scoreboard.add(strategy_b.identity(), score_b);

        trace!(
            "round {}: {} {:?} ({:+}) vs {} {:?} ({:+})",
            round,
            strategy_a.identity(),
            move_a,
            score_a,
            strategy_b.identity(),
            move_b,
            score_b
        );

        history.push(RoundResult {
            round,
            move_a,
            move_b,
            score_a,
            score_b,
            cumulative_a: total_a,
            cumulative_b: total_b,
        });
    }

    strategy_a.reset();
    strategy_b.reset();

    debug!(
        "{} vs {}: {} - {} over {} rounds",
        strategy_a.identity(),
        strategy_b.identity(),
        total_a,
        total_b,
        rounds
    );

    MatchResult {
        player_a: strategy_a.identity().to_string(),
        player_b: strategy_b.identity().to_string(),
        rounds: history,
        total_score_a: total_a,
        total_score_b: total_b,
        round_count: rounds,
    }
}
