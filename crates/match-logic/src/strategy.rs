//! Strategy definitions and execution

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArenaError;

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

/// A player in an iterated match.
///
/// The engine calls `decide` and `observe` exactly once each per round,
/// alternating, and `reset` once after the match. A decision depends only on
/// the memory built up through `observe` (and, for [`Detective`], through its
/// own earlier decisions), never on the round number.
pub trait Strategy: fmt::Debug {
    /// Stable display name, used as the scoreboard key.
    fn identity(&self) -> &str;

    /// Commit to this round's move.
    fn decide(&mut self) -> Move;

    /// Record the opponent's move once both moves are committed.
    fn observe(&mut self, opponent: Move);

    /// Forget everything learned during the current match.
    fn reset(&mut self);
}

/// Tag naming every built-in strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Always defect.
    Cheater,
    /// Always cooperate.
    Cooperator,
    /// Repeat the opponent's last move. Start with cooperate.
    Copycat,
    /// Cooperate until the opponent defects twice in a row, then defect.
    SuperCopycat,
    /// Cooperate until the opponent defects once, then always defect.
    Grudger,
    /// Open with C, D, C, C, then exploit or mirror.
    Detective,
}

impl StrategyKind {
    /// Every built-in strategy, in roster order.
    pub const ALL: [StrategyKind; 6] = [
        StrategyKind::Copycat,
        StrategyKind::Cheater,
        StrategyKind::Cooperator,
        StrategyKind::Grudger,
        StrategyKind::Detective,
        StrategyKind::SuperCopycat,
    ];

    /// Display name used as the default identity
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Cheater => "Cheater",
            StrategyKind::Cooperator => "Cooperator",
            StrategyKind::Copycat => "Copycat",
            StrategyKind::SuperCopycat => "SuperCopycat",
            StrategyKind::Grudger => "Grudger",
            StrategyKind::Detective => "Detective",
        }
    }

    /// Human-readable description of the behavior
    pub fn describe(self) -> &'static str {
        match self {
            StrategyKind::Cheater => "Never cooperates. Always defects.",
            StrategyKind::Cooperator => "Never defects. Always cooperates.",
            StrategyKind::Copycat => "Copies opponent's last move. Starts by cooperating.",
            StrategyKind::SuperCopycat => {
                "Cooperates until betrayed twice in a row, then always defects."
            }
            StrategyKind::Grudger => "Cooperates until betrayed, then always defects.",
            StrategyKind::Detective => {
                "Opens with C, D, C, C. Copies the opponent if it retaliated, otherwise always defects."
            }
        }
    }

    /// Fresh instance in its initial state
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Cheater => Box::new(Cheater::new()),
            StrategyKind::Cooperator => Box::new(Cooperator::new()),
            StrategyKind::Copycat => Box::new(Copycat::new()),
            StrategyKind::SuperCopycat => Box::new(SuperCopycat::new()),
            StrategyKind::Grudger => Box::new(Grudger::new()),
            StrategyKind::Detective => Box::new(Detective::new()),
        }
    }
}

/// Accepts the display name (`Detective`) or its JSON string form
/// (`"Detective"`), surrounding whitespace ignored.
impl FromStr for StrategyKind {
    type Err = ArenaError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if let Ok(kind) = serde_json::from_str::<StrategyKind>(trimmed) {
            return Ok(kind);
        }
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == trimmed)
            .ok_or_else(|| ArenaError::UnknownStrategy(trimmed.to_string()))
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Always defects
#[derive(Clone, Debug)]
pub struct Cheater {
    name: String,
}

impl Cheater {
    pub fn new() -> Self {
        Self::named(StrategyKind::Cheater.name())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for Cheater {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Cheater {
    fn identity(&self) -> &str {
        &self.name
    }

    fn decide(&mut self) -> Move {
        Move::Defect
    }

    fn observe(&mut self, _opponent: Move) {}

    fn reset(&mut self) {}
}

/// Always cooperates
#[derive(Clone, Debug)]
pub struct Cooperator {
    name: String,
}

impl Cooperator {
    pub fn new() -> Self {
        Self::named(StrategyKind::Cooperator.name())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for Cooperator {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Cooperator {
    fn identity(&self) -> &str {
        &self.name
    }

    fn decide(&mut self) -> Move {
        Move::Cooperate
    }

    fn observe(&mut self, _opponent: Move) {}

    fn reset(&mut self) {}
}

/// Tit-for-Tat: plays whatever the opponent played last round
#[derive(Clone, Debug)]
pub struct Copycat {
    name: String,
    last_opponent: Move,
}

impl Copycat {
    pub fn new() -> Self {
        Self::named(StrategyKind::Copycat.name())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_opponent: Move::Cooperate,
        }
    }
}

impl Default for Copycat {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Copycat {
    fn identity(&self) -> &str {
        &self.name
    }

    fn decide(&mut self) -> Move {
        self.last_opponent
    }

    fn observe(&mut self, opponent: Move) {
        self.last_opponent = opponent;
    }

    fn reset(&mut self) {
        self.last_opponent = Move::Cooperate;
    }
}

/// Forgives a single defection, but two in a row lock it into defecting
#[derive(Clone, Debug)]
pub struct SuperCopycat {
    name: String,
    last_opponent: Move,
    betrayed: bool,
}

impl SuperCopycat {
    pub fn new() -> Self {
        Self::named(StrategyKind::SuperCopycat.name())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_opponent: Move::Cooperate,
            betrayed: false,
        }
    }
}

impl Default for SuperCopycat {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for SuperCopycat {
    fn identity(&self) -> &str {
        &self.name
    }

    fn decide(&mut self) -> Move {
        if self.betrayed {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }

    fn observe(&mut self, opponent: Move) {
        if self.last_opponent == Move::Defect && opponent == Move::Defect {
            self.betrayed = true;
        }
        self.last_opponent = opponent;
    }

    fn reset(&mut self) {
        self.last_opponent = Move::Cooperate;
        self.betrayed = false;
    }
}

/// Grim trigger: one defection and it never cooperates again this match
#[derive(Clone, Debug)]
pub struct Grudger {
    name: String,
    betrayed: bool,
}

impl Grudger {
    pub fn new() -> Self {
        Self::named(StrategyKind::Grudger.name())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            betrayed: false,
        }
    }
}

impl Default for Grudger {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Grudger {
    fn identity(&self) -> &str {
        &self.name
    }

    fn decide(&mut self) -> Move {
        if self.betrayed {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }

    fn observe(&mut self, opponent: Move) {
        if opponent == Move::Defect {
            self.betrayed = true;
        }
    }

    fn reset(&mut self) {
        self.betrayed = false;
    }
}

/// Fixed opening played by [`Detective`]
pub const DETECTIVE_OPENING: [Move; 4] = [
    Move::Cooperate,
    Move::Defect,
    Move::Cooperate,
    Move::Cooperate,
];

/// Plays a fixed opening, then decides how to treat the opponent.
///
/// `decide` consumes one opening move per call, so it is not repeatable
/// during the opening. A defection only counts as retaliation while opening
/// moves remain queued; since `decide` runs before `observe` each round, a
/// defection in round 4, observed after the last opening move was consumed,
/// does not count.
#[derive(Clone, Debug)]
pub struct Detective {
    name: String,
    opening: VecDeque<Move>,
    last_opponent: Move,
    betrayed: bool,
}

impl Detective {
    pub fn new() -> Self {
        Self::named(StrategyKind::Detective.name())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            opening: VecDeque::from(DETECTIVE_OPENING),
            last_opponent: Move::Cooperate,
            betrayed: false,
        }
    }
}

impl Default for Detective {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Detective {
    fn identity(&self) -> &str {
        &self.name
    }

    fn decide(&mut self) -> Move {
        if let Some(planned) = self.opening.pop_front() {
            return planned;
        }
        if self.betrayed {
            self.last_opponent
        } else {
            Move::Defect
        }
    }

    fn observe(&mut self, opponent: Move) {
        self.last_opponent = opponent;
        if opponent == Move::Defect && !self.opening.is_empty() {
            self.betrayed = true;
        }
    }

    fn reset(&mut self) {
        self.opening = VecDeque::from(DETECTIVE_OPENING);
        self.last_opponent = Move::Cooperate;
        self.betrayed = false;
    }
}
