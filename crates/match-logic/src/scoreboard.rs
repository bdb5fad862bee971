//! Tournament-wide point totals and ranking

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Running point total per identity
///
/// Entries keep first-seen order so that ranking ties resolve the same way
/// on every run.
#[derive(Clone, Debug, Default)]
pub struct Scoreboard {
    entries: Vec<(String, i32)>,
    index: HashMap<String, usize>,
}

/// One line of the final ranking
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-indexed position
    pub rank: usize,
    pub identity: String,
    pub score: i32,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} {}", self.rank, self.identity, self.score)
    }
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `delta` points to `identity`, starting unseen identities at zero
    pub fn add(&mut self, identity: &str, delta: i32) {
        match self.index.get(identity) {
            Some(&slot) => self.entries[slot].1 += delta,
            None => {
                self.index.insert(identity.to_string(), self.entries.len());
                self.entries.push((identity.to_string(), delta));
            }
        }
    }

    /// Current total for `identity`, if it has ever been credited
    pub fn get(&self, identity: &str) -> Option<i32> {
        self.index.get(identity).map(|&slot| self.entries[slot].1)
    }

    /// All totals in first-seen order
    pub fn entries(&self) -> &[(String, i32)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest `n` totals, best first.
    ///
    /// Equal totals keep first-seen order. Asking for more entries than
    /// exist returns all of them.
    pub fn top(&self, n: usize) -> Vec<(String, i32)> {
        let mut ranked = self.entries.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// [`Scoreboard::top`] with 1-indexed ranks attached
    pub fn standings(&self, n: usize) -> Vec<Standing> {
        self.top(n)
            .into_iter()
            .enumerate()
            .map(|(i, (identity, score))| Standing {
                rank: i + 1,
                identity,
                score,
            })
            .collect()
    }
}
