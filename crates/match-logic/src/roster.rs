//! Strategy pool a tournament draws its play order from

use std::collections::VecDeque;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{ArenaError, Result};
use crate::strategy::{Strategy, StrategyKind};

/// Strategies in the standard roster, in construction order
pub const STANDARD_ROSTER: [StrategyKind; 5] = [
    StrategyKind::Copycat,
    StrategyKind::Cheater,
    StrategyKind::Cooperator,
    StrategyKind::Grudger,
    StrategyKind::Detective,
];

/// Pool of strategy instances, consumed front to back by [`Roster::draw`]
#[derive(Debug, Default)]
pub struct Roster {
    pool: VecDeque<Box<dyn Strategy>>,
}

impl Roster {
    /// Standard roster, plus SuperCopycat when `extended` is set
    pub fn new(extended: bool) -> Self {
        let mut kinds = STANDARD_ROSTER.to_vec();
        if extended {
            kinds.push(StrategyKind::SuperCopycat);
        }
        Self::from_kinds(&kinds)
    }

    /// One fresh instance per listed kind
    pub fn from_kinds(kinds: &[StrategyKind]) -> Self {
        Self::from_strategies(kinds.iter().map(|kind| kind.build()).collect())
    }

    pub fn from_strategies(strategies: Vec<Box<dyn Strategy>>) -> Self {
        Self {
            pool: strategies.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Identities still in the pool, in draw order
    pub fn identities(&self) -> Vec<String> {
        self.pool.iter().map(|s| s.identity().to_string()).collect()
    }

    /// Uniformly shuffle the remaining pool
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pool.make_contiguous().shuffle(rng);
        debug!("shuffled roster: {:?}", self.identities());
    }

    /// Take the next strategy out of the pool
    pub fn draw(&mut self) -> Result<Box<dyn Strategy>> {
        self.pool.pop_front().ok_or(ArenaError::ExhaustedPool)
    }

    /// Draw exactly as many strategies as the pool held when called
    pub fn draw_all(&mut self) -> Result<Vec<Box<dyn Strategy>>> {
        let count = self.pool.len();
        (0..count).map(|_| self.draw()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_standard_roster() {
        let roster = Roster::new(false);
        assert_eq!(
            roster.identities(),
            vec!["Copycat", "Cheater", "Cooperator", "Grudger", "Detective"]
        );
    }

    #[test]
    fn test_extended_roster() {
        let roster = Roster::new(true);
        assert_eq!(roster.len(), 6);
        assert_eq!(roster.identities().last().map(String::as_str), Some("SuperCopycat"));
    }

    #[test]
    fn test_draw_until_exhausted() {
        let mut roster = Roster::new(false);
        for _ in 0..5 {
            assert!(roster.draw().is_ok());
        }
        assert!(roster.is_empty());
        assert_eq!(roster.draw().unwrap_err(), ArenaError::ExhaustedPool);
    }

    #[test]
    fn test_draw_from_empty() {
        let mut roster = Roster::from_strategies(Vec::new());
        let err = roster.draw().unwrap_err();
        assert_eq!(err.to_string(), "Picked player from empty list");
    }

    #[test]
    fn test_draw_all_empties_pool() {
        let mut roster = Roster::new(true);
        let drawn = roster.draw_all().unwrap();
        assert_eq!(drawn.len(), 6);
        assert!(roster.is_empty());
        assert!(roster.draw_all().unwrap().is_empty());
    }

    /// Seed whose bytes all vary with `index`
    fn varied_seed(index: u64) -> [u8; 32] {
        let mut seed = [0u8; 32];
        for (i, chunk) in seed.chunks_mut(8).enumerate() {
            let word = index
                .wrapping_mul(0x9e37_79b9_7f4a_7c15)
                .rotate_left(i as u32 * 16)
                ^ i as u64;
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        seed
    }

    fn shuffled_order(seed: [u8; 32]) -> Vec<String> {
        let mut roster = Roster::new(true);
        roster.shuffle(&mut StdRng::from_seed(seed));
        roster.identities()
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut shuffled = shuffled_order(varied_seed(9));
        shuffled.sort();
        let mut expected: Vec<String> =
            StrategyKind::ALL.iter().map(|k| k.name().to_string()).collect();
        expected.sort();
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn test_shuffle_determinism() {
        assert_eq!(shuffled_order(varied_seed(7)), shuffled_order(varied_seed(7)));
        assert_eq!(shuffled_order([7u8; 32]), shuffled_order([7u8; 32]));
    }

    #[test]
    fn test_shuffle_covers_all_orders() {
        // 6! = 720 orders; 5000 draws leave each unseen with probability ~0.1%
        let orders: HashSet<Vec<String>> =
            (0..5000).map(|i| shuffled_order(varied_seed(i))).collect();
        assert!(orders.len() >= 700, "only {} distinct orders", orders.len());
    }

    #[test]
    fn test_uniform_byte_seeds_spread() {
        // ~215 distinct expected from 256 draws over 720 orders
        let orders: HashSet<Vec<String>> = (0u8..=255).map(|b| shuffled_order([b; 32])).collect();
        assert!(orders.len() >= 150, "only {} distinct orders", orders.len());
    }

    #[test]
    fn test_first_pick_is_roughly_uniform() {
        let mut counts = std::collections::HashMap::new();
        for i in 0..3000 {
            let order = shuffled_order(varied_seed(i));
            *counts.entry(order[0].clone()).or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), 6);
        for (name, count) in &counts {
            assert!((350..=650).contains(count), "{} first {} times", name, count);
        }
    }
}
