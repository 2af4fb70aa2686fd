//! Direct descending-rank level assignment.

use std::collections::HashMap;

use crate::model::HeadingLevel;

use super::{size_key, LevelStrategy};

/// Rank distinct sizes descending and map rank to level, capped at the
/// configured depth. A pure ordinal mapping: equal sizes always share a
/// level.
#[derive(Debug, Clone)]
pub struct DirectRankStrategy {
    max_levels: usize,
}

impl DirectRankStrategy {
    pub fn new(max_levels: usize) -> Self {
        Self { max_levels }
    }
}

impl LevelStrategy for DirectRankStrategy {
    fn assign(&self, population: &[f32]) -> HashMap<i32, HeadingLevel> {
        let mut keys: Vec<i32> = population.iter().map(|&s| size_key(s)).collect();
        keys.sort_unstable_by(|a, b| b.cmp(a));
        keys.dedup();

        keys.into_iter()
            .enumerate()
            .map(|(i, key)| {
                let rank = (i + 1).min(self.max_levels);
                (key, HeadingLevel::from_rank(rank))
            })
            .collect()
    }
}
