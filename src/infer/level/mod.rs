//! Font-size to heading-level assignment.
//!
//! Two interchangeable strategies sit behind the [`LevelStrategy`] seam.
//! With at most `max_levels` distinct sizes, a pure descending rank maps
//! each size to its own level; forcing so few sizes through cluster
//! boundaries would be arbitrary. With more distinct sizes, a deterministic
//! 1-D k-means groups the population so that a noisy document does not end
//! up with a level per size. The population is one sample per candidate,
//! not per distinct size, so dense body-adjacent sizes pull cluster centers
//! toward themselves.

mod kmeans;
mod rank;

pub use kmeans::KMeansStrategy;
pub use rank::DirectRankStrategy;

use std::collections::HashMap;

use crate::config::InferenceConfig;
use crate::model::{HeadingCandidate, HeadingLevel, TextFragment};

/// Quantization key for font sizes, at 0.1 pt precision. Sub-tenth jitter
/// from transform math must not split a size into two levels.
pub(crate) fn size_key(size: f32) -> i32 {
    (size * 10.0).round() as i32
}

/// A strategy that maps a font-size population to levels.
///
/// `assign` receives one sample per candidate and returns a level for every
/// distinct (quantized) size present in the population.
pub trait LevelStrategy {
    fn assign(&self, population: &[f32]) -> HashMap<i32, HeadingLevel>;
}

/// Assign a provisional level to every candidate fragment.
///
/// Chooses the strategy from the number of distinct candidate sizes and
/// returns the candidates in input order.
pub fn assign_levels(
    candidates: &[&TextFragment],
    config: &InferenceConfig,
) -> Vec<HeadingCandidate> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let population: Vec<f32> = candidates.iter().map(|f| f.font_size).collect();
    let distinct = {
        let mut keys: Vec<i32> = population.iter().map(|&s| size_key(s)).collect();
        keys.sort_unstable();
        keys.dedup();
        keys.len()
    };

    let levels = if distinct <= config.max_levels {
        log::debug!("level assignment: direct rank over {} sizes", distinct);
        DirectRankStrategy::new(config.max_levels).assign(&population)
    } else {
        log::debug!(
            "level assignment: k-means over {} sizes ({} samples)",
            distinct,
            population.len()
        );
        KMeansStrategy::new(
            config.max_levels,
            config.cluster_seed,
            config.cluster_iterations,
        )
        .assign(&population)
    };

    candidates
        .iter()
        .map(|frag| {
            let level = levels
                .get(&size_key(frag.font_size))
                .copied()
                .unwrap_or(HeadingLevel::H4);
            HeadingCandidate::new((*frag).clone(), level)
        })
        .collect()
}
