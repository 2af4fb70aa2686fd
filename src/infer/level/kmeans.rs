//! Deterministic 1-D k-means over the candidate font-size population.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::HeadingLevel;

use super::{size_key, LevelStrategy};

/// Lloyd's algorithm specialized to one dimension with a fixed-seed
/// initialization: the first center is drawn with a seeded RNG, the rest by
/// farthest-point selection. Given the same population, seed, and iteration
/// bound, the clustering (and therefore the outline) is identical across
/// runs.
#[derive(Debug, Clone)]
pub struct KMeansStrategy {
    k: usize,
    seed: u64,
    iterations: usize,
}

impl KMeansStrategy {
    pub fn new(k: usize, seed: u64, iterations: usize) -> Self {
        Self {
            k,
            seed,
            iterations,
        }
    }

    fn initial_centers(&self, points: &[f32], k: usize) -> Vec<f32> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut centers = vec![points[rng.random_range(0..points.len())]];

        // Farthest-point selection spreads the remaining centers across the
        // size range; ties resolve to the lowest index.
        while centers.len() < k {
            let mut best_idx = 0;
            let mut best_dist = -1.0f32;
            for (i, &p) in points.iter().enumerate() {
                let dist = centers
                    .iter()
                    .map(|&c| (p - c).abs())
                    .fold(f32::MAX, f32::min);
                if dist > best_dist {
                    best_dist = dist;
                    best_idx = i;
                }
            }
            centers.push(points[best_idx]);
        }
        centers
    }

    fn cluster(&self, points: &[f32], k: usize) -> Vec<f32> {
        let mut centers = self.initial_centers(points, k);

        for _ in 0..self.iterations {
            // Assignment step: nearest center, ties to the lower index.
            let assignment: Vec<usize> = points
                .iter()
                .map(|&p| nearest_center(&centers, p))
                .collect();

            // Update step.
            let mut sums = vec![0.0f32; k];
            let mut counts = vec![0usize; k];
            for (&p, &c) in points.iter().zip(&assignment) {
                sums[c] += p;
                counts[c] += 1;
            }

            let mut next = centers.clone();
            let mut moved = false;
            for c in 0..k {
                if counts[c] == 0 {
                    // Re-seed an empty cluster to the point farthest from
                    // its current nearest center.
                    let far = points
                        .iter()
                        .enumerate()
                        .max_by(|(_, a), (_, b)| {
                            let da = min_distance(&centers, **a);
                            let db = min_distance(&centers, **b);
                            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
                        })
                        .map(|(i, _)| points[i]);
                    if let Some(p) = far {
                        next[c] = p;
                        moved = true;
                    }
                    continue;
                }
                let mean = sums[c] / counts[c] as f32;
                if (mean - centers[c]).abs() > f32::EPSILON {
                    moved = true;
                }
                next[c] = mean;
            }

            centers = next;
            if !moved {
                break;
            }
        }

        centers
    }
}

impl LevelStrategy for KMeansStrategy {
    fn assign(&self, population: &[f32]) -> HashMap<i32, HeadingLevel> {
        if population.is_empty() {
            return HashMap::new();
        }

        let mut distinct: Vec<i32> = population.iter().map(|&s| size_key(s)).collect();
        distinct.sort_unstable();
        distinct.dedup();

        let k = self.k.min(distinct.len());
        let centers = self.cluster(population, k);

        // Rank centers descending: the largest-size cluster is level 1.
        let mut order: Vec<usize> = (0..centers.len()).collect();
        order.sort_by(|&a, &b| {
            centers[b]
                .partial_cmp(&centers[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let mut rank_of_center = vec![0usize; centers.len()];
        for (rank, &c) in order.iter().enumerate() {
            rank_of_center[c] = rank + 1;
        }

        distinct
            .into_iter()
            .map(|key| {
                let size = key as f32 / 10.0;
                let center = nearest_center(&centers, size);
                (key, HeadingLevel::from_rank(rank_of_center[center]))
            })
            .collect()
    }
}

fn nearest_center(centers: &[f32], point: f32) -> usize {
    let mut best = 0;
    let mut best_dist = f32::MAX;
    for (i, &c) in centers.iter().enumerate() {
        let dist = (point - c).abs();
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

fn min_distance(centers: &[f32], point: f32) -> f32 {
    centers
        .iter()
        .map(|&c| (point - c).abs())
        .fold(f32::MAX, f32::min)
}
