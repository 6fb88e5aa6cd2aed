use itertools::Itertools;
use rand::Rng;
use crate::MIN_CITIES;
use crate::utils::error::{Error, Result};

const MAX_RANDOM_DISTANCE: u32 = 100;


/// Immutable cost matrix between every pair of cities. Off-diagonal weights
/// are positive. A complete tour never uses the diagonal, but partial lengths
/// over a half-filled buffer do, so it must be finite and non-negative.
#[derive(Clone, Debug)]
pub struct DistanceGraph {
    distances: Vec<Vec<f64>>,
}

impl DistanceGraph {
    pub fn new(distances: Vec<Vec<f64>>) -> Result<Self> {
        let n = distances.len();
        if n < MIN_CITIES {
            return Err(Error::TooFewCities(n, MIN_CITIES));
        }
        for (from, row) in distances.iter().enumerate() {
            if row.len() != n {
                return Err(Error::NotSquare(from, row.len(), n));
            }
            for (to, &distance) in row.iter().enumerate() {
                let valid = match from == to {
                    true  => distance.is_finite() && distance >= 0.0,
                    false => distance.is_finite() && distance > 0.0,
                };
                if !valid {
                    return Err(Error::InvalidDistance { from, to, distance });
                }
            }
        }
        Ok(DistanceGraph { distances })
    }
    /// Integer weights drawn uniformly from `1..=100`, not necessarily symmetric.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Result<Self> {
        let distances = (0..n)
            .map(|from| (0..n)
                .map(|to| match from == to {
                    true  => 0.0,
                    false => rng.gen_range(1..=MAX_RANDOM_DISTANCE) as f64,
                })
                .collect())
            .collect();
        DistanceGraph::new(distances)
    }
    pub fn len(&self) -> usize {
        self.distances.len()
    }
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        debug_assert!(from < self.len() && to < self.len());
        self.distances[from][to]
    }
    /// Cost of the closed cycle through `tour`, including the edge from the
    /// last entry back to the first. Repeated entries are summed as they are.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        match tour.len() {
            0 => 0.0,
            _ => tour.iter()
                .circular_tuple_windows()
                .map(|(&from, &to)| self.distance(from, to))
                .sum(),
        }
    }
}
