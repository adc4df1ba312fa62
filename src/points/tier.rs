use serde::Serialize;
use std::path::PathBuf;

use crate::errors::GenError;

/// Inclusive integer interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub lo: i64,
    pub hi: i64,
}

impl Interval {
    pub const fn new(lo: i64, hi: i64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, v: i64) -> bool {
        self.lo <= v && v <= self.hi
    }
}

/// Scale and value range of one generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeTier {
    pub index: usize,
    pub points: usize,
    pub dims: usize,
    /// Total queries; half NN, half RS.
    pub queries: usize,
    pub interval: Interval,
}

const fn tier(index: usize, points: usize, dims: usize, bound: i64) -> SizeTier {
    SizeTier { index, points, dims, queries: 2 * points, interval: Interval::new(-bound, bound) }
}

pub static TIERS: [SizeTier; 10] = [
    tier(0, 5, 2, 10),
    tier(1, 10, 2, 100),
    tier(2, 20, 2, 100),
    tier(3, 30, 2, 100),
    tier(4, 50, 2, 100),
    tier(5, 100, 3, 10_000),
    tier(6, 1_000, 3, 10_000),
    tier(7, 10_000, 3, 10_000),
    tier(8, 100_000, 3, 10_000),
    tier(9, 400_000, 3, 10_000),
];

impl SizeTier {
    /// Look up a predefined tier.
    ///
    /// # Errors
    /// Returns `UnknownTier` for an index outside the table.
    pub fn get(index: usize) -> Result<&'static SizeTier, GenError> {
        TIERS.get(index).ok_or(GenError::UnknownTier(index))
    }

    /// Dataset path relative to the workload root; also the `LOAD` argument.
    pub fn dataset_path(&self) -> PathBuf {
        PathBuf::from("data").join(format!("kNN{}.txt", self.index))
    }

    pub fn query_path(&self) -> PathBuf {
        PathBuf::from("in").join(format!("{:02}-kNN.in", self.index))
    }

    /// Reference written after `LOAD`, always with `/` separators.
    pub fn dataset_ref(&self) -> String {
        format!("data/kNN{}.txt", self.index)
    }

    pub fn nn_queries(&self) -> usize {
        self.queries / 2
    }
}
