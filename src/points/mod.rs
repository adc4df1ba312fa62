//! Point workload: k-dimensional datasets and NN/RS query scripts.

mod command;
mod dataset;
mod queries;
mod tier;
mod verify;

pub use command::PointCommand;
pub use dataset::{random_point, write_dataset};
pub use queries::{MAX_RANGE_SPAN, QueryCounts, random_ranges, write_queries};
pub use tier::{Interval, SizeTier, TIERS};
pub use verify::{TierCheck, verify_all, verify_dataset, verify_queries};

use rand::Rng;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::errors::GenError;
use crate::fsutil::write_atomic;

#[derive(Debug, Clone, Serialize)]
pub struct TierReport {
    pub tier: usize,
    pub dataset: PathBuf,
    pub queries: PathBuf,
    pub points: usize,
    pub dims: usize,
    pub nn: usize,
    pub rs: usize,
}

/// Write the dataset and then the query script of one tier under `root`.
///
/// # Errors
/// Returns `UnknownTier` or an I/O error for either file.
pub fn generate_tier<R: Rng + ?Sized>(
    root: &Path,
    index: usize,
    rng: &mut R,
) -> Result<TierReport, GenError> {
    let tier = SizeTier::get(index)?;
    let dataset = root.join(tier.dataset_path());
    write_atomic(&dataset, |w| write_dataset(tier, rng, w).map_err(|e| GenError::io(&dataset, e)))?;
    let queries = root.join(tier.query_path());
    let counts = write_atomic(&queries, |w| {
        write_queries(tier, &tier.dataset_ref(), rng, w).map_err(|e| GenError::io(&queries, e))
    })?;
    log::info!(
        "points: tier {} -> {} ({} x {}), {} ({} NN, {} RS)",
        tier.index,
        dataset.display(),
        tier.points,
        tier.dims,
        queries.display(),
        counts.nn,
        counts.rs
    );
    Ok(TierReport {
        tier: tier.index,
        dataset,
        queries,
        points: tier.points,
        dims: tier.dims,
        nn: counts.nn,
        rs: counts.rs,
    })
}

/// Generate every predefined tier in order.
///
/// # Errors
/// Stops at the first failing tier.
pub fn generate_all<R: Rng + ?Sized>(root: &Path, rng: &mut R) -> Result<Vec<TierReport>, GenError> {
    TIERS.iter().map(|t| generate_tier(root, t.index, rng)).collect()
}
