use rand::Rng;
use serde::Serialize;
use std::io::{self, Write};

use super::command::PointCommand;
use super::dataset::random_point;
use super::tier::{Interval, SizeTier};

/// Widest range a single RS dimension may span.
pub const MAX_RANGE_SPAN: i64 = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueryCounts {
    pub nn: usize,
    pub rs: usize,
}

/// Per dimension: `lo` uniform in the interval, `hi` uniform in
/// `[lo, min(lo + MAX_RANGE_SPAN, interval.hi)]`.
pub fn random_ranges<R: Rng + ?Sized>(
    interval: Interval,
    dims: usize,
    rng: &mut R,
) -> Vec<(i64, i64)> {
    (0..dims)
        .map(|_| {
            let lo = rng.random_range(interval.lo..=interval.hi);
            let hi = rng.random_range(lo..=(lo + MAX_RANGE_SPAN).min(interval.hi));
            (lo, hi)
        })
        .collect()
}

/// Write `LOAD <dataset_ref>`, then NN/RS pairs until the tier's query
/// budget is spent, then `EXIT`.
///
/// # Errors
/// Returns any error raised by the writer.
pub fn write_queries<W: Write, R: Rng + ?Sized>(
    tier: &SizeTier,
    dataset_ref: &str,
    rng: &mut R,
    out: &mut W,
) -> io::Result<QueryCounts> {
    let mut counts = QueryCounts::default();
    writeln!(out, "{}", PointCommand::Load(dataset_ref.to_string()))?;
    for _ in 0..tier.nn_queries() {
        let nn = PointCommand::Nn(random_point(tier.interval, tier.dims, rng));
        writeln!(out, "{nn}")?;
        counts.nn += 1;
        let rs = PointCommand::Rs(random_ranges(tier.interval, tier.dims, rng));
        writeln!(out, "{rs}")?;
        counts.rs += 1;
    }
    writeln!(out, "{}", PointCommand::Exit)?;
    Ok(counts)
}
