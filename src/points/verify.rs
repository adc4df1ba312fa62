use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::errors::GenError;
use crate::fsutil::read_text;

use super::command::PointCommand;
use super::queries::{MAX_RANGE_SPAN, QueryCounts};
use super::tier::{SizeTier, TIERS};

#[derive(Debug, Clone, Serialize)]
pub struct TierCheck {
    pub tier: usize,
    pub points: usize,
    pub nn: usize,
    pub rs: usize,
}

/// Check a dataset file against its tier. Returns the number of points.
///
/// # Errors
/// `Malformed` on the first violation, `Io` if the file cannot be read.
pub fn verify_dataset(path: &Path, tier: &SizeTier) -> Result<usize, GenError> {
    let text = read_text(path)?;
    let mut lines = text.lines();
    let header = lines.next().ok_or_else(|| GenError::malformed(path, 1, "missing header"))?;
    let head: Vec<&str> = header.split_whitespace().collect();
    let expected = [tier.points.to_string(), tier.dims.to_string()];
    if head != expected {
        return Err(GenError::malformed(
            path,
            1,
            format!("header {header:?}, expected \"{} {}\"", tier.points, tier.dims),
        ));
    }
    let mut count = 0;
    for (i, line) in lines.enumerate() {
        let lineno = i + 2;
        let values = line
            .split_whitespace()
            .map(|t| t.parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| GenError::malformed(path, lineno, e.to_string()))?;
        if values.len() != tier.dims {
            return Err(GenError::malformed(
                path,
                lineno,
                format!("{} coordinates, expected {}", values.len(), tier.dims),
            ));
        }
        if let Some(v) = values.iter().find(|v| !tier.interval.contains(**v)) {
            return Err(GenError::malformed(path, lineno, format!("{v} outside interval")));
        }
        count += 1;
    }
    if count != tier.points {
        return Err(GenError::malformed(path, count + 1, format!("{count} points, expected {}", tier.points)));
    }
    Ok(count)
}

/// Check a query script against its tier.
///
/// # Errors
/// `Malformed` on the first violation, `Io` if the file cannot be read.
pub fn verify_queries(path: &Path, tier: &SizeTier) -> Result<QueryCounts, GenError> {
    let text = read_text(path)?;
    let mut counts = QueryCounts::default();
    let mut exited = false;
    // NN and RS lines alternate, starting with NN
    let mut awaiting_rs = false;
    for (i, line) in text.lines().enumerate() {
        let lineno = i + 1;
        if exited {
            return Err(GenError::malformed(path, lineno, "content after EXIT"));
        }
        let cmd: PointCommand = line.parse().map_err(|e: String| GenError::malformed(path, lineno, e))?;
        match (lineno, cmd) {
            (1, PointCommand::Load(r)) if r == tier.dataset_ref() => {}
            (1, other) => {
                return Err(GenError::malformed(
                    path,
                    lineno,
                    format!("expected LOAD {}, got {other}", tier.dataset_ref()),
                ));
            }
            (_, PointCommand::Load(_)) => {
                return Err(GenError::malformed(path, lineno, "LOAD after the first line"));
            }
            (_, PointCommand::Nn(point)) => {
                if point.len() != tier.dims || point.iter().any(|v| !tier.interval.contains(*v)) {
                    return Err(GenError::malformed(path, lineno, "NN point has wrong shape or range"));
                }
                if awaiting_rs {
                    return Err(GenError::malformed(path, lineno, "NN follows NN"));
                }
                awaiting_rs = true;
                counts.nn += 1;
            }
            (_, PointCommand::Rs(ranges)) => {
                if ranges.len() != tier.dims {
                    return Err(GenError::malformed(path, lineno, "RS has wrong dimensionality"));
                }
                for (lo, hi) in ranges {
                    let ok = tier.interval.contains(lo)
                        && tier.interval.contains(hi)
                        && lo <= hi
                        && hi.abs_diff(lo) <= MAX_RANGE_SPAN.unsigned_abs();
                    if !ok {
                        return Err(GenError::malformed(path, lineno, format!("bad range {lo} {hi}")));
                    }
                }
                if !awaiting_rs {
                    return Err(GenError::malformed(path, lineno, "RS without a preceding NN"));
                }
                awaiting_rs = false;
                counts.rs += 1;
            }
            (_, PointCommand::Exit) => exited = true,
        }
    }
    if !exited {
        return Err(GenError::malformed(path, text.lines().count(), "missing EXIT"));
    }
    if counts.nn != tier.nn_queries() || counts.rs != tier.nn_queries() {
        return Err(GenError::malformed(
            path,
            text.lines().count(),
            format!("{} NN / {} RS, expected {} of each", counts.nn, counts.rs, tier.nn_queries()),
        ));
    }
    Ok(counts)
}

/// Verify every tier that has files under `root`.
///
/// # Errors
/// `EmptyInput` if no tier has been generated, otherwise the first failure.
pub fn verify_all(root: &Path) -> Result<Vec<TierCheck>, GenError> {
    let mut checks = Vec::new();
    for tier in &TIERS {
        let dataset: PathBuf = root.join(tier.dataset_path());
        let queries: PathBuf = root.join(tier.query_path());
        if !dataset.exists() && !queries.exists() {
            continue;
        }
        let points = verify_dataset(&dataset, tier)?;
        let counts = verify_queries(&queries, tier)?;
        log::debug!("verify: tier {} ok ({} points)", tier.index, points);
        checks.push(TierCheck { tier: tier.index, points, nn: counts.nn, rs: counts.rs });
    }
    if checks.is_empty() {
        return Err(GenError::EmptyInput(root.to_path_buf()));
    }
    Ok(checks)
}
