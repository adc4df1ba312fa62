use rand::Rng;
use std::io::{self, Write};

use super::tier::{Interval, SizeTier};

/// `dims` integers drawn uniformly from `interval`.
pub fn random_point<R: Rng + ?Sized>(interval: Interval, dims: usize, rng: &mut R) -> Vec<i64> {
    (0..dims).map(|_| rng.random_range(interval.lo..=interval.hi)).collect()
}

/// Write `<n> <k>` followed by `n` uniformly random points.
///
/// # Errors
/// Returns any error raised by the writer.
pub fn write_dataset<W: Write, R: Rng + ?Sized>(
    tier: &SizeTier,
    rng: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{} {}", tier.points, tier.dims)?;
    for _ in 0..tier.points {
        let point = random_point(tier.interval, tier.dims, rng);
        let mut first = true;
        for v in point {
            if first {
                write!(out, "{v}")?;
                first = false;
            } else {
                write!(out, " {v}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::tier::TIERS;
    use crate::rng;

    #[test]
    fn tier_zero_dataset_shape() {
        let mut buf = Vec::new();
        write_dataset(&TIERS[0], &mut rng::source(Some(3)), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("5 2"));
        let rows: Vec<Vec<i64>> = lines
            .map(|l| l.split(' ').map(|t| t.parse().unwrap()).collect())
            .collect();
        assert_eq!(rows.len(), 5);
        for row in rows {
            assert_eq!(row.len(), 2);
            assert!(row.iter().all(|v| (-10..=10).contains(v)));
        }
    }
}
