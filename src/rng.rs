//! Random sources for the generators.
//!
//! Generators take any `R: rand::Rng` so callers decide reproducibility:
//! the lexicon workload is always seeded, the point workload only when a
//! seed is configured.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// A seeded `StdRng` when `seed` is given, otherwise one seeded from the OS.
#[must_use]
pub fn source(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => {
            log::debug!("rng: seeded with {s}");
            StdRng::seed_from_u64(s)
        }
        None => {
            log::debug!("rng: seeded from OS entropy");
            StdRng::from_os_rng()
        }
    }
}

/// Uniform lowercase ASCII letter other than `not`.
pub fn letter_other_than<R: Rng + ?Sized>(rng: &mut R, not: char) -> char {
    loop {
        let c = LOWERCASE[rng.random_range(0..LOWERCASE.len())] as char;
        if c != not {
            return c;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = source(Some(7));
        let mut b = source(Some(7));
        for _ in 0..32 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn substitute_never_returns_original() {
        let mut rng = source(Some(1));
        for _ in 0..500 {
            let c = letter_other_than(&mut rng, 'e');
            assert_ne!(c, 'e');
            assert!(c.is_ascii_lowercase());
        }
    }
}
