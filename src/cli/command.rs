use std::path::PathBuf;

use crate::manifest::ManifestOptions;

pub enum Command {
    // Point workload
    Points {
        root: PathBuf,
        seed: Option<u64>,
        tier: Option<usize>,
    },
    VerifyPoints {
        root: PathBuf,
    },
    // Lexicon workload
    Lexicon {
        root: PathBuf,
        seed: u64,
        dictionary: PathBuf,
        books: PathBuf,
    },
    ReformatBooks {
        books: PathBuf,
    },
    // Test manifest
    Manifest {
        suite: PathBuf,
        opts: ManifestOptions,
    },
}
