//! Lexicon workload: INSERT / AUTOCOMPLETE / AUTOCORRECT / REMOVE scripts
//! built from a dictionary and a small corpus of books.

mod command;
mod corpus;
mod mutate;
mod profile;
mod script;

pub use command::LexiconCommand;
pub use corpus::{Corpus, normalize_text, reformat_books};
pub use mutate::{MAX_MISTAKES, MAX_TYPO_BUDGET, MIN_PREFIX_SOURCE, UNKNOWN_REMOVE_DRAW, autocomplete, autocorrect, remove_target};
pub use profile::{LexiconProfile, PROFILES, load_ref};
pub use script::{ScriptStats, write_book_script, write_insertion_script};

use rand::Rng;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::errors::GenError;
use crate::fsutil::write_atomic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptMode {
    Insertion,
    Book,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScriptReport {
    pub profile: usize,
    pub mode: ScriptMode,
    pub path: PathBuf,
    pub stats: ScriptStats,
}

/// Write the insertion-mode then the book-mode script of one profile.
///
/// # Errors
/// `UnknownProfile`, corpus errors, or I/O errors for either file.
pub fn generate_profile<R: Rng + ?Sized>(
    root: &Path,
    id: usize,
    corpus: &Corpus,
    rng: &mut R,
) -> Result<Vec<ScriptReport>, GenError> {
    let profile = LexiconProfile::get(id)?;
    let mut reports = Vec::with_capacity(2);
    for mode in [ScriptMode::Insertion, ScriptMode::Book] {
        let path = match mode {
            ScriptMode::Insertion => root.join(profile.insertion_path()),
            ScriptMode::Book => root.join(profile.book_path()),
        };
        // write_atomic's own errors already name the path; script writes do not
        let stats = write_atomic(&path, |w| {
            let written = match mode {
                ScriptMode::Insertion => write_insertion_script(profile, corpus, rng, w),
                ScriptMode::Book => write_book_script(profile, corpus, rng, w),
            };
            written.map_err(|e| match e {
                GenError::Io(msg) => GenError::Io(format!("{}: {msg}", path.display())),
                other => other,
            })
        })?;
        log::info!(
            "lexicon: {} ({:?}, profile {}): {} inserts, {} autocomplete, {} autocorrect, {} removes",
            path.display(),
            mode,
            id,
            stats.inserts,
            stats.autocompletes,
            stats.autocorrects,
            stats.removes
        );
        reports.push(ScriptReport { profile: id, mode, path, stats });
    }
    Ok(reports)
}

/// Generate both scripts for every profile, in profile order, using one
/// random stream so a fixed seed reproduces the whole fixture set.
///
/// # Errors
/// Stops at the first failing script.
pub fn generate_all<R: Rng + ?Sized>(
    root: &Path,
    corpus: &Corpus,
    rng: &mut R,
) -> Result<Vec<ScriptReport>, GenError> {
    let mut reports = Vec::new();
    for profile in &PROFILES {
        reports.extend(generate_profile(root, profile.id, corpus, rng)?);
    }
    Ok(reports)
}
