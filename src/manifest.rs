//! Test manifest: one JSON entry per input file of a suite, for the
//! external test runner.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::GenError;
use crate::fsutil::{list_files, write_atomic};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestEntry {
    pub id: usize,
    pub name: String,
    pub status: String,
    pub log: String,
    pub time_normal: f64,
    pub time_valgrind: f64,
    pub timeout: u64,
    pub test_score: u64,
}

#[derive(Debug, Clone)]
pub struct ManifestOptions {
    /// Display name is `"{name_prefix} {id + 1}"`.
    pub name_prefix: String,
    /// Points split evenly across entries; the remainder is dropped.
    pub total_score: u64,
    pub timeout: u64,
    /// Sort input files by name instead of keeping directory listing order.
    pub sorted: bool,
    pub out: PathBuf,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            name_prefix: "kNN".to_string(),
            total_score: 45,
            timeout: 30,
            sorted: false,
            out: PathBuf::from("tests.json"),
        }
    }
}

/// Entries plus the input file each one was built from, in the same order.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub inputs: Vec<PathBuf>,
    pub entries: Vec<ManifestEntry>,
}

/// Build one entry per regular file of `suite/in`.
///
/// # Errors
/// `EmptyInput` when the directory holds no files, `Io` if it cannot be read.
pub fn build_manifest(suite: &Path, opts: &ManifestOptions) -> Result<Manifest, GenError> {
    let input = suite.join("in");
    let mut files = list_files(&input)?;
    if files.is_empty() {
        return Err(GenError::EmptyInput(input));
    }
    if opts.sorted {
        files.sort();
    }
    let score = opts.total_score / files.len() as u64;
    let entries = files
        .iter()
        .enumerate()
        .map(|(i, f)| {
            log::debug!("manifest: {} -> test {}", f.display(), i);
            ManifestEntry {
                id: i,
                name: format!("{} {}", opts.name_prefix, i + 1),
                status: "0".to_string(),
                log: String::new(),
                time_normal: 0.0,
                time_valgrind: 0.0,
                timeout: opts.timeout,
                test_score: score,
            }
        })
        .collect();
    Ok(Manifest { inputs: files, entries })
}

/// Build the manifest and write it to `opts.out` as 2-space indented JSON.
///
/// # Errors
/// See [`build_manifest`]; also fails if the output cannot be written.
pub fn write_manifest(suite: &Path, opts: &ManifestOptions) -> Result<Manifest, GenError> {
    let manifest = build_manifest(suite, opts)?;
    write_atomic(&opts.out, |w| {
        serde_json::to_writer_pretty(&mut *w, &manifest.entries)?;
        writeln!(w).map_err(|e| GenError::io(&opts.out, e))
    })?;
    log::info!("manifest: {} entries -> {}", manifest.entries.len(), opts.out.display());
    Ok(manifest)
}

/// Render entries as JSON indented with `indent` spaces.
///
/// # Errors
/// Returns a serialization error.
pub fn to_json(entries: &[ManifestEntry], indent: usize) -> Result<String, GenError> {
    let pad = vec![b' '; indent];
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(&pad);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    entries.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| GenError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_dir;

    #[test]
    fn four_space_rendering() {
        let entries = vec![ManifestEntry {
            id: 0,
            name: "kNN 1".into(),
            status: "0".into(),
            log: String::new(),
            time_normal: 0.0,
            time_valgrind: 0.0,
            timeout: 30,
            test_score: 45,
        }];
        let json = to_json(&entries, 4).unwrap();
        assert!(json.starts_with("[\n    {\n        \"id\": 0,"));
        assert!(json.contains("\"time_normal\": 0.0"));
    }

    #[test]
    fn sorted_option_orders_by_name() {
        let suite = temp_dir("manifest_sorted");
        std::fs::create_dir_all(suite.join("in")).unwrap();
        for n in ["03-kNN.in", "01-kNN.in", "02-kNN.in"] {
            std::fs::write(suite.join("in").join(n), "EXIT\n").unwrap();
        }
        let opts = ManifestOptions { sorted: true, ..ManifestOptions::default() };
        let Manifest { inputs, entries } = build_manifest(&suite, &opts).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(inputs[0], suite.join("in").join("01-kNN.in"));
        assert!(entries.iter().all(|e| e.test_score == 15));
        assert_eq!(entries[2].name, "kNN 3");
    }
}
