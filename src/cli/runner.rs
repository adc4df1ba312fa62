use std::io::Write;

use crate::errors::GenError;
use crate::lexicon::{self, Corpus};
use crate::manifest;
use crate::points;
use crate::rng;

use super::command::Command;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputMode {
    Human,
    Plain,
    Json,
}

pub fn run(cmd: Command) -> Result<(), GenError> {
    run_with_format(cmd, OutputMode::Human)
}

pub fn run_with_format(cmd: Command, mode: OutputMode) -> Result<(), GenError> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    run_to(cmd, mode, &mut lock)
}

/// Run `cmd`, writing its summary to `out`.
///
/// # Errors
/// Returns the generator's error, or an I/O error writing the summary.
pub fn run_to<W: Write>(cmd: Command, mode: OutputMode, out: &mut W) -> Result<(), GenError> {
    let io = |e: std::io::Error| GenError::Io(format!("stdout: {e}"));
    match cmd {
        Command::Points { root, seed, tier } => {
            let mut r = rng::source(seed);
            let reports = match tier {
                Some(t) => vec![points::generate_tier(&root, t, &mut r)?],
                None => points::generate_all(&root, &mut r)?,
            };
            match mode {
                OutputMode::Json => writeln!(out, "{}", serde_json::to_string(&reports)?).map_err(io)?,
                OutputMode::Plain => {
                    for t in &reports {
                        writeln!(out, "tier={} points={} nn={} rs={}", t.tier, t.points, t.nn, t.rs).map_err(io)?;
                    }
                }
                OutputMode::Human => {
                    for t in &reports {
                        writeln!(
                            out,
                            "tier {}: {} ({} points, k={}) + {} ({} NN, {} RS)",
                            t.tier,
                            t.dataset.display(),
                            t.points,
                            t.dims,
                            t.queries.display(),
                            t.nn,
                            t.rs
                        )
                        .map_err(io)?;
                    }
                }
            }
            Ok(())
        }
        Command::VerifyPoints { root } => {
            let checks = points::verify_all(&root)?;
            match mode {
                OutputMode::Json => writeln!(out, "{}", serde_json::to_string(&checks)?).map_err(io)?,
                _ => {
                    for c in &checks {
                        writeln!(out, "tier={} ok points={} nn={} rs={}", c.tier, c.points, c.nn, c.rs).map_err(io)?;
                    }
                }
            }
            Ok(())
        }
        Command::Lexicon { root, seed, dictionary, books } => {
            let corpus = Corpus::load(&dictionary, &books)?;
            let mut r = rng::source(Some(seed));
            let reports = lexicon::generate_all(&root, &corpus, &mut r)?;
            match mode {
                OutputMode::Json => writeln!(out, "{}", serde_json::to_string(&reports)?).map_err(io)?,
                OutputMode::Plain => {
                    for s in &reports {
                        writeln!(out, "file={} lines={}", s.path.display(), line_count(&s.stats)).map_err(io)?;
                    }
                }
                OutputMode::Human => {
                    for s in &reports {
                        writeln!(
                            out,
                            "{} [{:?}]: {} loads, {} inserts, {} autocomplete, {} autocorrect, {} removes ({} unknown)",
                            s.path.display(),
                            s.mode,
                            s.stats.loads,
                            s.stats.inserts,
                            s.stats.autocompletes,
                            s.stats.autocorrects,
                            s.stats.removes,
                            s.stats.unknown_removes
                        )
                        .map_err(io)?;
                    }
                }
            }
            Ok(())
        }
        Command::ReformatBooks { books } => {
            let n = lexicon::reformat_books(&books)?;
            match mode {
                OutputMode::Json => {
                    let json = serde_json::json!({"action": "reformatted", "books": n});
                    writeln!(out, "{json}").map_err(io)?;
                }
                OutputMode::Plain => writeln!(out, "reformatted {n}").map_err(io)?,
                OutputMode::Human => writeln!(out, "reformatted {n} books in {}", books.display()).map_err(io)?,
            }
            Ok(())
        }
        Command::Manifest { suite, opts } => {
            let manifest::Manifest { inputs, entries } = manifest::write_manifest(&suite, &opts)?;
            match mode {
                OutputMode::Json => writeln!(out, "{}", serde_json::to_string(&entries)?).map_err(io)?,
                OutputMode::Plain => {
                    let score: u64 = entries.iter().map(|e| e.test_score).sum();
                    writeln!(out, "entries={} score={} out={}", entries.len(), score, opts.out.display())
                        .map_err(io)?;
                }
                OutputMode::Human => {
                    for f in &inputs {
                        writeln!(out, "{}", f.display()).map_err(io)?;
                    }
                    writeln!(out, "{}", manifest::to_json(&entries, 4)?).map_err(io)?;
                }
            }
            Ok(())
        }
    }
}

fn line_count(s: &lexicon::ScriptStats) -> usize {
    // +1 for EXIT
    s.loads + s.inserts + s.autocompletes + s.autocorrects + s.removes + 1
}
