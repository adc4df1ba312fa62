use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;

use super::command::LexiconCommand;
use super::corpus::Corpus;
use super::mutate::{MIN_PREFIX_SOURCE, autocomplete, autocorrect, remove_target};
use super::profile::{LexiconProfile, load_ref};
use crate::errors::GenError;

/// Autocomplete prefixes keep at most `len - 2` letters, except in the
/// insertion-mode tail which allows `len - 1`.
const PREFIX_TRIM: usize = 2;
const TAIL_PREFIX_TRIM: usize = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScriptStats {
    pub loads: usize,
    pub inserts: usize,
    pub autocompletes: usize,
    pub autocorrects: usize,
    pub removes: usize,
    /// Removes drawn from the whole dictionary rather than the known pool.
    pub unknown_removes: usize,
}

struct Emitter<'w, W: Write> {
    out: &'w mut W,
    stats: ScriptStats,
}

impl<'w, W: Write> Emitter<'w, W> {
    fn new(out: &'w mut W) -> Self {
        Self { out, stats: ScriptStats::default() }
    }

    fn emit(&mut self, cmd: LexiconCommand) -> Result<(), GenError> {
        writeln!(self.out, "{cmd}").map_err(|e| GenError::Io(format!("writing script: {e}")))?;
        match cmd {
            LexiconCommand::Load(_) => self.stats.loads += 1,
            LexiconCommand::Insert(_) => self.stats.inserts += 1,
            LexiconCommand::Autocomplete { .. } => self.stats.autocompletes += 1,
            LexiconCommand::Autocorrect { .. } => self.stats.autocorrects += 1,
            LexiconCommand::Remove(_) => self.stats.removes += 1,
            LexiconCommand::Exit => {}
        }
        Ok(())
    }

    fn loads(&mut self, books: &[&str]) -> Result<(), GenError> {
        for book in books {
            self.emit(LexiconCommand::Load(load_ref(book)))?;
        }
        Ok(())
    }

    /// One query round against `known`; `eligible` indexes its words long
    /// enough to be prefix sources.
    fn probe<R: Rng + ?Sized>(
        &mut self,
        profile: &LexiconProfile,
        known: &[&str],
        eligible: &[usize],
        trim: usize,
        rng: &mut R,
    ) -> Result<(), GenError> {
        if profile.autocomplete {
            if let Some(&i) = eligible.choose(rng) {
                if let Some(cmd) = autocomplete(known[i], trim, rng) {
                    self.emit(cmd)?;
                }
            }
        }
        if profile.autocorrect {
            if let Some(word) = known.choose(rng) {
                self.emit(autocorrect(word, rng))?;
            }
        }
        Ok(())
    }

    fn remove<R: Rng + ?Sized>(&mut self, known: &[&str], dictionary: &[String], rng: &mut R) -> Result<(), GenError> {
        if let Some((word, unknown)) = remove_target(known, dictionary, rng) {
            if unknown {
                self.stats.unknown_removes += 1;
            }
            self.emit(LexiconCommand::Remove(word.to_string()))?;
        }
        Ok(())
    }

    fn finish(mut self) -> Result<ScriptStats, GenError> {
        self.emit(LexiconCommand::Exit)?;
        Ok(self.stats)
    }
}

fn prefix_sources(words: &[&str]) -> Vec<usize> {
    words
        .iter()
        .enumerate()
        .filter(|(_, w)| w.chars().count() >= MIN_PREFIX_SOURCE)
        .map(|(i, _)| i)
        .collect()
}

/// Insertion mode: sample words from the profile's dictionary slice,
/// INSERT them one by one with periodic query rounds and removals, then
/// run the tail query rounds. Ends with `EXIT`.
///
/// # Errors
/// `EmptyPool` if the dictionary slice is empty, `Io` on write failure.
pub fn write_insertion_script<W: Write, R: Rng + ?Sized>(
    profile: &LexiconProfile,
    corpus: &Corpus,
    rng: &mut R,
    out: &mut W,
) -> Result<ScriptStats, GenError> {
    let slice = corpus.dictionary_slice(profile.id)?;
    let words: Vec<&str> = (0..profile.inserts)
        .filter_map(|_| slice.choose(rng).map(String::as_str))
        .collect();
    let mut em = Emitter::new(out);
    em.loads(profile.preload)?;

    let mut eligible: Vec<usize> = Vec::new();
    for (num, word) in words.iter().enumerate() {
        em.emit(LexiconCommand::Insert(word.to_string()))?;
        if word.chars().count() >= MIN_PREFIX_SOURCE {
            eligible.push(num);
        }
        if num == 0 {
            continue;
        }
        let known = &words[..=num];
        if num % profile.query_every == 0 {
            em.probe(profile, known, &eligible, PREFIX_TRIM, rng)?;
        }
        if num % profile.remove_every == 0 {
            em.remove(known, corpus.words(), rng)?;
        }
    }

    em.loads(profile.tail_load)?;
    for _ in 0..profile.final_queries {
        em.probe(profile, &words, &eligible, TAIL_PREFIX_TRIM, rng)?;
    }
    let stats = em.finish()?;
    log::debug!("lexicon: insertion script {} -> {:?}", profile.id, stats);
    Ok(stats)
}

/// Book mode: LOAD the profile's books and run `2 * final_queries` query
/// rounds over the union of their vocabularies, removing periodically.
/// Ends with `EXIT`.
///
/// # Errors
/// `MissingBook` if a book is not in the corpus, `EmptyPool` if the books
/// hold no words, `Io` on write failure.
pub fn write_book_script<W: Write, R: Rng + ?Sized>(
    profile: &LexiconProfile,
    corpus: &Corpus,
    rng: &mut R,
    out: &mut W,
) -> Result<ScriptStats, GenError> {
    let mut vocabulary: BTreeSet<&str> = BTreeSet::new();
    for book in profile.books {
        vocabulary.extend(corpus.vocabulary(book)?);
    }
    let pool: Vec<&str> = vocabulary.into_iter().collect();
    if pool.is_empty() {
        return Err(GenError::EmptyPool(format!("books {:?}", profile.books)));
    }
    let eligible = prefix_sources(&pool);

    let mut em = Emitter::new(out);
    em.loads(profile.books)?;
    for round in 0..2 * profile.final_queries {
        em.probe(profile, &pool, &eligible, PREFIX_TRIM, rng)?;
        if round % profile.remove_every == 0 {
            em.remove(&pool, corpus.words(), rng)?;
        }
    }
    let stats = em.finish()?;
    log::debug!("lexicon: book script {} -> {:?}", profile.id, stats);
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::profile::PROFILES;
    use crate::rng;
    use std::collections::BTreeMap;

    fn small_corpus() -> Corpus {
        let words: Vec<String> = (0..256).map(|i| format!("entry{i}")).collect();
        let mut books = BTreeMap::new();
        for name in ["dracula", "moby_dick", "great_gatsby", "little_women", "romeo_juliet"] {
            books.insert(format!("{name}.txt"), format!("the {name} wolves howl at night"));
        }
        Corpus::new(words, books)
    }

    fn render<F>(f: F) -> (Vec<LexiconCommand>, ScriptStats)
    where
        F: FnOnce(&mut Vec<u8>) -> Result<ScriptStats, GenError>,
    {
        let mut buf = Vec::new();
        let stats = f(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        (text.lines().map(|l| l.parse().unwrap()).collect(), stats)
    }

    #[test]
    fn insertion_script_counts() {
        let corpus = small_corpus();
        let p = &PROFILES[1];
        let (cmds, stats) = render(|b| write_insertion_script(p, &corpus, &mut rng::source(Some(1)), b));
        assert_eq!(stats.inserts, 500);
        // rounds at num = 10, 20, ..., 490 plus the tail
        assert_eq!(stats.autocompletes, 49 + 50);
        assert_eq!(stats.autocorrects, 0);
        // removes at num = 20, 40, ..., 480
        assert_eq!(stats.removes, 24);
        assert_eq!(stats.loads, 0);
        assert_eq!(cmds.last(), Some(&LexiconCommand::Exit));
        assert_eq!(cmds.iter().filter(|c| **c == LexiconCommand::Exit).count(), 1);
    }

    #[test]
    fn insertion_script_loads_around_inserts() {
        let corpus = small_corpus();
        let p = &PROFILES[3];
        let (cmds, stats) = render(|b| write_insertion_script(p, &corpus, &mut rng::source(Some(2)), b));
        assert_eq!(cmds[0], LexiconCommand::Load("data/dracula.txt".into()));
        assert_eq!(stats.loads, 2);
        let tail = cmds.iter().position(|c| *c == LexiconCommand::Load("data/romeo_juliet.txt".into())).unwrap();
        assert!(cmds[..tail].iter().filter(|c| matches!(c, LexiconCommand::Insert(_))).count() == 10_000);
        assert!(cmds[tail..].iter().all(|c| !matches!(c, LexiconCommand::Insert(_) | LexiconCommand::Remove(_))));
    }

    #[test]
    fn book_script_probes_loaded_vocabulary() {
        let corpus = small_corpus();
        let p = &PROFILES[2];
        let (cmds, stats) = render(|b| write_book_script(p, &corpus, &mut rng::source(Some(3)), b));
        assert_eq!(stats.loads, 2);
        assert_eq!(stats.autocompletes, 200);
        assert_eq!(stats.autocorrects, 200);
        // rounds 0, 100
        assert_eq!(stats.removes, 2);
        let pool = ["the", "great_gatsby", "little_women", "wolves", "howl", "at", "night"];
        for c in &cmds {
            if let LexiconCommand::Autocomplete { prefix, .. } = c {
                assert!(pool.iter().any(|w| w.len() >= 4 && w.starts_with(prefix.as_str())));
            }
        }
    }

    #[test]
    fn book_script_rejects_empty_books() {
        let words: Vec<String> = (0..128).map(|i| format!("entry{i}")).collect();
        let mut books = BTreeMap::new();
        books.insert("dracula.txt".to_string(), "  \n".to_string());
        let corpus = Corpus::new(words, books);
        let mut buf = Vec::new();
        let err = write_book_script(&PROFILES[0], &corpus, &mut rng::source(Some(5)), &mut buf).unwrap_err();
        assert!(matches!(err, GenError::EmptyPool(ref m) if m.contains("dracula")), "{err}");
        assert!(buf.is_empty());
    }

    #[test]
    fn book_script_missing_book() {
        let corpus = Corpus::new(vec![], BTreeMap::new());
        let mut buf = Vec::new();
        let err = write_book_script(&PROFILES[0], &corpus, &mut rng::source(Some(4)), &mut buf).unwrap_err();
        assert!(matches!(err, GenError::MissingBook(b) if b == "dracula"));
    }
}
