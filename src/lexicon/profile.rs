use serde::Serialize;
use std::path::PathBuf;

use crate::errors::GenError;

/// Size and frequency knobs for one lexicon test id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LexiconProfile {
    pub id: usize,
    /// Words inserted in insertion mode.
    pub inserts: usize,
    /// Query round after every `query_every`-th insert.
    pub query_every: usize,
    /// Tail rounds in insertion mode; book mode runs twice as many.
    pub final_queries: usize,
    pub remove_every: usize,
    pub autocomplete: bool,
    pub autocorrect: bool,
    /// Books loaded by the book-mode script; its probe pool.
    pub books: &'static [&'static str],
    /// Books loaded before the inserts of the insertion-mode script.
    pub preload: &'static [&'static str],
    /// Books loaded before the tail queries of the insertion-mode script.
    pub tail_load: &'static [&'static str],
}

pub static PROFILES: [LexiconProfile; 4] = [
    LexiconProfile {
        id: 0,
        inserts: 50,
        query_every: 5,
        final_queries: 10,
        remove_every: 1000,
        autocomplete: false,
        autocorrect: true,
        books: &["dracula"],
        preload: &[],
        tail_load: &[],
    },
    LexiconProfile {
        id: 1,
        inserts: 500,
        query_every: 10,
        final_queries: 50,
        remove_every: 20,
        autocomplete: true,
        autocorrect: false,
        books: &["moby_dick"],
        preload: &[],
        tail_load: &[],
    },
    LexiconProfile {
        id: 2,
        inserts: 2000,
        query_every: 50,
        final_queries: 100,
        remove_every: 100,
        autocomplete: true,
        autocorrect: true,
        books: &["great_gatsby", "little_women"],
        preload: &["moby_dick"],
        tail_load: &[],
    },
    LexiconProfile {
        id: 3,
        inserts: 10_000,
        query_every: 100,
        final_queries: 1000,
        remove_every: 200,
        autocomplete: true,
        autocorrect: true,
        books: &["great_gatsby", "little_women", "dracula", "moby_dick", "romeo_juliet"],
        preload: &["dracula"],
        tail_load: &["romeo_juliet"],
    },
];

impl LexiconProfile {
    /// # Errors
    /// Returns `UnknownProfile` for an id outside the table.
    pub fn get(id: usize) -> Result<&'static LexiconProfile, GenError> {
        PROFILES.get(id).ok_or(GenError::UnknownProfile(id))
    }

    pub fn insertion_path(&self) -> PathBuf {
        PathBuf::from("in").join(format!("{:02}-mk.in", 2 * self.id + 2))
    }

    pub fn book_path(&self) -> PathBuf {
        PathBuf::from("in").join(format!("{:02}-mk.in", 2 * self.id + 3))
    }
}

/// `LOAD` argument for a book, as seen by the program under test.
pub fn load_ref(book: &str) -> String {
    format!("data/{book}.txt")
}
