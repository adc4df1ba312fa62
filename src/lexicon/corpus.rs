use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::Path;

use crate::errors::GenError;
use crate::fsutil::{list_files, read_text, write_atomic};

/// Dictionary words plus book texts keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    words: Vec<String>,
    books: BTreeMap<String, String>,
}

impl Corpus {
    pub fn new(words: Vec<String>, books: BTreeMap<String, String>) -> Self {
        Self { words, books }
    }

    /// Read the whitespace-separated dictionary and every file of `books_dir`.
    ///
    /// # Errors
    /// Returns an I/O error if the dictionary or a book cannot be read.
    pub fn load(dictionary: &Path, books_dir: &Path) -> Result<Self, GenError> {
        let words: Vec<String> = read_text(dictionary)?.split_whitespace().map(str::to_string).collect();
        let mut books = BTreeMap::new();
        for path in list_files(books_dir)? {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            books.insert(name.to_string(), read_text(&path)?);
        }
        log::info!(
            "lexicon: loaded {} dictionary words, {} books from {}",
            words.len(),
            books.len(),
            books_dir.display()
        );
        Ok(Self { words, books })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn book_names(&self) -> impl Iterator<Item = &str> {
        self.books.keys().map(String::as_str)
    }

    /// Dictionary slice `[w*8*id, w*(8*id+1))` with `w = len / 64`.
    ///
    /// # Errors
    /// `EmptyPool` when the slice is empty (dictionary under 64 words).
    pub fn dictionary_slice(&self, id: usize) -> Result<&[String], GenError> {
        let w = self.words.len() / 64;
        let slice = self.words.get(w * 8 * id..w * (8 * id + 1)).unwrap_or(&[]);
        if slice.is_empty() {
            return Err(GenError::EmptyPool(format!(
                "dictionary slice {id} ({} words total)",
                self.words.len()
            )));
        }
        Ok(slice)
    }

    /// Distinct words of `books/<book>.txt`, sorted.
    ///
    /// # Errors
    /// `MissingBook` if the book was not loaded.
    pub fn vocabulary(&self, book: &str) -> Result<BTreeSet<&str>, GenError> {
        let text = self
            .books
            .get(&format!("{book}.txt"))
            .ok_or_else(|| GenError::MissingBook(book.to_string()))?;
        Ok(text.split_whitespace().collect())
    }
}

/// Lowercase `text`, keeping only alphabetic and whitespace characters.
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Rewrite every file in `dir` through [`normalize_text`]. Returns the
/// number of books rewritten.
///
/// # Errors
/// Returns an I/O error for the first book that cannot be read or written.
pub fn reformat_books(dir: &Path) -> Result<usize, GenError> {
    let files = list_files(dir)?;
    for path in &files {
        let text = normalize_text(&read_text(path)?);
        write_atomic(path, |w| w.write_all(text.as_bytes()).map_err(|e| GenError::io(path, e)))?;
        log::info!("reformat: {}", path.display());
    }
    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{temp_dir, write_corpus};

    #[test]
    fn normalize_drops_punctuation_and_digits() {
        assert_eq!(normalize_text("It's 12 o'Clock,\nDRACULA!"), "its  oclock\ndracula");
    }

    #[test]
    fn slices_follow_dictionary_eighths() {
        let words: Vec<String> = (0..128).map(|i| format!("w{i}")).collect();
        let corpus = Corpus::new(words, BTreeMap::new());
        let s0 = corpus.dictionary_slice(0).unwrap();
        assert_eq!(s0.len(), 2);
        assert_eq!(s0[0], "w0");
        assert_eq!(corpus.dictionary_slice(3).unwrap()[0], "w48");
        let tiny = Corpus::new(vec!["a".into()], BTreeMap::new());
        assert!(matches!(tiny.dictionary_slice(0), Err(GenError::EmptyPool(_))));
    }

    #[test]
    fn load_indexes_books_by_file_name() {
        let dir = temp_dir("corpus_load");
        let (dict, books) = write_corpus(&dir);
        let corpus = Corpus::load(&dict, &books).unwrap();
        assert_eq!(corpus.words().len(), 640);
        assert_eq!(corpus.book_names().count(), 5);
        assert_eq!(corpus.vocabulary("dracula").unwrap().len(), 40);
        assert!(matches!(corpus.vocabulary("ulysses"), Err(GenError::MissingBook(_))));
    }

    #[test]
    fn reformat_rewrites_in_place() {
        let dir = temp_dir("corpus_reformat");
        std::fs::write(dir.join("a.txt"), "Hello, World 42").unwrap();
        assert_eq!(reformat_books(&dir).unwrap(), 1);
        assert_eq!(std::fs::read_to_string(dir.join("a.txt")).unwrap(), "hello world ");
    }
}
