// Shared fixtures for integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const BOOKS: [&str; 5] = ["dracula", "moby_dick", "great_gatsby", "little_women", "romeo_juliet"];

/// Dictionary of 1280 lowercase words plus the five books, under `root`.
/// Returns `(dictionary, books_dir)`.
pub fn write_corpus(root: &Path) -> (PathBuf, PathBuf) {
    let dictionary = root.join("words_alpha.txt");
    let words: Vec<String> = (0..1280).map(|i| format!("lex{}", alpha(i))).collect();
    fs::write(&dictionary, words.join("\n")).unwrap();
    let books = root.join("books");
    fs::create_dir_all(&books).unwrap();
    for (b, name) in BOOKS.iter().enumerate() {
        let text: Vec<String> = (0..300).map(|i| format!("{}{}", alpha(i * 7 + b), alpha(b))).collect();
        fs::write(books.join(format!("{name}.txt")), text.join(" ")).unwrap();
    }
    (dictionary, books)
}

pub fn alpha(mut n: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'a' + (n % 26) as u8);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    out.reverse();
    String::from_utf8(out).unwrap()
}

pub fn lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path).unwrap().lines().map(str::to_string).collect()
}
