#![cfg(test)]

// Tiny test-only helpers for temp paths and corpus fixtures
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Create a unique, empty temporary directory under the OS temp dir.
/// If the directory exists, it is removed first.
pub fn temp_dir(stem: &str) -> PathBuf {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut p = std::env::temp_dir();
    p.push(format!("{}_{}_{}", stem, now, n));
    if p.exists() {
        let _ = fs::remove_dir_all(&p);
    }
    fs::create_dir_all(&p).expect("create temp_dir failed");
    p
}

pub const BOOK_NAMES: [&str; 5] =
    ["dracula", "moby_dick", "great_gatsby", "little_women", "romeo_juliet"];

/// Write a small dictionary and the five books the built-in profiles load.
/// Returns `(dictionary, books_dir)`.
pub fn write_corpus(root: &Path) -> (PathBuf, PathBuf) {
    let dictionary = root.join("words_alpha.txt");
    let words: Vec<String> = (0..640).map(|i| format!("word{}", letters(i))).collect();
    fs::write(&dictionary, words.join("\n")).expect("write dictionary");
    let books = root.join("books");
    fs::create_dir_all(&books).expect("create books dir");
    for (b, name) in BOOK_NAMES.iter().enumerate() {
        let text: Vec<String> = (0..40).map(|i| format!("{}book{}", letters(i), letters(b))).collect();
        fs::write(books.join(format!("{name}.txt")), text.join(" ")).expect("write book");
    }
    (dictionary, books)
}

// 0 -> "a", 25 -> "z", 26 -> "ba"
fn letters(mut n: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'a' + (n % 26) as u8);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
