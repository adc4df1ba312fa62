use rand::Rng;
use rand::seq::{IndexedRandom, index};

use super::command::LexiconCommand;
use crate::rng::letter_other_than;

/// Shortest word used as a prefix source.
pub const MIN_PREFIX_SOURCE: usize = 4;
pub const MAX_TYPO_BUDGET: u8 = 3;
pub const MAX_MISTAKES: usize = 2;
/// REMOVE draws `0..=UNKNOWN_REMOVE_DRAW` and targets the dictionary on a 1.
pub const UNKNOWN_REMOVE_DRAW: u32 = 100;

/// Prefix of `word` whose length is uniform in `1..=len - trim`, with a
/// random typo budget. `None` if the word is too short for that range.
pub fn autocomplete<R: Rng + ?Sized>(word: &str, trim: usize, rng: &mut R) -> Option<LexiconCommand> {
    let len = word.chars().count();
    if len < MIN_PREFIX_SOURCE || len <= trim {
        return None;
    }
    let keep = rng.random_range(1..=len - trim);
    Some(LexiconCommand::Autocomplete {
        prefix: word.chars().take(keep).collect(),
        budget: rng.random_range(0..=MAX_TYPO_BUDGET),
    })
}

/// Substitute 1..=MAX_MISTAKES distinct letters (never more than the word
/// has) with different lowercase letters. The reported count is exact.
pub fn autocorrect<R: Rng + ?Sized>(word: &str, rng: &mut R) -> LexiconCommand {
    let mut letters: Vec<char> = word.chars().collect();
    let mistakes = rng.random_range(1..=MAX_MISTAKES).min(letters.len());
    for pos in index::sample(rng, letters.len(), mistakes) {
        letters[pos] = letter_other_than(rng, letters[pos]);
    }
    LexiconCommand::Autocorrect { word: letters.into_iter().collect(), mistakes }
}

/// Pick a REMOVE target: a known word, or with odds 1 in
/// `UNKNOWN_REMOVE_DRAW + 1` any dictionary word. The flag is true for the
/// dictionary branch.
pub fn remove_target<'a, K, D, R>(known: &'a [K], dictionary: &'a [D], rng: &mut R) -> Option<(&'a str, bool)>
where
    K: AsRef<str>,
    D: AsRef<str>,
    R: Rng + ?Sized,
{
    if rng.random_range(0..=UNKNOWN_REMOVE_DRAW) == 1 {
        if let Some(w) = dictionary.choose(rng) {
            return Some((w.as_ref(), true));
        }
    }
    known.choose(rng).map(|w| (w.as_ref(), false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;

    fn differing(a: &str, b: &str) -> usize {
        a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
    }

    #[test]
    fn autocorrect_count_matches_changes() {
        let mut r = rng::source(Some(42));
        for word in ["a", "ab", "hello", "zzzzzzzz"] {
            for _ in 0..100 {
                match autocorrect(word, &mut r) {
                    LexiconCommand::Autocorrect { word: typo, mistakes } => {
                        assert_eq!(typo.chars().count(), word.chars().count());
                        assert_eq!(differing(word, &typo), mistakes);
                        assert!((1..=MAX_MISTAKES).contains(&mistakes));
                    }
                    other => panic!("unexpected {other:?}"),
                }
            }
        }
    }

    #[test]
    fn autocomplete_prefix_bounds() {
        let mut r = rng::source(Some(9));
        assert!(autocomplete("abc", 2, &mut r).is_none());
        for _ in 0..200 {
            let Some(LexiconCommand::Autocomplete { prefix, budget }) = autocomplete("abcdef", 2, &mut r) else {
                panic!("expected a prefix");
            };
            assert!((1..=4).contains(&prefix.len()));
            assert!("abcdef".starts_with(&prefix));
            assert!(budget <= MAX_TYPO_BUDGET);
        }
    }

    #[test]
    fn remove_prefers_known_words() {
        let mut r = rng::source(Some(3));
        let known = ["kept"];
        let dict = ["other"];
        let unknown = (0..2000).filter(|_| remove_target(&known, &dict, &mut r).unwrap().1).count();
        assert!(unknown > 0 && unknown < 60, "unknown removals: {unknown}");
        let empty: [&str; 0] = [];
        assert!(remove_target(&empty, &empty, &mut r).is_none());
    }
}
