//! filters unnecessary words and removes them from token streams.

use std::{
    collections::HashSet,
    fs::OpenOptions,
    io::{BufRead, BufReader},
    path::PathBuf,
    sync::OnceLock,
};

static STOP_WORDS: OnceLock<HashSet<String>> = OnceLock::new();

/// Inits `STOP_WORDS` by adding every line from a text file
/// to the cache. Words are stored lowercased.
///
/// A missing or unreadable file leaves the set empty, which disables
/// filtering instead of failing.
pub fn init(path: PathBuf) {
    STOP_WORDS.get_or_init(|| {
        if let Ok(file) = OpenOptions::new().read(true).open(path) {
            let reader = BufReader::new(&file);

            let mut words: HashSet<String> = HashSet::new();
            for word in reader.lines().map_while(Result::ok) {
                let word = word.trim().to_lowercase();
                if !word.is_empty() {
                    words.insert(word);
                }
            }

            words
        } else {
            HashSet::default()
        }
    });
}

/// The process-wide stopword set.
///
/// Empty until [`init`] ran with a readable file; read-only afterwards.
pub fn get() -> &'static HashSet<String> {
    STOP_WORDS.get_or_init(HashSet::default)
}

/// Removes every stop word from a sentence.
///
/// # Example
/// ```rust
/// use std::collections::HashSet;
/// use tupi_tokenizer::stopwords::remove_words_from_sentence;
///
/// let stopwords: HashSet<String> =
///     ["o".to_string(), "a".to_string()].into_iter().collect();
///
/// let sentence = "o gato viu a lua".to_string();
/// assert_eq!(
///     remove_words_from_sentence(sentence, &stopwords),
///     "gato viu lua".to_string()
/// );
/// ```
pub fn remove_words_from_sentence(
    sentence: String,
    stop_words: &HashSet<String>,
) -> String {
    sentence
        .split_whitespace()
        .filter(|word| !stop_words.contains(&word.to_lowercase()))
        .collect::<Vec<&str>>()
        .join(" ")
}
