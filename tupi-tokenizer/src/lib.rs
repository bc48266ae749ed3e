pub mod stopwords;

use std::collections::HashSet;

/// Lowercase words, keep maximal runs of alphabetic characters and drop
/// every token found in `stopwords`.
///
/// Accented letters count as word characters; digits and punctuation never
/// do. Surviving tokens keep the order they had in the text and are not
/// deduplicated. No minimum token length is enforced, and an empty
/// stopword set degrades to plain word extraction.
pub fn filter(text: &str, stopwords: &HashSet<String>) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphabetic())
        .filter(|token| !token.is_empty() && !stopwords.contains(*token))
        .map(str::to_owned)
        .collect()
}
