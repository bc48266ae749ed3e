//! the frequency pipeline: filter, count, rank, digest.

use crate::models::query::Analysis;
use regex_lite::Regex;
use std::collections::{HashMap, HashSet};
use tupi_algorithm::hashtable::MapAlgorithm;
use tupi_tokenizer::filter;

lazy_static! {
    /// Summarizer cleaning: anything outside letters and digits becomes a
    /// space. Latin-1 letters are kept so accented words stay whole.
    static ref NON_WORD: Regex =
        Regex::new(r"[^0-9A-Za-zÀ-ÖØ-öø-ÿ]").unwrap();
}

/// Runs the lexical filter over `text` and counts the surviving tokens.
///
/// Tokens keep their original order and are not deduplicated; the
/// frequency table maps each distinct token to its exact count; the
/// summary is the keyword digest from [`summarize`]. Words listed in
/// `exclude` are dropped before counting. Empty input yields empty
/// outputs, never an error.
pub fn analyze(
    text: &str,
    summary_length: usize,
    exclude: &[String],
    stopwords: &HashSet<String>,
) -> Analysis {
    let tokens: Vec<String> = filter(text, stopwords)
        .into_iter()
        .filter(|token| !exclude.contains(token))
        .collect();

    let mut algorithm = MapAlgorithm::default();
    for token in &tokens {
        algorithm.set(token);
    }

    Analysis {
        summary: summarize(text, summary_length),
        frequencies: algorithm.counts(),
        tokens,
    }
}

/// Keyword digest of `text`: its `length` most frequent words, ranked by
/// count descending with ties broken by first appearance, joined with
/// single spaces.
///
/// The cleaning here is deliberately looser than the lexical filter:
/// digits survive and stopwords are kept, so the digest reflects the raw
/// wording. The output is out-of-context keywords, not prose.
pub fn summarize(text: &str, length: usize) -> String {
    let clean = NON_WORD.replace_all(text, " ").to_lowercase();

    let mut algorithm = MapAlgorithm::default();
    for word in clean.split_whitespace() {
        algorithm.set(word);
    }

    algorithm
        .rank(length)
        .into_iter()
        .map(|(word, _)| word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The frequency table handed to the word-cloud rasterizer. Same shape
/// and same token stream as [`analyze`].
pub fn wordcloud_input(
    text: &str,
    exclude: &[String],
    stopwords: &HashSet<String>,
) -> HashMap<String, usize> {
    analyze(text, 0, exclude, stopwords).frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stopwords() -> HashSet<String> {
        ["o", "a"].iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn test_summarize_scenario() {
        // the digest keeps stopwords: "a" (2) outranks "gato" (1).
        assert_eq!(
            summarize("O a a gato correu correu correu.", 2),
            "correu a"
        );
    }

    #[test]
    fn test_summarize_never_exceeds_length() {
        let digest = summarize("uma frase curta sobre frase e verão", 3);
        assert!(digest.split_whitespace().count() <= 3);

        assert_eq!(summarize("qualquer texto", 0), "");
    }

    #[test]
    fn test_summarize_length_above_distinct_returns_all() {
        assert_eq!(summarize("gato gato lua", 10), "gato lua");
    }

    #[test]
    fn test_summarize_keeps_digits() {
        assert_eq!(summarize("abc 123 123", 2), "123 abc");
    }

    #[test]
    fn test_summarize_keeps_accented_words_whole() {
        assert_eq!(summarize("coração coração bate", 1), "coração");
    }

    #[test]
    fn test_summarize_empty_input() {
        assert_eq!(summarize("", 3), "");
        assert_eq!(summarize("!!! ...", 3), "");
    }

    #[test]
    fn test_analyze_scenario() {
        let analysis = analyze(
            "O a a gato correu correu correu.",
            2,
            &[],
            &stopwords(),
        );

        assert_eq!(
            analysis.tokens,
            vec!["gato", "correu", "correu", "correu"]
        );
        assert_eq!(analysis.frequencies.get("gato"), Some(&1));
        assert_eq!(analysis.frequencies.get("correu"), Some(&3));
        assert_eq!(analysis.frequencies.len(), 2);
        assert_eq!(analysis.summary, "correu a");
    }

    #[test]
    fn test_analyze_refilter_is_idempotent() {
        let first = analyze(
            "O a a gato correu correu correu.",
            2,
            &[],
            &stopwords(),
        );
        let again =
            analyze(&first.tokens.join(" "), 2, &[], &stopwords());

        assert_eq!(again.tokens, first.tokens);
        assert_eq!(again.frequencies, first.frequencies);
    }

    #[test]
    fn test_wordcloud_input_matches_analyze() {
        let text = "O a a gato correu correu correu.";

        assert_eq!(
            wordcloud_input(text, &[], &stopwords()),
            analyze(text, 2, &[], &stopwords()).frequencies
        );
    }

    #[test]
    fn test_excluded_words_disappear() {
        let analysis = analyze(
            "gato correu correu",
            1,
            &["correu".to_string()],
            &stopwords(),
        );

        assert_eq!(analysis.tokens, vec!["gato"]);
        assert_eq!(analysis.frequencies.get("correu"), None);
    }

    #[test]
    fn test_analyze_empty_input() {
        let analysis = analyze("", 3, &[], &stopwords());

        assert!(analysis.tokens.is_empty());
        assert!(analysis.frequencies.is_empty());
        assert_eq!(analysis.summary, "");
    }
}
