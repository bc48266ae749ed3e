mod lexicon;

use std::str::FromStr;
use tupi_error::{ConfigurationError, Error, ErrorType};

/// Characters the expansion lexicon understands besides letters and digits.
/// Everything else is stripped when `sanitize` is on.
const PUNCTUATION: [char; 11] =
    ['!', ',', '.', ':', ';', '?', '-', '\'', '"', '(', ')'];

/// Punctuation detached from words in readable mode. Hyphens and
/// apostrophes bind into words ("bem-vindo", "d'água") and stay put.
const DETACHABLE: [char; 9] = ['!', ',', '.', ':', ';', '?', '"', '(', ')'];

/// How the input is segmented before expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizerMode {
    /// Whitespace segmentation only; word-attached punctuation stays where
    /// it was written.
    #[default]
    Default,
    /// Punctuation is detached from words and runs of a repeated mark are
    /// collapsed, so the output reads as clean written text.
    Readable,
}

impl FromStr for TokenizerMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "default" => Ok(TokenizerMode::Default),
            "readable" => Ok(TokenizerMode::Readable),
            other => Err(Error::new(
                ErrorType::Configuration(
                    ConfigurationError::UnknownTokenizerMode,
                ),
                None,
                Some(format!("unsupported tokenizer mode {:?}", other)),
            )),
        }
    }
}

/// Normalization switches. The default is the conservative configuration:
/// default segmentation, no capitalization passes, no sanitation.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Segmentation applied before expansion.
    pub tokenizer: TokenizerMode,
    /// Capitalize the first word of the text and of every sentence.
    pub capitalize_sentence_starts: bool,
    /// Capitalize words from the proper-noun list.
    pub capitalize_proper_nouns: bool,
    /// Fully uppercase words from the acronym list.
    pub capitalize_acronyms: bool,
    /// Strip characters the expansion lexicon does not cover (emoji,
    /// symbols, control characters) before processing.
    pub sanitize: bool,
}

/// Rewrites noisy, informal text into canonical written form.
///
/// Internet abbreviations with a lexicon entry are expanded to their full
/// written form; an expansion replaces the token's casing entirely.
/// Unrecognized tokens pass through unchanged. Redundant whitespace is
/// collapsed, and the optional passes from [`Options`] fix casing and
/// punctuation. Empty input yields empty output.
pub fn normalize(text: &str, options: &Options) -> String {
    let sanitized;
    let text = if options.sanitize {
        sanitized = strip_unsupported(text);
        sanitized.as_str()
    } else {
        text
    };

    let tokens = match options.tokenizer {
        TokenizerMode::Readable => segment_readable(text),
        TokenizerMode::Default => {
            text.split_whitespace().map(str::to_owned).collect()
        },
    };

    let mut output = String::with_capacity(text.len());
    let mut sentence_start = true;

    for token in tokens {
        if is_punctuation_token(&token) {
            // readable mode: marks attach to the word before them.
            output.push_str(&token);
            if token.contains(['.', '!', '?']) {
                sentence_start = true;
            }
            continue;
        }

        let (core, trail) = split_trailing_punctuation(&token);
        let lowercase = core.to_lowercase();

        let mut word = match lexicon::expansion(&lowercase) {
            Some(expanded) => expanded.to_string(),
            None => core.to_string(),
        };

        if options.capitalize_acronyms && lexicon::is_acronym(&lowercase) {
            word = word.to_uppercase();
        } else if options.capitalize_proper_nouns
            && lexicon::is_proper_noun(&word.to_lowercase())
        {
            word = capitalize(&word);
        } else if options.capitalize_sentence_starts && sentence_start {
            word = capitalize(&word);
        }

        if !output.is_empty() {
            output.push(' ');
        }
        output.push_str(&word);
        output.push_str(trail);

        sentence_start = trail.contains(['.', '!', '?']);
    }

    output
}

/// Splits words and detachable punctuation into separate tokens, collapsing
/// runs of a repeated mark ("!!!" becomes "!").
fn segment_readable(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut word = String::new();

    for c in text.chars() {
        if c.is_whitespace() {
            if !word.is_empty() {
                tokens.push(std::mem::take(&mut word));
            }
        } else if DETACHABLE.contains(&c) {
            if !word.is_empty() {
                tokens.push(std::mem::take(&mut word));
            }
            match tokens.last_mut() {
                Some(last) if is_punctuation_token(last) => {
                    // a run of a repeated mark collapses to one
                    if !last.ends_with(c) {
                        last.push(c);
                    }
                },
                _ => tokens.push(c.to_string()),
            }
        } else {
            word.push(c);
        }
    }
    if !word.is_empty() {
        tokens.push(word);
    }

    tokens
}

fn is_punctuation_token(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| DETACHABLE.contains(&c))
}

fn split_trailing_punctuation(token: &str) -> (&str, &str) {
    let core = token.trim_end_matches(|c| PUNCTUATION.contains(&c));
    (core, &token[core.len()..])
}

fn strip_unsupported(text: &str) -> String {
    text.chars()
        .filter(|c| {
            c.is_alphanumeric()
                || c.is_whitespace()
                || PUNCTUATION.contains(c)
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
