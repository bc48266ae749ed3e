use serde::Deserialize;
use std::str::FromStr;
use tupi_error::Error;
use tupi_normalizer::{Options, TokenizerMode};

/// The data in the configuration file for setting up Tupi.
#[derive(Deserialize, Debug)]
pub struct Config {
    pub port: Option<u16>,
    pub service: ServiceConfig,
}

/// Pipeline settings for the analysis service.
#[derive(Deserialize, Debug)]
pub struct ServiceConfig {
    /// Language of the stopword list. Informational only.
    pub lang: Option<String>,
    /// Stopword file, one lowercase word per line.
    pub stopwords: Option<String>,
    /// Default number of words in the keyword digest.
    pub summary_length: Option<u32>,
    /// Words never counted nor ranked.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Normalizer switches.
    #[serde(default)]
    pub normalizer: NormalizerConfig,
}

/// Raw normalizer options as written in the configuration file.
#[derive(Deserialize, Debug, Default)]
pub struct NormalizerConfig {
    /// `"readable"` or `"default"`.
    pub tokenizer: Option<String>,
    #[serde(default)]
    pub capitalize_sentence_starts: bool,
    #[serde(default)]
    pub capitalize_proper_nouns: bool,
    #[serde(default)]
    pub capitalize_acronyms: bool,
    #[serde(default)]
    pub sanitize: bool,
}

impl NormalizerConfig {
    /// Validated normalizer options. An unknown tokenizer mode is an
    /// error reported at startup, never silently ignored.
    pub fn to_options(&self) -> Result<Options, Error> {
        Ok(Options {
            tokenizer: match &self.tokenizer {
                Some(mode) => TokenizerMode::from_str(mode)?,
                None => TokenizerMode::default(),
            },
            capitalize_sentence_starts: self.capitalize_sentence_starts,
            capitalize_proper_nouns: self.capitalize_proper_nouns,
            capitalize_acronyms: self.capitalize_acronyms,
            sanitize: self.sanitize,
        })
    }
}
