use crate::helpers::{
    collaborators::{ScoreSentiment, TagTokens, Translate},
    pipeline,
};
use crate::models::query::Analysis;
use std::{collections::HashSet, sync::Arc};
use tupi_error::Error;
use tupi_normalizer::Options;

/// Static description returned by the about activity.
pub const ABOUT: &str =
    "Tupi analyzes Brazilian Portuguese text: normalization, stopword \
     filtering, word frequencies, keyword digests, word-cloud input, and \
     translation/sentiment through external services.";

/// Read-only state shared by every request: parsed options, pipeline
/// defaults and the injected collaborators. Never mutated after startup.
pub struct Context {
    pub options: Options,
    pub summary_length: usize,
    pub exclude: Vec<String>,
    pub stopwords: &'static HashSet<String>,
    pub translator: Arc<dyn Translate>,
    pub sentiment: Arc<dyn ScoreSentiment>,
    pub tagger: Arc<dyn TagTokens>,
}

/// One user-facing operation. Each variant owns its own input contract.
#[derive(Debug)]
pub enum Activity {
    TextAnalysis {
        text: String,
        summary_length: usize,
    },
    Translation {
        text: String,
        target: String,
    },
    SentimentAnalysis {
        text: String,
    },
    About,
}

/// What an [`Activity`] produces. Each variant owns its own output
/// contract.
#[derive(Debug)]
pub enum Outcome {
    Analysis(Analysis),
    Translation(String),
    Sentiment { polarity: f64, subjectivity: f64 },
    About(&'static str),
}

impl Activity {
    /// Dispatches the operation against the shared context.
    ///
    /// Text analysis always normalizes before analyzing; translation and
    /// sentiment hand the raw text to their collaborator.
    pub fn run(self, context: &Context) -> Result<Outcome, Error> {
        match self {
            Activity::TextAnalysis {
                text,
                summary_length,
            } => {
                let normalized =
                    tupi_normalizer::normalize(&text, &context.options);

                Ok(Outcome::Analysis(pipeline::analyze(
                    &normalized,
                    summary_length,
                    &context.exclude,
                    context.stopwords,
                )))
            },
            Activity::Translation { text, target } => context
                .translator
                .translate(&text, &target)
                .map(Outcome::Translation),
            Activity::SentimentAnalysis { text } => {
                context.sentiment.score(&text).map(
                    |(polarity, subjectivity)| Outcome::Sentiment {
                        polarity,
                        subjectivity,
                    },
                )
            },
            Activity::About => Ok(Outcome::About(ABOUT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tupi_error::{CollaboratorError, ErrorType};

    struct FakeTranslator;
    impl Translate for FakeTranslator {
        fn translate(
            &self,
            text: &str,
            target: &str,
        ) -> Result<String, Error> {
            Ok(format!("[{}] {}", target, text))
        }
    }

    struct FakeSentiment;
    impl ScoreSentiment for FakeSentiment {
        fn score(&self, _: &str) -> Result<(f64, f64), Error> {
            Ok((0.8, 0.6))
        }
    }

    struct FakeTagger;
    impl TagTokens for FakeTagger {
        fn tag(&self, text: &str) -> Result<Vec<(String, String)>, Error> {
            Ok(text
                .split_whitespace()
                .map(|token| (token.to_string(), token.to_string()))
                .collect())
        }
    }

    fn test_stopwords() -> &'static HashSet<String> {
        static SET: std::sync::OnceLock<HashSet<String>> =
            std::sync::OnceLock::new();
        SET.get_or_init(|| {
            ["o", "a"].iter().map(|word| word.to_string()).collect()
        })
    }

    fn context() -> Context {
        Context {
            options: Options::default(),
            summary_length: 3,
            exclude: Vec::new(),
            stopwords: test_stopwords(),
            translator: Arc::new(FakeTranslator),
            sentiment: Arc::new(FakeSentiment),
            tagger: Arc::new(FakeTagger),
        }
    }

    #[test]
    fn test_text_analysis_dispatch() {
        let outcome = Activity::TextAnalysis {
            text: "vc gosta gosta de manga".to_string(),
            summary_length: 1,
        }
        .run(&context())
        .unwrap();

        match outcome {
            Outcome::Analysis(analysis) => {
                // "vc" was expanded before filtering
                assert!(analysis.tokens.contains(&"você".to_string()));
                assert_eq!(analysis.frequencies.get("gosta"), Some(&2));
                assert_eq!(analysis.summary, "gosta");
            },
            other => panic!("expected an analysis, got {:?}", other),
        }
    }

    #[test]
    fn test_translation_dispatch() {
        let outcome = Activity::Translation {
            text: "bom dia".to_string(),
            target: "en".to_string(),
        }
        .run(&context())
        .unwrap();

        match outcome {
            Outcome::Translation(text) => assert_eq!(text, "[en] bom dia"),
            other => panic!("expected a translation, got {:?}", other),
        }
    }

    #[test]
    fn test_translation_unavailable_surfaces() {
        let context = Context {
            translator: Arc::new(
                crate::helpers::collaborators::Offline,
            ),
            ..context()
        };

        let error = Activity::Translation {
            text: "bom dia".to_string(),
            target: "en".to_string(),
        }
        .run(&context)
        .unwrap_err();

        assert!(matches!(
            error.etype,
            ErrorType::Collaborator(
                CollaboratorError::TranslationUnavailable
            )
        ));
    }

    #[test]
    fn test_sentiment_dispatch() {
        let outcome = Activity::SentimentAnalysis {
            text: "que dia lindo".to_string(),
        }
        .run(&context())
        .unwrap();

        match outcome {
            Outcome::Sentiment {
                polarity,
                subjectivity,
            } => {
                assert_eq!(polarity, 0.8);
                assert_eq!(subjectivity, 0.6);
            },
            other => panic!("expected a sentiment, got {:?}", other),
        }
    }

    #[test]
    fn test_about_dispatch() {
        match Activity::About.run(&context()).unwrap() {
            Outcome::About(text) => assert!(!text.is_empty()),
            other => panic!("expected about, got {:?}", other),
        }
    }
}
