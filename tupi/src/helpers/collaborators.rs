//! external collaborators behind trait seams.
//!
//! Translation, sentiment scoring and tagging are remote or pretrained
//! services. They are injected so the pipeline and its tests never depend
//! on network availability or model files.

use tupi_error::{CollaboratorError, Error, ErrorType};

/// Remote translation service.
pub trait Translate: Send + Sync {
    /// Translates `text` into the `target` language code.
    fn translate(&self, text: &str, target: &str) -> Result<String, Error>;
}

/// Pretrained sentiment scorer.
pub trait ScoreSentiment: Send + Sync {
    /// Returns `(polarity, subjectivity)` for `text`.
    fn score(&self, text: &str) -> Result<(f64, f64), Error>;
}

/// Pretrained tagging model.
pub trait TagTokens: Send + Sync {
    /// Returns `(token, lemma)` pairs for `text`.
    fn tag(&self, text: &str) -> Result<Vec<(String, String)>, Error>;
}

/// Stand-in installed when no collaborator is wired: every call reports
/// the backing service as unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct Offline;

impl Translate for Offline {
    fn translate(&self, _: &str, _: &str) -> Result<String, Error> {
        Err(Error::new(
            ErrorType::Collaborator(
                CollaboratorError::TranslationUnavailable,
            ),
            None,
            Some("no translation backend configured".to_string()),
        ))
    }
}

impl ScoreSentiment for Offline {
    fn score(&self, _: &str) -> Result<(f64, f64), Error> {
        Err(Error::new(
            ErrorType::Collaborator(CollaboratorError::SentimentUnavailable),
            None,
            Some("no sentiment backend configured".to_string()),
        ))
    }
}

impl TagTokens for Offline {
    fn tag(&self, _: &str) -> Result<Vec<(String, String)>, Error> {
        Err(Error::new(
            ErrorType::Collaborator(CollaboratorError::TaggingUnavailable),
            None,
            Some("no tagging backend configured".to_string()),
        ))
    }
}
